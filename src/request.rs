//! Request construction.
//!
//! Every API call funnels through [`Request::build`], which resolves the
//! target base URL, validates caller-supplied parameters against the keys the
//! builder injects itself, and attaches the wire-compatibility parameters
//! Deezer expects: `request_method` on every call, and `access_token` on
//! data-API calls.

use std::collections::BTreeMap;

use crate::{
    config::ClientConfig,
    error::{Error, Result},
};

/// Parameter injected on every outgoing request, carrying the HTTP verb name.
/// A quirk of the upstream API, preserved for wire compatibility.
pub const REQUEST_METHOD_KEY: &str = "request_method";

/// Parameter injected on data-API requests, carrying the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// Which of the two API hosts a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiBase {
    /// The data API: search, tracks, playlists, history.
    Data,
    /// The authorization API: the OAuth code flow.
    Auth,
}

/// A fully constructed request, ready for a transport to issue.
///
/// Ephemeral: built fresh for each call and discarded afterwards. The
/// parameter map is ordered so the encoded query string is deterministic.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub base: ApiBase,
    pub url: String,
    pub params: BTreeMap<String, String>,
}

impl Request {
    /// Builds a request against `base` for the given endpoint path fragment.
    ///
    /// Always injects [`REQUEST_METHOD_KEY`]. When targeting the data API,
    /// also injects [`ACCESS_TOKEN_KEY`] from the token snapshot taken at
    /// build time; an unset token is sent as the empty string and left for
    /// the server to reject. Auth-API requests never carry the access token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservedParameter`] if `params` already contains one
    /// of the injected keys.
    pub fn build(
        method: Method,
        base: ApiBase,
        endpoint: &str,
        params: BTreeMap<String, String>,
        access_token: Option<&str>,
        config: &ClientConfig,
    ) -> Result<Self> {
        let mut params = params;

        for reserved in [REQUEST_METHOD_KEY, ACCESS_TOKEN_KEY] {
            if params.contains_key(reserved) {
                return Err(Error::ReservedParameter {
                    name: reserved.to_string(),
                });
            }
        }

        params.insert(REQUEST_METHOD_KEY.to_string(), method.as_str().to_string());
        if base == ApiBase::Data {
            params.insert(
                ACCESS_TOKEN_KEY.to_string(),
                access_token.unwrap_or_default().to_string(),
            );
        }

        let base_url = match base {
            ApiBase::Data => &config.api_base_url,
            ApiBase::Auth => &config.auth_base_url,
        };
        let url = format!("{}{}", base_url.trim_end_matches('/'), endpoint);

        Ok(Request {
            method,
            base,
            url,
            params,
        })
    }
}
