//! # Deezer Client
//!
//! This module provides [`DeezerClient`], the entry point of the library. The
//! client owns an immutable [`ClientConfig`], an injected [`Transport`], and
//! the access token, which is the only mutable state and is updated solely
//! through [`DeezerClient::set_access_token`].
//!
//! ## Architecture
//!
//! ```text
//! Endpoint wrappers (auth, user, track, playlist)
//!          ↓
//! Request construction (request_method / access_token injection)
//!          ↓
//! Transport (reqwest, or a fake in tests)
//!          ↓
//! Deezer Web API
//! ```
//!
//! Each endpoint family lives in its own submodule and follows the same
//! pattern: build per-call parameters, delegate to the request layer, map the
//! HTTP status into the error taxonomy, and decode the body.
//!
//! ## Error handling
//!
//! - Transport failures are surfaced unmodified; nothing is retried.
//! - 401 maps to `Error::Unauthorized`, 404 to `Error::NotFound`, any other
//!   non-success status to `Error::Server`.
//! - GET endpoints that fetch an empty or null body yield [`Fetch::Empty`]
//!   rather than an error, distinguishing "fetched nothing" from failure.
//!
//! ## Concurrency
//!
//! The client is `Send + Sync`; all methods take `&self`. The access token is
//! read under a lock and snapshotted once per request at build time, so a
//! concurrent `set_access_token` never tears an in-flight request.

pub mod auth;
pub mod playlist;
pub mod track;
pub mod user;

use std::{collections::BTreeMap, sync::Arc};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config::ClientConfig,
    error::{Error, Result},
    request::{ApiBase, Method, Request},
    transport::{HttpTransport, Transport, TransportResponse},
    types::Fetch,
};

/// Async client for the Deezer Web API.
pub struct DeezerClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    access_token: Mutex<Option<String>>,
}

impl DeezerClient {
    /// Creates a client that talks to the real API over HTTP.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    /// Creates a client with an injected transport. Tests use this to
    /// substitute a fake that never touches the network.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        DeezerClient {
            config,
            transport,
            access_token: Mutex::new(None),
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Stores the access token obtained from a successful code exchange.
    ///
    /// This is the single mutation of client state. The exchange itself does
    /// not store the token; callers apply it explicitly so the transition to
    /// the authorized state is auditable.
    pub async fn set_access_token(&self, token: impl Into<String>) {
        let mut guard = self.access_token.lock().await;
        *guard = Some(token.into());
    }

    /// Returns a copy of the currently stored access token, if any.
    pub async fn access_token(&self) -> Option<String> {
        self.access_token.lock().await.clone()
    }

    /// Builds and issues a request, then maps the HTTP status into the error
    /// taxonomy. The access token is snapshotted here, once per call.
    pub(crate) async fn request(
        &self,
        method: Method,
        base: ApiBase,
        endpoint: &str,
        params: BTreeMap<String, String>,
    ) -> Result<TransportResponse> {
        let token = self.access_token.lock().await.clone();
        let request = Request::build(method, base, endpoint, params, token.as_deref(), &self.config)?;

        let response = self.transport.execute(&request).await?;
        match Error::from_status(response.status) {
            Some(err) => Err(err),
            None => Ok(response),
        }
    }

    /// Issues a GET against the data API and decodes the JSON body.
    ///
    /// An empty, `null` or `{}` body yields [`Fetch::Empty`].
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: BTreeMap<String, String>,
    ) -> Result<Fetch<T>> {
        let response = self.request(Method::Get, ApiBase::Data, endpoint, params).await?;
        decode_fetch(&response.body)
    }

    /// Issues a mutating call against the data API and decodes the JSON body.
    ///
    /// The upstream API does not answer mutations with a uniform shape (some
    /// return a playlist id object, some a bare boolean), so the decoded
    /// [`Value`] is returned for the caller to inspect. Decoding every
    /// mutation response is a deliberate normalization over the upstream
    /// behavior of handing back raw responses.
    pub(crate) async fn mutate_json(
        &self,
        method: Method,
        endpoint: &str,
        params: BTreeMap<String, String>,
    ) -> Result<Value> {
        let response = self.request(method, ApiBase::Data, endpoint, params).await?;
        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}

fn decode_fetch<T: DeserializeOwned>(body: &str) -> Result<Fetch<T>> {
    if body.trim().is_empty() {
        return Ok(Fetch::Empty);
    }

    let value: Value = serde_json::from_str(body)?;
    let empty = match &value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    };
    if empty {
        return Ok(Fetch::Empty);
    }

    Ok(Fetch::Found(serde_json::from_value(value)?))
}
