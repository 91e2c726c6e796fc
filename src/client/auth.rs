//! Authorization-code flow.
//!
//! The flow has three states: unauthorized, authorization requested (the user
//! is completing the browser flow), and authorized. The browser step is not
//! modeled here; [`DeezerClient::authorization_url`] only produces the URL to
//! send the user to, and [`DeezerClient::exchange_code`] turns the code the
//! redirect URI received into a token. Applying the token to the client is a
//! separate, explicit step.

use std::collections::BTreeMap;

use url::Url;

use crate::{
    client::DeezerClient,
    config::DEFAULT_PERMS,
    error::{Error, Result},
    request::{ApiBase, Method},
    types::AuthToken,
};

const AUTH_ENDPOINT: &str = "/auth.php";
const TOKEN_ENDPOINT: &str = "/access_token.php";

impl DeezerClient {
    /// Builds the URL the user must visit to authorize the application.
    ///
    /// Pure and network-free: the URL is a function of the configuration
    /// alone, carrying `app_id`, `redirect_uri` and `perms`. Calling this
    /// does not change client state; the user completes the browser flow
    /// outside this library and the authorization code arrives at the
    /// configured redirect URI.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the configured authorization base URL
    /// does not parse.
    pub fn authorization_url(&self) -> Result<String> {
        let config = self.config();
        let perms = config.perms.as_deref().unwrap_or(DEFAULT_PERMS);

        let url = Url::parse_with_params(
            &format!(
                "{}{}",
                config.auth_base_url.trim_end_matches('/'),
                AUTH_ENDPOINT
            ),
            &[
                ("app_id", config.app_id.as_str()),
                ("redirect_uri", config.redirect_uri.as_str()),
                ("perms", perms),
            ],
        )?;

        Ok(url.into())
    }

    /// Exchanges an authorization code for an [`AuthToken`].
    ///
    /// Issues a GET against the authorization API's token endpoint with
    /// `app_id`, `secret` and `code`, and parses the ampersand-delimited
    /// response body. The token is returned, not stored: callers decide when
    /// to apply it via [`DeezerClient::set_access_token`].
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] for network failures
    /// - [`Error::MalformedAuthResponse`] if the body does not parse as
    ///   `key=value&key=value`
    /// - Status-mapped errors for non-success HTTP responses
    ///
    /// # Example
    ///
    /// ```
    /// let token = client.exchange_code(code).await?;
    /// if let Some(access_token) = token.access_token() {
    ///     client.set_access_token(access_token).await;
    /// }
    /// ```
    pub async fn exchange_code(&self, code: &str) -> Result<AuthToken> {
        let config = self.config();
        let mut params = BTreeMap::new();
        params.insert("app_id".to_string(), config.app_id.clone());
        params.insert("secret".to_string(), config.secret_key.clone());
        params.insert("code".to_string(), code.to_string());

        let response = self
            .request(Method::Get, ApiBase::Auth, TOKEN_ENDPOINT, params)
            .await?;

        AuthToken::parse(&response.body)
    }

    /// Token refresh is not supported by the upstream API.
    ///
    /// Always fails with [`Error::NotImplemented`] and never touches the
    /// network. Failing loudly keeps the unimplemented contract visible to
    /// callers instead of silently doing nothing.
    pub async fn refresh_token(&self) -> Result<AuthToken> {
        Err(Error::NotImplemented {
            operation: "refresh_token",
        })
    }
}
