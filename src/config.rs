//! Configuration for the Deezer API client.
//!
//! This module defines the [`ClientConfig`] struct that every [`crate::DeezerClient`]
//! owns, plus helpers for loading configuration from environment variables and
//! `.env` files. The configuration system follows a hierarchical approach:
//! 1. Explicit values passed to `ClientConfig::new` (highest priority)
//! 2. Environment variables via `ClientConfig::from_env`
//! 3. `.env` file loaded by `load_env`
//! 4. Built-in defaults for the Deezer API hosts

use std::env;

/// Base URL of the Deezer data API (search, tracks, playlists, history).
pub const DEFAULT_API_BASE_URL: &str = "https://api.deezer.com";

/// Base URL of the Deezer authorization API (OAuth code flow).
pub const DEFAULT_AUTH_BASE_URL: &str = "https://connect.deezer.com/oauth";

/// Permission scope requested when none is configured.
pub const DEFAULT_PERMS: &str = "manage_library";

/// Configuration owned by a single `DeezerClient` instance.
///
/// All fields are fixed at construction time. The access token is not part of
/// the configuration: it lives on the client and is set explicitly after a
/// successful authorization-code exchange.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Application identifier issued by the Deezer developer portal.
    pub app_id: String,
    /// Application secret. Never logged or echoed into URLs except for the
    /// token-exchange call that requires it.
    pub secret_key: String,
    /// Redirect URI registered for the application; the authorization code is
    /// delivered here after the user completes the browser flow.
    pub redirect_uri: String,
    /// Base URL of the data API.
    pub api_base_url: String,
    /// Base URL of the authorization API.
    pub auth_base_url: String,
    /// Requested permission scope; `None` falls back to [`DEFAULT_PERMS`].
    pub perms: Option<String>,
}

impl ClientConfig {
    /// Creates a configuration with the default Deezer hosts.
    pub fn new(
        app_id: impl Into<String>,
        secret_key: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        ClientConfig {
            app_id: app_id.into(),
            secret_key: secret_key.into(),
            redirect_uri: redirect_uri.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            perms: None,
        }
    }

    /// Overrides the data-API base URL. Mainly useful for tests and proxies.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Overrides the authorization-API base URL.
    pub fn with_auth_base_url(mut self, url: impl Into<String>) -> Self {
        self.auth_base_url = url.into();
        self
    }

    /// Sets the permission scope requested in the authorization URL.
    pub fn with_perms(mut self, perms: impl Into<String>) -> Self {
        self.perms = Some(perms.into());
        self
    }

    /// Builds a configuration from environment variables.
    ///
    /// Reads `DEEZER_APP_ID`, `DEEZER_SECRET_KEY` and `DEEZER_REDIRECT_URI`
    /// (all required), plus the optional overrides `DEEZER_API_URL`,
    /// `DEEZER_AUTH_URL` and `DEEZER_PERMS`. Call [`load_env`] first to source
    /// a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error string naming the first missing required variable.
    pub fn from_env() -> Result<Self, String> {
        let app_id = require_var("DEEZER_APP_ID")?;
        let secret_key = require_var("DEEZER_SECRET_KEY")?;
        let redirect_uri = require_var("DEEZER_REDIRECT_URI")?;

        let mut config = ClientConfig::new(app_id, secret_key, redirect_uri);
        if let Ok(url) = env::var("DEEZER_API_URL") {
            config.api_base_url = url;
        }
        if let Ok(url) = env::var("DEEZER_AUTH_URL") {
            config.auth_base_url = url;
        }
        if let Ok(perms) = env::var("DEEZER_PERMS") {
            config.perms = Some(perms);
        }
        Ok(config)
    }
}

fn require_var(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} must be set", name))
}

/// Loads environment variables from a `.env` file in the working directory.
///
/// Missing files are not an error; explicit environment variables always take
/// precedence over values from the file.
pub fn load_env() {
    let _ = dotenv::dotenv();
}
