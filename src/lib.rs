//! Deezer Web API Client Library
//!
//! This library provides an async client for the Deezer Web API. It covers the
//! OAuth-style authorization-code flow, track search and lookup, playlist
//! management, and the current user's listening history. All API calls funnel
//! through a single request-construction layer so every request carries the
//! parameters Deezer expects.
//!
//! # Modules
//!
//! - `client` - The `DeezerClient` and its endpoint implementations
//! - `config` - Client configuration and environment variable loading
//! - `error` - Error taxonomy for transport, API, and auth failures
//! - `request` - Request construction: URL assembly and parameter injection
//! - `transport` - HTTP transport abstraction for issuing requests
//! - `types` - Data structures and response types
//!
//! # Example
//!
//! ```
//! use deezrs::{ClientConfig, DeezerClient};
//!
//! #[tokio::main]
//! async fn main() -> deezrs::Result<()> {
//!     let config = ClientConfig::new("app_id", "secret", "http://localhost:8000/callback");
//!     let client = DeezerClient::new(config);
//!
//!     // Direct the user to this URL, then exchange the returned code.
//!     let url = client.authorization_url()?;
//!     println!("authorize at: {}", url);
//!
//!     let token = client.exchange_code("the-code").await?;
//!     if let Some(access_token) = token.access_token() {
//!         client.set_access_token(access_token).await;
//!     }
//!
//!     let results = client.search_track("daft punk", &[]).await?;
//!     println!("{:?}", results);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod transport;
pub mod types;

pub use client::DeezerClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use types::{AuthToken, Fetch};
