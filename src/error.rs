//! Error taxonomy for the Deezer client.
//!
//! Transport failures are surfaced unmodified and never retried. API-level
//! failures are mapped from HTTP status codes into a small set of variants
//! instead of being passed through raw. A GET endpoint that successfully
//! fetches nothing is not an error; see [`crate::types::Fetch`].

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Network, DNS, TLS or timeout failure from the underlying HTTP client.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server rejected the request with 401; the access token is missing,
    /// invalid or expired.
    #[error("unauthorized: the access token is missing, invalid or expired")]
    Unauthorized,

    /// The server answered 404 for the requested resource.
    #[error("resource not found")]
    NotFound,

    /// Any other non-success HTTP status.
    #[error("server error (status {status})")]
    Server { status: u16 },

    /// The token-exchange response body did not parse as `key=value&key=value`.
    #[error("malformed auth response: {body:?}")]
    MalformedAuthResponse { body: String },

    /// A caller-supplied query parameter collides with a key the request
    /// builder injects itself (`request_method`, `access_token`).
    #[error("parameter {name:?} collides with a reserved request key")]
    ReservedParameter { name: String },

    /// The operation is part of the API surface but deliberately unimplemented.
    #[error("{operation} is not implemented")]
    NotImplemented { operation: &'static str },

    /// A response body could not be decoded as the expected JSON shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A configured base URL did not parse.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Maps an HTTP status code to the error taxonomy. `None` means success.
    pub(crate) fn from_status(status: u16) -> Option<Error> {
        match status {
            200..=299 => None,
            401 => Some(Error::Unauthorized),
            404 => Some(Error::NotFound),
            status => Some(Error::Server { status }),
        }
    }
}
