//! Error types for Spotify API communication.
//!
//! All client functions in [`crate::spotify`] return [`Result`] with this
//! module's [`Error`]. Failures are converted into user-visible messages at
//! the CLI boundary; nothing in the client layer retries or panics.

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Client ID or client secret was empty; no request was made.
    #[error("client ID or client secret not provided")]
    CredentialsMissing,

    /// The access token was empty; no request was made.
    #[error("invalid or missing access token")]
    InvalidToken,

    /// Transport-level failure (connection, TLS, body decode).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("Spotify API returned status {0}")]
    Http(StatusCode),

    /// A 2xx response was missing a required field.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
