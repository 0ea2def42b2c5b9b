//! Errors raised by the client itself.
//!
//! Transport and HTTP status failures are not wrapped here: they reach the
//! caller as the original `reqwest::Error` inside an `anyhow::Error`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscordError {
    /// No token, or an empty one, was supplied at construction.
    #[error("Please provide a Discord token")]
    MissingToken,

    /// The token cannot be sent as an HTTP header value.
    #[error("Discord token is not a valid header value: {0}")]
    InvalidToken(String),

    /// The API answered successfully but without a field the client relies on.
    #[error("Unexpected response from {operation}: {reason}")]
    UnexpectedResponse { operation: String, reason: String },
}
