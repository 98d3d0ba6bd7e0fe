//! Client error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every suspend point in the client resolves to `Result<_, ClientError>` at
//! the `net` boundary. Components never let these escape: each one is turned
//! into a logged no-op or a synthetic user-visible message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure categories for backend calls and user input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (network unreachable, CORS, aborted).
    #[error("transport failure: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The response body was not the expected shape.
    #[error("malformed payload: {0}")]
    Payload(String),
    /// Chat input was empty or whitespace only.
    #[error("message is empty")]
    EmptyInput,
    /// No browser runtime (SSR or native build).
    #[error("not available outside the browser")]
    Unavailable,
}

impl ClientError {
    /// Map an HTTP status to `Ok(())` for 2xx and `Status` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] for any status outside `200..=299`.
    pub fn check_status(status: u16) -> Result<(), Self> {
        if (200..300).contains(&status) { Ok(()) } else { Err(Self::Status(status)) }
    }
}
