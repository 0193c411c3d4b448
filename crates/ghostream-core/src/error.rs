//! Error types for Ghostream

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // Gate errors
    #[error("Malformed request")]
    MalformedRequest,

    #[error("Incorrect credentials")]
    InvalidCredentials,

    /// Connection-level failure while talking to the authentication
    /// backend. Collapsed with InvalidCredentials in every user-facing
    /// response; the detail only reaches the logs.
    #[error("Authentication backend unavailable: {0}")]
    BackendUnavailable(String),

    // Startup errors
    #[error("Unknown authentication backend: {0}")]
    UnknownBackend(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn http_status(&self) -> u16 {
        match self {
            Error::MalformedRequest => 400,

            // Wrong password and unreachable directory are not
            // distinguished to the client.
            Error::InvalidCredentials | Error::BackendUnavailable(_) => 401,

            _ => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(Error::MalformedRequest.http_status(), 400);
        assert_eq!(Error::InvalidCredentials.http_status(), 401);
        assert_eq!(
            Error::BackendUnavailable("connection refused".into()).http_status(),
            401
        );
        assert_eq!(Error::UnknownBackend("oauth".into()).http_status(), 500);
    }

    #[test]
    fn test_display_is_fixed() {
        assert_eq!(Error::MalformedRequest.to_string(), "Malformed request");
        assert_eq!(Error::InvalidCredentials.to_string(), "Incorrect credentials");
    }
}
