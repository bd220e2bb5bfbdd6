//! # Error Handling
//!
//! Error types for the secret-store subsystem, defined with `thiserror`.
//! Errors surface to the host verbatim: nothing is retried, logged away,
//! or swallowed on this side of the plugin boundary.

/// Custom result type for secret-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the secret-store subsystem
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration errors (missing or invalid settings)
    #[error("configuration error: {0}")]
    Config(String),

    /// Credential material could not be understood
    #[error("credentials error: {0}")]
    Credentials(String),

    /// I/O errors (credential files, TLS material)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP transport errors while talking to a token endpoint
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Assertion signing errors
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// The token endpoint rejected the exchange
    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    /// Operation not supported by this store
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new credentials error
    pub fn credentials<S: Into<String>>(message: S) -> Self {
        Self::Credentials(message.into())
    }

    /// Create a new token exchange error
    pub fn token_exchange<S: Into<String>>(message: S) -> Self {
        Self::TokenExchange(message.into())
    }

    /// Create a new unsupported operation error
    pub fn unsupported<S: Into<String>>(message: S) -> Self {
        Self::Unsupported(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = Error::config("sts_audience is required");
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.to_string(), "configuration error: sts_audience is required");

        let err = Error::unsupported("setting secrets is not supported");
        assert!(matches!(err, Error::Unsupported(_)));
        assert!(err.to_string().contains("not supported"));
    }

    #[test]
    fn test_error_conversions() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));

        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(err.to_string().starts_with("serialization error"));
    }
}
