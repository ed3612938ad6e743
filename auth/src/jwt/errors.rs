use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}

/// Signing key configuration errors. Fatal at startup.
#[derive(Debug, Clone, Error)]
pub enum KeyError {
    #[error("Signing key is not configured")]
    Missing,

    #[error("Signing key is not valid base64: {0}")]
    Malformed(String),

    #[error("Signing key too short: minimum {min} bytes, got {actual}")]
    TooShort { min: usize, actual: usize },
}
