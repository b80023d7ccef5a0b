use thiserror::Error;

use crate::dispatch::ProviderError;

/// FCM client error types
#[derive(Error, Debug)]
pub enum FcmError {
    #[error("Failed to load service account: {0}")]
    Credentials(String),

    #[error("Failed to parse private key: {0}")]
    KeyParse(String),

    #[error("Failed to encode JWT: {0}")]
    JwtEncode(String),

    #[error("Failed to get access token: {0}")]
    Token(String),

    #[error("Token request failed with status: {0}")]
    TokenRequestFailed(String),

    #[error("FCM send request failed: {0}")]
    SendRequest(String),

    #[error("Failed to parse FCM response: {0}")]
    ResponseParse(String),

    #[error("FCM API error: {0} - {1}")]
    Api(String, String),
}

impl From<FcmError> for ProviderError {
    fn from(err: FcmError) -> Self {
        ProviderError::new(err.to_string())
    }
}
