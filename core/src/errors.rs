use thiserror::Error;

use crate::event::OutboundResponse;

/// Body returned to the caller whenever the handler fails. Error detail is
/// never exposed beyond this literal.
pub const MARSHAL_ERROR_BODY: &str = r#"{"error": "failed to marshal response"}"#;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Failed to serialize response body: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HandlerError>;

impl HandlerError {
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::Serialization(_) => 500,
        }
    }

    /// The response a transport should send when it cannot deliver the error
    /// through its own error channel.
    pub fn to_response(&self) -> OutboundResponse {
        OutboundResponse::new(self.status_code(), MARSHAL_ERROR_BODY)
    }
}
