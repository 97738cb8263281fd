use crate::db::StoreError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, bad forms) or downstream layers (store).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Payload Too Large")]
    PayloadTooLarge,
    #[error("Store Error: {0}")]
    Store(#[from] StoreError),
    #[error("Internal Server Error: {0}")]
    InternalError(String),
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::PayloadTooLarge => 413,
            ServerError::Store(_) | ServerError::InternalError(_) => 500,
        }
    }
}
