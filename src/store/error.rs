// Store error types

use hyper::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Contact not found")]
    NotFound(String),
}

impl StoreError {
    /// HTTP status reported for this error
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}
