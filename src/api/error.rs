// API error types

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use thiserror::Error;

use crate::http;
use crate::store::StoreError;

/// Failure of a single API request
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Failed to read request body: {0}")]
    BodyRead(String),

    #[error("Payload Too Large")]
    PayloadTooLarge,
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Store(e) => e.status(),
            Self::InvalidJson(_) | Self::BodyRead(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    pub fn into_response(self) -> Response<Full<Bytes>> {
        match self {
            Self::PayloadTooLarge => http::build_413_response(),
            other => http::error_response(other.status(), &other.to_string()),
        }
    }
}
