//! HTTP protocol layer module
//!
//! Provides HTTP response helpers, decoupled from the contact API logic.

pub mod response;

// Re-export commonly used types
pub use response::{
    apply_common_headers, build_404_response, build_405_response, build_413_response,
    build_health_response, build_options_response, error_response, json_response,
};
