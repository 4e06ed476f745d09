//! HTTP response building module
//!
//! Builders for JSON bodies and the fixed status responses used by the API.
//! Builders never panic: a failed build is logged and replaced by a minimal response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, SERVER};
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::config::HttpConfig;

/// Methods accepted by CORS preflight
pub const CORS_ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Build JSON response
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_vec(body) {
        Ok(j) => j,
        Err(e) => {
            log_error(&format!("Failed to serialize response: {e}"));
            return raw_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                Bytes::from_static(br#"{"error":"Internal server error"}"#),
            );
        }
    };

    raw_json(status, Bytes::from(json))
}

/// `{"error": message}` with the given status
pub fn error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    json_response(status, &serde_json::json!({ "error": message }))
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    error_response(StatusCode::NOT_FOUND, "Not Found")
}

/// Build 405 Method Not Allowed response
pub fn build_405_response(allow: &'static str) -> Response<Full<Bytes>> {
    let mut resp = error_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
    resp.headers_mut()
        .insert("Allow", HeaderValue::from_static(allow));
    resp
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    error_response(StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large")
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", CORS_ALLOW_METHODS);

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Methods", CORS_ALLOW_METHODS)
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build health check response
pub fn build_health_response() -> Response<Full<Bytes>> {
    raw_json(StatusCode::OK, Bytes::from_static(br#"{"status":"ok"}"#))
}

/// Stamp headers shared by every response (`Server`, CORS origin)
pub fn apply_common_headers(resp: &mut Response<Full<Bytes>>, http: &HttpConfig) {
    let headers = resp.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&http.server_name) {
        headers.insert(SERVER, value);
    }
    if http.enable_cors {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    }
}

fn raw_json(status: StatusCode, body: Bytes) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json; charset=utf-8")
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    log_error(&format!("Failed to build {status} response: {error}"));
}

fn log_error(message: &str) {
    crate::logger::log_error(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;

    async fn body_json(resp: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_error_response_body() {
        let resp = error_response(StatusCode::BAD_REQUEST, "Missing required fields");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.headers()["content-type"],
            "application/json; charset=utf-8"
        );
        assert_eq!(
            body_json(resp).await,
            serde_json::json!({"error": "Missing required fields"})
        );
    }

    #[test]
    fn test_405_sets_allow() {
        let resp = build_405_response("GET, POST");
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()["allow"], "GET, POST");
    }

    #[test]
    fn test_options_with_and_without_cors() {
        let resp = build_options_response(true);
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            resp.headers()["access-control-allow-methods"],
            CORS_ALLOW_METHODS
        );

        let resp = build_options_response(false);
        assert!(!resp.headers().contains_key("access-control-allow-methods"));
    }

    #[test]
    fn test_common_headers() {
        let mut cfg = Config::for_tests().http;
        let mut resp = build_health_response();
        apply_common_headers(&mut resp, &cfg);
        assert_eq!(resp.headers()["server"], "contact-api");
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");

        cfg.enable_cors = false;
        let mut resp = build_health_response();
        apply_common_headers(&mut resp, &cfg);
        assert!(!resp.headers().contains_key("access-control-allow-origin"));
    }
}
