// Contact CRUD handlers

use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};
use hyper::header::CONTENT_LENGTH;
use hyper::{Request, Response, StatusCode};
use serde::Serialize;

use super::error::ApiError;
use crate::config::AppState;
use crate::http;
use crate::logger;
use crate::store::ContactInput;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: &'static str,
}

/// GET /api/contacts
pub async fn list_contacts(state: &AppState) -> Response<Full<Bytes>> {
    logger::log_debug("GET /api/contacts - fetching all contacts");
    let contacts = state.store.list().await;
    http::json_response(StatusCode::OK, &contacts)
}

/// POST /api/contacts
pub async fn create_contact<B>(
    req: Request<B>,
    state: &AppState,
) -> Result<Response<Full<Bytes>>, ApiError>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let input = read_input(req, state.config.http.max_body_size).await?;
    logger::log_debug(&format!("POST /api/contacts - creating contact: {input:?}"));

    let contact = state.store.create(input).await?;
    logger::log_contact_created(&contact);
    Ok(http::json_response(StatusCode::CREATED, &contact))
}

/// PUT /api/contacts/{id}
pub async fn update_contact<B>(
    req: Request<B>,
    id: &str,
    state: &AppState,
) -> Result<Response<Full<Bytes>>, ApiError>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    let input = read_input(req, state.config.http.max_body_size).await?;
    logger::log_debug(&format!("PUT /api/contacts/{id} - updating contact"));

    let contact = state.store.update(id, input).await?;
    logger::log_contact_updated(&contact);
    Ok(http::json_response(StatusCode::OK, &contact))
}

/// DELETE /api/contacts/{id}
pub async fn delete_contact(id: &str, state: &AppState) -> Result<Response<Full<Bytes>>, ApiError> {
    logger::log_debug(&format!("DELETE /api/contacts/{id} - deleting contact"));

    let contact = state.store.delete(id).await?;
    logger::log_contact_deleted(&contact);
    Ok(http::json_response(
        StatusCode::OK,
        &MessageResponse {
            message: "Contact deleted",
        },
    ))
}

/// Read and decode a JSON contact body
///
/// An empty body decodes as `{}`.
async fn read_input<B>(req: Request<B>, max_body_size: u64) -> Result<ContactInput, ApiError>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    if declared_length(&req).is_some_and(|len| len > max_body_size) {
        return Err(ApiError::PayloadTooLarge);
    }

    let limit = usize::try_from(max_body_size).unwrap_or(usize::MAX);
    let body = Limited::new(req.into_body(), limit)
        .collect()
        .await
        .map_err(|e| {
            if e.downcast_ref::<LengthLimitError>().is_some() {
                ApiError::PayloadTooLarge
            } else {
                ApiError::BodyRead(e.to_string())
            }
        })?
        .to_bytes();

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ContactInput::default());
    }

    serde_json::from_slice(&body).map_err(|e| ApiError::InvalidJson(e.to_string()))
}

fn declared_length<B>(req: &Request<B>) -> Option<u64> {
    req.headers()
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}
