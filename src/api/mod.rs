// API module entry
// Contact CRUD over JSON

mod error;
mod handlers;
mod routes;

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};

use routes::{match_route, ApiRoute};

/// Connection-level entry point
///
/// Dispatches the request, stamps shared headers and writes the access log.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let started = Instant::now();
    let mut entry = state
        .access_log_enabled()
        .then(|| AccessLogEntry::from_request(&req, peer_addr));

    let mut response = dispatch(req, &state).await;
    http::apply_common_headers(&mut response, &state.config.http);

    if let Some(entry) = entry.as_mut() {
        let body_bytes = usize::try_from(hyper::body::Body::size_hint(response.body()).lower())
            .unwrap_or_default();
        entry.finish(response.status().as_u16(), body_bytes, started.elapsed());
        logger::log_access(entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route a request to its handler
pub async fn dispatch<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let method = req.method().clone();
    if method == Method::OPTIONS {
        return http::build_options_response(state.config.http.enable_cors);
    }

    let path = req.uri().path().to_string();
    let route = match_route(&path, &state.config.health);

    let result = match (&method, route) {
        (&Method::GET, ApiRoute::Collection) => Ok(handlers::list_contacts(state).await),
        (&Method::POST, ApiRoute::Collection) => handlers::create_contact(req, state).await,
        (&Method::PUT, ApiRoute::Item(id)) => handlers::update_contact(req, id, state).await,
        (&Method::DELETE, ApiRoute::Item(id)) => handlers::delete_contact(id, state).await,
        (&Method::GET | &Method::HEAD, ApiRoute::Health) => Ok(http::build_health_response()),
        (_, ApiRoute::NotFound) => {
            logger::log_debug(&format!("No route for {method} {path}"));
            Ok(http::build_404_response())
        }
        (_, other) => {
            logger::log_warning(&format!("Method not allowed: {method} {path}"));
            Ok(http::build_405_response(other.allowed_methods()))
        }
    };

    result.unwrap_or_else(|e| {
        logger::log_warning(&format!("{method} {path} failed: {e}"));
        e.into_response()
    })
}
