//! Route matching module
//!
//! Maps a request path onto the API's resources.

use crate::config::HealthConfig;

/// Base path of the contact collection
pub const COLLECTION_PATH: &str = "/api/contacts";

/// Resource addressed by a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRoute<'a> {
    /// `/api/contacts`
    Collection,
    /// `/api/contacts/{id}`
    Item(&'a str),
    /// Liveness or readiness probe
    Health,
    NotFound,
}

impl ApiRoute<'_> {
    /// Value of the `Allow` header for this resource
    pub const fn allowed_methods(&self) -> &'static str {
        match self {
            Self::Collection => "GET, POST, OPTIONS",
            Self::Item(_) => "PUT, DELETE, OPTIONS",
            Self::Health => "GET, HEAD",
            Self::NotFound => "OPTIONS",
        }
    }
}

/// Find the resource for a given path
pub fn match_route<'a>(path: &'a str, health: &HealthConfig) -> ApiRoute<'a> {
    if health.enabled && (path == health.liveness_path || path == health.readiness_path) {
        return ApiRoute::Health;
    }

    let Some(rest) = path.strip_prefix(COLLECTION_PATH) else {
        return ApiRoute::NotFound;
    };

    match rest {
        "" | "/" => ApiRoute::Collection,
        _ => match rest.strip_prefix('/') {
            Some(id) if !id.is_empty() && !id.contains('/') => ApiRoute::Item(id),
            _ => ApiRoute::NotFound,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn health() -> HealthConfig {
        HealthConfig::default()
    }

    #[test]
    fn test_match_collection() {
        assert_eq!(match_route("/api/contacts", &health()), ApiRoute::Collection);
        assert_eq!(match_route("/api/contacts/", &health()), ApiRoute::Collection);
    }

    #[test]
    fn test_match_item() {
        assert_eq!(match_route("/api/contacts/1", &health()), ApiRoute::Item("1"));
        assert_eq!(
            match_route("/api/contacts/abc", &health()),
            ApiRoute::Item("abc")
        );
    }

    #[test]
    fn test_match_not_found() {
        for path in [
            "/",
            "/api",
            "/api/contactsx",
            "/api/contacts/1/",
            "/api/contacts/1/extra",
            "/api/contacts//",
        ] {
            assert_eq!(match_route(path, &health()), ApiRoute::NotFound, "{path}");
        }
    }

    #[test]
    fn test_match_health() {
        assert_eq!(match_route("/healthz", &health()), ApiRoute::Health);
        assert_eq!(match_route("/readyz", &health()), ApiRoute::Health);

        let disabled = HealthConfig {
            enabled: false,
            ..HealthConfig::default()
        };
        assert_eq!(match_route("/healthz", &disabled), ApiRoute::NotFound);
    }
}
