//! CORS policy for the browser frontend.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Allows the configured origins to call the product API.
///
/// Origins that are not valid header values are skipped with a warning.
/// An empty list yields a layer that admits no cross-origin requests.
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    async fn allowed_origin_header(origins: &[String], origin: &str) -> Option<HeaderValue> {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(layer(origins));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .cloned()
    }

    #[tokio::test]
    async fn test_invalid_entry_does_not_drop_valid_origin() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "bad\norigin".to_string(),
        ];

        let allowed = allowed_origin_header(&origins, "http://localhost:3000").await;

        assert_eq!(allowed, Some(HeaderValue::from_static("http://localhost:3000")));
    }

    #[tokio::test]
    async fn test_unlisted_origin_not_allowed() {
        let origins = vec!["http://localhost:3000".to_string()];

        let allowed = allowed_origin_header(&origins, "http://evil.test").await;

        assert!(allowed.is_none());
    }

    #[tokio::test]
    async fn test_empty_list_allows_nothing() {
        let allowed = allowed_origin_header(&[], "http://localhost:3000").await;

        assert!(allowed.is_none());
    }
}
