//! Router construction.

use crate::handler::{chart_types, generate, health, parse_request_id, REQUEST_ID_HEADER};
use crate::state::AppState;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue, Request};
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::info_span;

/// Room for multipart boundaries and the text fields on top of the file itself.
const MULTIPART_OVERHEAD: usize = 16 * 1024;

/// Builds the application router.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .server
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD);
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/generate", post(generate))
        .route("/health", get(health))
        .route("/chart-types", get(chart_types))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(
            ServiceBuilder::new()
                .map_request(normalize_request_id)
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or_default();
                    info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id,
                    )
                }))
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Rewrites a client UUID in canonical form and drops anything else, so the
/// id layer assigns a fresh one and every later stage sees the same UUID.
fn normalize_request_id(mut request: Request<Body>) -> Request<Body> {
    let canonical = parse_request_id(request.headers())
        .and_then(|id| HeaderValue::from_str(&id.to_string()).ok());
    match canonical {
        Some(value) => {
            request.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        None => {
            request.headers_mut().remove(REQUEST_ID_HEADER);
        }
    }
    request
}
