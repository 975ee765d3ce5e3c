//! Request accounting for the routed API: one span, one counter bump and one
//! log line per call.

use axum::{
    extract::{MatchedPath, Request, State},
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use super::AppState;
use super::error::FailureKind;

/// GET /metrics
pub async fn render_metrics(State(state): State<Arc<AppState>>) -> Response {
    match &state.prometheus_handle {
        Some(handle) => handle.render().into_response(),
        None => (StatusCode::NOT_FOUND, "Metrics are disabled").into_response(),
    }
}

/// Runs after routing, so the route template is known. Error responses carry
/// a [`FailureKind`] from `ApiError`, which lands on the log line and in
/// `api_failures_total`. The request id is echoed in `x-request-id`.
pub async fn track_request(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| req.uri().path().to_owned(), |path| path.as_str().to_owned());

    let span = info_span!("api", %request_id, %method, %route);
    let mut response = next.run(req).instrument(span.clone()).await;

    let status = response.status();
    let elapsed = started.elapsed();
    let failure = response
        .extensions()
        .get::<FailureKind>()
        .map_or("none", |kind| kind.0);

    metrics::counter!(
        "api_requests_total",
        "route" => route.clone(),
        "status" => status.as_str().to_owned()
    )
    .increment(1);
    metrics::histogram!("api_request_duration_seconds", "route" => route)
        .record(elapsed.as_secs_f64());
    if failure != "none" {
        metrics::counter!("api_failures_total", "kind" => failure).increment(1);
    }

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert("x-request-id", value);
    }

    let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    span.in_scope(|| {
        if status.is_server_error() {
            warn!(status = status.as_u16(), failure, elapsed_ms, "Request failed");
        } else {
            info!(status = status.as_u16(), failure, elapsed_ms, "Request finished");
        }
    });

    response
}
