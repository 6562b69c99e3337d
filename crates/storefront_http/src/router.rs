//! Router composition and request logging.

use crate::controller::{customer, employee, product};
use crate::envelope::{respond, WebResponse};
use crate::state::AppState;
use axum::extract::Request;
use axum::http::header::HeaderName;
use axum::http::{HeaderValue, StatusCode, Uri};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use log::{info, warn};
use serde::Serialize;
use std::time::Instant;
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

#[derive(Debug, Serialize)]
struct Health {
    ping: &'static str,
    version: &'static str,
}

/// Builds the full API router over `state`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .merge(employee::routes())
        .merge(product::routes())
        .merge(customer::routes())
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn health() -> Response {
    respond(
        StatusCode::OK,
        Health {
            ping: storefront_core::ping(),
            version: storefront_core::core_version(),
        },
    )
}

async fn route_not_found(uri: Uri) -> Response {
    respond(StatusCode::NOT_FOUND, format!("no route for {}", uri.path()))
}

async fn method_not_allowed() -> Response {
    WebResponse::<String>::new(StatusCode::METHOD_NOT_ALLOWED, None).into_response()
}

/// Tags the response with a request id and logs one line per request.
///
/// Bodies are never logged.
async fn log_request(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let mut response = next.run(request).await;

    let code = response.status();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER.clone(), value);
    }
    let elapsed_ms = started.elapsed().as_millis();
    if code.is_server_error() {
        warn!(
            "event=http_request module=http status=error method={method} path={path} code={} duration_ms={elapsed_ms} request_id={request_id}",
            code.as_u16()
        );
    } else {
        info!(
            "event=http_request module=http status=ok method={method} path={path} code={} duration_ms={elapsed_ms} request_id={request_id}",
            code.as_u16()
        );
    }
    response
}
