//! Product endpoints under `/api/products`.

use crate::controller::{run_blocking, ControllerError};
use crate::envelope::{deleted, respond};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use storefront_core::{ProductCreateRequest, ProductUpdateRequest};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(find_all).post(create))
        .route("/api/products/", get(find_all).post(create))
        .route(
            "/api/products/{product_id}",
            get(find_by_id).put(update).delete(delete),
        )
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ProductCreateRequest>, JsonRejection>,
) -> Result<Response, ControllerError> {
    let Json(request) = body?;
    let service = Arc::clone(&state.products);
    let created = run_blocking(move || service.create(request)).await?;
    Ok(respond(StatusCode::CREATED, created))
}

/// The path id wins over any `product_id` in the body.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<ProductUpdateRequest>, JsonRejection>,
) -> Result<Response, ControllerError> {
    let Path(product_id) = path?;
    let Json(mut request) = body?;
    request.product_id = product_id;
    let service = Arc::clone(&state.products);
    let updated = run_blocking(move || service.update(request)).await?;
    Ok(respond(StatusCode::OK, updated))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ControllerError> {
    let Path(product_id) = path?;
    let service = Arc::clone(&state.products);
    run_blocking(move || service.delete(&product_id)).await?;
    Ok(deleted())
}

pub async fn find_by_id(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ControllerError> {
    let Path(product_id) = path?;
    let service = Arc::clone(&state.products);
    let product = run_blocking(move || service.find_by_id(&product_id)).await?;
    Ok(respond(StatusCode::OK, product))
}

pub async fn find_all(State(state): State<AppState>) -> Result<Response, ControllerError> {
    let service = Arc::clone(&state.products);
    let products = run_blocking(move || service.find_all()).await?;
    Ok(respond(StatusCode::OK, products))
}
