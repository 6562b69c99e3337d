//! Customer endpoints under `/api/customers`.
//!
//! Customer ids are integers on the wire; a non-numeric path id is a bad
//! request rather than a missing record.

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
use storefront_core::{CustomerCreateRequest, CustomerId, CustomerUpdateRequest};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/customers", get(find_all).post(create))
        .route("/api/customers/", get(find_all).post(create))
        .route(
            "/api/customers/{customer_id}",
            get(find_by_id).put(update).delete(delete),
        )
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CustomerCreateRequest>, JsonRejection>,
) -> Result<Response, ControllerError> {
    let Json(request) = body?;
    let service = Arc::clone(&state.customers);
    let created = run_blocking(move || service.create(request)).await?;
    Ok(respond(StatusCode::CREATED, created))
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<CustomerId>, PathRejection>,
    body: Result<Json<CustomerUpdateRequest>, JsonRejection>,
) -> Result<Response, ControllerError> {
    let Path(customer_id) = path?;
    let Json(mut request) = body?;
    request.customer_id = customer_id;
    let service = Arc::clone(&state.customers);
    let updated = run_blocking(move || service.update(request)).await?;
    Ok(respond(StatusCode::OK, updated))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<CustomerId>, PathRejection>,
) -> Result<Response, ControllerError> {
    let Path(customer_id) = path?;
    let service = Arc::clone(&state.customers);
    run_blocking(move || service.delete(customer_id)).await?;
    Ok(deleted())
}

pub async fn find_by_id(
    State(state): State<AppState>,
    path: Result<Path<CustomerId>, PathRejection>,
) -> Result<Response, ControllerError> {
    let Path(customer_id) = path?;
    let service = Arc::clone(&state.customers);
    let customer = run_blocking(move || service.find_by_id(customer_id)).await?;
    Ok(respond(StatusCode::OK, customer))
}

pub async fn find_all(State(state): State<AppState>) -> Result<Response, ControllerError> {
    let service = Arc::clone(&state.customers);
    let customers = run_blocking(move || service.find_all()).await?;
    Ok(respond(StatusCode::OK, customers))
}
