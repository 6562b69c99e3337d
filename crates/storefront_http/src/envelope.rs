//! Uniform response envelope.
//!
//! # Invariants
//! - `code` always equals the HTTP status of the response carrying it.
//! - `data` is omitted from the JSON body when there is nothing to return.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

pub const DELETED_STATUS: &str = "Deleted Successfully";

/// `{code, status, data}` body returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebResponse<T> {
    pub code: u16,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> WebResponse<T> {
    /// Envelope whose status text is the canonical reason phrase.
    pub fn new(status: StatusCode, data: Option<T>) -> Self {
        Self {
            code: status.as_u16(),
            status: status.canonical_reason().unwrap_or("Unknown").to_string(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for WebResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

pub fn respond<T: Serialize>(status: StatusCode, data: T) -> Response {
    WebResponse::new(status, Some(data)).into_response()
}

/// 200 with the delete status text and no `data` field.
pub fn deleted() -> Response {
    WebResponse::<()> {
        code: StatusCode::OK.as_u16(),
        status: DELETED_STATUS.to_string(),
        data: None,
    }
    .into_response()
}
