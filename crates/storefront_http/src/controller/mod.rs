//! Entity controllers.
//!
//! # Responsibility
//! - Parse bodies and path parameters, call the entity service, and wrap
//!   results in the response envelope.
//! - Act as the only place where errors become HTTP status codes.
//!
//! # Invariants
//! - Validation and parse failures map to 400, `NotFound` to 404, and store
//!   or task failures to 500.
//! - Every response, including errors, carries the envelope.

use crate::envelope::respond;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};
use storefront_core::{ServiceError, ServiceResult};
use tokio::task::JoinError;

pub mod customer;
pub mod employee;
pub mod product;

/// Failure of a single request, before it is rendered.
#[derive(Debug)]
pub enum ControllerError {
    /// Body or path could not be decoded.
    BadRequest(String),
    Service(ServiceError),
    /// Blocking task panicked or was cancelled.
    Task(String),
}

impl ControllerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Service(ServiceError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Service(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Service(ServiceError::Store(_)) | Self::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest(message) => write!(f, "{message}"),
            Self::Service(err) => write!(f, "{err}"),
            Self::Task(message) => write!(f, "request task failed: {message}"),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Service(err) => Some(err),
            Self::BadRequest(_) | Self::Task(_) => None,
        }
    }
}

impl From<ServiceError> for ControllerError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<JsonRejection> for ControllerError {
    fn from(value: JsonRejection) -> Self {
        Self::BadRequest(value.body_text())
    }
}

impl From<PathRejection> for ControllerError {
    fn from(value: PathRejection) -> Self {
        Self::BadRequest(value.body_text())
    }
}

impl From<JoinError> for ControllerError {
    fn from(value: JoinError) -> Self {
        Self::Task(value.to_string())
    }
}

impl IntoResponse for ControllerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(
                "event=request_failed module=http status=error code={} error={}",
                status.as_u16(),
                self
            );
        }
        respond(status, self.to_string())
    }
}

/// Runs a synchronous service call on the blocking pool.
pub(crate) async fn run_blocking<T, F>(call: F) -> Result<T, ControllerError>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::task::spawn_blocking(call).await?;
    Ok(result?)
}

#[cfg(test)]
mod tests {
    use super::ControllerError;
    use axum::http::StatusCode;
    use storefront_core::validation::{FieldViolation, ValidationError};
    use storefront_core::{RepoError, ServiceError};

    #[test]
    fn service_errors_map_by_kind() {
        let validation = ControllerError::from(ServiceError::Validation(ValidationError {
            violations: vec![FieldViolation {
                field: "name",
                message: "is required".to_string(),
            }],
        }));
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);

        let missing = ControllerError::from(ServiceError::not_found("product", 999));
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(missing.to_string(), "product not found: 999");

        let store = ControllerError::from(ServiceError::Store(RepoError::Unavailable(
            "disk full".to_string(),
        )));
        assert_eq!(store.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn task_failures_are_server_errors() {
        let err = ControllerError::Task("cancelled".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "request task failed: cancelled");
    }
}
