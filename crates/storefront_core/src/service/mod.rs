//! Entity use-case services.
//!
//! # Responsibility
//! - Gate every write behind the injected `Validator`.
//! - Map request DTOs to records and records to response DTOs.
//! - Translate repository errors into service error kinds.
//!
//! # Invariants
//! - A request failing validation never reaches the repository.
//! - Services keep no state besides their repository and validator.

use crate::repo::RepoError;
use crate::validation::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod customer_service;
pub mod employee_service;
pub mod product_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error, split by what the caller did wrong (if anything).
#[derive(Debug)]
pub enum ServiceError {
    /// Request rejected before any store interaction.
    Validation(ValidationError),
    /// Identifier names no stored record.
    NotFound(String),
    /// Backing store failure.
    Store(RepoError),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: impl Display) -> Self {
        Self::NotFound(format!("{entity} not found: {id}"))
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(message) => write!(f, "{message}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { entity, id } => Self::not_found(entity, id),
            other => Self::Store(other),
        }
    }
}
