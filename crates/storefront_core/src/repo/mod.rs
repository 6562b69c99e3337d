//! Repository contracts and persistence implementations.
//!
//! # Responsibility
//! - Define one save/find/delete contract per entity.
//! - Isolate SQLite query details from service orchestration.
//! - Provide in-memory doubles for service and controller tests.
//!
//! # Invariants
//! - Repositories return semantic errors (`NotFound`) in addition to store
//!   transport errors, and never panic.
//! - Deleting an identifier with no row is a successful no-op.
//! - `find_all` orders records by identifier ascending.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod customer_repo;
pub mod employee_repo;
pub mod memory;
pub mod product_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by every entity.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound { entity: &'static str, id: String },
    /// Store refused the call without reaching SQL (used by test doubles).
    Unavailable(String),
}

impl RepoError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::Unavailable(message) => write!(f, "{message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound { .. } | Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
