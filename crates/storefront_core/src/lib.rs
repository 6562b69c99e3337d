//! Core domain logic for the storefront API.
//! Entities, validation, persistence and use-case services live here; the
//! HTTP surface only translates between the wire and these types.

pub mod db;
pub mod dto;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;

pub use db::{Database, DbError, DbResult};
pub use dto::customer::{CustomerCreateRequest, CustomerResponse, CustomerUpdateRequest};
pub use dto::employee::{EmployeeCreateRequest, EmployeeResponse, EmployeeUpdateRequest};
pub use dto::product::{ProductCreateRequest, ProductResponse, ProductUpdateRequest};
pub use logging::{
    default_log_level, init_console_logging, init_logging, logging_status, LogTarget,
};
pub use model::customer::{Customer, CustomerId};
pub use model::employee::{Employee, EmployeeId};
pub use model::product::{Product, ProductId};
pub use repo::customer_repo::{CustomerRepository, SqliteCustomerRepository};
pub use repo::employee_repo::{EmployeeRepository, SqliteEmployeeRepository};
pub use repo::memory::{
    InMemoryCustomerRepository, InMemoryEmployeeRepository, InMemoryProductRepository,
};
pub use repo::product_repo::{ProductRepository, SqliteProductRepository};
pub use repo::{RepoError, RepoResult};
pub use service::customer_service::CustomerService;
pub use service::employee_service::EmployeeService;
pub use service::product_service::ProductService;
pub use service::{ServiceError, ServiceResult};
pub use validation::{ValidationError, Validator};

/// Minimal health-check probe.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
