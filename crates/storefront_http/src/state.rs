//! Shared handler state.

use std::sync::Arc;
use storefront_core::{
    CustomerRepository, CustomerService, Database, EmployeeRepository, EmployeeService,
    ProductRepository, ProductService, SqliteCustomerRepository, SqliteEmployeeRepository,
    SqliteProductRepository, Validator,
};

pub type DynEmployeeService = EmployeeService<Box<dyn EmployeeRepository>>;
pub type DynProductService = ProductService<Box<dyn ProductRepository>>;
pub type DynCustomerService = CustomerService<Box<dyn CustomerRepository>>;

/// One service per entity, shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<DynEmployeeService>,
    pub products: Arc<DynProductService>,
    pub customers: Arc<DynCustomerService>,
}

impl AppState {
    /// Builds services over arbitrary repositories sharing one validator.
    pub fn new(
        employees: Box<dyn EmployeeRepository>,
        products: Box<dyn ProductRepository>,
        customers: Box<dyn CustomerRepository>,
        validator: Validator,
    ) -> Self {
        Self {
            employees: Arc::new(EmployeeService::new(employees, validator)),
            products: Arc::new(ProductService::new(products, validator)),
            customers: Arc::new(CustomerService::new(customers, validator)),
        }
    }

    /// Builds services over the SQLite repositories of `db`.
    pub fn sqlite(db: Database, validator: Validator) -> Self {
        Self::new(
            Box::new(SqliteEmployeeRepository::new(db.clone())),
            Box::new(SqliteProductRepository::new(db.clone())),
            Box::new(SqliteCustomerRepository::new(db)),
            validator,
        )
    }
}
