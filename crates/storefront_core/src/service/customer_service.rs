//! Customer use-case service.
//!
//! Customer identifiers travel as integers on the wire, so no string parsing
//! happens here.

use crate::dto::customer::{CustomerCreateRequest, CustomerResponse, CustomerUpdateRequest};
use crate::model::customer::{Customer, CustomerId};
use crate::repo::customer_repo::CustomerRepository;
use crate::service::ServiceResult;
use crate::validation::Validator;

/// Customer CRUD over any `CustomerRepository`.
pub struct CustomerService<R: CustomerRepository> {
    repo: R,
    validator: Validator,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: R, validator: Validator) -> Self {
        Self { repo, validator }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Validates and stores a new customer.
    pub fn create(&self, request: CustomerCreateRequest) -> ServiceResult<CustomerResponse> {
        self.validator.validate(&request)?;
        let saved = self.repo.save(Customer::from(request))?;
        Ok(saved.into())
    }

    /// Replaces every field of the customer named by `request.customer_id`.
    pub fn update(&self, request: CustomerUpdateRequest) -> ServiceResult<CustomerResponse> {
        self.validator.validate(&request)?;
        let saved = self.repo.save(Customer::from(request))?;
        Ok(saved.into())
    }

    pub fn delete(&self, id: CustomerId) -> ServiceResult<()> {
        self.repo.delete(&Customer::stub(id))?;
        Ok(())
    }

    pub fn find_by_id(&self, id: CustomerId) -> ServiceResult<CustomerResponse> {
        Ok(self.repo.find_by_id(id)?.into())
    }

    pub fn find_all(&self) -> ServiceResult<Vec<CustomerResponse>> {
        let customers = self.repo.find_all()?;
        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }
}
