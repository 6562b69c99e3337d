//! Employee use-case service.

use crate::dto::employee::{EmployeeCreateRequest, EmployeeResponse, EmployeeUpdateRequest};
use crate::model::employee::Employee;
use crate::model::{parse_wire_id, Record};
use crate::repo::employee_repo::EmployeeRepository;
use crate::service::{ServiceError, ServiceResult};
use crate::validation::{ValidationError, Validator};

/// Employee CRUD over any `EmployeeRepository`.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
    validator: Validator,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repo: R, validator: Validator) -> Self {
        Self { repo, validator }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Validates and stores a new employee.
    pub fn create(&self, request: EmployeeCreateRequest) -> ServiceResult<EmployeeResponse> {
        self.validator.validate(&request)?;
        let saved = self.repo.save(Employee::from(request))?;
        Ok(saved.into())
    }

    /// Replaces every field of the employee named by `request.employee_id`.
    pub fn update(&self, request: EmployeeUpdateRequest) -> ServiceResult<EmployeeResponse> {
        self.validator.validate(&request)?;
        let id = parse_wire_id(&request.employee_id)
            .ok_or_else(|| ValidationError::invalid_id("employee_id"))?;
        let saved = self.repo.save(request.into_employee(id))?;
        Ok(saved.into())
    }

    /// Removes an employee; ids with no stored record are ignored.
    pub fn delete(&self, id: &str) -> ServiceResult<()> {
        let Some(id) = parse_wire_id(id) else {
            return Ok(());
        };
        self.repo.delete(&Employee::stub(id))?;
        Ok(())
    }

    pub fn find_by_id(&self, id: &str) -> ServiceResult<EmployeeResponse> {
        let key = parse_wire_id(id).ok_or_else(|| ServiceError::not_found(Employee::ENTITY, id))?;
        Ok(self.repo.find_by_id(key)?.into())
    }

    pub fn find_all(&self) -> ServiceResult<Vec<EmployeeResponse>> {
        let employees = self.repo.find_all()?;
        Ok(employees.into_iter().map(EmployeeResponse::from).collect())
    }
}
