use crate::model::employee::{Employee, EmployeeId};
use crate::validation::{Constraint, FieldRule, Validate};
use serde::{Deserialize, Serialize};

const NAME_RULES: &[Constraint] = &[Constraint::Required, Constraint::MaxLen(100)];
const ROLE_RULES: &[Constraint] = &[Constraint::Required, Constraint::MaxLen(100)];
const EMAIL_RULES: &[Constraint] = &[Constraint::Email];
const PHONE_RULES: &[Constraint] = &[Constraint::MaxLen(20)];
const DATE_HIRED_RULES: &[Constraint] = &[Constraint::Date];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeCreateRequest {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub date_hired: String,
}

/// Full replacement of an existing employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeUpdateRequest {
    pub employee_id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub date_hired: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub employee_id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub date_hired: String,
}

impl Validate for EmployeeCreateRequest {
    fn field_rules(&self) -> Vec<FieldRule<'_>> {
        vec![
            FieldRule::text("name", &self.name, NAME_RULES),
            FieldRule::text("role", &self.role, ROLE_RULES),
            FieldRule::text("email", &self.email, EMAIL_RULES),
            FieldRule::text("phone", &self.phone, PHONE_RULES),
            FieldRule::text("date_hired", &self.date_hired, DATE_HIRED_RULES),
        ]
    }
}

impl Validate for EmployeeUpdateRequest {
    fn field_rules(&self) -> Vec<FieldRule<'_>> {
        vec![
            FieldRule::text(
                "employee_id",
                &self.employee_id,
                &[Constraint::Required, Constraint::Positive],
            ),
            FieldRule::text("name", &self.name, NAME_RULES),
            FieldRule::text("role", &self.role, ROLE_RULES),
            FieldRule::text("email", &self.email, EMAIL_RULES),
            FieldRule::text("phone", &self.phone, PHONE_RULES),
            FieldRule::text("date_hired", &self.date_hired, DATE_HIRED_RULES),
        ]
    }
}

impl From<EmployeeCreateRequest> for Employee {
    fn from(request: EmployeeCreateRequest) -> Self {
        Self {
            employee_id: None,
            name: request.name,
            role: request.role,
            email: request.email,
            phone: request.phone,
            date_hired: request.date_hired,
        }
    }
}

impl EmployeeUpdateRequest {
    /// Builds the replacement record for `employee_id`.
    pub fn into_employee(self, employee_id: EmployeeId) -> Employee {
        Employee {
            employee_id: Some(employee_id),
            name: self.name,
            role: self.role,
            email: self.email,
            phone: self.phone,
            date_hired: self.date_hired,
        }
    }
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            employee_id: employee
                .employee_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            name: employee.name,
            role: employee.role,
            email: employee.email,
            phone: employee.phone,
            date_hired: employee.date_hired,
        }
    }
}
