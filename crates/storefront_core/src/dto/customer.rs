use crate::model::customer::{Customer, CustomerId};
use crate::validation::{Constraint, FieldRule, Validate};
use serde::{Deserialize, Serialize};

const NAME_RULES: &[Constraint] = &[Constraint::Required, Constraint::MaxLen(100)];
const EMAIL_RULES: &[Constraint] = &[Constraint::Email];
const PHONE_RULES: &[Constraint] = &[Constraint::MaxLen(20)];
const ADDRESS_RULES: &[Constraint] = &[Constraint::MaxLen(255)];
const LOYALTY_PTS_RULES: &[Constraint] = &[Constraint::Min(0.0)];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerCreateRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub loyalty_pts: i64,
}

/// Full replacement of an existing customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerUpdateRequest {
    pub customer_id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub loyalty_pts: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub customer_id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub loyalty_pts: i64,
}

impl Validate for CustomerCreateRequest {
    fn field_rules(&self) -> Vec<FieldRule<'_>> {
        vec![
            FieldRule::text("name", &self.name, NAME_RULES),
            FieldRule::text("email", &self.email, EMAIL_RULES),
            FieldRule::text("phone", &self.phone, PHONE_RULES),
            FieldRule::text("address", &self.address, ADDRESS_RULES),
            FieldRule::number("loyalty_pts", self.loyalty_pts as f64, LOYALTY_PTS_RULES),
        ]
    }
}

impl Validate for CustomerUpdateRequest {
    fn field_rules(&self) -> Vec<FieldRule<'_>> {
        vec![
            FieldRule::number(
                "customer_id",
                self.customer_id as f64,
                &[Constraint::Positive],
            ),
            FieldRule::text("name", &self.name, NAME_RULES),
            FieldRule::text("email", &self.email, EMAIL_RULES),
            FieldRule::text("phone", &self.phone, PHONE_RULES),
            FieldRule::text("address", &self.address, ADDRESS_RULES),
            FieldRule::number("loyalty_pts", self.loyalty_pts as f64, LOYALTY_PTS_RULES),
        ]
    }
}

impl From<CustomerCreateRequest> for Customer {
    fn from(request: CustomerCreateRequest) -> Self {
        Self {
            customer_id: None,
            name: request.name,
            email: request.email,
            phone: request.phone,
            address: request.address,
            loyalty_pts: request.loyalty_pts,
        }
    }
}

impl From<CustomerUpdateRequest> for Customer {
    fn from(request: CustomerUpdateRequest) -> Self {
        Self {
            customer_id: Some(request.customer_id),
            name: request.name,
            email: request.email,
            phone: request.phone,
            address: request.address,
            loyalty_pts: request.loyalty_pts,
        }
    }
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            customer_id: customer.customer_id.unwrap_or_default(),
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
            address: customer.address,
            loyalty_pts: customer.loyalty_pts,
        }
    }
}
