use super::Record;
use serde::{Deserialize, Serialize};

pub type CustomerId = i64;

/// Persisted customer record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: Option<CustomerId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub loyalty_pts: i64,
}

impl Customer {
    /// Record carrying only an identifier, used to address deletes.
    pub fn stub(customer_id: CustomerId) -> Self {
        Self {
            customer_id: Some(customer_id),
            ..Self::default()
        }
    }
}

impl Record for Customer {
    const ENTITY: &'static str = "customer";

    fn id(&self) -> Option<i64> {
        self.customer_id
    }

    fn with_id(self, id: i64) -> Self {
        Self {
            customer_id: Some(id),
            ..self
        }
    }
}
