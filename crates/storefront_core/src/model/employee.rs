use super::Record;
use serde::{Deserialize, Serialize};

pub type EmployeeId = i64;

/// Persisted employee record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: Option<EmployeeId>,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD`, or empty when unknown.
    pub date_hired: String,
}

impl Employee {
    /// Record carrying only an identifier, used to address deletes.
    pub fn stub(employee_id: EmployeeId) -> Self {
        Self {
            employee_id: Some(employee_id),
            ..Self::default()
        }
    }
}

impl Record for Employee {
    const ENTITY: &'static str = "employee";

    fn id(&self) -> Option<i64> {
        self.employee_id
    }

    fn with_id(self, id: i64) -> Self {
        Self {
            employee_id: Some(id),
            ..self
        }
    }
}
