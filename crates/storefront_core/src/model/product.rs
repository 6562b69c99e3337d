use super::Record;
use serde::{Deserialize, Serialize};

pub type ProductId = i64;

/// Persisted product record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_qty: i64,
    pub category_id: i64,
    pub sku: String,
    /// Percentage in `0..=100`.
    pub tax_rate: f64,
}

impl Product {
    /// Record carrying only an identifier, used to address deletes.
    pub fn stub(product_id: ProductId) -> Self {
        Self {
            product_id: Some(product_id),
            ..Self::default()
        }
    }
}

impl Record for Product {
    const ENTITY: &'static str = "product";

    fn id(&self) -> Option<i64> {
        self.product_id
    }

    fn with_id(self, id: i64) -> Self {
        Self {
            product_id: Some(id),
            ..self
        }
    }
}
