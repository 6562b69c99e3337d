use crate::model::product::{Product, ProductId};
use crate::validation::{Constraint, FieldRule, Validate};
use serde::{Deserialize, Serialize};

const NAME_RULES: &[Constraint] = &[Constraint::Required, Constraint::MaxLen(200)];
const DESCRIPTION_RULES: &[Constraint] = &[Constraint::MaxLen(1000)];
const PRICE_RULES: &[Constraint] = &[Constraint::Min(0.0)];
const STOCK_QTY_RULES: &[Constraint] = &[Constraint::Min(0.0)];
const CATEGORY_ID_RULES: &[Constraint] = &[Constraint::Min(0.0)];
const SKU_RULES: &[Constraint] = &[Constraint::MaxLen(64)];
const TAX_RATE_RULES: &[Constraint] = &[Constraint::Min(0.0), Constraint::Max(100.0)];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductCreateRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_qty: i64,
    pub category_id: i64,
    pub sku: String,
    pub tax_rate: f64,
}

/// Full replacement of an existing product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductUpdateRequest {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_qty: i64,
    pub category_id: i64,
    pub sku: String,
    pub tax_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_qty: i64,
    pub category_id: i64,
    pub sku: String,
    pub tax_rate: f64,
}

fn product_rules<'a>(
    name: &'a str,
    description: &'a str,
    price: f64,
    stock_qty: i64,
    category_id: i64,
    sku: &'a str,
    tax_rate: f64,
) -> [FieldRule<'a>; 7] {
    [
        FieldRule::text("name", name, NAME_RULES),
        FieldRule::text("description", description, DESCRIPTION_RULES),
        FieldRule::number("price", price, PRICE_RULES),
        FieldRule::number("stock_qty", stock_qty as f64, STOCK_QTY_RULES),
        FieldRule::number("category_id", category_id as f64, CATEGORY_ID_RULES),
        FieldRule::text("sku", sku, SKU_RULES),
        FieldRule::number("tax_rate", tax_rate, TAX_RATE_RULES),
    ]
}

impl Validate for ProductCreateRequest {
    fn field_rules(&self) -> Vec<FieldRule<'_>> {
        product_rules(
            &self.name,
            &self.description,
            self.price,
            self.stock_qty,
            self.category_id,
            &self.sku,
            self.tax_rate,
        )
        .to_vec()
    }
}

impl Validate for ProductUpdateRequest {
    fn field_rules(&self) -> Vec<FieldRule<'_>> {
        let mut rules = vec![FieldRule::text(
            "product_id",
            &self.product_id,
            &[Constraint::Required, Constraint::Positive],
        )];
        rules.extend(product_rules(
            &self.name,
            &self.description,
            self.price,
            self.stock_qty,
            self.category_id,
            &self.sku,
            self.tax_rate,
        ));
        rules
    }
}

impl From<ProductCreateRequest> for Product {
    fn from(request: ProductCreateRequest) -> Self {
        Self {
            product_id: None,
            name: request.name,
            description: request.description,
            price: request.price,
            stock_qty: request.stock_qty,
            category_id: request.category_id,
            sku: request.sku,
            tax_rate: request.tax_rate,
        }
    }
}

impl ProductUpdateRequest {
    /// Builds the replacement record for `product_id`.
    pub fn into_product(self, product_id: ProductId) -> Product {
        Product {
            product_id: Some(product_id),
            name: self.name,
            description: self.description,
            price: self.price,
            stock_qty: self.stock_qty,
            category_id: self.category_id,
            sku: self.sku,
            tax_rate: self.tax_rate,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            product_id: product
                .product_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            name: product.name,
            description: product.description,
            price: product.price,
            stock_qty: product.stock_qty,
            category_id: product.category_id,
            sku: product.sku,
            tax_rate: product.tax_rate,
        }
    }
}
