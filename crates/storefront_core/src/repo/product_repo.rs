//! Product repository contract and SQLite implementation.

use crate::db::Database;
use crate::model::product::{Product, ProductId};
use crate::model::Record;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Row};
use std::sync::Arc;

const PRODUCT_SELECT_SQL: &str = "SELECT
    product_id,
    name,
    description,
    price,
    stock_qty,
    category_id,
    sku,
    tax_rate
FROM products";

/// Persistence contract for products.
pub trait ProductRepository: Send + Sync {
    /// Inserts when `product_id` is `None`, otherwise replaces the row.
    fn save(&self, product: Product) -> RepoResult<Product>;
    fn find_by_id(&self, id: ProductId) -> RepoResult<Product>;
    fn find_all(&self) -> RepoResult<Vec<Product>>;
    fn delete(&self, product: &Product) -> RepoResult<()>;
}

impl<R: ProductRepository + ?Sized> ProductRepository for Box<R> {
    fn save(&self, product: Product) -> RepoResult<Product> {
        (**self).save(product)
    }

    fn find_by_id(&self, id: ProductId) -> RepoResult<Product> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> RepoResult<Vec<Product>> {
        (**self).find_all()
    }

    fn delete(&self, product: &Product) -> RepoResult<()> {
        (**self).delete(product)
    }
}

impl<R: ProductRepository + ?Sized> ProductRepository for Arc<R> {
    fn save(&self, product: Product) -> RepoResult<Product> {
        (**self).save(product)
    }

    fn find_by_id(&self, id: ProductId) -> RepoResult<Product> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> RepoResult<Vec<Product>> {
        (**self).find_all()
    }

    fn delete(&self, product: &Product) -> RepoResult<()> {
        (**self).delete(product)
    }
}

/// SQLite-backed product repository.
#[derive(Clone)]
pub struct SqliteProductRepository {
    db: Database,
}

impl SqliteProductRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl ProductRepository for SqliteProductRepository {
    fn save(&self, product: Product) -> RepoResult<Product> {
        self.db.with_conn(|conn| -> RepoResult<Product> {
            let Some(id) = product.product_id else {
                conn.execute(
                    "INSERT INTO products (
                        name,
                        description,
                        price,
                        stock_qty,
                        category_id,
                        sku,
                        tax_rate
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
                    params![
                        product.name,
                        product.description,
                        product.price,
                        product.stock_qty,
                        product.category_id,
                        product.sku,
                        product.tax_rate,
                    ],
                )?;
                return Ok(product.with_id(conn.last_insert_rowid()));
            };

            let changed = conn.execute(
                "UPDATE products
                 SET
                    name = ?1,
                    description = ?2,
                    price = ?3,
                    stock_qty = ?4,
                    category_id = ?5,
                    sku = ?6,
                    tax_rate = ?7
                 WHERE product_id = ?8;",
                params![
                    product.name,
                    product.description,
                    product.price,
                    product.stock_qty,
                    product.category_id,
                    product.sku,
                    product.tax_rate,
                    id,
                ],
            )?;
            if changed == 0 {
                return Err(RepoError::not_found(Product::ENTITY, id));
            }
            Ok(product)
        })
    }

    fn find_by_id(&self, id: ProductId) -> RepoResult<Product> {
        self.db.with_conn(|conn| -> RepoResult<Product> {
            let mut stmt =
                conn.prepare(&format!("{PRODUCT_SELECT_SQL} WHERE product_id = ?1;"))?;
            let mut rows = stmt.query([id])?;
            if let Some(row) = rows.next()? {
                return parse_product_row(row);
            }
            Err(RepoError::not_found(Product::ENTITY, id))
        })
    }

    fn find_all(&self) -> RepoResult<Vec<Product>> {
        self.db.with_conn(|conn| -> RepoResult<Vec<Product>> {
            let mut stmt =
                conn.prepare(&format!("{PRODUCT_SELECT_SQL} ORDER BY product_id ASC;"))?;
            let mut rows = stmt.query([])?;
            let mut products = Vec::new();
            while let Some(row) = rows.next()? {
                products.push(parse_product_row(row)?);
            }
            Ok(products)
        })
    }

    fn delete(&self, product: &Product) -> RepoResult<()> {
        let Some(id) = product.product_id else {
            return Ok(());
        };
        self.db.with_conn(|conn| -> RepoResult<()> {
            conn.execute("DELETE FROM products WHERE product_id = ?1;", [id])?;
            Ok(())
        })
    }
}

fn parse_product_row(row: &Row<'_>) -> RepoResult<Product> {
    Ok(Product {
        product_id: Some(row.get("product_id")?),
        name: row.get("name")?,
        description: row.get("description")?,
        price: row.get("price")?,
        stock_qty: row.get("stock_qty")?,
        category_id: row.get("category_id")?,
        sku: row.get("sku")?,
        tax_rate: row.get("tax_rate")?,
    })
}
