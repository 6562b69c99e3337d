//! Customer repository contract and SQLite implementation.

use crate::db::Database;
use crate::model::customer::{Customer, CustomerId};
use crate::model::Record;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Row};
use std::sync::Arc;

const CUSTOMER_SELECT_SQL: &str = "SELECT
    customer_id,
    name,
    email,
    phone,
    address,
    loyalty_pts
FROM customers";

/// Persistence contract for customers.
pub trait CustomerRepository: Send + Sync {
    /// Inserts when `customer_id` is `None`, otherwise replaces the row.
    fn save(&self, customer: Customer) -> RepoResult<Customer>;
    fn find_by_id(&self, id: CustomerId) -> RepoResult<Customer>;
    fn find_all(&self) -> RepoResult<Vec<Customer>>;
    fn delete(&self, customer: &Customer) -> RepoResult<()>;
}

impl<R: CustomerRepository + ?Sized> CustomerRepository for Box<R> {
    fn save(&self, customer: Customer) -> RepoResult<Customer> {
        (**self).save(customer)
    }

    fn find_by_id(&self, id: CustomerId) -> RepoResult<Customer> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> RepoResult<Vec<Customer>> {
        (**self).find_all()
    }

    fn delete(&self, customer: &Customer) -> RepoResult<()> {
        (**self).delete(customer)
    }
}

impl<R: CustomerRepository + ?Sized> CustomerRepository for Arc<R> {
    fn save(&self, customer: Customer) -> RepoResult<Customer> {
        (**self).save(customer)
    }

    fn find_by_id(&self, id: CustomerId) -> RepoResult<Customer> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> RepoResult<Vec<Customer>> {
        (**self).find_all()
    }

    fn delete(&self, customer: &Customer) -> RepoResult<()> {
        (**self).delete(customer)
    }
}

/// SQLite-backed customer repository.
#[derive(Clone)]
pub struct SqliteCustomerRepository {
    db: Database,
}

impl SqliteCustomerRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl CustomerRepository for SqliteCustomerRepository {
    fn save(&self, customer: Customer) -> RepoResult<Customer> {
        self.db.with_conn(|conn| -> RepoResult<Customer> {
            let Some(id) = customer.customer_id else {
                conn.execute(
                    "INSERT INTO customers (name, email, phone, address, loyalty_pts)
                     VALUES (?1, ?2, ?3, ?4, ?5);",
                    params![
                        customer.name,
                        customer.email,
                        customer.phone,
                        customer.address,
                        customer.loyalty_pts,
                    ],
                )?;
                return Ok(customer.with_id(conn.last_insert_rowid()));
            };

            let changed = conn.execute(
                "UPDATE customers
                 SET name = ?1, email = ?2, phone = ?3, address = ?4, loyalty_pts = ?5
                 WHERE customer_id = ?6;",
                params![
                    customer.name,
                    customer.email,
                    customer.phone,
                    customer.address,
                    customer.loyalty_pts,
                    id,
                ],
            )?;
            if changed == 0 {
                return Err(RepoError::not_found(Customer::ENTITY, id));
            }
            Ok(customer)
        })
    }

    fn find_by_id(&self, id: CustomerId) -> RepoResult<Customer> {
        self.db.with_conn(|conn| -> RepoResult<Customer> {
            let mut stmt =
                conn.prepare(&format!("{CUSTOMER_SELECT_SQL} WHERE customer_id = ?1;"))?;
            let mut rows = stmt.query([id])?;
            if let Some(row) = rows.next()? {
                return parse_customer_row(row);
            }
            Err(RepoError::not_found(Customer::ENTITY, id))
        })
    }

    fn find_all(&self) -> RepoResult<Vec<Customer>> {
        self.db.with_conn(|conn| -> RepoResult<Vec<Customer>> {
            let mut stmt =
                conn.prepare(&format!("{CUSTOMER_SELECT_SQL} ORDER BY customer_id ASC;"))?;
            let mut rows = stmt.query([])?;
            let mut customers = Vec::new();
            while let Some(row) = rows.next()? {
                customers.push(parse_customer_row(row)?);
            }
            Ok(customers)
        })
    }

    fn delete(&self, customer: &Customer) -> RepoResult<()> {
        let Some(id) = customer.customer_id else {
            return Ok(());
        };
        self.db.with_conn(|conn| -> RepoResult<()> {
            conn.execute("DELETE FROM customers WHERE customer_id = ?1;", [id])?;
            Ok(())
        })
    }
}

fn parse_customer_row(row: &Row<'_>) -> RepoResult<Customer> {
    Ok(Customer {
        customer_id: Some(row.get("customer_id")?),
        name: row.get("name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        address: row.get("address")?,
        loyalty_pts: row.get("loyalty_pts")?,
    })
}
