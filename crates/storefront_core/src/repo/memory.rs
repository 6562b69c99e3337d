//! In-memory repository doubles.
//!
//! # Responsibility
//! - Stand in for SQLite in service and controller tests.
//! - Record how often `save` was reached and inject store failures.
//!
//! # Invariants
//! - Identifiers are assigned from 1 upwards and never reused.
//! - Semantics match the SQLite repositories: update of a missing row is
//!   `NotFound`, delete of a missing row is a no-op.

use crate::model::customer::{Customer, CustomerId};
use crate::model::employee::{Employee, EmployeeId};
use crate::model::product::{Product, ProductId};
use crate::model::Record;
use crate::repo::customer_repo::CustomerRepository;
use crate::repo::employee_repo::EmployeeRepository;
use crate::repo::product_repo::ProductRepository;
use crate::repo::{RepoError, RepoResult};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

pub type InMemoryEmployeeRepository = InMemoryTable<Employee>;
pub type InMemoryProductRepository = InMemoryTable<Product>;
pub type InMemoryCustomerRepository = InMemoryTable<Customer>;

struct TableState<E> {
    rows: BTreeMap<i64, E>,
    next_id: i64,
    save_calls: usize,
    failure: Option<String>,
}

/// Ordered map of records keyed by store-assigned id.
pub struct InMemoryTable<E> {
    state: Mutex<TableState<E>>,
}

impl<E: Record> Default for InMemoryTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Record> InMemoryTable<E> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(TableState {
                rows: BTreeMap::new(),
                next_id: 1,
                save_calls: 0,
                failure: None,
            }),
        }
    }

    /// Makes every following call fail with `RepoError::Unavailable(message)`.
    pub fn fail_with(&self, message: impl Into<String>) {
        if let Ok(mut state) = self.state.lock() {
            state.failure = Some(message.into());
        }
    }

    /// Number of times `save` was called, including failed calls.
    pub fn save_calls(&self) -> usize {
        self.state.lock().map_or(0, |state| state.save_calls)
    }

    pub fn len(&self) -> usize {
        self.state.lock().map_or(0, |state| state.rows.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, TableState<E>>> {
        let state = self
            .state
            .lock()
            .map_err(|_| RepoError::Unavailable("in-memory store lock poisoned".to_string()))?;
        if let Some(message) = state.failure.clone() {
            return Err(RepoError::Unavailable(message));
        }
        Ok(state)
    }

    fn save_record(&self, record: E) -> RepoResult<E> {
        if let Ok(mut state) = self.state.lock() {
            state.save_calls += 1;
        }
        let mut state = self.lock()?;

        let Some(id) = record.id() else {
            let id = state.next_id;
            state.next_id += 1;
            let stored = record.with_id(id);
            state.rows.insert(id, stored.clone());
            return Ok(stored);
        };

        match state.rows.get_mut(&id) {
            Some(row) => {
                *row = record.clone();
                Ok(record)
            }
            None => Err(RepoError::not_found(E::ENTITY, id)),
        }
    }

    fn find_record(&self, id: i64) -> RepoResult<E> {
        self.lock()?
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| RepoError::not_found(E::ENTITY, id))
    }

    fn all_records(&self) -> RepoResult<Vec<E>> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    fn delete_record(&self, record: &E) -> RepoResult<()> {
        let mut state = self.lock()?;
        if let Some(id) = record.id() {
            state.rows.remove(&id);
        }
        Ok(())
    }
}

impl EmployeeRepository for InMemoryTable<Employee> {
    fn save(&self, employee: Employee) -> RepoResult<Employee> {
        self.save_record(employee)
    }

    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Employee> {
        self.find_record(id)
    }

    fn find_all(&self) -> RepoResult<Vec<Employee>> {
        self.all_records()
    }

    fn delete(&self, employee: &Employee) -> RepoResult<()> {
        self.delete_record(employee)
    }
}

impl ProductRepository for InMemoryTable<Product> {
    fn save(&self, product: Product) -> RepoResult<Product> {
        self.save_record(product)
    }

    fn find_by_id(&self, id: ProductId) -> RepoResult<Product> {
        self.find_record(id)
    }

    fn find_all(&self) -> RepoResult<Vec<Product>> {
        self.all_records()
    }

    fn delete(&self, product: &Product) -> RepoResult<()> {
        self.delete_record(product)
    }
}

impl CustomerRepository for InMemoryTable<Customer> {
    fn save(&self, customer: Customer) -> RepoResult<Customer> {
        self.save_record(customer)
    }

    fn find_by_id(&self, id: CustomerId) -> RepoResult<Customer> {
        self.find_record(id)
    }

    fn find_all(&self) -> RepoResult<Vec<Customer>> {
        self.all_records()
    }

    fn delete(&self, customer: &Customer) -> RepoResult<()> {
        self.delete_record(customer)
    }
}
