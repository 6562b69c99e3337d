//! Employee repository contract and SQLite implementation.

use crate::db::Database;
use crate::model::employee::{Employee, EmployeeId};
use crate::model::Record;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Row};
use std::sync::Arc;

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    employee_id,
    name,
    role,
    email,
    phone,
    date_hired
FROM employees";

/// Persistence contract for employees.
pub trait EmployeeRepository: Send + Sync {
    /// Inserts when `employee_id` is `None`, otherwise replaces the row.
    fn save(&self, employee: Employee) -> RepoResult<Employee>;
    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Employee>;
    fn find_all(&self) -> RepoResult<Vec<Employee>>;
    fn delete(&self, employee: &Employee) -> RepoResult<()>;
}

impl<R: EmployeeRepository + ?Sized> EmployeeRepository for Box<R> {
    fn save(&self, employee: Employee) -> RepoResult<Employee> {
        (**self).save(employee)
    }

    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Employee> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> RepoResult<Vec<Employee>> {
        (**self).find_all()
    }

    fn delete(&self, employee: &Employee) -> RepoResult<()> {
        (**self).delete(employee)
    }
}

impl<R: EmployeeRepository + ?Sized> EmployeeRepository for Arc<R> {
    fn save(&self, employee: Employee) -> RepoResult<Employee> {
        (**self).save(employee)
    }

    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Employee> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> RepoResult<Vec<Employee>> {
        (**self).find_all()
    }

    fn delete(&self, employee: &Employee) -> RepoResult<()> {
        (**self).delete(employee)
    }
}

/// SQLite-backed employee repository.
#[derive(Clone)]
pub struct SqliteEmployeeRepository {
    db: Database,
}

impl SqliteEmployeeRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository {
    fn save(&self, employee: Employee) -> RepoResult<Employee> {
        self.db.with_conn(|conn| -> RepoResult<Employee> {
            let Some(id) = employee.employee_id else {
                conn.execute(
                    "INSERT INTO employees (name, role, email, phone, date_hired)
                     VALUES (?1, ?2, ?3, ?4, ?5);",
                    params![
                        employee.name,
                        employee.role,
                        employee.email,
                        employee.phone,
                        employee.date_hired,
                    ],
                )?;
                return Ok(employee.with_id(conn.last_insert_rowid()));
            };

            let changed = conn.execute(
                "UPDATE employees
                 SET name = ?1, role = ?2, email = ?3, phone = ?4, date_hired = ?5
                 WHERE employee_id = ?6;",
                params![
                    employee.name,
                    employee.role,
                    employee.email,
                    employee.phone,
                    employee.date_hired,
                    id,
                ],
            )?;
            if changed == 0 {
                return Err(RepoError::not_found(Employee::ENTITY, id));
            }
            Ok(employee)
        })
    }

    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Employee> {
        self.db.with_conn(|conn| -> RepoResult<Employee> {
            let mut stmt =
                conn.prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE employee_id = ?1;"))?;
            let mut rows = stmt.query([id])?;
            if let Some(row) = rows.next()? {
                return parse_employee_row(row);
            }
            Err(RepoError::not_found(Employee::ENTITY, id))
        })
    }

    fn find_all(&self) -> RepoResult<Vec<Employee>> {
        self.db.with_conn(|conn| -> RepoResult<Vec<Employee>> {
            let mut stmt =
                conn.prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY employee_id ASC;"))?;
            let mut rows = stmt.query([])?;
            let mut employees = Vec::new();
            while let Some(row) = rows.next()? {
                employees.push(parse_employee_row(row)?);
            }
            Ok(employees)
        })
    }

    fn delete(&self, employee: &Employee) -> RepoResult<()> {
        let Some(id) = employee.employee_id else {
            return Ok(());
        };
        self.db.with_conn(|conn| -> RepoResult<()> {
            conn.execute("DELETE FROM employees WHERE employee_id = ?1;", [id])?;
            Ok(())
        })
    }
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    Ok(Employee {
        employee_id: Some(row.get("employee_id")?),
        name: row.get("name")?,
        role: row.get("role")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        date_hired: row.get("date_hired")?,
    })
}
