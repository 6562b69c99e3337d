//! Embedded schema steps for the storefront tables.
//!
//! Each step owns one SQL script. A connection's `user_version` records the
//! last step it has run, so opening an up-to-date file does no work and a
//! file written by a newer build is refused instead of being downgraded.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

struct SchemaStep {
    version: u32,
    name: &'static str,
    script: &'static str,
}

static SCHEMA_STEPS: [SchemaStep; 2] = [
    SchemaStep {
        version: 1,
        name: "employees_and_products",
        script: include_str!("0001_init.sql"),
    },
    SchemaStep {
        version: 2,
        name: "customers",
        script: include_str!("0002_customers.sql"),
    },
];

/// Highest `user_version` this build knows how to produce.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |step| step.version)
}

pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}

/// Runs the steps after the recorded version; all of them commit or none do.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let recorded = schema_version(conn)?;
    let latest = latest_version();
    if recorded > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: recorded,
            latest_supported: latest,
        });
    }

    let pending = pending_steps(recorded);
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for step in pending {
        tx.execute_batch(step.script)?;
        tx.pragma_update(None, "user_version", step.version)?;
    }
    tx.commit()?;

    for step in pending {
        info!(
            "event=db_migrate module=db status=ok version={} name={}",
            step.version, step.name
        );
    }
    Ok(())
}

fn pending_steps(recorded: u32) -> &'static [SchemaStep] {
    let first_pending = SCHEMA_STEPS
        .iter()
        .position(|step| step.version > recorded)
        .unwrap_or(SCHEMA_STEPS.len());
    &SCHEMA_STEPS[first_pending..]
}
