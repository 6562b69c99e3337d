//! Canonical persisted shapes for storefront entities.
//!
//! # Responsibility
//! - Define the records owned by the repository layer.
//! - Keep store identifiers typed and optional until assigned.
//!
//! # Invariants
//! - An entity id is `None` until the store assigns it, and never changes
//!   afterwards.

pub mod customer;
pub mod employee;
pub mod product;

/// Common view over persisted records, keyed by a store-assigned id.
pub trait Record: Clone {
    /// Singular entity name used in diagnostics (`employee`, `product`, ...).
    const ENTITY: &'static str;

    fn id(&self) -> Option<i64>;

    /// Returns the record with its identifier set to `id`.
    fn with_id(self, id: i64) -> Self;
}

/// Parses an identifier received in wire (string) form.
///
/// Returns `None` for anything that cannot name a stored row.
pub fn parse_wire_id(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
