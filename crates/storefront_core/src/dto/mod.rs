//! Request and response shapes exposed at the HTTP boundary.
//!
//! # Responsibility
//! - Declare per-field validation rules for every request DTO.
//! - Map requests into domain records and records into responses.
//!
//! # Invariants
//! - Mappings are total: every user-supplied field reaches the record and
//!   comes back unchanged in the response.
//! - Absent JSON fields default to empty text / zero so that missing required
//!   values surface as validation errors rather than parse errors.

pub mod customer;
pub mod employee;
pub mod product;
