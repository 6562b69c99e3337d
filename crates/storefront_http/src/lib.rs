//! HTTP surface for the storefront API.
//!
//! # Responsibility
//! - Translate JSON requests and path parameters into service calls.
//! - Wrap every outcome in the `{code, status, data}` envelope.
//! - Compose entity routes into one router and serve it.

pub mod config;
pub mod controller;
pub mod envelope;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use envelope::WebResponse;
pub use router::create_router;
pub use server::{serve, serve_on};
pub use state::AppState;
