//! Tones health service.
//!
//! A liveness endpoint behind a permissive cross-origin policy. The binary in `main.rs`
//! wires these modules together; tests drive `routes::build_router` directly.

pub mod config;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod telemetry;
