//! HTTP surface for the patient registry.
//!
//! Thin layer over [`patient_registry_core::Registry`]: routing, request
//! extraction, and error-to-status mapping live here; all record logic
//! stays in the core crate.

pub mod config;
pub mod error;
pub mod routes;

pub use config::Config;
pub use routes::app;
