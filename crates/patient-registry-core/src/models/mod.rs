//! Domain models for the patient registry.

mod bmi;
mod patient;

pub use bmi::*;
pub use patient::*;
