//! Patient models and validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::bmi::{self, BmiVerdict};

/// Field-level validation failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("age must be between 1 and 119, got {0}")]
    AgeOutOfRange(u32),

    #[error("{field} must be a positive number, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}

/// Patient gender, restricted to the three wire literals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// The six persisted fields of a patient record.
///
/// The record id is the store key and never appears among the values;
/// derived metrics are never persisted either.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientFields {
    /// Full name
    pub name: String,
    /// City of residence
    pub city: String,
    /// Age in years (1-119)
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
}

impl PatientFields {
    /// Check range constraints. Enum membership for `gender` is already
    /// enforced at deserialization time.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.age == 0 || self.age >= 120 {
            return Err(ValidationError::AgeOutOfRange(self.age));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(ValidationError::NonPositive {
                field: "height",
                value: self.height,
            });
        }
        if !(self.weight.is_finite() && self.weight > 0.0) {
            return Err(ValidationError::NonPositive {
                field: "weight",
                value: self.weight,
            });
        }
        Ok(())
    }
}

/// A full patient record: the immutable id plus the persisted fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Unique identifier, immutable after creation
    pub id: String,
    #[serde(flatten)]
    pub fields: PatientFields,
}

impl Patient {
    /// Body Mass Index, recomputed from the current height and weight.
    pub fn bmi(&self) -> f64 {
        bmi::compute_bmi(self.fields.height, self.fields.weight)
    }

    /// Verdict band for the current BMI, if one is defined.
    pub fn verdict(&self) -> Option<BmiVerdict> {
        bmi::classify(self.bmi())
    }
}

/// Partial patch over a patient record. The id is not patchable.
///
/// Absent fields leave the stored value untouched; JSON `null` is treated
/// the same as absent (no stored field is nullable).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PatientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}
