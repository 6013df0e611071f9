//! BMI computation and classification.

use serde::{Deserialize, Serialize};

/// Weight classification derived from BMI.
///
/// There is deliberately no variant for BMI values of 30 and above; that
/// range has no defined category and [`classify`] returns `None` for it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BmiVerdict {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Obese,
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute BMI from height in centimeters and weight in kilograms,
/// rounded to two decimal places.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round2(weight_kg / (height_m * height_m))
}

/// Classify a BMI value into its verdict band.
pub fn classify(bmi: f64) -> Option<BmiVerdict> {
    if bmi < 18.5 {
        Some(BmiVerdict::Underweight)
    } else if bmi < 25.0 {
        Some(BmiVerdict::Normal)
    } else if bmi < 30.0 {
        Some(BmiVerdict::Obese)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_bmi_rounds_to_two_places() {
        // 70 / 1.75^2 = 22.857... -> 22.86
        assert_eq!(compute_bmi(175.0, 70.0), 22.86);
        assert_eq!(compute_bmi(100.0, 30.0), 30.0);
    }

    #[test]
    fn test_classify_bands() {
        assert_eq!(classify(17.0), Some(BmiVerdict::Underweight));
        assert_eq!(classify(18.5), Some(BmiVerdict::Normal));
        assert_eq!(classify(22.0), Some(BmiVerdict::Normal));
        assert_eq!(classify(25.0), Some(BmiVerdict::Obese));
        assert_eq!(classify(27.0), Some(BmiVerdict::Obese));
        assert_eq!(classify(29.99), Some(BmiVerdict::Obese));
    }

    #[test]
    fn test_classify_has_no_band_at_or_above_30() {
        assert_eq!(classify(30.0), None);
        assert_eq!(classify(31.0), None);
        assert_eq!(classify(55.0), None);
    }

    #[test]
    fn test_verdict_serializes_as_literal() {
        let json = serde_json::to_string(&BmiVerdict::Underweight).unwrap();
        assert_eq!(json, "\"Underweight\"");
    }
}
