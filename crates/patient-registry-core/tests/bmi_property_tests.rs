//! Property tests for the BMI formula and classification bands.

use patient_registry_core::models::{classify, compute_bmi, BmiVerdict};
use proptest::prelude::*;

proptest! {
    #[test]
    fn bmi_matches_rounded_formula(height in 30.0f64..250.0, weight in 1.0f64..500.0) {
        let meters = height / 100.0;
        let expected = (weight / (meters * meters) * 100.0).round() / 100.0;
        prop_assert_eq!(compute_bmi(height, weight), expected);
    }

    #[test]
    fn bmi_is_deterministic(height in 30.0f64..250.0, weight in 1.0f64..500.0) {
        prop_assert_eq!(compute_bmi(height, weight), compute_bmi(height, weight));
    }

    #[test]
    fn classification_covers_exactly_the_defined_bands(bmi in 1.0f64..60.0) {
        let verdict = classify(bmi);
        if bmi < 18.5 {
            prop_assert_eq!(verdict, Some(BmiVerdict::Underweight));
        } else if bmi < 25.0 {
            prop_assert_eq!(verdict, Some(BmiVerdict::Normal));
        } else if bmi < 30.0 {
            prop_assert_eq!(verdict, Some(BmiVerdict::Obese));
        } else {
            prop_assert_eq!(verdict, None);
        }
    }
}
