//! Sort engine over raw stored records.
//!
//! Sorting never materializes full patients: keys are read straight from
//! the raw stored values so a partially corrupt record cannot fail a
//! read-only listing. The one computed key is `bmi`, derived from the raw
//! `height`/`weight` fields when both are usable.

use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

use crate::models::compute_bmi;
use crate::store::RecordMap;

/// Rejected sort parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("invalid sort field '{0}'; valid fields are: height, weight, bmi")]
    InvalidField(String),

    #[error("invalid sort order '{0}'; use 'asc' or 'desc'")]
    InvalidOrder(String),
}

/// Allow-listed sortable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Height,
    Weight,
    Bmi,
}

impl FromStr for SortField {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "height" => Ok(SortField::Height),
            "weight" => Ok(SortField::Weight),
            "bmi" => Ok(SortField::Bmi),
            other => Err(SortError::InvalidField(other.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(SortError::InvalidOrder(other.to_string())),
        }
    }
}

impl SortField {
    /// Numeric sort key for a raw record. Missing or non-numeric data
    /// keys as 0 rather than failing the sort.
    fn key(&self, record: &Value) -> f64 {
        match self {
            SortField::Height => number_field(record, "height"),
            SortField::Weight => number_field(record, "weight"),
            SortField::Bmi => {
                let height = number_field(record, "height");
                let weight = number_field(record, "weight");
                if height > 0.0 && weight > 0.0 {
                    compute_bmi(height, weight)
                } else {
                    0.0
                }
            }
        }
    }
}

fn number_field(record: &Value, field: &str) -> f64 {
    record
        .get(field)
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Stable sort of the full record values by the chosen field.
pub fn sort_records(records: &RecordMap, field: SortField, order: SortOrder) -> Vec<Value> {
    let mut keyed: Vec<(f64, &Value)> = records
        .values()
        .map(|record| (field.key(record), record))
        .collect();
    keyed.sort_by(|a, b| {
        let ordering = a.0.total_cmp(&b.0);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    keyed.into_iter().map(|(_, record)| record.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(entries: &[(&str, Value)]) -> RecordMap {
        entries
            .iter()
            .map(|(id, value)| (id.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_parse_sort_field() {
        assert_eq!("bmi".parse::<SortField>(), Ok(SortField::Bmi));
        assert_eq!(
            "name".parse::<SortField>(),
            Err(SortError::InvalidField("name".to_string()))
        );
    }

    #[test]
    fn test_parse_sort_order() {
        assert_eq!("desc".parse::<SortOrder>(), Ok(SortOrder::Desc));
        assert_eq!(
            "up".parse::<SortOrder>(),
            Err(SortError::InvalidOrder("up".to_string()))
        );
    }

    #[test]
    fn test_sort_by_height() {
        let map = records(&[
            ("a", json!({"name": "A", "height": 180.0})),
            ("b", json!({"name": "B", "height": 160.0})),
        ]);
        let sorted = sort_records(&map, SortField::Height, SortOrder::Asc);
        assert_eq!(sorted[0]["name"], "B");
        assert_eq!(sorted[1]["name"], "A");
    }

    #[test]
    fn test_sort_by_bmi_uses_computed_value() {
        // A: bmi 30.0, B: bmi 18.0
        let map = records(&[
            ("a", json!({"name": "A", "height": 100.0, "weight": 30.0})),
            ("b", json!({"name": "B", "height": 100.0, "weight": 18.0})),
        ]);

        let desc = sort_records(&map, SortField::Bmi, SortOrder::Desc);
        assert_eq!(desc[0]["name"], "A");
        assert_eq!(desc[1]["name"], "B");

        let asc = sort_records(&map, SortField::Bmi, SortOrder::Asc);
        assert_eq!(asc[0]["name"], "B");
        assert_eq!(asc[1]["name"], "A");
    }

    #[test]
    fn test_corrupt_records_key_as_zero() {
        let map = records(&[
            ("a", json!({"name": "A", "height": 170.0, "weight": 70.0})),
            ("b", json!({"name": "B", "height": "tall"})),
            ("c", json!(42)),
        ]);
        let sorted = sort_records(&map, SortField::Bmi, SortOrder::Asc);
        assert_eq!(sorted.len(), 3);
        assert_eq!(sorted[2]["name"], "A");
    }

    #[test]
    fn test_equal_keys_keep_stable_order() {
        let map = records(&[
            ("a", json!({"name": "A", "weight": 70.0})),
            ("b", json!({"name": "B", "weight": 70.0})),
            ("c", json!({"name": "C", "weight": 70.0})),
        ]);
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let sorted = sort_records(&map, SortField::Weight, order);
            let names: Vec<_> = sorted.iter().map(|r| r["name"].clone()).collect();
            assert_eq!(names, vec![json!("A"), json!("B"), json!("C")]);
        }
    }
}
