//! Body weight readings

use super::EntryKind;
use crate::error::{MamaError, Result};

/// Heaviest weight accepted as a realistic reading
pub const MAX_WEIGHT_KG: f64 = 500.0;

#[derive(Debug, Clone, PartialEq)]
pub struct WeightEntry {
    weight_kg: f64,
    description: String,
}

impl WeightEntry {
    /// Weight in kg, kept at two decimal places. Must be positive.
    pub fn new(weight_kg: f64) -> Result<Self> {
        Ok(Self::from_rounded(validate_weight_kg(weight_kg)?))
    }

    /// Placeholder used when a stored weight cannot be read back
    fn zero() -> Self {
        Self::from_rounded(0.0)
    }

    fn from_rounded(weight_kg: f64) -> Self {
        WeightEntry {
            weight_kg,
            description: format!("{:.2}kg", weight_kg),
        }
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// `WEIGHT|65.5`
    pub fn to_storage_string(&self) -> String {
        format!("{}|{}", EntryKind::Weight, self.weight_kg)
    }

    /// Parse `WEIGHT|65.5` (a `kg` suffix is tolerated).
    ///
    /// An unreadable value does not fail the load: it is logged and replaced
    /// with a `0.00kg` entry.
    pub fn from_storage(line: &str) -> Result<Self> {
        let mut parts = line.splitn(2, '|');
        if parts.next() != Some(EntryKind::Weight.tag()) {
            return Err(MamaError::Storage(format!(
                "Invalid {} entry line: {}",
                EntryKind::Weight,
                line
            )));
        }

        let raw = parts.next().unwrap_or("0.0").trim();
        let number = raw.strip_suffix("kg").unwrap_or(raw).trim();

        match number.parse::<f64>() {
            Ok(value) if value == 0.0 => Ok(Self::zero()),
            Ok(value) => Ok(Self::new(value).unwrap_or_else(|_| {
                tracing::warn!("Invalid weight '{}' in storage, using 0.00kg", raw);
                Self::zero()
            })),
            Err(_) => {
                tracing::warn!("Invalid weight '{}' in storage, using 0.00kg", raw);
                Ok(Self::zero())
            }
        }
    }
}

/// Round to two decimals and check the result.
///
/// The bound is checked on the raw value so huge inputs never round to
/// infinity; positivity is checked after rounding so `0.001` is rejected.
pub(crate) fn validate_weight_kg(weight_kg: f64) -> Result<f64> {
    if weight_kg.is_nan() {
        return Err(MamaError::Usage(
            "Weight must be a number. Try 'weight 65.5'".to_string(),
        ));
    }
    if weight_kg > MAX_WEIGHT_KG {
        return Err(MamaError::Command(format!(
            "Weight too large! Please enter a realistic value (at most {} kg).",
            MAX_WEIGHT_KG
        )));
    }

    let rounded = round_to_two_decimals(weight_kg);
    if !rounded.is_finite() || rounded <= 0.0 {
        return Err(MamaError::Command(
            "Weight must be greater than 0!".to_string(),
        ));
    }
    Ok(rounded)
}

/// Round half up at two decimal places
pub fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_has_two_decimals() {
        assert_eq!(WeightEntry::new(65.5).unwrap().description(), "65.50kg");
        assert_eq!(WeightEntry::new(70.0).unwrap().description(), "70.00kg");
        assert_eq!(WeightEntry::new(70.126).unwrap().description(), "70.13kg");
        assert_eq!(WeightEntry::new(70.124).unwrap().description(), "70.12kg");
    }

    #[test]
    fn test_half_rounding_is_stable() {
        let entry = WeightEntry::new(65.505).unwrap();
        assert!(
            entry.description() == "65.51kg" || entry.description() == "65.50kg",
            "{}",
            entry.description()
        );
        // Re-reading the rounded value never moves it again
        let again = WeightEntry::new(entry.weight_kg()).unwrap();
        assert_eq!(again.description(), entry.description());
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(WeightEntry::new(0.0).is_err());
        assert!(WeightEntry::new(-3.0).is_err());
        assert!(WeightEntry::new(f64::NAN).is_err());
        assert!(WeightEntry::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_rejects_values_that_round_to_zero() {
        let err = WeightEntry::new(0.001).unwrap_err();
        assert_eq!(err.to_string(), "Weight must be greater than 0!");
        assert_eq!(WeightEntry::new(0.005).unwrap().description(), "0.01kg");
    }

    #[test]
    fn test_rejects_unrealistic_weight() {
        assert_eq!(WeightEntry::new(500.0).unwrap().description(), "500.00kg");

        for value in [500.01, 1e300, 1e307, f64::MAX] {
            let err = WeightEntry::new(value).unwrap_err();
            assert!(err.to_string().contains("too large"), "{}: {}", value, err);
        }
    }

    #[test]
    fn test_storage_round_trip() {
        let entry = WeightEntry::new(65.5).unwrap();
        assert_eq!(entry.to_storage_string(), "WEIGHT|65.5");
        let restored = WeightEntry::from_storage(&entry.to_storage_string()).unwrap();
        assert_eq!(restored, entry);
    }

    #[test]
    fn test_from_storage_accepts_suffix() {
        let entry = WeightEntry::from_storage("WEIGHT|65.50kg").unwrap();
        assert_eq!(entry.description(), "65.50kg");
    }

    #[test]
    fn test_from_storage_recovers_with_zero() {
        let entry = WeightEntry::from_storage("WEIGHT|heavy").unwrap();
        assert_eq!(entry.description(), "0.00kg");

        let entry = WeightEntry::from_storage("WEIGHT").unwrap();
        assert_eq!(entry.description(), "0.00kg");

        let entry = WeightEntry::from_storage("WEIGHT|-4").unwrap();
        assert_eq!(entry.description(), "0.00kg");

        let entry = WeightEntry::from_storage("WEIGHT|1e300").unwrap();
        assert_eq!(entry.description(), "0.00kg");
    }

    #[test]
    fn test_from_storage_wrong_tag() {
        assert!(WeightEntry::from_storage("MILK|65.5").is_err());
    }
}
