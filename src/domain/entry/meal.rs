//! Meals with their calorie count

use super::{check_storable_name, split_timestamped, EntryKind};
use crate::domain::timestamp;
use crate::error::{MamaError, Result};
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::OnceLock;

pub const MAX_MEAL_CALORIES: u32 = 10_000;

fn description_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(?P<name>.+) \((?P<calories>\d+)kcal\)$").unwrap())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealEntry {
    name: String,
    calories: u32,
    description: String,
    timestamp: NaiveDateTime,
}

impl MealEntry {
    pub fn new(name: &str, calories: u32) -> Result<Self> {
        Self::with_timestamp(name, calories, timestamp::now())
    }

    pub fn with_timestamp(name: &str, calories: u32, when: NaiveDateTime) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MamaError::Command("Meal name cannot be empty!".to_string()));
        }
        check_storable_name(name, "Meal")?;
        if calories == 0 || calories > MAX_MEAL_CALORIES {
            return Err(MamaError::Command(format!(
                "Calories must be between 1 and {}!",
                MAX_MEAL_CALORIES
            )));
        }

        Ok(MealEntry {
            name: name.to_string(),
            calories,
            description: format!("{} ({}kcal)", name, calories),
            timestamp: when,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn calories(&self) -> u32 {
        self.calories
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Parse `MEAL|chicken rice (550kcal)|28/10/25 12:30`
    pub fn from_storage(line: &str) -> Result<Self> {
        let (payload, when) = split_timestamped(line, EntryKind::Meal)?;
        let invalid = || MamaError::Storage(format!("Invalid MEAL entry line: {}", line));

        let caps = description_regex().captures(payload).ok_or_else(invalid)?;
        let calories: u32 = caps["calories"].parse().map_err(|_| invalid())?;

        Self::with_timestamp(&caps["name"], calories, when).map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description() {
        let entry = MealEntry::new("chicken rice", 550).unwrap();
        assert_eq!(entry.description(), "chicken rice (550kcal)");
        assert_eq!(entry.calories(), 550);
    }

    #[test]
    fn test_validation() {
        assert!(MealEntry::new("", 550).is_err());
        assert!(MealEntry::new("toast", 0).is_err());
        assert!(MealEntry::new("toast", 10_001).is_err());
        assert!(MealEntry::new("feast", 10_000).is_ok());
    }

    #[test]
    fn test_from_storage() {
        let entry = MealEntry::from_storage("MEAL|oat porridge (320kcal)|29/10/25 08:05").unwrap();
        assert_eq!(entry.name(), "oat porridge");
        assert_eq!(entry.calories(), 320);
        assert_eq!(timestamp::format(&entry.timestamp()), "29/10/25 08:05");
    }

    #[test]
    fn test_from_storage_rejects_bad_payload() {
        assert!(MealEntry::from_storage("MEAL|oat porridge|29/10/25 08:05").is_err());
        assert!(MealEntry::from_storage("MEAL|oat porridge (0kcal)|29/10/25 08:05").is_err());
        assert!(MealEntry::from_storage("MEAL|(320kcal)|29/10/25 08:05").is_err());
    }
}
