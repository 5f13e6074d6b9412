//! Workout sessions

use super::{check_storable_name, split_timestamped, EntryKind};
use crate::domain::timestamp;
use crate::error::{MamaError, Result};
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::OnceLock;

pub const MAX_WORKOUT_MINUTES: u32 = 1440;
pub const MAX_FEEL: u8 = 5;

/// Matches descriptions such as `Run (30 mins, feel 4/5)`
fn description_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^(?P<name>.+) \((?P<minutes>\d+) mins, feel (?P<feel>\d+)/5\)$").unwrap()
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutEntry {
    name: String,
    minutes: u32,
    feel: u8,
    description: String,
    timestamp: NaiveDateTime,
}

impl WorkoutEntry {
    pub fn new(name: &str, minutes: u32, feel: u8) -> Result<Self> {
        Self::with_timestamp(name, minutes, feel, timestamp::now())
    }

    pub fn with_timestamp(name: &str, minutes: u32, feel: u8, when: NaiveDateTime) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MamaError::Command(
                "Workout name cannot be empty!".to_string(),
            ));
        }
        check_storable_name(name, "Workout")?;
        if minutes == 0 || minutes > MAX_WORKOUT_MINUTES {
            return Err(MamaError::Command(format!(
                "Workout duration must be between 1 and {} minutes!",
                MAX_WORKOUT_MINUTES
            )));
        }
        if feel == 0 || feel > MAX_FEEL {
            return Err(MamaError::Command(format!(
                "Feel rating must be between 1 and {}!",
                MAX_FEEL
            )));
        }

        Ok(WorkoutEntry {
            name: name.to_string(),
            minutes,
            feel,
            description: format!("{} ({} mins, feel {}/{})", name, minutes, feel, MAX_FEEL),
            timestamp: when,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn feel(&self) -> u8 {
        self.feel
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Parse `WORKOUT|Run (30 mins, feel 4/5)|28/10/25 01:14`
    pub fn from_storage(line: &str) -> Result<Self> {
        let (payload, when) = split_timestamped(line, EntryKind::Workout)?;
        let invalid = || MamaError::Storage(format!("Invalid WORKOUT entry line: {}", line));

        let caps = description_regex().captures(payload).ok_or_else(invalid)?;
        let minutes: u32 = caps["minutes"].parse().map_err(|_| invalid())?;
        let feel: u8 = caps["feel"].parse().map_err(|_| invalid())?;

        Self::with_timestamp(&caps["name"], minutes, feel, when).map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description() {
        let entry = WorkoutEntry::new("Swim", 30, 3).unwrap();
        assert_eq!(entry.description(), "Swim (30 mins, feel 3/5)");
    }

    #[test]
    fn test_validation() {
        assert!(WorkoutEntry::new("  ", 30, 3).is_err());
        assert!(WorkoutEntry::new("Run", 0, 3).is_err());
        assert!(WorkoutEntry::new("Run", 1441, 3).is_err());
        assert!(WorkoutEntry::new("Run", 1440, 3).is_ok());
        assert!(WorkoutEntry::new("Run", 30, 0).is_err());
        assert!(WorkoutEntry::new("Run", 30, 6).is_err());
    }

    #[test]
    fn test_from_storage_name_with_parentheses() {
        let entry =
            WorkoutEntry::from_storage("WORKOUT|Yoga (gentle) (45 mins, feel 5/5)|28/10/25 07:30")
                .unwrap();
        assert_eq!(entry.name(), "Yoga (gentle)");
        assert_eq!(entry.minutes(), 45);
        assert_eq!(entry.feel(), 5);
    }

    #[test]
    fn test_from_storage_rejects_bad_payload() {
        assert!(WorkoutEntry::from_storage("WORKOUT|Run|28/10/25 07:30").is_err());
        assert!(
            WorkoutEntry::from_storage("WORKOUT|Run (30 mins, feel 9/5)|28/10/25 07:30").is_err()
        );
        assert!(WorkoutEntry::from_storage("WORKOUT|Run (30 mins, feel 4/5)").is_err());
    }
}
