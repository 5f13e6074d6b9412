//! Breast milk pumping sessions

use super::{split_timestamped, EntryKind};
use crate::domain::timestamp;
use crate::error::{MamaError, Result};
use chrono::NaiveDateTime;
use std::num::IntErrorKind;

/// Largest realistic volume for a single pumping session
pub const MAX_MILK_ML: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilkEntry {
    volume_ml: u32,
    description: String,
    timestamp: NaiveDateTime,
}

impl MilkEntry {
    /// Record a session happening now
    pub fn new(volume_ml: u32) -> Result<Self> {
        Self::with_timestamp(volume_ml, timestamp::now())
    }

    pub fn with_timestamp(volume_ml: u32, when: NaiveDateTime) -> Result<Self> {
        let volume_ml = validate_volume_ml(i64::from(volume_ml))?;
        Ok(MilkEntry {
            volume_ml,
            description: format!("{}ml", volume_ml),
            timestamp: when,
        })
    }

    /// Build from text such as `150` or `150ml`
    pub fn parse(input: &str) -> Result<Self> {
        Self::with_timestamp(parse_volume_ml(input)?, timestamp::now())
    }

    pub fn volume_ml(&self) -> u32 {
        self.volume_ml
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Parse `MILK|150ml|28/10/25 01:14`
    pub fn from_storage(line: &str) -> Result<Self> {
        let (payload, when) = split_timestamped(line, EntryKind::Milk)?;
        let volume = parse_volume_ml(payload)
            .map_err(|e| MamaError::Storage(format!("{} ({})", line, e)))?;
        Self::with_timestamp(volume, when)
    }
}

/// Parse a volume in ml, accepting an optional `ml` suffix.
///
/// Numbers are read as `i64` first so absurdly long input is reported as too
/// large instead of wrapping.
pub(crate) fn parse_volume_ml(input: &str) -> Result<u32> {
    let normalized = input.trim().to_lowercase();
    let digits = normalized
        .strip_suffix("ml")
        .unwrap_or(normalized.as_str())
        .trim();

    match digits.parse::<i64>() {
        Ok(value) => validate_volume_ml(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Err(too_large()),
            IntErrorKind::NegOverflow => Err(not_positive()),
            _ => Err(MamaError::Usage(
                "Volume must be an actual number! Example: 'milk 150'".to_string(),
            )),
        },
    }
}

pub(crate) fn validate_volume_ml(value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(not_positive());
    }
    if value > i64::from(MAX_MILK_ML) {
        return Err(too_large());
    }
    u32::try_from(value).map_err(|_| too_large())
}

fn not_positive() -> MamaError {
    MamaError::Command("Milk volume must be a positive number!".to_string())
}

fn too_large() -> MamaError {
    MamaError::Command(format!(
        "Milk volume too large! Please enter a realistic value (at most {} ml).",
        MAX_MILK_ML
    ))
}
