//! Body measurements in centimetres

use super::{split_timestamped, EntryKind};
use crate::domain::timestamp;
use crate::error::{MamaError, Result};
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::OnceLock;

pub const MAX_MEASUREMENT_CM: u32 = 300;

/// Matches one `name=NNcm` field of a stored description
fn field_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(?P<field>[a-z]+)=(?P<cm>\d+)cm$").unwrap())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementEntry {
    waist: u32,
    hips: u32,
    chest: Option<u32>,
    thigh: Option<u32>,
    arm: Option<u32>,
    description: String,
    timestamp: NaiveDateTime,
}

impl MeasurementEntry {
    pub fn new(
        waist: u32,
        hips: u32,
        chest: Option<u32>,
        thigh: Option<u32>,
        arm: Option<u32>,
    ) -> Result<Self> {
        Self::with_timestamp(waist, hips, chest, thigh, arm, timestamp::now())
    }

    pub fn with_timestamp(
        waist: u32,
        hips: u32,
        chest: Option<u32>,
        thigh: Option<u32>,
        arm: Option<u32>,
        when: NaiveDateTime,
    ) -> Result<Self> {
        let fields = [
            ("waist", Some(waist)),
            ("hips", Some(hips)),
            ("chest", chest),
            ("thigh", thigh),
            ("arm", arm),
        ];

        let mut parts = Vec::new();
        for (field, value) in fields {
            if let Some(cm) = value {
                if cm == 0 || cm > MAX_MEASUREMENT_CM {
                    return Err(MamaError::Command(format!(
                        "{} must be between 1 and {} cm!",
                        field, MAX_MEASUREMENT_CM
                    )));
                }
                parts.push(format!("{}={}cm", field, cm));
            }
        }

        Ok(MeasurementEntry {
            waist,
            hips,
            chest,
            thigh,
            arm,
            description: parts.join(", "),
            timestamp: when,
        })
    }

    pub fn waist(&self) -> u32 {
        self.waist
    }

    pub fn hips(&self) -> u32 {
        self.hips
    }

    pub fn chest(&self) -> Option<u32> {
        self.chest
    }

    pub fn thigh(&self) -> Option<u32> {
        self.thigh
    }

    pub fn arm(&self) -> Option<u32> {
        self.arm
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Parse `MEASURE|waist=70cm, hips=95cm|28/10/25 09:00`
    pub fn from_storage(line: &str) -> Result<Self> {
        let (payload, when) = split_timestamped(line, EntryKind::Measurement)?;
        let invalid = || MamaError::Storage(format!("Invalid MEASURE entry line: {}", line));

        let (mut waist, mut hips, mut chest, mut thigh, mut arm) = (None, None, None, None, None);
        for part in payload.split(", ") {
            let caps = field_regex().captures(part.trim()).ok_or_else(invalid)?;
            let cm: u32 = caps["cm"].parse().map_err(|_| invalid())?;
            let slot = match &caps["field"] {
                "waist" => &mut waist,
                "hips" => &mut hips,
                "chest" => &mut chest,
                "thigh" => &mut thigh,
                "arm" => &mut arm,
                _ => return Err(invalid()),
            };
            *slot = Some(cm);
        }

        match (waist, hips) {
            (Some(waist), Some(hips)) => {
                Self::with_timestamp(waist, hips, chest, thigh, arm, when).map_err(|_| invalid())
            }
            _ => Err(invalid()),
        }
    }
}
