//! Journal entries and their list / storage renderings

mod meal;
mod measurement;
mod milk;
mod weight;
mod workout;

pub use meal::{MealEntry, MAX_MEAL_CALORIES};
pub use measurement::{MeasurementEntry, MAX_MEASUREMENT_CM};
pub use milk::{MilkEntry, MAX_MILK_ML};
pub use weight::{round_to_two_decimals, WeightEntry, MAX_WEIGHT_KG};
pub use workout::{WorkoutEntry, MAX_FEEL, MAX_WORKOUT_MINUTES};

pub(crate) use milk::{parse_volume_ml, validate_volume_ml};
pub(crate) use weight::validate_weight_kg;

use crate::domain::timestamp;
use crate::error::{MamaError, Result};
use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;

/// Discriminator for the entry variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Milk,
    Weight,
    Workout,
    Meal,
    Measurement,
}

impl EntryKind {
    pub const ALL: [EntryKind; 5] = [
        EntryKind::Milk,
        EntryKind::Weight,
        EntryKind::Workout,
        EntryKind::Meal,
        EntryKind::Measurement,
    ];

    /// Tag used both in list lines and as the first storage field
    pub fn tag(&self) -> &'static str {
        match self {
            EntryKind::Milk => "MILK",
            EntryKind::Weight => "WEIGHT",
            EntryKind::Workout => "WORKOUT",
            EntryKind::Meal => "MEAL",
            EntryKind::Measurement => "MEASURE",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "milk" => Ok(EntryKind::Milk),
            "weight" => Ok(EntryKind::Weight),
            "workout" => Ok(EntryKind::Workout),
            "meal" => Ok(EntryKind::Meal),
            "measure" | "measurement" => Ok(EntryKind::Measurement),
            _ => Err(format!(
                "Unknown entry type: '{}'. Valid types are: milk, weight, workout, meal, measure",
                s.trim()
            )),
        }
    }
}

/// One journal record. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Milk(MilkEntry),
    Weight(WeightEntry),
    Workout(WorkoutEntry),
    Meal(MealEntry),
    Measurement(MeasurementEntry),
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Milk(_) => EntryKind::Milk,
            Entry::Weight(_) => EntryKind::Weight,
            Entry::Workout(_) => EntryKind::Workout,
            Entry::Meal(_) => EntryKind::Meal,
            Entry::Measurement(_) => EntryKind::Measurement,
        }
    }

    /// Payload formatted for display, e.g. `150ml` or `65.50kg`
    pub fn description(&self) -> &str {
        match self {
            Entry::Milk(e) => e.description(),
            Entry::Weight(e) => e.description(),
            Entry::Workout(e) => e.description(),
            Entry::Meal(e) => e.description(),
            Entry::Measurement(e) => e.description(),
        }
    }

    /// Weight entries carry no timestamp
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Entry::Milk(e) => Some(e.timestamp()),
            Entry::Weight(_) => None,
            Entry::Workout(e) => Some(e.timestamp()),
            Entry::Meal(e) => Some(e.timestamp()),
            Entry::Measurement(e) => Some(e.timestamp()),
        }
    }

    /// Human-facing line: `[TYPE] payload (timestamp)`
    pub fn to_list_line(&self) -> String {
        match self.timestamp() {
            Some(when) => format!(
                "[{}] {} ({})",
                self.kind(),
                self.description(),
                timestamp::format(&when)
            ),
            None => format!("[{}] {}", self.kind(), self.description()),
        }
    }

    /// Canonical storage line: `TYPE|payload|timestamp` or `TYPE|payload`
    pub fn to_storage_string(&self) -> String {
        match self {
            Entry::Weight(e) => e.to_storage_string(),
            _ => match self.timestamp() {
                Some(when) => format!(
                    "{}|{}|{}",
                    self.kind(),
                    self.description(),
                    timestamp::format(&when)
                ),
                None => format!("{}|{}", self.kind(), self.description()),
            },
        }
    }

    /// Rebuild an entry from its storage line, dispatching on the leading tag
    pub fn from_storage(line: &str) -> Result<Self> {
        let tag = line.split('|').next().unwrap_or_default().trim();

        match EntryKind::from_tag(tag) {
            Some(EntryKind::Milk) => MilkEntry::from_storage(line).map(Entry::Milk),
            Some(EntryKind::Weight) => WeightEntry::from_storage(line).map(Entry::Weight),
            Some(EntryKind::Workout) => WorkoutEntry::from_storage(line).map(Entry::Workout),
            Some(EntryKind::Meal) => MealEntry::from_storage(line).map(Entry::Meal),
            Some(EntryKind::Measurement) => {
                MeasurementEntry::from_storage(line).map(Entry::Measurement)
            }
            None => Err(MamaError::Storage(format!(
                "unknown entry type '{}' in line: {}",
                tag, line
            ))),
        }
    }

    /// Milk volume this entry contributes to the running total
    pub fn milk_volume_ml(&self) -> Option<u32> {
        match self {
            Entry::Milk(e) => Some(e.volume_ml()),
            _ => None,
        }
    }
}

impl From<MilkEntry> for Entry {
    fn from(entry: MilkEntry) -> Self {
        Entry::Milk(entry)
    }
}

impl From<WeightEntry> for Entry {
    fn from(entry: WeightEntry) -> Self {
        Entry::Weight(entry)
    }
}

impl From<WorkoutEntry> for Entry {
    fn from(entry: WorkoutEntry) -> Self {
        Entry::Workout(entry)
    }
}

impl From<MealEntry> for Entry {
    fn from(entry: MealEntry) -> Self {
        Entry::Meal(entry)
    }
}

impl From<MeasurementEntry> for Entry {
    fn from(entry: MeasurementEntry) -> Self {
        Entry::Measurement(entry)
    }
}

/// Free-text names end up inside one storage line, so the field separator and
/// line breaks are refused here rather than lost on the next load.
fn check_storable_name(name: &str, what: &str) -> Result<()> {
    if name.contains('|') {
        return Err(MamaError::Command(format!("{} name cannot contain '|'!", what)));
    }
    if name.contains(['\n', '\r']) {
        return Err(MamaError::Command(format!(
            "{} name must fit on one line!",
            what
        )));
    }
    Ok(())
}

/// Split a `TAG|payload|timestamp` line, checking field count and tag.
fn split_timestamped(line: &str, kind: EntryKind) -> Result<(&str, NaiveDateTime)> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() != 3 || parts[0] != kind.tag() {
        return Err(MamaError::Storage(format!(
            "Invalid {} entry line: {}",
            kind, line
        )));
    }

    let when = timestamp::parse(parts[2])?;
    Ok((parts[1], when))
}
