//! Record a workout

use super::{persist, CommandResult};
use crate::domain::entry::WorkoutEntry;
use crate::domain::{Entry, EntryList};
use crate::error::{MamaError, Result};
use crate::infrastructure::EntryStorage;
use regex::Regex;
use std::sync::OnceLock;

pub const USAGE: &str =
    "workout NAME /dur MINUTES /feel 1-5\n  Records a workout. Example: 'workout yoga /dur 30 /feel 4'";

fn input_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^(?P<name>.+?)\s+/dur\s+(?P<minutes>\S+)\s+/feel\s+(?P<feel>\S+)$").unwrap()
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddWorkoutCommand {
    entry: WorkoutEntry,
}

impl AddWorkoutCommand {
    pub fn new(name: &str, minutes: u32, feel: u8) -> Result<Self> {
        Ok(AddWorkoutCommand {
            entry: WorkoutEntry::new(name, minutes, feel)?,
        })
    }

    pub fn from_input(args: &str) -> Result<Self> {
        let caps = input_regex().captures(args.trim()).ok_or_else(|| {
            MamaError::Usage(format!("Invalid workout format.\nUsage: {}", USAGE))
        })?;

        let minutes: u32 = caps["minutes"].parse().map_err(|_| {
            MamaError::Usage("Workout duration must be a whole number of minutes!".to_string())
        })?;
        let feel: u8 = caps["feel"].parse().map_err(|_| {
            MamaError::Usage("Feel rating must be a whole number from 1 to 5!".to_string())
        })?;

        Self::new(&caps["name"], minutes, feel)
    }

    pub fn execute(
        &self,
        list: &mut EntryList,
        storage: Option<&dyn EntryStorage>,
    ) -> Result<CommandResult> {
        tracing::info!(
            name = self.entry.name(),
            minutes = self.entry.minutes(),
            "adding workout entry"
        );

        let entry = Entry::from(self.entry.clone());
        let line = entry.to_list_line();
        list.add(entry);
        persist(list, storage)?;

        Ok(CommandResult::new(format!("Added workout: {}", line)))
    }
}
