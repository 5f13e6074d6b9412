//! Record a meal

use super::{persist, CommandResult};
use crate::domain::entry::MealEntry;
use crate::domain::{Entry, EntryList};
use crate::error::{MamaError, Result};
use crate::infrastructure::EntryStorage;
use regex::Regex;
use std::sync::OnceLock;

pub const USAGE: &str =
    "meal NAME /cal CALORIES\n  Records a meal. Example: 'meal chicken rice /cal 550'";

fn input_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(?P<name>.+?)\s+/cal\s+(?P<calories>\S+)$").unwrap())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddMealCommand {
    entry: MealEntry,
}

impl AddMealCommand {
    pub fn new(name: &str, calories: u32) -> Result<Self> {
        Ok(AddMealCommand {
            entry: MealEntry::new(name, calories)?,
        })
    }

    pub fn from_input(args: &str) -> Result<Self> {
        let caps = input_regex()
            .captures(args.trim())
            .ok_or_else(|| MamaError::Usage(format!("Invalid meal format.\nUsage: {}", USAGE)))?;

        let calories: u32 = caps["calories"].parse().map_err(|_| {
            MamaError::Usage("Calories must be a positive whole number!".to_string())
        })?;

        Self::new(&caps["name"], calories)
    }

    pub fn execute(
        &self,
        list: &mut EntryList,
        storage: Option<&dyn EntryStorage>,
    ) -> Result<CommandResult> {
        tracing::info!(calories = self.entry.calories(), "adding meal entry");

        let entry = Entry::from(self.entry.clone());
        let line = entry.to_list_line();
        list.add(entry);
        persist(list, storage)?;

        Ok(CommandResult::new(format!("Added meal: {}", line)))
    }
}
