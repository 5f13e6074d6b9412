//! Record a body weight reading

use super::{persist, CommandResult};
use crate::domain::entry::{validate_weight_kg, WeightEntry};
use crate::domain::{Entry, EntryList};
use crate::error::{MamaError, Result};
use crate::infrastructure::EntryStorage;

pub const USAGE: &str = "weight KG\n  Records your weight in kg. Example: 'weight 65.5'";

#[derive(Debug, Clone, PartialEq)]
pub struct AddWeightCommand {
    weight_kg: f64,
}

impl AddWeightCommand {
    /// Rounded to two decimals here so every later read sees the same value.
    /// The rounded weight must be above zero and at most `MAX_WEIGHT_KG`.
    pub fn new(weight_kg: f64) -> Result<Self> {
        Ok(AddWeightCommand {
            weight_kg: validate_weight_kg(weight_kg)?,
        })
    }

    pub fn from_input(args: &str) -> Result<Self> {
        let normalized = args.trim().to_lowercase();
        let number = normalized
            .strip_suffix("kg")
            .unwrap_or(normalized.as_str())
            .trim();

        let weight_kg: f64 = number.parse().map_err(|_| {
            MamaError::Usage("Weight must be a number. Try 'weight 65.5'".to_string())
        })?;

        Self::new(weight_kg)
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn execute(
        &self,
        list: &mut EntryList,
        storage: Option<&dyn EntryStorage>,
    ) -> Result<CommandResult> {
        tracing::info!(weight_kg = self.weight_kg, "adding weight entry");

        let entry = Entry::from(WeightEntry::new(self.weight_kg)?);
        let line = entry.to_list_line();
        list.add(entry);
        persist(list, storage)?;

        Ok(CommandResult::new(format!("Added new weight entry: {}", line)))
    }
}
