//! Record a pumping session

use super::{persist, CommandResult};
use crate::domain::entry::{parse_volume_ml, validate_volume_ml, MilkEntry};
use crate::domain::{Entry, EntryList};
use crate::error::{MamaError, Result};
use crate::infrastructure::EntryStorage;

pub const USAGE: &str = "milk VOLUME\n  Records a pumping session of VOLUME ml (1-1000). Example: 'milk 120'";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddMilkCommand {
    volume_ml: u32,
}

impl AddMilkCommand {
    pub fn new(volume_ml: i64) -> Result<Self> {
        Ok(AddMilkCommand {
            volume_ml: validate_volume_ml(volume_ml)?,
        })
    }

    /// Parse the text after the `milk` keyword
    pub fn from_input(args: &str) -> Result<Self> {
        let args = args.trim();
        if args.is_empty() {
            return Err(MamaError::Usage(
                "Please specify the milk volume in ml. Example: 'milk 120'".to_string(),
            ));
        }

        Ok(AddMilkCommand {
            volume_ml: parse_volume_ml(args)?,
        })
    }

    pub fn volume_ml(&self) -> u32 {
        self.volume_ml
    }

    pub fn execute(
        &self,
        list: &mut EntryList,
        storage: Option<&dyn EntryStorage>,
    ) -> Result<CommandResult> {
        tracing::info!(volume_ml = self.volume_ml, "adding milk entry");

        let entry = Entry::from(MilkEntry::new(self.volume_ml)?);
        let line = entry.to_list_line();
        list.add(entry);
        persist(list, storage)?;

        Ok(CommandResult::new(format!(
            "Breast Milk Pumped: {}\n{}",
            line,
            list.total_milk_line()
        )))
    }
}
