//! Record body measurements

use super::{persist, CommandResult};
use crate::domain::entry::MeasurementEntry;
use crate::domain::{Entry, EntryList};
use crate::error::{MamaError, Result};
use crate::infrastructure::EntryStorage;

pub const USAGE: &str = "measure waist/CM hips/CM [chest/CM] [thigh/CM] [arm/CM]\n  \
    Records body measurements in cm. Example: 'measure waist/70 hips/95'";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddMeasurementCommand {
    entry: MeasurementEntry,
}

impl AddMeasurementCommand {
    pub fn new(
        waist: u32,
        hips: u32,
        chest: Option<u32>,
        thigh: Option<u32>,
        arm: Option<u32>,
    ) -> Result<Self> {
        Ok(AddMeasurementCommand {
            entry: MeasurementEntry::new(waist, hips, chest, thigh, arm)?,
        })
    }

    /// Parse `waist/70 hips/95 chest/88`; `?` asks for usage
    pub fn from_input(args: &str) -> Result<Self> {
        let args = args.trim();
        if args.is_empty() || args == "?" {
            return Err(MamaError::Usage(format!("Usage: {}", USAGE)));
        }

        let (mut waist, mut hips, mut chest, mut thigh, mut arm) = (None, None, None, None, None);
        for token in args.split_whitespace() {
            let lowered = token.to_lowercase();
            let (field, value) = lowered.split_once('/').ok_or_else(|| {
                MamaError::Usage(format!("Unknown field: {}\nUsage: {}", token, USAGE))
            })?;

            let slot = match field {
                "waist" => &mut waist,
                "hips" => &mut hips,
                "chest" => &mut chest,
                "thigh" => &mut thigh,
                "arm" => &mut arm,
                _ => {
                    return Err(MamaError::Usage(format!(
                        "Unknown field: {}\nUsage: {}",
                        token, USAGE
                    )))
                }
            };

            let cm: u32 = value.parse().map_err(|_| {
                MamaError::Usage(format!("Invalid number format for: {}", token))
            })?;
            *slot = Some(cm);
        }

        match (waist, hips) {
            (Some(waist), Some(hips)) => Self::new(waist, hips, chest, thigh, arm),
            _ => Err(MamaError::Usage(format!(
                "Waist and hips are required.\nUsage: {}",
                USAGE
            ))),
        }
    }

    pub fn execute(
        &self,
        list: &mut EntryList,
        storage: Option<&dyn EntryStorage>,
    ) -> Result<CommandResult> {
        tracing::info!(measurements = self.entry.description(), "adding measurement entry");

        let entry = Entry::from(self.entry.clone());
        let line = entry.to_list_line();
        list.add(entry);
        persist(list, storage)?;

        Ok(CommandResult::new(format!("Added measurements: {}", line)))
    }
}
