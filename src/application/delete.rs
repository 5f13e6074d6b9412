//! Delete an entry from the shown list
//!
//! The index is 1-based and refers to the filtered (shown) view, not the full
//! backing list. Range checks happen at execution time against whatever the
//! user currently sees; failures include a numbered preview of that view.

use super::list_entries::render_shown;
use super::{persist, CommandResult};
use crate::domain::{Entry, EntryList};
use crate::error::{MamaError, Result};
use crate::infrastructure::EntryStorage;
use std::num::IntErrorKind;

pub const USAGE: &str = "Usage: delete INDEX\n\
    Deletes the entry at INDEX from the currently shown list.\n\
    • INDEX must be a positive whole number (1, 2, 3, ...).";

const EMPTY_VIEW: &str = "There are no items to delete. The shown list is empty.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    index: usize,
}

impl DeleteCommand {
    /// `index` is 1-based
    pub fn new(index: usize) -> Result<Self> {
        if index == 0 {
            return Err(MamaError::Usage(with_usage("Index must be greater than 0.")));
        }
        Ok(DeleteCommand { index })
    }

    /// Syntax checks only; bounds are checked against the shown view on execute
    pub fn from_input(args: &str) -> Result<Self> {
        let arg = args.trim();

        if arg.is_empty() {
            return Err(MamaError::Usage(with_usage("Missing index.")));
        }
        if !arg.chars().all(|c| c.is_ascii_digit()) {
            return Err(MamaError::Usage(with_usage(
                "Index must be a positive whole number.",
            )));
        }

        match arg.parse::<usize>() {
            Ok(index) => Self::new(index),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
                Err(MamaError::Usage(with_usage("Index is too large.")))
            }
            Err(_) => Err(MamaError::Usage(with_usage(
                "Index must be a positive whole number.",
            ))),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn execute(
        &self,
        list: &mut EntryList,
        storage: Option<&dyn EntryStorage>,
    ) -> Result<CommandResult> {
        self.check_bounds(list)?;

        let removed = self.remove_shown(list)?;

        let line = removed.to_list_line();
        if let Err(e) = persist(list, storage) {
            tracing::error!(index = self.index, "failed to persist after delete");
            return Err(match e {
                MamaError::Persistence(msg) => MamaError::Persistence(with_usage(&msg)),
                other => other,
            });
        }

        tracing::info!(index = self.index, entry = %line, "deleted entry from shown view");

        let mut feedback = format!("Deleted: {}", line);
        if removed.milk_volume_ml().is_some() {
            feedback.push('\n');
            feedback.push_str(&list.total_milk_line());
        }
        Ok(CommandResult::new(feedback))
    }

    /// Remove the shown entry. If the list reports the index out of range,
    /// re-check against the current view and retry once when it is valid again.
    fn remove_shown(&self, list: &mut EntryList) -> Result<Entry> {
        match list.delete_by_shown_index(self.index - 1) {
            Err(MamaError::IndexOutOfRange { .. }) => {
                tracing::info!(index = self.index, "delete index went out of range during execution");
                self.check_bounds(list)?;
                list.delete_by_shown_index(self.index - 1)
                    .map_err(|e| match e {
                        MamaError::IndexOutOfRange { .. } => self.out_of_bounds(list),
                        other => other,
                    })
            }
            result => result,
        }
    }

    fn check_bounds(&self, list: &EntryList) -> Result<()> {
        let shown_size = list.shown_size();

        if shown_size == 0 {
            tracing::info!("delete attempted on empty shown list");
            return Err(MamaError::Command(with_usage(EMPTY_VIEW)));
        }

        if self.index > shown_size {
            tracing::info!(
                index = self.index,
                size = shown_size,
                "delete index out of bounds (shown list)"
            );
            return Err(self.out_of_bounds(list));
        }

        Ok(())
    }

    fn out_of_bounds(&self, list: &EntryList) -> MamaError {
        let reason = format!(
            "Index {} is out of bounds (shown list). {}",
            self.index,
            valid_range(list.shown_size())
        );
        MamaError::Command(format!("{}\n{}", with_usage(&reason), render_shown(list)))
    }
}

fn valid_range(shown_size: usize) -> String {
    if shown_size == 1 {
        "Valid index: 1.".to_string()
    } else {
        format!("Valid range: 1..{}.", shown_size)
    }
}

fn with_usage(reason: &str) -> String {
    format!("{}\n{}", reason, USAGE)
}
