//! Show entries, optionally filtered by type

use super::CommandResult;
use crate::domain::{EntryKind, EntryList};
use crate::error::{MamaError, Result};
use std::str::FromStr;

pub const USAGE: &str = "list [milk|weight|workout|meal|measure]\n  \
    Shows all entries, or only one type. Indices shown are the ones 'delete' uses.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand {
    kind: Option<EntryKind>,
}

impl ListCommand {
    pub fn new(kind: Option<EntryKind>) -> Self {
        ListCommand { kind }
    }

    pub fn from_input(args: &str) -> Result<Self> {
        let args = args.trim();
        if args.is_empty() {
            return Ok(Self::new(None));
        }

        EntryKind::from_str(args)
            .map(|kind| Self::new(Some(kind)))
            .map_err(|e| MamaError::Usage(format!("{}\nUsage: {}", e, USAGE)))
    }

    pub fn kind(&self) -> Option<EntryKind> {
        self.kind
    }

    /// Set (or clear) the filter, then render the resulting shown view
    pub fn execute(&self, list: &mut EntryList) -> Result<CommandResult> {
        match self.kind {
            Some(kind) => list.set_kind_filter(kind),
            None => list.clear_filter(),
        }
        tracing::debug!(kind = ?self.kind, shown = list.shown_size(), "listing entries");

        let mut feedback = render_shown(list);
        if self.kind == Some(EntryKind::Milk) {
            feedback.push('\n');
            feedback.push_str(&list.total_milk_line());
        }
        Ok(CommandResult::new(feedback))
    }
}

/// Numbered rendering of the shown view, exactly as the user sees it
pub fn render_shown(list: &EntryList) -> String {
    if list.shown_size() == 0 {
        return "Here are your entries:\n(none)".to_string();
    }

    let mut output = String::from("Here are your entries:");
    for (i, entry) in list.shown().enumerate() {
        output.push_str(&format!("\n{}. {}", i + 1, entry.to_list_line()));
    }
    output
}
