//! Backing list of entries with a filtered "shown" view

use crate::domain::entry::{Entry, EntryKind};
use crate::domain::goals::Goals;
use crate::error::{MamaError, Result};
use std::fmt;

/// Predicate deciding which entries appear in the shown view
pub type EntryFilter = Box<dyn Fn(&Entry) -> bool>;

/// All journal entries in insertion order.
///
/// The shown view and the milk total are derived from `items` and are kept in
/// step by every mutator, so callers never touch `items` directly.
#[derive(Default)]
pub struct EntryList {
    items: Vec<Entry>,
    /// Positions into `items` that pass `filter`, ascending
    shown: Vec<usize>,
    filter: Option<EntryFilter>,
    total_milk_ml: u64,
    goals: Goals,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and refresh the derived state
    pub fn add(&mut self, entry: Entry) {
        if let Some(volume) = entry.milk_volume_ml() {
            self.total_milk_ml += u64::from(volume);
        }
        self.items.push(entry);
        self.recompute_shown();
    }

    /// Remove by position in the backing list
    pub fn delete_by_index(&mut self, index: usize) -> Result<Entry> {
        if index >= self.items.len() {
            return Err(MamaError::IndexOutOfRange {
                index,
                size: self.items.len(),
            });
        }

        let removed = self.items.remove(index);
        if let Some(volume) = removed.milk_volume_ml() {
            self.total_milk_ml = self.total_milk_ml.saturating_sub(u64::from(volume));
        }
        self.recompute_shown();
        Ok(removed)
    }

    /// Remove the entry the user sees at `shown_index` (0-based)
    pub fn delete_by_shown_index(&mut self, shown_index: usize) -> Result<Entry> {
        let position = *self
            .shown
            .get(shown_index)
            .ok_or(MamaError::IndexOutOfRange {
                index: shown_index,
                size: self.shown.len(),
            })?;

        if position >= self.items.len() {
            return Err(MamaError::Internal(format!(
                "shown entry {} not found in backing list (size={})",
                shown_index,
                self.items.len()
            )));
        }

        self.delete_by_index(position)
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.items.get(index)
    }

    /// Backing entries in insertion order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Entry> {
        self.items.iter()
    }

    pub fn shown_size(&self) -> usize {
        self.shown.len()
    }

    /// Entry at `index` (0-based) of the shown view
    pub fn get_shown(&self, index: usize) -> Result<&Entry> {
        self.shown
            .get(index)
            .and_then(|&position| self.items.get(position))
            .ok_or(MamaError::IndexOutOfRange {
                index,
                size: self.shown.len(),
            })
    }

    /// Shown entries in display order
    pub fn shown(&self) -> impl Iterator<Item = &Entry> {
        self.shown.iter().filter_map(|&position| self.items.get(position))
    }

    /// Replace the active filter and rebuild the shown view
    pub fn set_filter<F>(&mut self, predicate: F)
    where
        F: Fn(&Entry) -> bool + 'static,
    {
        self.filter = Some(Box::new(predicate));
        self.recompute_shown();
    }

    /// Show only entries of one kind
    pub fn set_kind_filter(&mut self, kind: EntryKind) {
        self.set_filter(move |entry| entry.kind() == kind);
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
        self.recompute_shown();
    }

    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    pub fn total_milk_ml(&self) -> u64 {
        self.total_milk_ml
    }

    pub fn total_milk_line(&self) -> String {
        format!("Total breast milk pumped: {}ml", self.total_milk_ml)
    }

    pub fn goals(&self) -> &Goals {
        &self.goals
    }

    /// Goals carry no derived state, so they are edited in place
    pub fn goals_mut(&mut self) -> &mut Goals {
        &mut self.goals
    }

    fn recompute_shown(&mut self) {
        let mut shown = Vec::with_capacity(self.items.len());
        for (position, entry) in self.items.iter().enumerate() {
            if self.filter.as_ref().map_or(true, |f| f(entry)) {
                shown.push(position);
            }
        }
        self.shown = shown;
    }
}

impl fmt::Debug for EntryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryList")
            .field("items", &self.items)
            .field("shown", &self.shown)
            .field("filtered", &self.filter.is_some())
            .field("total_milk_ml", &self.total_milk_ml)
            .field("goals", &self.goals)
            .finish()
    }
}
