//! Domain layer - Journal entries and the entry list

pub mod entry;
pub mod entry_list;
pub mod goals;
pub mod timestamp;

pub use entry::{Entry, EntryKind};
pub use entry_list::{EntryFilter, EntryList};
pub use goals::{GoalKind, Goals};
