//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod storage;

pub use config::Config;
pub use storage::{EntryStorage, FileStorage};
