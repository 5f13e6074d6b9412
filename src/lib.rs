//! mama - Terminal maternal health journal
//!
//! Records milk pumping sessions, weight, workouts, meals and body
//! measurements into a flat text file, one command at a time.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MamaError;
