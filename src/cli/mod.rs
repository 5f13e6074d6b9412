//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{Cli, Commands};
pub use output::{format_config, format_feedback, format_welcome};
pub use parser::parse;
