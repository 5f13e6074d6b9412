//! Output formatting utilities

use crate::infrastructure::Config;

const DIVIDER: &str = "________________________________________________________________";

pub fn format_welcome() -> String {
    format!(
        "{}\nHello from mama! Your maternal health journal.\n\
        Type 'help' to see what you can record.\n{}",
        DIVIDER, DIVIDER
    )
}

/// Frame command feedback (or an error message) between dividers
pub fn format_feedback(message: &str) -> String {
    format!("{}\n{}\n{}", DIVIDER, message.trim_end(), DIVIDER)
}

/// Format config values one `key = value` per line
pub fn format_config(config: &Config) -> String {
    format!(
        "data_file = {}\nlog_level = {}",
        config.data_file.display(),
        config.log_level
    )
}
