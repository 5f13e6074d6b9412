//! Error types for mama

use thiserror::Error;

/// Main error type for mama application
#[derive(Debug, Error)]
pub enum MamaError {
    /// Malformed or missing command arguments. Message already carries usage.
    #[error("{0}")]
    Usage(String),

    /// Command rejected before any mutation (out-of-range value or index)
    #[error("{0}")]
    Command(String),

    /// In-memory mutation succeeded but the data file could not be written
    #[error("{0}")]
    Persistence(String),

    #[error("Index {index} out of range (size={size})")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Invalid storage line: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MamaError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MamaError::Usage(_) => 2,
            MamaError::Command(_) => 3,
            MamaError::Persistence(_) => 4,
            MamaError::Internal(_) => 70,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MamaError::Internal(_) => {
                "Something went wrong internally; the command was not applied.\n\
                Please try again or restart mama."
                    .to_string()
            }
            MamaError::Storage(line) => {
                format!(
                    "Invalid storage line: {}\n\n\
                    Suggestions:\n\
                    • Lines must look like TYPE|payload|dd/mm/yy HH:MM\n\
                    • Weight lines carry no timestamp: WEIGHT|65.5",
                    line
                )
            }
            MamaError::Config(msg) => {
                if msg.contains("log level") {
                    format!(
                        "{}\n\n\
                        Valid log levels: off, error, warn, info, debug, trace\n\
                        Example: mama config log_level info",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MamaError
pub type Result<T> = std::result::Result<T, MamaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_errors_display_message_verbatim() {
        let err = MamaError::Command("Milk volume must be a positive number!".to_string());
        assert_eq!(err.to_string(), "Milk volume must be a positive number!");
        assert_eq!(err.display_with_suggestions(), err.to_string());
    }

    #[test]
    fn test_internal_error_hides_details() {
        let err = MamaError::Internal("shown position 4 missing from backing list".to_string());
        let msg = err.display_with_suggestions();
        assert!(!msg.contains("position 4"));
        assert!(msg.contains("not applied"));
    }

    #[test]
    fn test_storage_error_suggestions() {
        let err = MamaError::Storage("MILK|150ml".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("MILK|150ml"));
        assert!(msg.contains("WEIGHT|65.5"));
    }

    #[test]
    fn test_config_log_level_suggestions() {
        let err = MamaError::Config("Invalid log level: loud".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("off, error, warn, info, debug, trace"));
        assert!(msg.contains("mama config log_level info"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(MamaError::Usage("x".into()).exit_code(), 2);
        assert_eq!(MamaError::Command("x".into()).exit_code(), 3);
        assert_eq!(MamaError::Persistence("x".into()).exit_code(), 4);
        assert_eq!(MamaError::Config("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = MamaError::IndexOutOfRange { index: 5, size: 3 };
        assert_eq!(err.to_string(), "Index 5 out of range (size=3)");
    }
}
