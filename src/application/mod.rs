//! Application layer - Journal commands and their execution
//!
//! Every user action is one [`Command`] variant. Commands are built either from
//! typed arguments (validated on construction) or from the raw argument text
//! via `from_input`, and then executed against an [`EntryList`] and an optional
//! [`EntryStorage`]. Passing `None` for storage executes without persisting.

pub mod add_meal;
pub mod add_measurement;
pub mod add_milk;
pub mod add_weight;
pub mod add_workout;
pub mod dashboard;
pub mod delete;
pub mod goal;
pub mod help;
pub mod list_entries;
pub mod manage_config;

pub use add_meal::AddMealCommand;
pub use add_measurement::AddMeasurementCommand;
pub use add_milk::AddMilkCommand;
pub use add_weight::AddWeightCommand;
pub use add_workout::AddWorkoutCommand;
pub use delete::DeleteCommand;
pub use goal::GoalCommand;
pub use list_entries::ListCommand;
pub use manage_config::ConfigService;

use crate::domain::EntryList;
use crate::error::{MamaError, Result};
use crate::infrastructure::EntryStorage;

pub const SAVE_FAILED: &str =
    "Failed to save updated data to disk. Please check your file permissions or try again.";

const GOODBYE: &str = "Bye. Hope to see you again soon!";

/// Feedback for the user plus whether the program should stop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback: String,
    exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        CommandResult {
            feedback: feedback.into(),
            exit: false,
        }
    }

    pub fn exit(feedback: impl Into<String>) -> Self {
        CommandResult {
            feedback: feedback.into(),
            exit: true,
        }
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn is_exit(&self) -> bool {
        self.exit
    }
}

/// One user action
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddMilk(AddMilkCommand),
    AddWeight(AddWeightCommand),
    AddWorkout(AddWorkoutCommand),
    AddMeal(AddMealCommand),
    AddMeasurement(AddMeasurementCommand),
    Delete(DeleteCommand),
    List(ListCommand),
    Goal(GoalCommand),
    Dashboard,
    Help,
    Bye,
}

impl Command {
    pub fn execute(
        &self,
        list: &mut EntryList,
        storage: Option<&dyn EntryStorage>,
    ) -> Result<CommandResult> {
        match self {
            Command::AddMilk(cmd) => cmd.execute(list, storage),
            Command::AddWeight(cmd) => cmd.execute(list, storage),
            Command::AddWorkout(cmd) => cmd.execute(list, storage),
            Command::AddMeal(cmd) => cmd.execute(list, storage),
            Command::AddMeasurement(cmd) => cmd.execute(list, storage),
            Command::Delete(cmd) => cmd.execute(list, storage),
            Command::List(cmd) => cmd.execute(list),
            Command::Goal(cmd) => cmd.execute(list, storage),
            Command::Dashboard => dashboard::execute(list),
            Command::Help => Ok(CommandResult::new(help::help_text())),
            Command::Bye => Ok(CommandResult::exit(GOODBYE)),
        }
    }
}

/// Save after a successful in-memory mutation.
///
/// The mutation is not rolled back when saving fails; memory and disk differ
/// until the next successful save.
pub(crate) fn persist(list: &EntryList, storage: Option<&dyn EntryStorage>) -> Result<()> {
    if let Some(storage) = storage {
        storage.save(list).map_err(|e| {
            tracing::error!("Failed to persist journal: {}", e);
            MamaError::Persistence(SAVE_FAILED.to_string())
        })?;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::domain::GoalKind;

    #[test]
    fn test_bye_requests_exit() {
        let mut list = EntryList::new();
        let result = Command::Bye.execute(&mut list, None).unwrap();
        assert!(result.is_exit());
        assert_eq!(result.feedback(), "Bye. Hope to see you again soon!");
    }

    #[test]
    fn test_help_lists_commands() {
        let mut list = EntryList::new();
        let result = Command::Help.execute(&mut list, None).unwrap();
        assert!(!result.is_exit());
        for keyword in [
            "milk", "weight", "workout", "meal", "measure", "delete", "list", "workout goal",
            "calorie goal", "dashboard", "bye",
        ] {
            assert!(result.feedback().contains(keyword), "missing {}", keyword);
        }
    }

    #[test]
    fn test_persist_without_storage_is_noop() {
        let list = EntryList::new();
        assert!(persist(&list, None).is_ok());
    }

    #[test]
    fn test_persist_failure_maps_to_persistence_error() {
        let list = EntryList::new();
        let err = persist(&list, Some(&FailingStorage)).unwrap_err();
        assert!(matches!(err, MamaError::Persistence(_)));
        assert_eq!(err.to_string(), SAVE_FAILED);
    }

    #[test]
    fn test_dispatch_saves_once_per_mutation() {
        let storage = CountingStorage::default();
        let mut list = EntryList::new();

        Command::AddMilk(AddMilkCommand::new(120).unwrap())
            .execute(&mut list, Some(&storage))
            .unwrap();
        Command::List(ListCommand::new(None))
            .execute(&mut list, Some(&storage))
            .unwrap();
        Command::Goal(GoalCommand::view(GoalKind::DailyCalories))
            .execute(&mut list, Some(&storage))
            .unwrap();
        Command::Dashboard.execute(&mut list, Some(&storage)).unwrap();
        Command::Goal(GoalCommand::set(GoalKind::DailyCalories, 2000).unwrap())
            .execute(&mut list, Some(&storage))
            .unwrap();
        Command::Delete(DeleteCommand::new(1).unwrap())
            .execute(&mut list, Some(&storage))
            .unwrap();

        assert_eq!(storage.saves.get(), 3);
        assert_eq!(storage.last_size.get(), 0);
    }
}
