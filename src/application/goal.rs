//! View or set the weekly workout goal and the daily calorie goal

use super::dashboard::progress_line;
use super::{persist, CommandResult};
use crate::domain::{timestamp, EntryList, GoalKind};
use crate::error::{MamaError, Result};
use crate::infrastructure::EntryStorage;

pub const WORKOUT_GOAL_USAGE: &str = "workout goal [MINUTES]\n  \
    Shows the weekly workout goal, or sets it to MINUTES. Example: 'workout goal 150'";

pub const CALORIE_GOAL_USAGE: &str = "calorie goal [KCAL]\n  \
    Shows the daily calorie goal, or sets it to KCAL. Example: 'calorie goal 2000'";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalCommand {
    kind: GoalKind,
    target: Option<u32>,
}

impl GoalCommand {
    pub fn view(kind: GoalKind) -> Self {
        GoalCommand { kind, target: None }
    }

    pub fn set(kind: GoalKind, target: u32) -> Result<Self> {
        Ok(GoalCommand {
            kind,
            target: Some(kind.validate(target)?),
        })
    }

    /// Parse the text after `workout goal` / `calorie goal`; empty means view
    pub fn from_input(kind: GoalKind, args: &str) -> Result<Self> {
        let args = args.trim();
        if args.is_empty() {
            return Ok(Self::view(kind));
        }

        let target: u32 = args.parse().map_err(|_| {
            MamaError::Usage(format!(
                "Goal must be a positive whole number.\nUsage: {}",
                usage(kind)
            ))
        })?;
        Self::set(kind, target)
    }

    pub fn kind(&self) -> GoalKind {
        self.kind
    }

    pub fn target(&self) -> Option<u32> {
        self.target
    }

    pub fn execute(
        &self,
        list: &mut EntryList,
        storage: Option<&dyn EntryStorage>,
    ) -> Result<CommandResult> {
        let Some(target) = self.target else {
            return Ok(CommandResult::new(self.describe(list)));
        };

        tracing::info!(goal = self.kind.tag(), value = target, "setting goal");
        list.goals_mut().set(self.kind, target)?;
        persist(list, storage)?;

        Ok(CommandResult::new(format!(
            "Your {} is now {} {}.\n{}",
            self.kind.label(),
            target,
            self.kind.unit(),
            progress_line(list, self.kind, timestamp::now().date())
        )))
    }

    fn describe(&self, list: &EntryList) -> String {
        match list.goals().get(self.kind) {
            Some(target) => format!(
                "Your {} is {} {}.\n{}",
                self.kind.label(),
                target,
                self.kind.unit(),
                progress_line(list, self.kind, timestamp::now().date())
            ),
            None => format!(
                "You have not set a {} yet. Set one with '{}'.",
                self.kind.label(),
                self.kind.set_syntax()
            ),
        }
    }
}

fn usage(kind: GoalKind) -> &'static str {
    match kind {
        GoalKind::WeeklyWorkoutMinutes => WORKOUT_GOAL_USAGE,
        GoalKind::DailyCalories => CALORIE_GOAL_USAGE,
    }
}
