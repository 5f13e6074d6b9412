//! Weekly workout and daily calorie targets

use crate::error::{MamaError, Result};

/// Minutes in a week
pub const MAX_WORKOUT_GOAL_MINUTES: u32 = 10_080;
pub const MAX_CALORIE_GOAL: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalKind {
    WeeklyWorkoutMinutes,
    DailyCalories,
}

impl GoalKind {
    pub const ALL: [GoalKind; 2] = [GoalKind::WeeklyWorkoutMinutes, GoalKind::DailyCalories];

    /// First field of the goal's storage line
    pub fn tag(&self) -> &'static str {
        match self {
            GoalKind::WeeklyWorkoutMinutes => "GOAL_WORKOUT",
            GoalKind::DailyCalories => "GOAL_CALORIES",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoalKind::WeeklyWorkoutMinutes => "weekly workout goal",
            GoalKind::DailyCalories => "daily calorie goal",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            GoalKind::WeeklyWorkoutMinutes => "minutes",
            GoalKind::DailyCalories => "kcal",
        }
    }

    pub fn max(&self) -> u32 {
        match self {
            GoalKind::WeeklyWorkoutMinutes => MAX_WORKOUT_GOAL_MINUTES,
            GoalKind::DailyCalories => MAX_CALORIE_GOAL,
        }
    }

    /// Command that sets this goal, as typed by the user
    pub fn set_syntax(&self) -> &'static str {
        match self {
            GoalKind::WeeklyWorkoutMinutes => "workout goal MINUTES",
            GoalKind::DailyCalories => "calorie goal KCAL",
        }
    }

    pub fn validate(&self, target: u32) -> Result<u32> {
        if target == 0 || target > self.max() {
            let title = match self {
                GoalKind::WeeklyWorkoutMinutes => "Weekly workout goal",
                GoalKind::DailyCalories => "Daily calorie goal",
            };
            return Err(MamaError::Command(format!(
                "{} must be between 1 and {} {}!",
                title,
                self.max(),
                self.unit()
            )));
        }
        Ok(target)
    }
}

/// Targets the dashboard measures progress against. Unset until the user
/// picks one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Goals {
    workout_minutes: Option<u32>,
    calories: Option<u32>,
}

impl Goals {
    pub fn get(&self, kind: GoalKind) -> Option<u32> {
        match kind {
            GoalKind::WeeklyWorkoutMinutes => self.workout_minutes,
            GoalKind::DailyCalories => self.calories,
        }
    }

    pub fn set(&mut self, kind: GoalKind, target: u32) -> Result<()> {
        let target = kind.validate(target)?;
        match kind {
            GoalKind::WeeklyWorkoutMinutes => self.workout_minutes = Some(target),
            GoalKind::DailyCalories => self.calories = Some(target),
        }
        Ok(())
    }

    /// One `TAG|value` line per goal that is set
    pub fn to_storage_lines(&self) -> Vec<String> {
        GoalKind::ALL
            .into_iter()
            .filter_map(|kind| {
                self.get(kind)
                    .map(|target| format!("{}|{}", kind.tag(), target))
            })
            .collect()
    }

    /// Apply a stored goal line.
    ///
    /// Returns `Ok(false)` when the line is not a goal line at all.
    pub fn read_storage_line(&mut self, line: &str) -> Result<bool> {
        let mut parts = line.split('|');
        let Some(kind) = parts.next().and_then(GoalKind::from_tag) else {
            return Ok(false);
        };

        let invalid = || MamaError::Storage(format!("Invalid {} line: {}", kind.tag(), line));
        let target: u32 = match (parts.next(), parts.next()) {
            (Some(value), None) => value.trim().parse().map_err(|_| invalid())?,
            _ => return Err(invalid()),
        };

        self.set(kind, target).map_err(|_| invalid())?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goals_start_unset() {
        let goals = Goals::default();
        assert_eq!(goals.get(GoalKind::WeeklyWorkoutMinutes), None);
        assert_eq!(goals.get(GoalKind::DailyCalories), None);
        assert!(goals.to_storage_lines().is_empty());
    }

    #[test]
    fn test_set_validates_range() {
        let mut goals = Goals::default();
        goals.set(GoalKind::WeeklyWorkoutMinutes, 150).unwrap();
        assert_eq!(goals.get(GoalKind::WeeklyWorkoutMinutes), Some(150));

        let err = goals.set(GoalKind::WeeklyWorkoutMinutes, 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Weekly workout goal must be between 1 and 10080 minutes!"
        );
        assert!(goals.set(GoalKind::WeeklyWorkoutMinutes, 10_081).is_err());
        assert!(goals.set(GoalKind::DailyCalories, 10_001).is_err());
        assert!(goals.set(GoalKind::DailyCalories, 10_000).is_ok());

        // failed sets leave the previous target alone
        assert_eq!(goals.get(GoalKind::WeeklyWorkoutMinutes), Some(150));
    }

    #[test]
    fn test_storage_lines_round_trip() {
        let mut goals = Goals::default();
        goals.set(GoalKind::WeeklyWorkoutMinutes, 150).unwrap();
        goals.set(GoalKind::DailyCalories, 2200).unwrap();

        let lines = goals.to_storage_lines();
        assert_eq!(lines, vec!["GOAL_WORKOUT|150", "GOAL_CALORIES|2200"]);

        let mut restored = Goals::default();
        for line in &lines {
            assert!(restored.read_storage_line(line).unwrap());
        }
        assert_eq!(restored, goals);
    }

    #[test]
    fn test_read_storage_line_ignores_entries() {
        let mut goals = Goals::default();
        assert!(!goals.read_storage_line("MILK|150ml|28/10/25 01:14").unwrap());
        assert!(!goals.read_storage_line("").unwrap());
    }

    #[test]
    fn test_read_storage_line_rejects_malformed_goals() {
        let mut goals = Goals::default();
        assert!(goals.read_storage_line("GOAL_WORKOUT").is_err());
        assert!(goals.read_storage_line("GOAL_WORKOUT|lots").is_err());
        assert!(goals.read_storage_line("GOAL_WORKOUT|0").is_err());
        assert!(goals.read_storage_line("GOAL_CALORIES|2000|extra").is_err());
        assert_eq!(goals, Goals::default());
    }
}
