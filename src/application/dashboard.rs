//! One-screen summary of goals against what has been recorded
//!
//! Workout progress counts the current Monday-to-Sunday week; calories and
//! milk count the current day. Dates come from entry timestamps.

use super::CommandResult;
use crate::domain::{timestamp, Entry, EntryList, GoalKind};
use crate::error::Result;
use chrono::{Datelike, Duration, NaiveDate};

pub const USAGE: &str = "dashboard\n  Shows this week's workouts and today's calories against your goals.";

pub fn execute(list: &EntryList) -> Result<CommandResult> {
    let today = timestamp::now().date();
    tracing::debug!(%today, entries = list.size(), "rendering dashboard");
    Ok(CommandResult::new(render_dashboard(list, today)))
}

pub fn render_dashboard(list: &EntryList, today: NaiveDate) -> String {
    let mut lines = vec![
        format!("Dashboard for {}", today.format("%d/%m/%y")),
        progress_line(list, GoalKind::WeeklyWorkoutMinutes, today),
        progress_line(list, GoalKind::DailyCalories, today),
        format!(
            "Milk pumped today: {}ml (total {}ml)",
            milk_on(list, today),
            list.total_milk_ml()
        ),
    ];

    let latest_weight = list.iter().rev().find_map(|entry| match entry {
        Entry::Weight(w) => Some(w.description()),
        _ => None,
    });
    lines.push(format!(
        "Latest weight: {}",
        latest_weight.unwrap_or("none recorded")
    ));

    let latest_measurement = list
        .iter()
        .rev()
        .find(|entry| matches!(entry, Entry::Measurement(_)));
    lines.push(match latest_measurement {
        Some(entry) => format!("Latest measurements: {}", entry.to_list_line()),
        None => "Latest measurements: none recorded".to_string(),
    });

    lines.push(format!("Entries recorded: {}", list.size()));
    lines.join("\n")
}

/// Progress toward one goal, e.g. `Workouts this week: 30 / 150 minutes (120 to go)`
pub fn progress_line(list: &EntryList, kind: GoalKind, today: NaiveDate) -> String {
    let (label, done) = match kind {
        GoalKind::WeeklyWorkoutMinutes => ("Workouts this week", workout_minutes_in_week(list, today)),
        GoalKind::DailyCalories => ("Calories today", calories_on(list, today)),
    };
    let unit = kind.unit();

    let Some(goal) = list.goals().get(kind) else {
        return format!("{}: {} {} (no goal set)", label, done, unit);
    };
    let goal = u64::from(goal);

    let status = match kind {
        GoalKind::WeeklyWorkoutMinutes if done >= goal => "goal reached!".to_string(),
        GoalKind::WeeklyWorkoutMinutes => format!("{} to go", goal - done),
        GoalKind::DailyCalories if done > goal => format!("{} {} over", done - goal, unit),
        GoalKind::DailyCalories => format!("{} {} left", goal - done, unit),
    };
    format!("{}: {} / {} {} ({})", label, done, goal, unit, status)
}

fn week_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(i64::from(today.weekday().num_days_from_monday()))
}

fn recorded_between(entry: &Entry, from: NaiveDate, to: NaiveDate) -> bool {
    entry
        .timestamp()
        .map(|when| (from..=to).contains(&when.date()))
        .unwrap_or(false)
}

fn workout_minutes_in_week(list: &EntryList, today: NaiveDate) -> u64 {
    let start = week_start(today);
    list.iter()
        .filter(|entry| recorded_between(entry, start, today))
        .map(|entry| match entry {
            Entry::Workout(w) => u64::from(w.minutes()),
            _ => 0,
        })
        .sum()
}

fn calories_on(list: &EntryList, day: NaiveDate) -> u64 {
    list.iter()
        .filter(|entry| recorded_between(entry, day, day))
        .map(|entry| match entry {
            Entry::Meal(m) => u64::from(m.calories()),
            _ => 0,
        })
        .sum()
}

fn milk_on(list: &EntryList, day: NaiveDate) -> u64 {
    list.iter()
        .filter(|entry| recorded_between(entry, day, day))
        .filter_map(Entry::milk_volume_ml)
        .map(u64::from)
        .sum()
}
