//! Help text for every journal command

use super::{
    add_meal, add_measurement, add_milk, add_weight, add_workout, dashboard, delete, goal,
    list_entries,
};

pub fn help_text() -> String {
    let delete_usage = delete::USAGE
        .strip_prefix("Usage: ")
        .unwrap_or(delete::USAGE);

    let sections = [
        add_milk::USAGE,
        add_weight::USAGE,
        add_workout::USAGE,
        add_meal::USAGE,
        add_measurement::USAGE,
        list_entries::USAGE,
        delete_usage,
        goal::WORKOUT_GOAL_USAGE,
        goal::CALORIE_GOAL_USAGE,
        dashboard::USAGE,
        "help\n  Shows this message.",
        "bye\n  Exits the program.",
    ];

    format!("Available commands:\n{}", sections.join("\n"))
}
