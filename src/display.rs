use chrono::{DateTime, Utc};

use crate::models::{Difficulty, WorkoutSet};

pub const UNKNOWN_COLOR: &str = "#9E9E9E";
pub const UNKNOWN_LABEL: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub color: &'static str,
    pub label: &'static str,
}

pub fn difficulty_badge(difficulty: Option<&str>) -> Badge {
    match difficulty.and_then(Difficulty::parse) {
        Some(d) => Badge {
            color: d.color(),
            label: d.label(),
        },
        None => Badge {
            color: UNKNOWN_COLOR,
            label: UNKNOWN_LABEL,
        },
    }
}

pub fn difficulty_color(difficulty: Option<&str>) -> &'static str {
    difficulty_badge(difficulty).color
}

pub fn difficulty_label(difficulty: Option<&str>) -> &'static str {
    difficulty_badge(difficulty).label
}

/// Compact "1h 2m 3s" form. Zero-valued units are dropped, so 0 renders as "".
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    [(hours, "h"), (minutes, "m"), (seconds, "s")]
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{value}{unit}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn duration_label(duration: Option<u64>) -> String {
    match duration {
        Some(secs) if secs > 0 => format_duration(secs),
        _ => "Not recorded".to_string(),
    }
}

pub fn workout_date_label(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(date) => date.format("%a, %b %-d, %Y").to_string(),
        None => "No date recorded".to_string(),
    }
}

pub fn workouts_completed_label(count: usize) -> String {
    if count == 1 {
        "1 workout completed".to_string()
    } else {
        format!("{count} workouts completed")
    }
}

pub fn set_weight_label(set: &WorkoutSet) -> String {
    match set.weight {
        Some(weight) if weight > 0.0 => format!("{} {}", weight, set.unit().as_str()),
        _ => "Bodyweight".to_string(),
    }
}

pub fn set_count_label(count: usize) -> String {
    if count == 1 {
        "1 set".to_string()
    } else {
        format!("{count} sets")
    }
}
