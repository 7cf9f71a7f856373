use askama::Template;

use crate::display::{
    difficulty_badge, duration_label, set_count_label, set_weight_label, workout_date_label,
};
use crate::error::{AppError, Result};
use crate::models::{Exercise, WorkoutRecord};
use crate::navigation::Route;
use crate::screens::GuidancePanel;

const NO_DESCRIPTION: &str = "No description available.";

#[derive(Template)]
#[template(path = "exercise_card.html")]
struct ExerciseCardTemplate<'a> {
    href: String,
    name: &'a str,
    description: &'a str,
    badge_color: &'static str,
    badge_label: &'static str,
    image_url: Option<String>,
    image_alt: &'a str,
}

#[derive(Template)]
#[template(path = "workout_row.html")]
struct WorkoutRowTemplate<'a> {
    href: String,
    date: String,
    duration: String,
    exercise_count: usize,
    set_count: usize,
    exercise_names: Vec<&'a str>,
}

#[derive(Template)]
#[template(path = "exercise_detail.html")]
struct ExerciseDetailTemplate<'a> {
    name: &'a str,
    description: &'a str,
    show_badge: bool,
    badge_color: &'static str,
    badge_label: &'static str,
    image_url: Option<String>,
    image_alt: &'a str,
    video_url: Option<&'a str>,
    guidance_loading: bool,
    guidance_text: &'a str,
}

struct SetLine {
    reps: String,
    weight: String,
}

struct EntryBlock<'a> {
    name: &'a str,
    set_count: String,
    sets: Vec<SetLine>,
}

#[derive(Template)]
#[template(path = "workout_record.html")]
struct WorkoutRecordTemplate<'a> {
    workout_id: &'a str,
    date: String,
    duration: String,
    entries: Vec<EntryBlock<'a>>,
}

fn render(template: &impl Template) -> Result<String> {
    template
        .render()
        .map_err(|e| AppError::Internal(e.to_string()))
}

pub fn exercise_card(exercise: &Exercise, image_url: Option<String>) -> Result<String> {
    let badge = difficulty_badge(exercise.difficulty.as_deref());
    render(&ExerciseCardTemplate {
        href: Route::ExerciseDetail {
            id: exercise.id.clone(),
        }
        .path(),
        name: exercise.display_name(),
        description: exercise.description.as_deref().unwrap_or(NO_DESCRIPTION),
        badge_color: badge.color,
        badge_label: badge.label,
        image_url,
        image_alt: exercise.image_alt().unwrap_or(exercise.display_name()),
    })
}

pub fn workout_row(workout: &WorkoutRecord) -> Result<String> {
    render(&WorkoutRowTemplate {
        href: Route::WorkoutRecord {
            workout_id: workout.id.clone(),
        }
        .path(),
        date: workout_date_label(workout.date),
        duration: duration_label(workout.duration),
        exercise_count: workout.exercise_count(),
        set_count: workout.total_sets(),
        exercise_names: workout.exercise_names(),
    })
}

pub fn exercise_detail(
    exercise: &Exercise,
    image_url: Option<String>,
    guidance: &GuidancePanel,
) -> Result<String> {
    let badge = difficulty_badge(exercise.difficulty.as_deref());
    render(&ExerciseDetailTemplate {
        name: exercise.display_name(),
        description: exercise.description.as_deref().unwrap_or(NO_DESCRIPTION),
        show_badge: exercise.difficulty.as_deref().is_some_and(|d| !d.is_empty()),
        badge_color: badge.color,
        badge_label: badge.label,
        image_url,
        image_alt: exercise.image_alt().unwrap_or(exercise.display_name()),
        video_url: exercise.video_link(),
        guidance_loading: guidance.loading,
        guidance_text: &guidance.text,
    })
}

pub fn workout_record(workout: &WorkoutRecord) -> Result<String> {
    let entries = workout
        .exercises
        .iter()
        .map(|entry| EntryBlock {
            name: entry
                .exercise
                .as_ref()
                .and_then(|e| e.name.as_deref())
                .unwrap_or("Unnamed Exercise"),
            set_count: set_count_label(entry.sets.len()),
            sets: entry
                .sets
                .iter()
                .map(|set| SetLine {
                    reps: set.reps.map_or_else(|| "?".to_string(), |r| r.to_string()),
                    weight: set_weight_label(set),
                })
                .collect(),
        })
        .collect();

    render(&WorkoutRecordTemplate {
        workout_id: &workout.id,
        date: workout_date_label(workout.date),
        duration: duration_label(workout.duration),
        entries,
    })
}
