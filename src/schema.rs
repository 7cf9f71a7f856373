use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};
use thiserror::Error;
use uuid::Uuid;

use crate::models::WeightUnit;

pub const EXERCISE_TYPE: &str = "exercise";
pub const WORKOUT_TYPE: &str = "workout";

pub const EXERCISE_FIELDS: &[&str] = &[
    "_id",
    "_type",
    "name",
    "description",
    "difficulty",
    "image",
    "videoUrl",
    "isActive",
];

pub const WORKOUT_FIELDS: &[&str] = &["_id", "_type", "userId", "date", "duration", "exercises"];

pub const ENTRY_FIELDS: &[&str] = &["_key", "_type", "exercise", "sets"];

pub const SET_FIELDS: &[&str] = &["_key", "_type", "reps", "weight", "weightUnit"];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Reps must be a positive integer.")]
    NonPositiveReps,

    #[error("Weight must be 0 or higher (use 0 for bodyweight exercises).")]
    InvalidWeight,

    #[error("Exercise reference is required.")]
    MissingExercise,

    #[error("Please add at least one set.")]
    NoSets,

    #[error("User ID is required.")]
    MissingUser,

    #[error("Duration must be a positive integer.")]
    NonPositiveDuration,

    #[error("Please add at least one exercise.")]
    NoExercises,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetDraft {
    reps: u32,
    weight: Option<f64>,
    unit: WeightUnit,
}

impl SetDraft {
    pub fn new(reps: u32, weight: Option<f64>, unit: WeightUnit) -> Result<Self, ValidationError> {
        if reps == 0 {
            return Err(ValidationError::NonPositiveReps);
        }
        if let Some(w) = weight {
            if !w.is_finite() || w < 0.0 {
                return Err(ValidationError::InvalidWeight);
            }
        }
        Ok(Self { reps, weight, unit })
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    pub fn unit(&self) -> WeightUnit {
        self.unit
    }

    fn to_document(&self) -> Value {
        let mut doc = json!({
            "_key": new_key(),
            "_type": "set",
            "reps": self.reps,
            "weightUnit": self.unit.as_str(),
        });
        if let Some(weight) = self.weight {
            doc["weight"] = json!(weight);
        }
        doc
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    exercise_id: String,
    sets: Vec<SetDraft>,
}

impl EntryDraft {
    pub fn new(exercise_id: impl Into<String>, sets: Vec<SetDraft>) -> Result<Self, ValidationError> {
        let exercise_id = exercise_id.into();
        if exercise_id.trim().is_empty() {
            return Err(ValidationError::MissingExercise);
        }
        if sets.is_empty() {
            return Err(ValidationError::NoSets);
        }
        Ok(Self { exercise_id, sets })
    }

    pub fn exercise_id(&self) -> &str {
        &self.exercise_id
    }

    pub fn sets(&self) -> &[SetDraft] {
        &self.sets
    }

    fn to_document(&self) -> Value {
        json!({
            "_key": new_key(),
            "_type": "exerciseEntry",
            "exercise": { "_type": "reference", "_ref": self.exercise_id },
            "sets": self.sets.iter().map(SetDraft::to_document).collect::<Vec<_>>(),
        })
    }
}

/// A workout ready to be written. Holding one proves every schema rule holds.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDraft {
    user_id: String,
    date: DateTime<Utc>,
    duration_secs: u64,
    entries: Vec<EntryDraft>,
}

impl WorkoutDraft {
    pub fn new(
        user_id: impl Into<String>,
        date: DateTime<Utc>,
        duration_secs: u64,
        entries: Vec<EntryDraft>,
    ) -> Result<Self, ValidationError> {
        let user_id = user_id.into();
        if user_id.trim().is_empty() {
            return Err(ValidationError::MissingUser);
        }
        if duration_secs == 0 {
            return Err(ValidationError::NonPositiveDuration);
        }
        if entries.is_empty() {
            return Err(ValidationError::NoExercises);
        }
        Ok(Self {
            user_id,
            date,
            duration_secs,
            entries,
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn entries(&self) -> &[EntryDraft] {
        &self.entries
    }

    pub fn to_document(&self) -> Value {
        json!({
            "_type": WORKOUT_TYPE,
            "userId": self.user_id,
            "date": self.date.to_rfc3339_opts(SecondsFormat::Millis, true),
            "duration": self.duration_secs,
            "exercises": self.entries.iter().map(EntryDraft::to_document).collect::<Vec<_>>(),
        })
    }
}

fn new_key() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_string()
}
