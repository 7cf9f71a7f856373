use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::null_as_default;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

// The picker list is not enforced on API writes, so anything but "lbs" reads as kg.
impl<'de> Deserialize<'de> for WeightUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            Some("lbs") => WeightUnit::Lbs,
            _ => WeightUnit::Kg,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSet {
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub weight_unit: Option<WeightUnit>,
    #[serde(rename = "_key", default)]
    pub key: Option<String>,
}

impl WorkoutSet {
    // zero or absent weight means bodyweight; the unit is ignored then
    pub fn is_bodyweight(&self) -> bool {
        !matches!(self.weight, Some(w) if w > 0.0)
    }

    pub fn unit(&self) -> WeightUnit {
        self.weight_unit.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryExercise {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    #[serde(default)]
    pub exercise: Option<EntryExercise>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sets: Vec<WorkoutSet>,
    #[serde(rename = "_key", default)]
    pub key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    // whole seconds
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exercises: Vec<ExerciseEntry>,
}

impl WorkoutRecord {
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|entry| entry.sets.len()).sum()
    }

    pub fn exercise_names(&self) -> Vec<&str> {
        self.exercises
            .iter()
            .filter_map(|entry| entry.exercise.as_ref())
            .filter_map(|exercise| exercise.name.as_deref())
            .filter(|name| !name.is_empty())
            .collect()
    }
}
