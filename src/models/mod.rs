pub mod exercise;
pub mod workout;

use serde::{Deserialize, Deserializer};

pub use exercise::{AssetRef, Difficulty, Exercise, ImageField};
pub use workout::{EntryExercise, ExerciseEntry, WeightUnit, WorkoutRecord, WorkoutSet};

/// Deserialize a field the content platform may send as `null`.
/// Query projections return `null` for unset fields rather than omitting them.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
