use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::QueryRequest;
use crate::models::{Exercise, WorkoutRecord};

pub trait ContentQuery {
    type Output: DeserializeOwned;

    const GROQ: &'static str;
    const PROJECTION: &'static [&'static str];

    fn params(&self) -> BTreeMap<String, Value> {
        BTreeMap::new()
    }

    fn request(&self) -> QueryRequest {
        QueryRequest {
            query: Self::GROQ,
            params: self.params(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AllExercises;

impl ContentQuery for AllExercises {
    type Output = Vec<Exercise>;

    const GROQ: &'static str = r#"*[_type == "exercise"] {
  ...
}"#;
    const PROJECTION: &'static [&'static str] = &[];
}

#[derive(Debug, Clone)]
pub struct ExerciseById {
    pub id: String,
}

impl ExerciseById {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl ContentQuery for ExerciseById {
    type Output = Option<Exercise>;

    const GROQ: &'static str = r#"*[_type == "exercise" && _id == $id][0] {
  _id,
  name,
  description,
  difficulty,
  image,
  videoUrl,
  isActive
}"#;
    const PROJECTION: &'static [&'static str] = &[
        "_id",
        "name",
        "description",
        "difficulty",
        "image",
        "videoUrl",
        "isActive",
    ];

    fn params(&self) -> BTreeMap<String, Value> {
        BTreeMap::from([("id".to_string(), Value::from(self.id.as_str()))])
    }
}

#[derive(Debug, Clone)]
pub struct WorkoutsForUser {
    pub user_id: String,
}

impl WorkoutsForUser {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

impl ContentQuery for WorkoutsForUser {
    type Output = Vec<WorkoutRecord>;

    const GROQ: &'static str = r#"*[_type == "workout" && userId == $userId] | order(date desc) {
  _id,
  date,
  duration,
  exercises[] {
    exercise-> {
      _id,
      name
    },
    sets[] {
      reps,
      weight,
      weightUnit,
      _type,
      _key
    },
    _type,
    _key
  }
}"#;
    const PROJECTION: &'static [&'static str] = &["_id", "date", "duration", "exercises"];

    fn params(&self) -> BTreeMap<String, Value> {
        BTreeMap::from([("userId".to_string(), Value::from(self.user_id.as_str()))])
    }
}

#[derive(Debug, Clone)]
pub struct WorkoutById {
    pub id: String,
}

impl WorkoutById {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl ContentQuery for WorkoutById {
    type Output = Option<WorkoutRecord>;

    const GROQ: &'static str = r#"*[_type == "workout" && _id == $id][0] {
  _id,
  date,
  duration,
  exercises[] {
    exercise-> {
      _id,
      name
    },
    sets[] {
      reps,
      weight,
      weightUnit,
      _type,
      _key
    },
    _type,
    _key
  }
}"#;
    const PROJECTION: &'static [&'static str] = &["_id", "date", "duration", "exercises"];

    fn params(&self) -> BTreeMap<String, Value> {
        BTreeMap::from([("id".to_string(), Value::from(self.id.as_str()))])
    }
}
