pub mod client;
pub mod image;
pub mod queries;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub use client::ContentClient;
pub use image::ImageUrl;
pub use queries::{AllExercises, ContentQuery, ExerciseById, WorkoutById, WorkoutsForUser};

#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub query: &'static str,
    pub params: BTreeMap<String, Value>,
}

#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn query(&self, request: &QueryRequest) -> Result<Value>;
}

pub async fn fetch<S, Q>(source: &S, query: &Q) -> Result<Q::Output>
where
    S: ContentSource + ?Sized,
    Q: ContentQuery + Sync,
{
    let raw = source.query(&query.request()).await?;
    Ok(serde_json::from_value(raw)?)
}
