use std::sync::Arc;

use super::{DetailScreen, DetailState, Tracker};
use crate::content::{fetch, ContentSource, WorkoutById};
use crate::models::WorkoutRecord;

pub struct WorkoutRecordScreen {
    source: Arc<dyn ContentSource>,
    workout_id: String,
    screen: DetailScreen<WorkoutRecord>,
}

impl WorkoutRecordScreen {
    pub fn new(source: Arc<dyn ContentSource>, workout_id: impl Into<String>) -> Self {
        Self {
            source,
            workout_id: workout_id.into(),
            screen: DetailScreen::new(),
        }
    }

    pub fn workout_id(&self) -> &str {
        &self.workout_id
    }

    pub async fn load(&self) {
        self.fetch(Tracker::Load).await;
    }

    pub async fn refresh(&self) {
        self.fetch(Tracker::Refresh).await;
    }

    async fn fetch(&self, tracker: Tracker) {
        let source = Arc::clone(&self.source);
        let query = WorkoutById::new(self.workout_id.clone());
        self.screen
            .run("workout", tracker, async move {
                fetch(source.as_ref(), &query).await
            })
            .await;
    }

    pub fn state(&self) -> DetailState<WorkoutRecord> {
        self.screen.snapshot()
    }

    pub fn teardown(&self) {
        self.screen.scope().cancel();
    }
}
