use std::sync::Arc;

use super::{ListScreen, Tracker, ViewState};
use crate::content::{fetch, ContentSource, WorkoutsForUser};
use crate::models::WorkoutRecord;

pub struct WorkoutHistoryScreen {
    source: Arc<dyn ContentSource>,
    user_id: Option<String>,
    screen: ListScreen<WorkoutRecord>,
}

impl WorkoutHistoryScreen {
    pub fn new(source: Arc<dyn ContentSource>, user_id: Option<String>) -> Self {
        Self {
            source,
            user_id,
            screen: ListScreen::new(),
        }
    }

    pub async fn load(&self) {
        self.fetch(Tracker::Load).await;
    }

    pub async fn refresh(&self) {
        self.fetch(Tracker::Refresh).await;
    }

    async fn fetch(&self, tracker: Tracker) {
        // nothing to show until the auth provider hands us a user
        let Some(user_id) = self.user_id.clone() else {
            tracing::debug!("Skipping workout history fetch without a signed-in user");
            return;
        };

        let source = Arc::clone(&self.source);
        self.screen
            .run(
                "workouts",
                tracker,
                async move { fetch(source.as_ref(), &WorkoutsForUser::new(user_id)).await },
                |items, _| items.to_vec(),
            )
            .await;
    }

    pub fn state(&self) -> ViewState<WorkoutRecord> {
        self.screen.snapshot()
    }

    pub fn teardown(&self) {
        self.screen.scope().cancel();
    }
}
