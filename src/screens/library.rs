use std::sync::Arc;

use super::{ListScreen, Tracker, ViewState};
use crate::content::{fetch, AllExercises, ContentSource};
use crate::models::Exercise;

pub fn filter_by_name(items: &[Exercise], term: &str) -> Vec<Exercise> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|exercise| exercise.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub struct ExerciseLibraryScreen {
    source: Arc<dyn ContentSource>,
    screen: ListScreen<Exercise, String>,
}

impl ExerciseLibraryScreen {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            screen: ListScreen::new(),
        }
    }

    pub async fn load(&self) {
        self.fetch(Tracker::Load).await;
    }

    // overlapping refreshes are allowed; the last to finish wins
    pub async fn refresh(&self) {
        self.fetch(Tracker::Refresh).await;
    }

    async fn fetch(&self, tracker: Tracker) {
        let source = Arc::clone(&self.source);
        self.screen
            .run(
                "exercises",
                tracker,
                async move { fetch(source.as_ref(), &AllExercises).await },
                |items, search| filter_by_name(items, search),
            )
            .await;
    }

    pub fn set_search(&self, term: &str) {
        self.screen.update(|view, search| {
            *search = term.to_string();
            view.derived = filter_by_name(&view.items, term);
        });
    }

    pub fn clear_search(&self) {
        self.set_search("");
    }

    pub fn search_term(&self) -> String {
        self.screen.update(|_, search| search.clone())
    }

    pub fn state(&self) -> ViewState<Exercise> {
        self.screen.snapshot()
    }

    pub fn teardown(&self) {
        self.screen.scope().cancel();
    }
}
