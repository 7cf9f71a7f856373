use std::sync::{Arc, Mutex, PoisonError};

use super::{DetailScreen, DetailState, Tracker};
use crate::content::{fetch, ContentSource, ExerciseById};
use crate::guidance::GuidanceSource;
use crate::models::Exercise;

pub const GUIDANCE_ERROR_TEXT: &str = "Failed to get AI guidance. Please try again later.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuidancePanel {
    pub text: String,
    pub loading: bool,
}

pub struct ExerciseDetailScreen {
    source: Arc<dyn ContentSource>,
    guidance_source: Arc<dyn GuidanceSource>,
    exercise_id: String,
    screen: DetailScreen<Exercise>,
    guidance: Mutex<GuidancePanel>,
}

impl ExerciseDetailScreen {
    pub fn new(
        source: Arc<dyn ContentSource>,
        guidance_source: Arc<dyn GuidanceSource>,
        exercise_id: impl Into<String>,
    ) -> Self {
        Self {
            source,
            guidance_source,
            exercise_id: exercise_id.into(),
            screen: DetailScreen::new(),
            guidance: Mutex::new(GuidancePanel::default()),
        }
    }

    pub fn exercise_id(&self) -> &str {
        &self.exercise_id
    }

    pub async fn load(&self) {
        self.fetch(Tracker::Load).await;
    }

    pub async fn refresh(&self) {
        self.fetch(Tracker::Refresh).await;
    }

    async fn fetch(&self, tracker: Tracker) {
        let source = Arc::clone(&self.source);
        let query = ExerciseById::new(self.exercise_id.clone());
        self.screen
            .run("exercise", tracker, async move {
                fetch(source.as_ref(), &query).await
            })
            .await;
    }

    /// Asks the guidance proxy about the loaded exercise. A no-op until an
    /// exercise with a name has loaded.
    pub async fn request_guidance(&self) {
        let name = self.screen.update(|state| {
            state
                .item
                .as_ref()
                .map(|exercise| exercise.name.clone())
                .filter(|name| !name.trim().is_empty())
        });
        let Some(name) = name else {
            return;
        };
        if self.screen.scope().is_cancelled() {
            return;
        }

        self.update_guidance(|panel| {
            panel.text.clear();
            panel.loading = true;
        });

        let text = match self
            .screen
            .scope()
            .run(self.guidance_source.guidance(&name))
            .await
        {
            None => {
                tracing::debug!("Abandoned guidance request after teardown");
                return;
            }
            Some(Ok(text)) => text,
            Some(Err(e)) => {
                tracing::error!("Error fetching AI guidance for {}: {}", name, e);
                GUIDANCE_ERROR_TEXT.to_string()
            }
        };

        self.update_guidance(|panel| {
            panel.text = text;
            panel.loading = false;
        });
    }

    fn update_guidance(&self, f: impl FnOnce(&mut GuidancePanel)) {
        let mut panel = self.guidance.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut panel);
    }

    pub fn state(&self) -> DetailState<Exercise> {
        self.screen.snapshot()
    }

    pub fn guidance(&self) -> GuidancePanel {
        self.guidance
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn teardown(&self) {
        self.screen.scope().cancel();
    }
}
