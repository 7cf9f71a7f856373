use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    SignedOut,
    SignedIn { user_id: String },
}

impl SessionStatus {
    pub fn user_id(&self) -> Option<&str> {
        match self {
            SessionStatus::SignedIn { user_id } => Some(user_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Exercises,
    Workout,
    History,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Home,
        Tab::Exercises,
        Tab::Workout,
        Tab::History,
        Tab::Profile,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Exercises => "exercises",
            Tab::Workout => "workout",
            Tab::History => "history",
            Tab::Profile => "profile",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Exercises => "Exercises",
            Tab::Workout => "Workout",
            Tab::History => "History",
            Tab::Profile => "Profile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Tab,
    Modal,
    Stack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subtree {
    Main,
    Auth,
}

impl Subtree {
    pub fn entry(&self) -> Route {
        match self {
            Subtree::Main => Route::Tab(Tab::Home),
            Subtree::Auth => Route::SignIn,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Tab(Tab),
    ExerciseDetail { id: String },
    WorkoutRecord { workout_id: String },
    SignIn,
    SignUp,
}

impl Route {
    pub fn subtree(&self) -> Subtree {
        match self {
            Route::SignIn | Route::SignUp => Subtree::Auth,
            _ => Subtree::Main,
        }
    }

    pub fn presentation(&self) -> Presentation {
        match self {
            Route::Tab(_) => Presentation::Tab,
            Route::ExerciseDetail { .. } => Presentation::Modal,
            Route::WorkoutRecord { .. } | Route::SignIn | Route::SignUp => Presentation::Stack,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Tab(tab) => format!("/{}", tab.slug()),
            Route::ExerciseDetail { id } => format!("/exercise-detail?id={id}"),
            Route::WorkoutRecord { workout_id } => {
                format!("/history/workout-record?workoutId={workout_id}")
            }
            Route::SignIn => "/sign-in".to_string(),
            Route::SignUp => "/sign-up".to_string(),
        }
    }

    pub fn parse(path: &str) -> Option<Self> {
        let (path, query) = path.split_once('?').unwrap_or((path, ""));
        let param = |name: &str| {
            query
                .split('&')
                .filter_map(|pair| pair.split_once('='))
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
                .filter(|value| !value.is_empty())
        };

        match path.trim_end_matches('/') {
            "" => Some(Route::Tab(Tab::Home)),
            "/exercise-detail" => param("id").map(|id| Route::ExerciseDetail { id }),
            "/history/workout-record" => {
                param("workoutId").map(|workout_id| Route::WorkoutRecord { workout_id })
            }
            "/sign-in" => Some(Route::SignIn),
            "/sign-up" => Some(Route::SignUp),
            other => {
                let slug = other.strip_prefix('/')?;
                Tab::ALL
                    .into_iter()
                    .find(|tab| tab.slug() == slug)
                    .map(Route::Tab)
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateView {
    Spinner,
    Mounted(Subtree),
}

#[derive(Debug, Clone)]
pub struct AuthGate {
    status: SessionStatus,
}

impl AuthGate {
    pub fn new(status: SessionStatus) -> Self {
        Self { status }
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn update(&mut self, status: SessionStatus) -> bool {
        let before = self.view();
        if status != self.status {
            tracing::debug!("Session status changed: {:?} -> {:?}", self.status, status);
        }
        self.status = status;
        before != self.view()
    }

    pub fn view(&self) -> GateView {
        match self.status {
            SessionStatus::Loading => GateView::Spinner,
            SessionStatus::SignedOut => GateView::Mounted(Subtree::Auth),
            SessionStatus::SignedIn { .. } => GateView::Mounted(Subtree::Main),
        }
    }

    pub fn is_mounted(&self, route: &Route) -> bool {
        self.view() == GateView::Mounted(route.subtree())
    }

    /// Where a navigation request actually lands. `None` while the session is
    /// still loading; the mounted subtree's entry route if the request
    /// belongs to the other subtree.
    pub fn resolve(&self, requested: &Route) -> Option<Route> {
        match self.view() {
            GateView::Spinner => None,
            GateView::Mounted(subtree) if requested.subtree() == subtree => {
                Some(requested.clone())
            }
            GateView::Mounted(subtree) => Some(subtree.entry()),
        }
    }
}
