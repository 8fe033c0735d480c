use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct AppState {
    pub started: DateTime<Utc>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started: Utc::now(),
        }
    }
}
