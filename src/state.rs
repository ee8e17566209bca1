use crate::config::Config;
use crate::ids::IdGenerator;
use crate::tracker::CalorieTracker;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Mutex<CalorieTracker>>,
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    pub fn new(tracker: CalorieTracker, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
            ids,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            CalorieTracker::new(config.calorie_limit),
            config.id_strategy.generator(),
        )
    }
}
