pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod ids;
pub mod input;
pub mod models;
pub mod state;
pub mod tracker;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use tracker::CalorieTracker;
