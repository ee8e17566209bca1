use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/meals", post(handlers::meal_form))
        .route("/workouts", post(handlers::workout_form))
        .route("/meals/:id/delete", post(handlers::meal_delete_form))
        .route("/workouts/:id/delete", post(handlers::workout_delete_form))
        .route("/api/tracker", get(handlers::get_tracker))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/meals", post(handlers::add_meal))
        .route("/api/workouts", post(handlers::add_workout))
        .route("/api/meals/:id", delete(handlers::delete_meal))
        .route("/api/workouts/:id", delete(handlers::delete_workout))
        .with_state(state)
}
