use crate::errors::AppError;
use crate::input::parse_form;
use crate::models::{EntryForm, EntryId, EntryKind, TrackerSnapshot, TrackerSummary};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use tracing::{debug, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let tracker = state.tracker.lock().await;
    Html(render_index(&tracker.snapshot()))
}

pub async fn get_tracker(State(state): State<AppState>) -> Json<TrackerSnapshot> {
    let tracker = state.tracker.lock().await;
    Json(tracker.snapshot())
}

pub async fn get_summary(State(state): State<AppState>) -> Json<TrackerSummary> {
    let tracker = state.tracker.lock().await;
    Json(tracker.summary())
}

pub async fn meal_form(
    State(state): State<AppState>,
    Form(form): Form<EntryForm>,
) -> Result<Redirect, AppError> {
    add_entry(&state, EntryKind::Meal, &form).await?;
    Ok(Redirect::to("/"))
}

pub async fn workout_form(
    State(state): State<AppState>,
    Form(form): Form<EntryForm>,
) -> Result<Redirect, AppError> {
    add_entry(&state, EntryKind::Workout, &form).await?;
    Ok(Redirect::to("/"))
}

pub async fn meal_delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Redirect {
    remove_entry(&state, EntryKind::Meal, EntryId::new(id)).await;
    Redirect::to("/")
}

pub async fn workout_delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Redirect {
    remove_entry(&state, EntryKind::Workout, EntryId::new(id)).await;
    Redirect::to("/")
}

pub async fn add_meal(
    State(state): State<AppState>,
    Json(payload): Json<EntryForm>,
) -> Result<Json<TrackerSnapshot>, AppError> {
    Ok(Json(add_entry(&state, EntryKind::Meal, &payload).await?))
}

pub async fn add_workout(
    State(state): State<AppState>,
    Json(payload): Json<EntryForm>,
) -> Result<Json<TrackerSnapshot>, AppError> {
    Ok(Json(add_entry(&state, EntryKind::Workout, &payload).await?))
}

pub async fn delete_meal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TrackerSnapshot>, AppError> {
    delete_entry(&state, EntryKind::Meal, EntryId::new(id)).await
}

pub async fn delete_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TrackerSnapshot>, AppError> {
    delete_entry(&state, EntryKind::Workout, EntryId::new(id)).await
}

async fn add_entry(
    state: &AppState,
    kind: EntryKind,
    form: &EntryForm,
) -> Result<TrackerSnapshot, AppError> {
    let entry = parse_form(form)?.into_entry(state.ids.as_ref());
    info!(%kind, id = %entry.id(), calories = entry.calories(), "logged entry");

    let mut tracker = state.tracker.lock().await;
    tracker.add(kind, entry);
    Ok(tracker.snapshot())
}

/// Returns the new snapshot, or `None` when no entry of `kind` has `id`.
async fn remove_entry(state: &AppState, kind: EntryKind, id: EntryId) -> Option<TrackerSnapshot> {
    let mut tracker = state.tracker.lock().await;
    match tracker.remove(kind, &id) {
        Some(summary) => {
            info!(%kind, %id, total = summary.total, "removed entry");
            Some(tracker.snapshot())
        }
        None => {
            debug!(%kind, %id, "no entry to remove");
            None
        }
    }
}

async fn delete_entry(
    state: &AppState,
    kind: EntryKind,
    id: EntryId,
) -> Result<Json<TrackerSnapshot>, AppError> {
    let missing = format!("no {kind} with id '{id}'");
    remove_entry(state, kind, id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found(missing))
}
