//! Calorie tracker state.
//!
//! Holds the logged meals and workouts in insertion order. The net total is
//! derived from the two lists, so it always matches their contents. Every
//! mutation returns the derived values so the caller can render them without
//! reaching back into the tracker.

use crate::models::{Entry, EntryId, EntryKind, TrackerSnapshot, TrackerSummary};
use std::num::NonZeroU32;

pub const DEFAULT_CALORIE_LIMIT: NonZeroU32 = match NonZeroU32::new(2000) {
    Some(limit) => limit,
    None => unreachable!(),
};

#[derive(Debug, Clone)]
pub struct CalorieTracker {
    calorie_limit: NonZeroU32,
    meals: Vec<Entry>,
    workouts: Vec<Entry>,
}

impl Default for CalorieTracker {
    fn default() -> Self {
        Self::new(DEFAULT_CALORIE_LIMIT)
    }
}

impl CalorieTracker {
    pub fn new(calorie_limit: NonZeroU32) -> Self {
        Self {
            calorie_limit,
            meals: Vec::new(),
            workouts: Vec::new(),
        }
    }

    pub fn add_meal(&mut self, meal: Entry) -> TrackerSummary {
        self.meals.push(meal);
        self.summary()
    }

    pub fn add_workout(&mut self, workout: Entry) -> TrackerSummary {
        self.workouts.push(workout);
        self.summary()
    }

    /// Removes the first meal with `id`. Returns `None`, leaving the tracker
    /// untouched, when no meal matches.
    pub fn remove_meal(&mut self, id: &EntryId) -> Option<TrackerSummary> {
        take_first(&mut self.meals, id)?;
        Some(self.summary())
    }

    /// Removes the first workout with `id`. Returns `None` when nothing
    /// matches.
    pub fn remove_workout(&mut self, id: &EntryId) -> Option<TrackerSummary> {
        take_first(&mut self.workouts, id)?;
        Some(self.summary())
    }

    pub fn add(&mut self, kind: EntryKind, entry: Entry) -> TrackerSummary {
        match kind {
            EntryKind::Meal => self.add_meal(entry),
            EntryKind::Workout => self.add_workout(entry),
        }
    }

    pub fn remove(&mut self, kind: EntryKind, id: &EntryId) -> Option<TrackerSummary> {
        match kind {
            EntryKind::Meal => self.remove_meal(id),
            EntryKind::Workout => self.remove_workout(id),
        }
    }

    pub fn calorie_limit(&self) -> NonZeroU32 {
        self.calorie_limit
    }

    /// Net calories: consumed minus burned.
    pub fn total_calories(&self) -> f64 {
        self.consumed_total() - self.burned_total()
    }

    pub fn meals(&self) -> &[Entry] {
        &self.meals
    }

    pub fn workouts(&self) -> &[Entry] {
        &self.workouts
    }

    pub fn consumed_total(&self) -> f64 {
        sum_calories(&self.meals)
    }

    pub fn burned_total(&self) -> f64 {
        sum_calories(&self.workouts)
    }

    /// Budget left for the session. Negative once the limit is exceeded.
    pub fn remaining(&self) -> f64 {
        self.limit() - self.total_calories()
    }

    /// Share of the limit used, clamped to `0..=100` for the progress bar.
    pub fn progress_percentage(&self) -> f64 {
        let percentage = self.total_calories() / self.limit() * 100.0;
        percentage.clamp(0.0, 100.0)
    }

    pub fn is_over_limit(&self) -> bool {
        self.remaining() <= 0.0
    }

    pub fn summary(&self) -> TrackerSummary {
        let consumed = self.consumed_total();
        let burned = self.burned_total();
        TrackerSummary {
            calorie_limit: self.calorie_limit.get(),
            total: consumed - burned,
            consumed,
            burned,
            remaining: self.remaining(),
            progress: self.progress_percentage(),
            over_limit: self.is_over_limit(),
        }
    }

    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            summary: self.summary(),
            meals: self.meals.clone(),
            workouts: self.workouts.clone(),
        }
    }

    fn limit(&self) -> f64 {
        f64::from(self.calorie_limit.get())
    }
}

// Folds from +0.0 so an empty list reports `0`, not `-0`.
fn sum_calories(entries: &[Entry]) -> f64 {
    entries.iter().fold(0.0, |sum, entry| sum + entry.calories())
}

fn take_first(entries: &mut Vec<Entry>, id: &EntryId) -> Option<Entry> {
    let index = entries.iter().position(|entry| entry.id() == id)?;
    Some(entries.remove(index))
}
