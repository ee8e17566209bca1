use crate::ids::IdGenerator;
use crate::models::{Entry, EntryForm};
use thiserror::Error;

/// Largest magnitude accepted for one entry. Keeps every total finite so the
/// JSON views never carry `null` in place of a number.
pub const MAX_ENTRY_CALORIES: f64 = 1_000_000_000.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("calories must be a number, got '{value}'")]
    InvalidCalories { value: String },

    #[error("calories must be within ±1000000000, got '{value}'")]
    CaloriesOutOfRange { value: String },
}

/// A validated name/calories pair, not yet given an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub name: String,
    pub calories: f64,
}

impl NewEntry {
    pub fn into_entry(self, ids: &dyn IdGenerator) -> Entry {
        Entry::new(ids.next_id(), self.name, self.calories)
    }
}

pub fn parse_entry(name: &str, calories: &str) -> Result<NewEntry, ValidationError> {
    let name = name.trim();
    let calories = calories.trim();
    if name.is_empty() || calories.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    let parsed = calories
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValidationError::InvalidCalories {
            value: calories.to_string(),
        })?;
    if parsed.abs() > MAX_ENTRY_CALORIES {
        return Err(ValidationError::CaloriesOutOfRange {
            value: calories.to_string(),
        });
    }

    Ok(NewEntry {
        name: name.to_string(),
        // Normalises `-0` so it renders as `0`.
        calories: parsed + 0.0,
    })
}

pub fn parse_form(form: &EntryForm) -> Result<NewEntry, ValidationError> {
    parse_entry(&form.name, &form.calories)
}
