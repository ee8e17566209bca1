use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a logged entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Meal,
    Workout,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Meal => "meal",
            EntryKind::Workout => "workout",
        }
    }

    /// Collection segment used in routes, e.g. `/meals`.
    pub fn plural(&self) -> &'static str {
        match self {
            EntryKind::Meal => "meals",
            EntryKind::Workout => "workouts",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logged meal or workout. Fields are fixed once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    id: EntryId,
    name: String,
    calories: f64,
}

impl Entry {
    pub fn new(id: EntryId, name: impl Into<String>, calories: f64) -> Self {
        Self {
            id,
            name: name.into(),
            calories,
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }
}

/// Raw text fields as submitted by the entry forms.
///
/// The JSON API shares this shape and may send `calories` as a number.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub calories: String,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerSummary {
    pub calorie_limit: u32,
    pub total: f64,
    pub consumed: f64,
    pub burned: f64,
    pub remaining: f64,
    pub progress: f64,
    pub over_limit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    pub summary: TrackerSummary,
    pub meals: Vec<Entry>,
    pub workouts: Vec<Entry>,
}
