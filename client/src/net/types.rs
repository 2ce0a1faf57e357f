//! Wire DTOs for the fitness API.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON. Response types default every
//! optional field so partially populated records still render.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Supported workout kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    #[default]
    Running,
    Walking,
    Cycling,
}

impl ActivityType {
    pub const ALL: [Self; 3] = [Self::Running, Self::Walking, Self::Cycling];

    /// Wire value, also used as the `<select>` option value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Running => "RUNNING",
            Self::Walking => "WALKING",
            Self::Cycling => "CYCLING",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "Walking",
            Self::Cycling => "Cycling",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }
}

/// In-progress activity form state, sent as the "create activity" body.
///
/// `duration` and `calories_burned` stay as raw input strings; the API does
/// the numeric parsing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDraft {
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub duration: String,
    pub calories_burned: String,
    #[serde(default)]
    pub additional_metrics: serde_json::Map<String, serde_json::Value>,
}

/// A recorded activity as returned by `GET /activities`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Activity identifier assigned by the API.
    pub id: String,
    /// Owning user (token `sub`), if echoed back.
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    /// Duration in minutes.
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub calories_burned: Option<i64>,
    /// ISO-8601 start time, if recorded.
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub additional_metrics: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// AI-generated feedback for one activity, from
/// `GET /recommendations/activity/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recommendation {
    pub id: Option<String>,
    pub activity_id: Option<String>,
    pub activity_type: Option<ActivityType>,
    /// Free-form analysis text.
    pub recommendation: String,
    pub improvements: Vec<String>,
    pub suggestions: Vec<String>,
    /// Safety guidelines.
    pub safety: Vec<String>,
    pub created_at: Option<String>,
}
