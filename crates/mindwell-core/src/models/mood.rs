use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::email::Email;
use crate::error::CoreError;

/// Bucket used in [`MoodStats::counts`] for records without a mood value.
pub const UNKNOWN_MOOD: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Mood {
    Great,
    Good,
    Okay,
    Low,
    Down,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoodEntry {
    pub mood: Mood,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub student_email: Option<Email>,
    #[serde(default)]
    pub timestamp: Option<MoodTimestamp>,
}

/// A client-supplied date-time, kept exactly as sent.
///
/// Accepts RFC 3339 instants (`Z` or a numeric offset) and naive local
/// date-times without an offset. The text is only checked, never normalized,
/// so an entry echoes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "String", into = "String")]
#[ts(export, type = "string")]
pub struct MoodTimestamp(String);

impl MoodTimestamp {
    pub fn parse(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        let valid = value.parse::<jiff::Timestamp>().is_ok()
            || value.parse::<jiff::civil::DateTime>().is_ok();
        if !valid {
            return Err(CoreError::InvalidTimestamp(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MoodTimestamp {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<MoodTimestamp> for String {
    fn from(timestamp: MoodTimestamp) -> Self {
        timestamp.0
    }
}

/// Aggregate view over every stored mood entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoodStats {
    pub total: u64,
    pub counts: BTreeMap<String, u64>,
}

impl MoodStats {
    /// Count stored documents by their `mood` field.
    ///
    /// Stored records are not re-validated: any string value gets its own
    /// bucket, and a missing, `null`, or non-string mood (a number, say) is
    /// counted as [`UNKNOWN_MOOD`] rather than under its JSON rendering.
    pub fn tally(docs: &[Value]) -> Self {
        let mut counts = BTreeMap::new();
        for doc in docs {
            let mood = doc
                .get("mood")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_MOOD);
            *counts.entry(mood.to_string()).or_insert(0) += 1;
        }

        Self {
            total: docs.len() as u64,
            counts,
        }
    }
}
