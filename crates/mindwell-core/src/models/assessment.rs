use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::email::Email;

/// Identifies one of the supported screening questionnaires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum AssessmentKey {
    Phq9,
    Gad7,
}

impl AssessmentKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phq9 => "phq9",
            Self::Gad7 => "gad7",
        }
    }
}

impl fmt::Display for AssessmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public definition of a questionnaire. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub key: AssessmentKey,
    pub title: String,
    pub description: String,
}

/// A submission as it arrives over the wire.
///
/// The key stays a plain string so an unknown questionnaire can be reported
/// with a specific message instead of a generic decoding error. Answers are
/// signed so negative values reach range validation. Any `score` or
/// `severity` the client sends is accepted and then discarded.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSubmission {
    pub assessment_key: String,
    pub answers: Vec<i64>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub student_email: Option<Email>,
}

/// A scored submission: what gets stored and what the caller receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResponse {
    pub assessment_key: AssessmentKey,
    pub answers: Vec<u8>,
    pub score: Option<u32>,
    pub severity: Option<String>,
    pub student_email: Option<Email>,
}
