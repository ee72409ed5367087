use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Highest answer value on the four-point frequency scale.
pub const ANSWER_MAX: u8 = 3;

/// "Not at all" = 0 through "Nearly every day" = 3.
pub const STANDARD_WEIGHTS: [u32; ANSWER_MAX as usize + 1] = [0, 1, 2, 3];

/// Label returned when a score falls outside every band.
pub const UNKNOWN_SEVERITY: &str = "Unknown";

/// An inclusive score range mapped to a severity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityBand {
    pub min: u32,
    pub max: u32,
    pub label: &'static str,
}

impl SeverityBand {
    pub const fn new(min: u32, max: u32, label: &'static str) -> Self {
        Self { min, max, label }
    }

    pub fn contains(&self, score: u32) -> bool {
        (self.min..=self.max).contains(&score)
    }
}

/// Total score with its severity label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub score: u32,
    pub severity: String,
}

/// First band containing `score`, or [`UNKNOWN_SEVERITY`].
pub fn severity_from_score(score: u32, bands: &[SeverityBand]) -> &'static str {
    bands
        .iter()
        .find(|band| band.contains(score))
        .map(|band| band.label)
        .unwrap_or(UNKNOWN_SEVERITY)
}
