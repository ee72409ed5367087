//! mindwell-instruments
//!
//! Screening questionnaire definitions. Pure data, no storage dependency.
//! Defines item counts, answer weights, and severity bands for each
//! supported questionnaire, and scores submitted answers against them.

pub mod error;
pub mod instruments;
pub mod scoring;

use mindwell_core::models::assessment::{Assessment, AssessmentKey};

use error::InstrumentError;
use scoring::{ScoreResult, SeverityBand, ANSWER_MAX, STANDARD_WEIGHTS};

/// Trait implemented by each screening questionnaire.
pub trait Instrument: Send + Sync {
    /// Stable key used in submissions (e.g., `phq9`).
    fn key(&self) -> AssessmentKey;

    /// Human-readable title.
    fn title(&self) -> &str;

    fn description(&self) -> &str;

    /// Number of items; a submission must answer every one of them.
    fn item_count(&self) -> usize;

    /// Severity bands, inclusive on both ends, in ascending order.
    fn bands(&self) -> &[SeverityBand];

    /// Points awarded for each answer value, indexed by the answer.
    fn weights(&self) -> &[u32] {
        &STANDARD_WEIGHTS
    }

    /// The public definition served to clients.
    fn definition(&self) -> Assessment {
        Assessment {
            key: self.key(),
            title: self.title().to_string(),
            description: self.description().to_string(),
        }
    }

    /// Check the answer count and range, then sum the weighted answers and
    /// look up the severity label.
    fn score(&self, answers: &[i64]) -> Result<ScoreResult, InstrumentError> {
        if answers.len() != self.item_count() {
            return Err(InstrumentError::AnswerCount {
                expected: self.item_count(),
                actual: answers.len(),
            });
        }

        let weights = self.weights();
        let mut score: u32 = 0;
        for (index, &value) in answers.iter().enumerate() {
            let weight = usize::try_from(value)
                .ok()
                .and_then(|i| weights.get(i))
                .ok_or(InstrumentError::AnswerOutOfRange {
                    item: index + 1,
                    value,
                    max: ANSWER_MAX,
                })?;
            score += *weight;
        }

        Ok(ScoreResult {
            score,
            severity: scoring::severity_from_score(score, self.bands()).to_string(),
        })
    }
}

/// Return all registered instruments, in the order clients list them.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
    ]
}

/// Look up an instrument by its submission key.
pub fn get_instrument(key: &str) -> Option<Box<dyn Instrument>> {
    all_instruments()
        .into_iter()
        .find(|i| i.key().as_str() == key)
}
