use mindwell_core::models::assessment::AssessmentKey;

use crate::scoring::SeverityBand;
use crate::Instrument;

/// PHQ-9: Patient Health Questionnaire, nine depression items.
/// Each item rated 0–3 over the last two weeks; total 0–27.
pub struct Phq9;

static BANDS: [SeverityBand; 5] = [
    SeverityBand::new(0, 4, "Minimal"),
    SeverityBand::new(5, 9, "Mild"),
    SeverityBand::new(10, 14, "Moderate"),
    SeverityBand::new(15, 19, "Moderately Severe"),
    SeverityBand::new(20, 27, "Severe"),
];

impl Instrument for Phq9 {
    fn key(&self) -> AssessmentKey {
        AssessmentKey::Phq9
    }

    fn title(&self) -> &str {
        "PHQ-9 Depression Questionnaire"
    }

    fn description(&self) -> &str {
        "Screens for the presence and severity of depression over the last two weeks."
    }

    fn item_count(&self) -> usize {
        9
    }

    fn bands(&self) -> &[SeverityBand] {
        &BANDS
    }
}
