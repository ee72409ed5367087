use mindwell_core::models::assessment::AssessmentKey;

use crate::scoring::SeverityBand;
use crate::Instrument;

/// GAD-7: Generalized Anxiety Disorder scale, seven items.
/// Each item rated 0–3; total 0–21.
pub struct Gad7;

static BANDS: [SeverityBand; 4] = [
    SeverityBand::new(0, 4, "Minimal"),
    SeverityBand::new(5, 9, "Mild"),
    SeverityBand::new(10, 14, "Moderate"),
    SeverityBand::new(15, 21, "Severe"),
];

impl Instrument for Gad7 {
    fn key(&self) -> AssessmentKey {
        AssessmentKey::Gad7
    }

    fn title(&self) -> &str {
        "GAD-7 Anxiety Questionnaire"
    }

    fn description(&self) -> &str {
        "Measures severity of generalized anxiety over the last two weeks."
    }

    fn item_count(&self) -> usize {
        7
    }

    fn bands(&self) -> &[SeverityBand] {
        &BANDS
    }
}
