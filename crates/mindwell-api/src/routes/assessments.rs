use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use mindwell_core::collections;
use mindwell_core::models::assessment::{Assessment, AssessmentResponse, AssessmentSubmission};
use mindwell_instruments::error::InstrumentError;
use mindwell_instruments::scoring::{SeverityBand, ANSWER_MAX};
use mindwell_instruments::{all_instruments, get_instrument};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[derive(Serialize)]
pub struct AssessmentDetail {
    #[serde(flatten)]
    assessment: Assessment,
    item_count: usize,
    answer_min: u8,
    answer_max: u8,
    bands: Vec<SeverityBand>,
}

pub async fn list_assessments() -> Json<Vec<Assessment>> {
    Json(all_instruments().iter().map(|i| i.definition()).collect())
}

pub async fn get_assessment_detail(
    Path(key): Path<String>,
) -> Result<Json<AssessmentDetail>, ApiError> {
    let instrument = get_instrument(&key)
        .ok_or_else(|| ApiError::NotFound(InstrumentError::UnknownInstrument(key).to_string()))?;

    Ok(Json(AssessmentDetail {
        assessment: instrument.definition(),
        item_count: instrument.item_count(),
        answer_min: 0,
        answer_max: ANSWER_MAX,
        bands: instrument.bands().to_vec(),
    }))
}

/// Score a questionnaire submission, store it if possible, and return it with
/// the computed score and severity.
pub async fn submit_assessment(
    State(state): State<AppState>,
    ApiJson(submission): ApiJson<AssessmentSubmission>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    let instrument = get_instrument(&submission.assessment_key).ok_or_else(|| {
        InstrumentError::UnknownInstrument(submission.assessment_key.clone())
    })?;

    let result = instrument.score(&submission.answers)?;

    let response = AssessmentResponse {
        assessment_key: instrument.key(),
        // score() has checked every answer is within 0..=ANSWER_MAX
        answers: submission.answers.iter().map(|&a| a as u8).collect(),
        score: Some(result.score),
        severity: Some(result.severity),
        student_email: submission.student_email,
    };

    state
        .persist(collections::ASSESSMENT_RESPONSES, &response)
        .await;

    Ok(Json(response))
}
