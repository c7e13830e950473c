//! Submission handlers.

use axum::{Json, extract::State};
use indexmap::IndexMap;

use icope::{AnswerRecord, Submission, SubmissionSummary};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// POST /api/submit
///
/// Body: a JSON object of field label -> answer, in form order. Replaces any
/// previous submission and responds with the full summary.
pub async fn submit(
    State(state): State<AppState>,
    Json(answers): Json<IndexMap<String, String>>,
) -> Json<SubmissionSummary> {
    let submission = Submission::new(AnswerRecord::from(answers));
    let summary = submission.summarize();

    *state.submission.write().await = Some(submission);

    Json(summary)
}

/// GET /api/submission
///
/// Summary of the current submission, 404 when nothing has been submitted.
pub async fn get_submission(
    State(state): State<AppState>,
) -> Result<Json<SubmissionSummary>, ApiError> {
    let submission = state.submission.read().await;
    match submission.as_ref() {
        Some(s) => Ok(Json(s.summarize())),
        None => Err(ApiError::NotFound("No submission yet".to_string())),
    }
}
