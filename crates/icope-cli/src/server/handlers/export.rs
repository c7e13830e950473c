//! CSV download handler.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// GET /api/export
///
/// The current submission as a CSV attachment. The document is re-derived on
/// every call; repeated downloads produce identical bytes and retain nothing.
pub async fn export_csv(State(state): State<AppState>) -> Result<Response, ApiError> {
    let submission = state.submission.read().await;
    let Some(submission) = submission.as_ref() else {
        return Err(ApiError::NotFound("No submission yet".to_string()));
    };

    let doc = submission.to_csv();

    // RFC 5987 encoding keeps the non-ASCII file name intact; the plain
    // filename is an ASCII fallback for older clients.
    let disposition = format!(
        "attachment; filename=\"export.csv\"; filename*=UTF-8''{}",
        urlencoding::encode(doc.file_name())
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        doc.bytes().to_vec(),
    )
        .into_response())
}
