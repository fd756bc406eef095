//! Axum route handlers for the Analysis API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::analysis::session::run_analysis;
use crate::errors::{AppError, AppJson};
use crate::models::analysis::AnalysisResult;
use crate::models::form::FormInput;
use crate::report::markdown::{content_disposition, render_report, MARKDOWN_CONTENT_TYPE};
use crate::state::AppState;

/// POST /api/v1/analysis
///
/// Validates the submission, waits out the simulated latency, scores the resume
/// and stores the result as the session's latest.
pub async fn handle_analyze(
    State(state): State<AppState>,
    AppJson(request): AppJson<FormInput>,
) -> Result<Json<AnalysisResult>, AppError> {
    let result = run_analysis(&state.session, state.analyzer.as_ref(), request).await?;
    Ok(Json(result))
}

/// GET /api/v1/analysis
///
/// Returns the latest successful analysis.
pub async fn handle_latest(
    State(state): State<AppState>,
) -> Result<Json<AnalysisResult>, AppError> {
    latest_result(&state).map(Json)
}

/// GET /api/v1/analysis/export
///
/// Downloads the latest analysis as a markdown report.
pub async fn handle_export(State(state): State<AppState>) -> Result<Response, AppError> {
    let result = latest_result(&state)?;
    let report = render_report(&result);

    info!("Exporting analysis {} ({} bytes)", result.id, report.len());

    Ok((
        [
            (header::CONTENT_TYPE, MARKDOWN_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                content_disposition(&result.job_title),
            ),
        ],
        report,
    )
        .into_response())
}

fn latest_result(state: &AppState) -> Result<AnalysisResult, AppError> {
    state
        .session
        .lock()
        .last_result
        .clone()
        .ok_or_else(|| AppError::NotFound("No analysis has been run yet".to_string()))
}
