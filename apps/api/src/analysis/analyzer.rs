//! Resume analyzer: pluggable, trait-based producer of [`AnalysisResult`]s.
//!
//! Default: `HeuristicAnalyzer` (keyword scoring + canned content, deterministic).
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>`, so handlers and tests can swap
//! the backend without touching routing code.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::content_selector::select_content;
use crate::analysis::scoring::calculate_ats_score;
use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::models::form::FormInput;

/// Implement this to change how a validated submission becomes an analysis.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, input: &FormInput) -> Result<AnalysisResult, AppError>;
}

/// Keyword heuristics behind a fixed artificial delay.
pub struct HeuristicAnalyzer {
    delay: Duration,
}

impl HeuristicAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ResumeAnalyzer for HeuristicAnalyzer {
    async fn analyze(&self, input: &FormInput) -> Result<AnalysisResult, AppError> {
        debug!("Simulating analysis latency of {:?}", self.delay);
        tokio::time::sleep(self.delay).await;

        let input = input.clone();
        let result = tokio::task::spawn_blocking(move || build_analysis(&input))
            .await
            .map_err(|e| AppError::AnalysisFailed(format!("analysis task aborted: {e}")))?;

        info!(
            "Analysis {} complete: total {}/100",
            result.id, result.ats_score.total
        );
        Ok(result)
    }
}

/// Scores the resume and assembles the full result. Pure apart from id and timestamp.
pub fn build_analysis(input: &FormInput) -> AnalysisResult {
    let ats_score = calculate_ats_score(&input.job_title, &input.resume_text);
    let content = select_content(input);

    AnalysisResult {
        id: Uuid::new_v4(),
        generated_at: Utc::now(),
        job_title: input.job_title.clone(),
        summary: content.summary,
        ats_score,
        improvements: content.improvements,
        rewritten_bullets: content.rewritten_bullets,
        missing_keywords: content.missing_keywords,
        recommendations: content.recommendations,
        github_insights: content.github_insights,
        linkedin_critique: content.linkedin_critique,
    }
}
