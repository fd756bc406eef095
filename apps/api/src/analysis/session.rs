//! Analysis session: the single-user state record shared by the page and the API.
//!
//! Holds the last submitted form, the last successful result, and whether a run is
//! outstanding. At most one run is in flight; the flag is cleared by a drop guard so
//! an abandoned request (client gone mid-delay) never wedges the session.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{info, warn};

use crate::analysis::analyzer::ResumeAnalyzer;
use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::models::form::FormInput;

#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    pub form: FormInput,
    pub last_result: Option<AnalysisResult>,
    pub in_flight: bool,
}

pub type SharedSession = Arc<Mutex<AnalysisSession>>;

pub fn new_shared_session() -> SharedSession {
    Arc::new(Mutex::new(AnalysisSession::default()))
}

/// Clears `in_flight` when dropped.
struct InFlightGuard {
    session: SharedSession,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.session.lock().in_flight = false;
    }
}

/// Validates, runs the analyzer, and records the outcome in the session.
///
/// - Blank required fields → `Validation`, nothing else touched.
/// - Run already outstanding → `Conflict`.
/// - Analyzer error → returned as-is; the previous result stays in place.
/// - Success → result replaces the previous one and is returned.
pub async fn run_analysis(
    session: &SharedSession,
    analyzer: &dyn ResumeAnalyzer,
    input: FormInput,
) -> Result<AnalysisResult, AppError> {
    if let Err(e) = input.validate() {
        warn!("Rejected submission with blank required fields");
        return Err(e);
    }

    let _guard = {
        let mut state = session.lock();
        if state.in_flight {
            warn!("Rejected submission while another analysis is running");
            return Err(AppError::Conflict(
                "An analysis is already in progress. Please wait for it to finish.".to_string(),
            ));
        }
        state.in_flight = true;
        state.form = input.clone();
        InFlightGuard {
            session: Arc::clone(session),
        }
    };

    info!("Analyzing resume for target role '{}'", input.job_title);
    let result = analyzer.analyze(&input).await?;

    session.lock().last_result = Some(result.clone());
    Ok(result)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::{build_analysis, HeuristicAnalyzer};
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::Notify;

    struct FailingAnalyzer;

    #[async_trait]
    impl ResumeAnalyzer for FailingAnalyzer {
        async fn analyze(&self, _input: &FormInput) -> Result<AnalysisResult, AppError> {
            Err(AppError::AnalysisFailed("boom".to_string()))
        }
    }

    /// Blocks until released, so a run can be held open.
    struct GatedAnalyzer {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl ResumeAnalyzer for GatedAnalyzer {
        async fn analyze(&self, input: &FormInput) -> Result<AnalysisResult, AppError> {
            self.gate.notified().await;
            Ok(build_analysis(input))
        }
    }

    fn input(job_title: &str) -> FormInput {
        FormInput {
            job_title: job_title.to_string(),
            resume_text: "python sql".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_success_stores_result_and_clears_flag() {
        let session = new_shared_session();
        let analyzer = HeuristicAnalyzer::new(Duration::ZERO);

        let result = run_analysis(&session, &analyzer, input("Data Analyst"))
            .await
            .unwrap();

        let state = session.lock();
        assert!(!state.in_flight);
        assert_eq!(state.form.job_title, "Data Analyst");
        assert_eq!(state.last_result.as_ref().map(|r| r.id), Some(result.id));
    }

    #[tokio::test]
    async fn test_blank_input_produces_no_result() {
        let session = new_shared_session();
        let analyzer = HeuristicAnalyzer::new(Duration::ZERO);

        let err = run_analysis(&session, &analyzer, input(""))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        let state = session.lock();
        assert!(state.last_result.is_none());
        assert!(!state.in_flight);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_result() {
        let session = new_shared_session();
        let first = run_analysis(
            &session,
            &HeuristicAnalyzer::new(Duration::ZERO),
            input("Software Engineer"),
        )
        .await
        .unwrap();

        let err = run_analysis(&session, &FailingAnalyzer, input("Product Manager"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::AnalysisFailed(_)));
        let state = session.lock();
        assert!(!state.in_flight);
        assert_eq!(state.last_result.as_ref().map(|r| r.id), Some(first.id));
    }

    #[tokio::test]
    async fn test_second_submission_rejected_while_in_flight() {
        let session = new_shared_session();
        let gate = Arc::new(Notify::new());
        let analyzer = Arc::new(GatedAnalyzer {
            gate: Arc::clone(&gate),
        });

        let pending = {
            let session = Arc::clone(&session);
            let analyzer = Arc::clone(&analyzer);
            tokio::spawn(async move {
                run_analysis(&session, analyzer.as_ref(), input("Data Scientist")).await
            })
        };

        // Wait until the first run has claimed the session.
        while !session.lock().in_flight {
            tokio::task::yield_now().await;
        }

        let err = run_analysis(&session, analyzer.as_ref(), input("Designer"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        gate.notify_one();
        let first = pending.await.unwrap().unwrap();
        assert_eq!(first.job_title, "Data Scientist");
        assert!(!session.lock().in_flight);
    }

    #[tokio::test]
    async fn test_abandoned_run_releases_session() {
        let session = new_shared_session();
        let analyzer = GatedAnalyzer {
            gate: Arc::new(Notify::new()),
        };

        {
            let run = run_analysis(&session, &analyzer, input("Data Scientist"));
            tokio::pin!(run);
            // Poll once so the run claims the session, then drop it.
            let poll = poll_briefly(run.as_mut()).await;
            assert!(poll.is_none());
            assert!(session.lock().in_flight);
        }

        assert!(!session.lock().in_flight);
        assert!(session.lock().last_result.is_none());
    }

    async fn poll_briefly<F: std::future::Future + Unpin>(fut: F) -> Option<F::Output> {
        tokio::time::timeout(Duration::from_millis(10), fut).await.ok()
    }
}
