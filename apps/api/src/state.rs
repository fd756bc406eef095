use std::sync::Arc;

use crate::analysis::analyzer::{HeuristicAnalyzer, ResumeAnalyzer};
use crate::analysis::session::{new_shared_session, SharedSession};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Single-user session shared by the HTML page and the JSON API.
    pub session: SharedSession,
    /// Pluggable analyzer. Default: HeuristicAnalyzer with the configured delay.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
}

impl AppState {
    /// State with a fresh session and the heuristic analyzer using the configured delay.
    pub fn new(config: Config) -> Self {
        let analyzer = Arc::new(HeuristicAnalyzer::new(config.analysis_delay));
        AppState {
            config,
            session: new_shared_session(),
            analyzer,
        }
    }
}
