// Resume analysis engine
// Implements: keyword tables, ATS scoring, content selection, the analyzer seam and
// the single-user session that serializes runs.

pub mod analyzer;
pub mod content_selector;
pub mod handlers;
pub mod keywords;
pub mod scoring;
pub mod session;
