//! ATS Scoring: deterministic keyword heuristics over the raw resume text.
//!
//! Algorithm:
//! 1. keyword_match        = found(category list) / len × 25
//! 2. skills_tools         = found(skill indicators) / 7 × 25
//! 3. experience_alignment = found(action verbs) / 8 × 20
//! 4. formatting           = 5 × [has digit] + 5 × [has bullet] + 5 × [500 < len < 3000]
//! 5. education_certs      = min(15, found(education keywords) / 3 × 15)
//!
//! Matching is exact substring on lowercased text; each keyword counts once.
//! Every sub-score is capped and rounded on its own, and the total is their sum.

use crate::analysis::keywords::{
    KeywordCategory, BULLET_MARKERS, EDUCATION_KEYWORDS, EXPERIENCE_INDICATORS, SKILL_INDICATORS,
};
use crate::models::analysis::{
    ScoreBreakdown, EDUCATION_CERTS_MAX, EXPERIENCE_ALIGNMENT_MAX, FORMATTING_MAX,
    KEYWORD_MATCH_MAX, SKILLS_TOOLS_MAX,
};

/// Resume length window (in characters, both ends exclusive) that earns formatting points.
const MIN_RESUME_CHARS: usize = 500;
const MAX_RESUME_CHARS: usize = 3000;

/// Points per satisfied formatting check.
const FORMATTING_CHECK_POINTS: u32 = 5;

/// Number of education keywords that saturates the education score.
const EDUCATION_SATURATION: f64 = 3.0;

/// Scores a resume against the keyword category implied by the job title.
pub fn calculate_ats_score(job_title: &str, resume_text: &str) -> ScoreBreakdown {
    let resume_lower = resume_text.to_lowercase();
    let category = KeywordCategory::detect(job_title);

    let keyword_match = scale(
        fraction_found(&resume_lower, category.keywords()),
        KEYWORD_MATCH_MAX,
    );
    let skills_tools = scale(
        fraction_found(&resume_lower, SKILL_INDICATORS),
        SKILLS_TOOLS_MAX,
    );
    let experience_alignment = scale(
        fraction_found(&resume_lower, EXPERIENCE_INDICATORS),
        EXPERIENCE_ALIGNMENT_MAX,
    );
    let formatting = formatting_score(resume_text);
    let education_certs = cap_and_round(
        count_found(&resume_lower, EDUCATION_KEYWORDS) as f64 / EDUCATION_SATURATION
            * EDUCATION_CERTS_MAX as f64,
        EDUCATION_CERTS_MAX,
    );

    ScoreBreakdown {
        keyword_match,
        skills_tools,
        experience_alignment,
        formatting,
        education_certs,
        total: keyword_match + skills_tools + experience_alignment + formatting + education_certs,
    }
}

/// Counts how many keywords occur at least once in the (already lowercased) text.
fn count_found(text_lower: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| text_lower.contains(*kw)).count()
}

fn fraction_found(text_lower: &str, keywords: &[&str]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    count_found(text_lower, keywords) as f64 / keywords.len() as f64
}

fn scale(fraction: f64, max: u32) -> u32 {
    cap_and_round(fraction * max as f64, max)
}

/// Caps at `max` and rounds half up. Inputs are never negative.
fn cap_and_round(raw: f64, max: u32) -> u32 {
    raw.clamp(0.0, max as f64).round() as u32
}

fn formatting_score(resume_text: &str) -> u32 {
    let has_numbers = resume_text.chars().any(|c| c.is_ascii_digit());
    let has_bullets = resume_text.contains(BULLET_MARKERS);
    let length = resume_text.chars().count();
    let has_proper_length = length > MIN_RESUME_CHARS && length < MAX_RESUME_CHARS;

    let score = [has_numbers, has_bullets, has_proper_length]
        .iter()
        .filter(|&&check| check)
        .count() as u32
        * FORMATTING_CHECK_POINTS;
    score.min(FORMATTING_MAX)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
