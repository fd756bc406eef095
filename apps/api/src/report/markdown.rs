//! Markdown report export.
//!
//! Section order is fixed: title, target role, summary, score table, improvement
//! suggestions, rewritten examples, missing keywords, recommendations, optional
//! GitHub analysis, optional LinkedIn critique, footer. Rendering is a pure
//! function of the result, so exporting the same result twice is byte-identical.

use std::sync::OnceLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

use crate::models::analysis::{AnalysisResult, TOTAL_MAX};

pub const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

const REPORT_TITLE: &str = "# MicroMentor AI - ATS Resume Analysis Report";
const REPORT_FOOTER: &str = "*Generated by MicroMentor AI - ATS Resume Simulator*";

static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();

// RFC 5987 attr-chars left unescaped in `filename*`.
const FILENAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Renders the full markdown report for an analysis.
pub fn render_report(result: &AnalysisResult) -> String {
    let github_section = result
        .github_insights
        .as_ref()
        .map(|insights| format!("## GitHub Analysis\n{}\n", bullet_list(insights)))
        .unwrap_or_default();
    let linkedin_section = result
        .linkedin_critique
        .as_ref()
        .map(|critique| format!("## LinkedIn Critique\n{critique}"))
        .unwrap_or_default();

    format!(
        "{REPORT_TITLE}\n\
         \n\
         ## Target Role: {job_title}\n\
         \n\
         ## Summary\n\
         {summary}\n\
         \n\
         ## ATS Score: {total}/{TOTAL_MAX}\n\
         \n\
         {score_table}\n\
         \n\
         ## Improvement Suggestions\n\
         {improvements}\n\
         \n\
         ## Rewritten Examples\n\
         {rewrites}\n\
         \n\
         ## Missing Keywords\n\
         {missing}\n\
         \n\
         ## Recommended Courses & Certifications\n\
         {recommendations}\n\
         \n\
         {github_section}\n\
         \n\
         {linkedin_section}\n\
         \n\
         ---\n\
         {REPORT_FOOTER}\n",
        job_title = result.job_title,
        summary = result.summary,
        total = result.ats_score.total,
        score_table = score_table(result),
        improvements = result.improvements.join("\n"),
        rewrites = rewrites(result),
        missing = bullet_list(&result.missing_keywords),
        recommendations = recommendations(result),
    )
}

fn score_table(result: &AnalysisResult) -> String {
    let mut rows = vec![
        "| Category | Score | Max Points |".to_string(),
        "|----------|-------|------------|".to_string(),
    ];
    rows.extend(
        result
            .ats_score
            .categories()
            .iter()
            .map(|c| format!("| {} | {} | {} |", c.label, c.score, c.max)),
    );
    rows.push(format!(
        "| **Total** | **{}** | **{TOTAL_MAX}** |",
        result.ats_score.total
    ));
    rows.join("\n")
}

fn rewrites(result: &AnalysisResult) -> String {
    result
        .rewritten_bullets
        .iter()
        .map(|b| format!("**Before:** {}\n**After:** {}", b.original, b.improved))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn recommendations(result: &AnalysisResult) -> String {
    result
        .recommendations
        .iter()
        .map(|group| format!("### {}\n{}", group.topic, bullet_list(&group.items)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replaces each whitespace run with `-`, then lowercases.
pub fn slugify(job_title: &str) -> String {
    let re = WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex is valid"));
    re.replace_all(job_title, "-").to_lowercase()
}

/// Download filename for a report: `ats-analysis-<slug>.md`.
pub fn report_filename(job_title: &str) -> String {
    format!("ats-analysis-{}.md", slugify(job_title))
}

/// `Content-Disposition` value for the report download.
///
/// `filename` is an ASCII fallback with unsafe characters replaced by `_`;
/// `filename*` carries the exact slugged name, UTF-8 percent-encoded (RFC 6266).
pub fn content_disposition(job_title: &str) -> String {
    let filename = report_filename(job_title);
    let fallback: String = filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();
    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        utf8_percent_encode(&filename, FILENAME_ENCODE_SET)
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
