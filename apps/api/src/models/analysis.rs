use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const KEYWORD_MATCH_MAX: u32 = 25;
pub const SKILLS_TOOLS_MAX: u32 = 25;
pub const EXPERIENCE_ALIGNMENT_MAX: u32 = 20;
pub const FORMATTING_MAX: u32 = 15;
pub const EDUCATION_CERTS_MAX: u32 = 15;
pub const TOTAL_MAX: u32 = 100;

/// Five capped sub-scores and their sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keyword_match: u32,        // 0 – 25
    pub skills_tools: u32,         // 0 – 25
    pub experience_alignment: u32, // 0 – 20
    pub formatting: u32,           // 0 – 15
    pub education_certs: u32,      // 0 – 15
    pub total: u32,                // 0 – 100
}

/// One row of the score table: label, points earned and points available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryScore {
    pub label: &'static str,
    pub score: u32,
    pub max: u32,
}

impl CategoryScore {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::classify(self.score, self.max)
    }
}

impl ScoreBreakdown {
    /// Sub-scores in display order, with the labels used by the page and the report.
    pub fn categories(&self) -> [CategoryScore; 5] {
        [
            CategoryScore {
                label: "Keyword Match with Target Role",
                score: self.keyword_match,
                max: KEYWORD_MATCH_MAX,
            },
            CategoryScore {
                label: "Relevant Skills & Tools",
                score: self.skills_tools,
                max: SKILLS_TOOLS_MAX,
            },
            CategoryScore {
                label: "Experience Alignment",
                score: self.experience_alignment,
                max: EXPERIENCE_ALIGNMENT_MAX,
            },
            CategoryScore {
                label: "Formatting Quality",
                score: self.formatting,
                max: FORMATTING_MAX,
            },
            CategoryScore {
                label: "Education & Certifications",
                score: self.education_certs,
                max: EDUCATION_CERTS_MAX,
            },
        ]
    }

    pub fn total_tier(&self) -> ScoreTier {
        ScoreTier::classify(self.total, TOTAL_MAX)
    }
}

/// Coarse rating band of a score relative to its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Strong, // ≥ 80%
    Fair,   // 60 – 79%
    Weak,   // < 60%
}

impl ScoreTier {
    pub fn classify(score: u32, max: u32) -> Self {
        if max == 0 {
            return ScoreTier::Weak;
        }
        let percentage = score as f64 / max as f64 * 100.0;
        if percentage >= 80.0 {
            ScoreTier::Strong
        } else if percentage >= 60.0 {
            ScoreTier::Fair
        } else {
            ScoreTier::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreTier::Strong => "strong",
            ScoreTier::Fair => "fair",
            ScoreTier::Weak => "weak",
        }
    }
}

/// A vague resume bullet and its quantified rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewrittenBullet {
    pub original: String,
    pub improved: String,
}

/// A recommendation topic with its markdown-link items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationGroup {
    pub topic: String,
    pub items: Vec<String>,
}

/// Full output of one analysis run. Replaced wholesale by the next successful run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub job_title: String,
    pub summary: String,
    pub ats_score: ScoreBreakdown,
    pub improvements: Vec<String>,
    pub rewritten_bullets: Vec<RewrittenBullet>,
    pub missing_keywords: Vec<String>,
    pub recommendations: Vec<RecommendationGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_insights: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_critique: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(ScoreTier::classify(20, 25), ScoreTier::Strong); // 80%
        assert_eq!(ScoreTier::classify(15, 25), ScoreTier::Fair); // 60%
        assert_eq!(ScoreTier::classify(14, 25), ScoreTier::Weak);
        assert_eq!(ScoreTier::classify(0, 0), ScoreTier::Weak);
    }

    #[test]
    fn test_categories_max_points_sum_to_total_max() {
        let sum: u32 = ScoreBreakdown::default()
            .categories()
            .iter()
            .map(|c| c.max)
            .sum();
        assert_eq!(sum, TOTAL_MAX);
    }

    #[test]
    fn test_total_tier_uses_hundred_scale() {
        let score = ScoreBreakdown {
            total: 79,
            ..Default::default()
        };
        assert_eq!(score.total_tier(), ScoreTier::Fair);
    }

    #[test]
    fn test_absent_optional_sections_not_serialized() {
        let result = AnalysisResult {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            job_title: "Designer".to_string(),
            summary: String::new(),
            ats_score: ScoreBreakdown::default(),
            improvements: vec![],
            rewritten_bullets: vec![],
            missing_keywords: vec![],
            recommendations: vec![],
            github_insights: None,
            linkedin_critique: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("github_insights").is_none());
        assert!(json.get("linkedin_critique").is_none());
        assert_eq!(json["ats_score"]["total"], 0);
    }
}
