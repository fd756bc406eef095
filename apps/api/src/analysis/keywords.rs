//! Fixed keyword tables used by the ATS scorer.
//!
//! The category of a job title is decided by an ordered token table: the first
//! token contained in the lowercased title wins. `developer` is an alias for the
//! software list, consulted only after every primary token has missed.

/// Which role-specific keyword list a job title maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordCategory {
    Software,
    Data,
    Product,
    Marketing,
    Design,
    General,
}

/// Primary category tokens, in priority order.
const CATEGORY_TOKENS: &[(&str, KeywordCategory)] = &[
    ("software", KeywordCategory::Software),
    ("data", KeywordCategory::Data),
    ("product", KeywordCategory::Product),
    ("marketing", KeywordCategory::Marketing),
    ("design", KeywordCategory::Design),
];

/// Secondary tokens, checked only when no primary token matched.
const ALIAS_TOKENS: &[(&str, KeywordCategory)] = &[("developer", KeywordCategory::Software)];

const SOFTWARE_KEYWORDS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "node",
    "api",
    "database",
    "git",
    "agile",
    "testing",
];

const DATA_KEYWORDS: &[&str] = &[
    "python",
    "sql",
    "machine learning",
    "statistics",
    "tableau",
    "excel",
    "analytics",
    "visualization",
    "pandas",
    "numpy",
];

const PRODUCT_KEYWORDS: &[&str] = &[
    "roadmap",
    "stakeholder",
    "metrics",
    "user research",
    "analytics",
    "agile",
    "scrum",
    "strategy",
    "market research",
    "kpi",
];

const MARKETING_KEYWORDS: &[&str] = &[
    "campaign",
    "analytics",
    "seo",
    "social media",
    "content",
    "brand",
    "conversion",
    "roi",
    "email marketing",
    "crm",
];

const DESIGN_KEYWORDS: &[&str] = &[
    "figma",
    "sketch",
    "adobe",
    "user experience",
    "wireframe",
    "prototype",
    "user interface",
    "design system",
    "usability",
    "accessibility",
];

const GENERAL_KEYWORDS: &[&str] = &[
    "leadership",
    "communication",
    "problem solving",
    "teamwork",
    "project management",
];

/// Words suggesting the candidate describes skill depth.
pub const SKILL_INDICATORS: &[&str] = &[
    "experience",
    "proficient",
    "skilled",
    "expert",
    "familiar",
    "knowledge",
    "years",
];

/// Action verbs suggesting concrete accomplishments.
pub const EXPERIENCE_INDICATORS: &[&str] = &[
    "developed",
    "implemented",
    "managed",
    "led",
    "created",
    "designed",
    "optimized",
    "improved",
];

pub const EDUCATION_KEYWORDS: &[&str] = &[
    "degree",
    "bachelor",
    "master",
    "phd",
    "certificate",
    "certification",
    "university",
    "college",
];

/// Characters counted as list bullets by the formatting check.
pub const BULLET_MARKERS: &[char] = &['•', '-', '*'];

impl KeywordCategory {
    /// Maps a job title to its keyword category. Case-insensitive substring match.
    pub fn detect(job_title: &str) -> Self {
        let title = job_title.to_lowercase();
        CATEGORY_TOKENS
            .iter()
            .chain(ALIAS_TOKENS)
            .find(|(token, _)| title.contains(token))
            .map(|(_, category)| *category)
            .unwrap_or(KeywordCategory::General)
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            KeywordCategory::Software => SOFTWARE_KEYWORDS,
            KeywordCategory::Data => DATA_KEYWORDS,
            KeywordCategory::Product => PRODUCT_KEYWORDS,
            KeywordCategory::Marketing => MARKETING_KEYWORDS,
            KeywordCategory::Design => DESIGN_KEYWORDS,
            KeywordCategory::General => GENERAL_KEYWORDS,
        }
    }
}
