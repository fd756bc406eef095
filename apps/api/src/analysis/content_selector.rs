//! Content Selector: picks the canned guidance shown alongside the score.
//!
//! The job title alone decides the [`RoleTrack`]; resume content never affects
//! which missing keywords or recommendations are returned.

use crate::models::analysis::{RecommendationGroup, RewrittenBullet};
use crate::models::form::FormInput;

// ────────────────────────────────────────────────────────────────────────────
// Track selection
// ────────────────────────────────────────────────────────────────────────────

/// Job-title branch that drives missing keywords and recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleTrack {
    Software,
    Data,
    Product,
    General,
}

/// Ordered (tokens, track) table. A title matches a row if it contains any of its tokens.
const TRACK_TABLE: &[(&[&str], RoleTrack)] = &[
    (&["software", "developer"], RoleTrack::Software),
    (&["data"], RoleTrack::Data),
    (&["product"], RoleTrack::Product),
];

impl RoleTrack {
    pub fn for_job_title(job_title: &str) -> Self {
        let title = job_title.to_lowercase();
        TRACK_TABLE
            .iter()
            .find(|(tokens, _)| tokens.iter().any(|token| title.contains(token)))
            .map(|(_, track)| *track)
            .unwrap_or(RoleTrack::General)
    }

    pub fn missing_keywords(&self) -> &'static [&'static str] {
        match self {
            RoleTrack::Software => &[
                "microservices",
                "containerization",
                "ci/cd",
                "cloud architecture",
                "system design",
            ],
            RoleTrack::Data => &[
                "machine learning",
                "data pipeline",
                "statistical analysis",
                "data visualization",
                "big data",
            ],
            RoleTrack::Product => &[
                "product roadmap",
                "user stories",
                "market analysis",
                "competitive analysis",
                "product metrics",
            ],
            RoleTrack::General => &[
                "strategic planning",
                "cross-functional collaboration",
                "process improvement",
                "stakeholder management",
                "performance metrics",
            ],
        }
    }

    pub fn recommendations(&self) -> &'static [(&'static str, [&'static str; 2])] {
        match self {
            RoleTrack::Data => DATA_RECOMMENDATIONS,
            RoleTrack::Software => SOFTWARE_RECOMMENDATIONS,
            RoleTrack::Product => PRODUCT_RECOMMENDATIONS,
            RoleTrack::General => GENERAL_RECOMMENDATIONS,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static content
// ────────────────────────────────────────────────────────────────────────────

const DATA_RECOMMENDATIONS: &[(&str, [&str; 2])] = &[
    (
        "Data Science Certifications",
        [
            "[Google Data Analytics Professional Certificate – Coursera](https://www.coursera.org/professional-certificates/google-data-analytics)",
            "[IBM Data Science Professional Certificate – Coursera](https://www.coursera.org/professional-certificates/ibm-data-science)",
        ],
    ),
    (
        "Machine Learning & Analytics",
        [
            "[Machine Learning Course – Stanford/Coursera](https://www.coursera.org/learn/machine-learning)",
            "[SQL for Data Analysis – Udacity](https://www.udacity.com/course/sql-for-data-analysis--ud198)",
        ],
    ),
    (
        "Programming & Tools",
        [
            "[Python for Data Science – freeCodeCamp](https://www.freecodecamp.org/learn/data-analysis-with-python/)",
            "[Tableau Public Training – Free](https://public.tableau.com/en-us/s/resources)",
        ],
    ),
];

const SOFTWARE_RECOMMENDATIONS: &[(&str, [&str; 2])] = &[
    (
        "Cloud Certifications",
        [
            "[AWS Solutions Architect Associate – AWS Training](https://aws.amazon.com/training/learn-about/architect/)",
            "[Microsoft Azure Fundamentals – Microsoft Learn](https://docs.microsoft.com/en-us/learn/certifications/azure-fundamentals/)",
        ],
    ),
    (
        "System Design & Architecture",
        [
            "[System Design Interview Course – Educative](https://www.educative.io/courses/grokking-the-system-design-interview)",
            "[Microservices Patterns – Udemy](https://www.udemy.com/course/microservices-with-spring-boot-and-spring-cloud/)",
        ],
    ),
    (
        "Programming Skills",
        [
            "[Full Stack Open – University of Helsinki](https://fullstackopen.com/en/)",
            "[LeetCode Premium – Algorithm Practice](https://leetcode.com/premium/)",
        ],
    ),
];

const PRODUCT_RECOMMENDATIONS: &[(&str, [&str; 2])] = &[
    (
        "Product Management",
        [
            "[Google Project Management Certificate – Coursera](https://www.coursera.org/professional-certificates/google-project-management)",
            "[Product Management Fundamentals – Udemy](https://www.udemy.com/course/become-a-product-manager-learn-the-skills-get-a-job/)",
        ],
    ),
    (
        "Analytics & Research",
        [
            "[Google Analytics Individual Qualification – Google](https://skillshop.exceedlms.com/student/path/2938-google-analytics-individual-qualification)",
            "[User Experience Research – Coursera](https://www.coursera.org/learn/user-experience-research)",
        ],
    ),
    (
        "Business Strategy",
        [
            "[Strategic Management – Wharton/Coursera](https://www.coursera.org/learn/wharton-strategic-management)",
            "[Lean Startup Methodology – Udacity](https://www.udacity.com/course/how-to-build-a-startup--ep245)",
        ],
    ),
];

const GENERAL_RECOMMENDATIONS: &[(&str, [&str; 2])] = &[
    (
        "Professional Certifications",
        [
            "[LinkedIn Learning Paths – LinkedIn](https://www.linkedin.com/learning/)",
            "[Coursera Professional Certificates](https://www.coursera.org/professional-certificates)",
        ],
    ),
    (
        "Skill Development",
        [
            "[Udemy Business Skills Courses](https://www.udemy.com/courses/business/)",
            "[edX Professional Education](https://www.edx.org/professional-education)",
        ],
    ),
    (
        "Industry Knowledge",
        [
            "[Harvard Business Review Online Courses](https://hbr.org/courses/)",
            "[MasterClass Professional Development](https://www.masterclass.com/)",
        ],
    ),
];

const IMPROVEMENT_TIPS: &[&str] = &[
    "• Add specific metrics and quantifiable results (e.g., 'Increased system performance by 40%' instead of 'Improved performance')",
    "• Include more industry-specific keywords and technical terms relevant to the target role",
    "• Use stronger action verbs at the beginning of bullet points (Architected, Spearheaded, Optimized)",
    "• Ensure consistent formatting throughout the document with proper bullet points and spacing",
    "• Add a skills section with relevant technical and soft skills clearly listed",
];

const REWRITE_EXAMPLES: &[(&str, &str)] = &[
    (
        "Worked on improving system performance",
        "Optimized database queries and implemented caching strategies, resulting in 45% faster response times and improved user experience for 10,000+ daily active users",
    ),
    (
        "Managed team projects",
        "Led cross-functional team of 8 developers and designers through 3 major product releases, delivering projects 15% ahead of schedule while maintaining 99.9% uptime",
    ),
];

const GITHUB_INSIGHTS: &[&str] = &[
    "Good commit frequency showing consistent development activity",
    "Strong variety of technologies in repository stack",
    "Could benefit from more detailed README files and project documentation",
    "Consider adding more collaborative projects to showcase teamwork",
];

const LINKEDIN_CRITIQUE: &str = "Your LinkedIn summary effectively highlights your technical skills but could be strengthened by adding specific achievements and quantifiable results. Consider including a call-to-action and showcasing your passion for the industry.";

// ────────────────────────────────────────────────────────────────────────────
// Selection
// ────────────────────────────────────────────────────────────────────────────

/// Everything in an analysis result except the score and run metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedContent {
    pub summary: String,
    pub improvements: Vec<String>,
    pub rewritten_bullets: Vec<RewrittenBullet>,
    pub missing_keywords: Vec<String>,
    pub recommendations: Vec<RecommendationGroup>,
    pub github_insights: Option<Vec<String>>,
    pub linkedin_critique: Option<String>,
}

/// Selects the canned content for a submission.
pub fn select_content(input: &FormInput) -> SelectedContent {
    let track = RoleTrack::for_job_title(&input.job_title);

    SelectedContent {
        summary: build_summary(&input.job_title),
        improvements: to_owned_list(IMPROVEMENT_TIPS),
        rewritten_bullets: REWRITE_EXAMPLES
            .iter()
            .map(|(original, improved)| RewrittenBullet {
                original: original.to_string(),
                improved: improved.to_string(),
            })
            .collect(),
        missing_keywords: to_owned_list(track.missing_keywords()),
        recommendations: track
            .recommendations()
            .iter()
            .map(|(topic, items)| RecommendationGroup {
                topic: topic.to_string(),
                items: to_owned_list(items),
            })
            .collect(),
        github_insights: input.github_notes().map(|_| to_owned_list(GITHUB_INSIGHTS)),
        linkedin_critique: input.linkedin_notes().map(|_| LINKEDIN_CRITIQUE.to_string()),
    }
}

fn build_summary(job_title: &str) -> String {
    format!(
        "Your resume demonstrates solid foundational experience relevant to {job_title} roles. \
         You show technical competency and practical application of key skills. However, there \
         are opportunities to strengthen keyword optimization, quantify achievements more \
         effectively, and better align your experience narrative with ATS requirements."
    )
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
