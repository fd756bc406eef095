//! Server-rendered analysis page.
//!
//! The page is a pure function of a [`PageView`]: the session's form values, the
//! last result (if any), the in-flight flag and an optional alert message.

use crate::models::analysis::{AnalysisResult, TOTAL_MAX};
use crate::models::form::FormInput;
use crate::report::escape_html;
use crate::report::links::links_to_html;

/// Everything the page needs to render.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub form: &'a FormInput,
    pub result: Option<&'a AnalysisResult>,
    pub in_flight: bool,
    pub alert: Option<&'a str>,
}

const EXPORT_PATH: &str = "/api/v1/analysis/export";

const CSS_STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f1f5f9; color: #0f172a; }
header { background: #fff; border-bottom: 1px solid #e2e8f0; padding: 16px 32px; }
header h1 { margin: 0; font-size: 1.5rem; }
header p { margin: 4px 0 0; color: #475569; font-size: 0.9rem; }
main { display: grid; grid-template-columns: 1fr 2fr; gap: 32px; padding: 32px; }
.card { background: #fff; border: 1px solid #e2e8f0; border-radius: 12px; padding: 24px; margin-bottom: 24px; }
label { display: block; font-weight: 600; margin: 16px 0 6px; }
input, textarea { width: 100%; box-sizing: border-box; padding: 8px; border: 1px solid #cbd5e1; border-radius: 8px; }
textarea { min-height: 96px; }
textarea[name=resume_text] { min-height: 240px; }
button { margin-top: 24px; width: 100%; padding: 12px; border: 0; border-radius: 8px; background: #2563eb; color: #fff; font-weight: 600; }
button:disabled { background: #94a3b8; }
.alert { background: #fef2f2; border: 1px solid #fecaca; color: #991b1b; padding: 12px; border-radius: 8px; }
.total { font-size: 3rem; font-weight: 700; }
.strong { color: #16a34a; background: #f0fdf4; }
.fair { color: #ca8a04; background: #fefce8; }
.weak { color: #dc2626; background: #fef2f2; }
.total.strong, .total.fair, .total.weak { background: none; }
table { width: 100%; border-collapse: collapse; }
td, th { padding: 8px; border-bottom: 1px solid #e2e8f0; text-align: left; }
.keyword { display: inline-block; padding: 4px 10px; margin: 4px; border-radius: 999px; background: #fee2e2; color: #991b1b; }
.before { color: #991b1b; }
.after { color: #166534; }
.export { display: inline-block; padding: 8px 16px; border-radius: 8px; background: #16a34a; color: #fff; text-decoration: none; }
.link { color: #2563eb; font-weight: 500; }
"#;

// Keeps the submit button disabled until both required fields have text.
const FORM_SCRIPT: &str = r#"
(function () {
  var form = document.getElementById('analysis-form');
  if (!form) return;
  var button = form.querySelector('button');
  if (button.dataset.busy === 'true') return;
  function sync() {
    var ready = form.job_title.value.trim() !== '' && form.resume_text.value.trim() !== '';
    button.disabled = !ready;
  }
  form.addEventListener('input', sync);
  form.addEventListener('submit', function () { button.disabled = true; button.textContent = 'Analyzing...'; });
  sync();
})();
"#;

/// Renders the complete HTML document.
pub fn render_page(view: &PageView<'_>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("<title>MicroMentor AI - ATS Resume Simulator</title>\n");
    html.push_str("<style>");
    html.push_str(CSS_STYLES);
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str("<header>\n<h1>MicroMentor AI</h1>\n");
    html.push_str("<p>ATS Resume Simulator &amp; Career Mentor</p>\n</header>\n");

    html.push_str("<main>\n<section>\n");
    if let Some(alert) = view.alert {
        html.push_str(&format!(
            "<div class=\"alert\" role=\"alert\">{}</div>\n",
            escape_html(alert)
        ));
    }
    push_form(&mut html, view);
    html.push_str("</section>\n<section>\n");

    match view.result {
        Some(result) => push_result(&mut html, result),
        None => html.push_str(
            "<div class=\"card\"><h2>Ready for Analysis</h2>\
             <p>Enter your target role and resume content to get a detailed ATS compatibility \
             score and personalized improvement suggestions.</p></div>\n",
        ),
    }

    html.push_str("</section>\n</main>\n");
    html.push_str("<script>");
    html.push_str(FORM_SCRIPT);
    html.push_str("</script>\n</body>\n</html>\n");

    html
}

fn push_form(html: &mut String, view: &PageView<'_>) {
    let form = view.form;

    html.push_str("<form id=\"analysis-form\" class=\"card\" method=\"post\" action=\"/\">\n");
    html.push_str("<h2>Resume Analysis Input</h2>\n");

    html.push_str("<label for=\"job_title\">Target Role *</label>\n");
    html.push_str(&format!(
        "<input id=\"job_title\" name=\"job_title\" type=\"text\" required \
         placeholder=\"e.g., Senior Software Engineer, Data Scientist\" value=\"{}\">\n",
        escape_html(&form.job_title)
    ));

    push_textarea(
        html,
        "resume_text",
        "Resume Content *",
        "Copy and paste your complete resume content here...",
        &form.resume_text,
        true,
    );
    push_textarea(
        html,
        "github_info",
        "GitHub Profile (Optional)",
        "Describe your GitHub activity, key repositories, technologies used...",
        form.github_info.as_deref().unwrap_or_default(),
        false,
    );
    push_textarea(
        html,
        "linkedin_info",
        "LinkedIn Summary (Optional)",
        "Paste your LinkedIn headline and summary section...",
        form.linkedin_info.as_deref().unwrap_or_default(),
        false,
    );

    if view.in_flight {
        html.push_str(
            "<button type=\"submit\" data-busy=\"true\" disabled>Analyzing...</button>\n",
        );
    } else {
        html.push_str("<button type=\"submit\">Analyze Resume</button>\n");
    }
    html.push_str("</form>\n");
}

fn push_textarea(
    html: &mut String,
    name: &str,
    label: &str,
    placeholder: &str,
    value: &str,
    required: bool,
) {
    html.push_str(&format!("<label for=\"{name}\">{label}</label>\n"));
    html.push_str(&format!(
        "<textarea id=\"{name}\" name=\"{name}\"{} placeholder=\"{}\">{}</textarea>\n",
        if required { " required" } else { "" },
        escape_html(placeholder),
        escape_html(value)
    ));
}

fn push_result(html: &mut String, result: &AnalysisResult) {
    let score = &result.ats_score;

    // Score overview
    html.push_str("<div class=\"card\" id=\"score\">\n<h2>ATS Compatibility Score</h2>\n");
    html.push_str(&format!(
        "<a class=\"export\" href=\"{EXPORT_PATH}\" download>Export Report</a>\n"
    ));
    html.push_str(&format!(
        "<p class=\"total {}\">{}/{TOTAL_MAX}</p>\n",
        score.total_tier().as_str(),
        score.total
    ));
    html.push_str("<table>\n<thead><tr><th>Category</th><th>Score</th></tr></thead>\n<tbody>\n");
    for category in score.categories() {
        html.push_str(&format!(
            "<tr><td>{}</td><td><span class=\"{}\">{}/{}</span></td></tr>\n",
            escape_html(category.label),
            category.tier().as_str(),
            category.score,
            category.max
        ));
    }
    html.push_str("</tbody>\n</table>\n</div>\n");

    // Summary
    html.push_str(&format!(
        "<div class=\"card\" id=\"summary\">\n<h2>Summary</h2>\n<p>{}</p>\n</div>\n",
        escape_html(&result.summary)
    ));

    // Improvements
    html.push_str(
        "<div class=\"card\" id=\"improvements\">\n<h2>Improvement Suggestions</h2>\n<ul>\n",
    );
    for tip in &result.improvements {
        let tip = tip.trim_start_matches('•').trim_start();
        html.push_str(&format!("<li>{}</li>\n", escape_html(tip)));
    }
    html.push_str("</ul>\n</div>\n");

    // Rewritten bullets
    html.push_str("<div class=\"card\" id=\"rewrites\">\n<h2>Rewritten Examples</h2>\n");
    for bullet in &result.rewritten_bullets {
        html.push_str(&format!(
            "<p class=\"before\"><strong>Before:</strong> {}</p>\n\
             <p class=\"after\"><strong>After:</strong> {}</p>\n",
            escape_html(&bullet.original),
            escape_html(&bullet.improved)
        ));
    }
    html.push_str("</div>\n");

    // Missing keywords
    html.push_str("<div class=\"card\" id=\"missing-keywords\">\n<h2>Missing Keywords</h2>\n<p>");
    for keyword in &result.missing_keywords {
        html.push_str(&format!(
            "<span class=\"keyword\">{}</span>",
            escape_html(keyword)
        ));
    }
    html.push_str("</p>\n</div>\n");

    // Recommendations
    html.push_str(
        "<div class=\"card\" id=\"recommendations\">\n<h2>Recommended Courses &amp; Certifications</h2>\n",
    );
    for group in &result.recommendations {
        html.push_str(&format!("<h3>{}</h3>\n<ul>\n", escape_html(&group.topic)));
        for item in &group.items {
            html.push_str(&format!("<li>{}</li>\n", links_to_html(item)));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</div>\n");

    if let Some(insights) = &result.github_insights {
        html.push_str("<div class=\"card\" id=\"github\">\n<h2>GitHub Analysis</h2>\n<ul>\n");
        for insight in insights {
            html.push_str(&format!("<li>{}</li>\n", escape_html(insight)));
        }
        html.push_str("</ul>\n</div>\n");
    }

    if let Some(critique) = &result.linkedin_critique {
        html.push_str(&format!(
            "<div class=\"card\" id=\"linkedin\">\n<h2>LinkedIn Critique</h2>\n<p>{}</p>\n</div>\n",
            escape_html(critique)
        ));
    }
}
