use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The four inputs of the analysis form.
///
/// Required fields default to empty so a missing field is reported by
/// [`FormInput::validate`] with the user-facing message rather than by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub resume_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_info: Option<String>,
}

impl FormInput {
    /// Rejects the submission when the job title or resume text is blank.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.job_title.trim().is_empty() || self.resume_text.trim().is_empty() {
            return Err(AppError::missing_fields());
        }
        Ok(())
    }

    /// GitHub notes, if any non-whitespace text was entered.
    pub fn github_notes(&self) -> Option<&str> {
        non_blank(self.github_info.as_deref())
    }

    /// LinkedIn notes, if any non-whitespace text was entered.
    pub fn linkedin_notes(&self) -> Option<&str> {
        non_blank(self.linkedin_info.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
