use serde::Deserialize;
use validator::Validate;

use crate::models::domain::quiz_spec::MIN_QUESTION_COUNT;

/// Form fields of one quiz submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct QuizRequest {
    #[validate(range(min = 3, max = 50))]
    pub number: u32,

    #[validate(length(min = 1, max = 20))]
    pub subject: String,

    #[validate(length(min = 1, max = 20))]
    pub tone: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

fn default_question_count() -> u32 {
    MIN_QUESTION_COUNT
}

/// Query string of `POST /api/quizzes`; the request body is the file itself.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateQuizQuery {
    pub filename: String,

    #[serde(default = "default_question_count")]
    pub number: u32,

    pub subject: String,

    pub tone: String,

    #[serde(default)]
    pub format: OutputFormat,
}

impl GenerateQuizQuery {
    pub fn quiz_request(&self) -> QuizRequest {
        QuizRequest {
            number: self.number,
            subject: self.subject.clone(),
            tone: self.tone.clone(),
        }
    }
}
