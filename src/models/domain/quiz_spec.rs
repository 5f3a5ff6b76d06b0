use validator::Validate;

use crate::errors::{AppError, AppResult};

pub const MIN_QUESTION_COUNT: u32 = 3;
pub const MAX_QUESTION_COUNT: u32 = 50;

/// Parameters for one quiz generation run. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Validate)]
pub struct QuizSpec {
    #[validate(range(min = 3, max = 50))]
    number: u32, // Requested question count
    #[validate(length(min = 1, max = 20))]
    subject: String,
    #[validate(length(min = 1, max = 20))]
    tone: String, // Complexity level, e.g. "Simple"
    #[validate(length(min = 1, message = "no text could be extracted from the document"))]
    text: String, // Source text the questions are drawn from
}

impl QuizSpec {
    pub fn new(
        number: u32,
        subject: impl Into<String>,
        tone: impl Into<String>,
        text: impl Into<String>,
    ) -> AppResult<Self> {
        let spec = Self {
            number,
            subject: subject.into().trim().to_string(),
            tone: tone.into().trim().to_string(),
            text: text.into(),
        };

        if spec.text.trim().is_empty() {
            return Err(AppError::ValidationError(
                "no text could be extracted from the document".to_string(),
            ));
        }
        spec.validate()?;

        Ok(spec)
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn tone(&self) -> &str {
        &self.tone
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
