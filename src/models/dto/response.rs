use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    errors::TableError,
    models::domain::QuizRow,
    services::{model_service::TokenUsage, quiz_service::GeneratedQuiz},
};

#[derive(Debug, Serialize)]
pub struct TableErrorDto {
    pub kind: &'static str,
    pub message: String,
}

impl From<&TableError> for TableErrorDto {
    fn from(err: &TableError) -> Self {
        let kind = match err {
            TableError::NoData => "no_data",
            TableError::MalformedInput(_) => "malformed_input",
        };
        TableErrorDto {
            kind,
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GeneratedQuizDto {
    pub run_id: String,
    pub review: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<QuizRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_error: Option<TableErrorDto>,
    pub usage: TokenUsage,
    pub generated_at: DateTime<Utc>,
}

impl From<GeneratedQuiz> for GeneratedQuizDto {
    fn from(quiz: GeneratedQuiz) -> Self {
        let (rows, table_error) = match quiz.table {
            Ok(rows) => (Some(rows), None),
            Err(err) => (None, Some(TableErrorDto::from(&err))),
        };

        GeneratedQuizDto {
            run_id: quiz.run_id.to_string(),
            review: quiz.review,
            rows,
            table_error,
            usage: quiz.usage,
            generated_at: quiz.generated_at,
        }
    }
}
