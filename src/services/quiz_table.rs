use serde_json::Value;

use crate::{
    errors::{AppError, AppResult, TableError},
    models::domain::{quiz_row::QUIZ_TABLE_HEADERS, ParsedQuiz, QuizRow},
    services::json_extractor::extract_embedded_json,
};

/// What the table builder accepts: an already structured quiz or model text.
#[derive(Clone, Debug)]
pub enum QuizInput {
    Structured(Value),
    Text(String),
}

impl From<Value> for QuizInput {
    fn from(value: Value) -> Self {
        QuizInput::Structured(value)
    }
}

impl From<String> for QuizInput {
    fn from(text: String) -> Self {
        QuizInput::Text(text)
    }
}

impl From<&str> for QuizInput {
    fn from(text: &str) -> Self {
        QuizInput::Text(text.to_string())
    }
}

/// Builds ordered table rows from a quiz mapping or text containing one.
///
/// Structured input is serialized first so both forms take the same parse
/// path. Failures are logged and returned as `TableError` rather than raised.
pub fn build_quiz_table(input: impl Into<QuizInput>) -> Result<Vec<QuizRow>, TableError> {
    let json = match input.into() {
        QuizInput::Structured(value) => value.to_string(),
        QuizInput::Text(text) => extract_embedded_json(&text).or(&text).to_string(),
    };

    let quiz = parse_quiz(&json).inspect_err(|err| {
        log::warn!("Could not build quiz table: {}", err);
    })?;

    Ok(quiz
        .questions
        .iter()
        .map(|(key, question)| QuizRow::from_question(key, question))
        .collect())
}

fn parse_quiz(json: &str) -> Result<ParsedQuiz, TableError> {
    if json.trim().is_empty() {
        return Err(TableError::NoData);
    }

    let value: Value = serde_json::from_str(json)
        .map_err(|e| TableError::MalformedInput(e.to_string()))?;

    match value {
        Value::Object(object) => {
            let quiz = ParsedQuiz::from_object(&object)?;
            if quiz.is_empty() {
                return Err(TableError::NoData);
            }
            Ok(quiz)
        }
        Value::Null => Err(TableError::NoData),
        Value::Array(items) if items.is_empty() => Err(TableError::NoData),
        Value::String(text) if text.is_empty() => Err(TableError::NoData),
        other => Err(TableError::MalformedInput(format!(
            "expected an object of questions, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Encodes rows as CSV with the display headers and no index column.
pub fn to_csv(rows: &[QuizRow]) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(QUIZ_TABLE_HEADERS)?;
    for row in rows {
        writer.write_record(row.to_record())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::InternalError(format!("CSV flush error: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| AppError::InternalError(format!("CSV encoding error: {}", e)))
}
