use std::{cmp::Ordering, collections::BTreeMap};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::TableError;

/// Option labels a quiz question is expected to carry, in display order.
pub const OPTION_LABELS: [&str; 4] = ["a", "b", "c", "d"];

/// One question as the model is asked to emit it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub mcq: String,
    pub options: BTreeMap<String, String>, // option label -> option text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct: Option<String>, // one of the option labels when present
}

impl QuizQuestion {
    /// Reads a question leniently: missing fields become empty, scalar values
    /// are rendered as text. Only a non-object entry is rejected.
    pub fn from_value(key: &str, value: &Value) -> Result<Self, TableError> {
        let Value::Object(fields) = value else {
            return Err(TableError::MalformedInput(format!(
                "question '{}' is not an object",
                key
            )));
        };

        let options = match fields.get("options") {
            Some(Value::Object(options)) => options
                .iter()
                .map(|(label, text)| (label.clone(), value_text(text)))
                .collect(),
            _ => BTreeMap::new(),
        };

        let correct = fields
            .get("correct")
            .map(value_text)
            .filter(|label| !label.is_empty());

        Ok(Self {
            mcq: fields.get("mcq").map(value_text).unwrap_or_default(),
            options,
            correct,
        })
    }

    pub fn option_text(&self, label: &str) -> &str {
        self.options.get(label).map(String::as_str).unwrap_or_default()
    }

    /// `"<label>: <text>"` for the designated answer, empty when there is none.
    pub fn correct_answer(&self) -> String {
        match self.correct.as_deref() {
            Some(label) => format!("{}: {}", label, self.option_text(label)),
            None => String::new(),
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Ordering key for questions: digit-string keys first by numeric value,
/// every other key afterwards in lexical order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionKey {
    Numeric(String),
    Label(String),
}

impl QuestionKey {
    pub fn parse(key: &str) -> Self {
        if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
            QuestionKey::Numeric(key.to_string())
        } else {
            QuestionKey::Label(key.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            QuestionKey::Numeric(key) | QuestionKey::Label(key) => key,
        }
    }
}

impl Ord for QuestionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (QuestionKey::Numeric(a), QuestionKey::Numeric(b)) => {
                // Arbitrary-length digit strings compare by value without parsing.
                let a_digits = a.trim_start_matches('0');
                let b_digits = b.trim_start_matches('0');
                a_digits
                    .len()
                    .cmp(&b_digits.len())
                    .then_with(|| a_digits.cmp(b_digits))
                    .then_with(|| a.cmp(b))
            }
            (QuestionKey::Numeric(_), QuestionKey::Label(_)) => Ordering::Less,
            (QuestionKey::Label(_), QuestionKey::Numeric(_)) => Ordering::Greater,
            (QuestionKey::Label(a), QuestionKey::Label(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for QuestionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Questions keyed by their index, already in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedQuiz {
    pub questions: Vec<(QuestionKey, QuizQuestion)>,
}

impl ParsedQuiz {
    pub fn from_object(object: &Map<String, Value>) -> Result<Self, TableError> {
        let mut questions = object
            .iter()
            .map(|(key, value)| {
                QuizQuestion::from_value(key, value).map(|question| (QuestionKey::parse(key), question))
            })
            .collect::<Result<Vec<_>, TableError>>()?;
        questions.sort_by(|(a, _), (b, _)| a.cmp(b));

        Ok(Self { questions })
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
