use std::fmt;

use serde::Serialize;

use crate::models::domain::quiz_question::{QuestionKey, QuizQuestion};

/// Column titles of the exported table, in order.
pub const QUIZ_TABLE_HEADERS: [&str; 7] = [
    "MCQ Number",
    "MCQ",
    "Option A",
    "Option B",
    "Option C",
    "Option D",
    "Correct",
];

/// Question number as displayed: the key as an integer when it is one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum McqNumber {
    Number(i64),
    Label(String),
}

impl McqNumber {
    pub fn from_key(key: &str) -> Self {
        match key.trim().parse::<i64>() {
            Ok(number) => McqNumber::Number(number),
            Err(_) => McqNumber::Label(key.to_string()),
        }
    }
}

impl fmt::Display for McqNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            McqNumber::Number(number) => write!(f, "{}", number),
            McqNumber::Label(label) => write!(f, "{}", label),
        }
    }
}

/// One flattened question, derived entirely from a parsed quiz.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizRow {
    pub mcq_number: McqNumber,
    pub mcq: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct: String, // "<label>: <text>" or empty
}

impl QuizRow {
    pub fn from_question(key: &QuestionKey, question: &QuizQuestion) -> Self {
        Self {
            mcq_number: McqNumber::from_key(key.as_str()),
            mcq: question.mcq.clone(),
            option_a: question.option_text("a").to_string(),
            option_b: question.option_text("b").to_string(),
            option_c: question.option_text("c").to_string(),
            option_d: question.option_text("d").to_string(),
            correct: question.correct_answer(),
        }
    }

    /// Cells in `QUIZ_TABLE_HEADERS` order.
    pub fn to_record(&self) -> [String; 7] {
        [
            self.mcq_number.to_string(),
            self.mcq.clone(),
            self.option_a.clone(),
            self.option_b.clone(),
            self.option_c.clone(),
            self.option_d.clone(),
            self.correct.clone(),
        ]
    }
}
