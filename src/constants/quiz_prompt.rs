use once_cell::sync::Lazy;
use serde_json::{json, Value};

pub const QUIZ_GENERATION_TEMPLATE: &str = "
Text:{text}
You are an expert MCQ maker. Given the above text, it is your job to create a quiz of {number} multiple choice questions for {subject} students in {tone} tone.
Make sure the questions are not repeated and check all the questions to be conforming to the text as well.
Make sure to format your response like RESPONSE_JSON below and use it as a guide. Ensure to make {number} MCQs
QUIZ:
    # RESPONSE_JSON
    {response_json}
";

pub const QUIZ_GENERATION_VARIABLES: &[&str] = &["text", "number", "subject", "tone", "response_json"];

pub const QUIZ_REVIEW_TEMPLATE: &str = "
You are an expert English grammarian and writer. Given a Multiple Choice Quiz for {subject} students.
You need to evaluate the complexity of the question and give a complete analysis of the quiz. Use at most 50 words for complexity analysis.
If the quiz is not at par with the cognitive and analytical abilities of the students, update the quiz questions which need to be changed and adjust the tone such that it perfectly fits the student abilities.
Return the final quiz in the same JSON format as the original.
QUIZ MCQs:
{quiz}

Check from an expert English Writer of the above quiz:
";

pub const QUIZ_REVIEW_VARIABLES: &[&str] = &["subject", "quiz"];

/// Shape the model is asked to follow, rendered once.
pub static RESPONSE_JSON: Lazy<String> = Lazy::new(|| response_json_example().to_string());

fn response_json_example() -> Value {
    let question = json!({
        "mcq": "multiple choice question",
        "options": {
            "a": "choice here",
            "b": "choice here",
            "c": "choice here",
            "d": "choice here"
        },
        "correct": "correct answer"
    });

    json!({
        "1": question.clone(),
        "2": question.clone(),
        "3": question
    })
}
