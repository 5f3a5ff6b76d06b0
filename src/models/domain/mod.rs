pub mod quiz_question;
pub mod quiz_row;
pub mod quiz_spec;
pub mod source_document;
pub use quiz_question::{ParsedQuiz, QuestionKey, QuizQuestion};
pub use quiz_row::{McqNumber, QuizRow};
pub use quiz_spec::QuizSpec;
pub use source_document::{DocumentKind, SourceDocument};
