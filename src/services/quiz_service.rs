use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult, TableError},
    models::{
        domain::{QuizRow, QuizSpec, SourceDocument},
        dto::request::QuizRequest,
    },
    services::{
        model_service::{ChatModel, TokenUsage},
        prompt_chain::QuizChain,
        quiz_table::build_quiz_table,
        text_extractor::TextExtractor,
    },
};

/// Outcome of one submission: the reviewed text is always kept, the table
/// only when the review contained a usable quiz.
#[derive(Debug)]
pub struct GeneratedQuiz {
    pub run_id: Uuid,
    pub review: String,
    pub table: Result<Vec<QuizRow>, TableError>,
    pub usage: TokenUsage,
    pub generated_at: DateTime<Utc>,
}

pub struct QuizService {
    extractor: Arc<dyn TextExtractor>,
    chain: QuizChain,
}

impl QuizService {
    pub fn new(extractor: Arc<dyn TextExtractor>, model: Arc<dyn ChatModel>) -> Self {
        Self {
            extractor,
            chain: QuizChain::new(model),
        }
    }

    pub async fn generate_quiz(
        &self,
        document: SourceDocument,
        request: QuizRequest,
    ) -> AppResult<GeneratedQuiz> {
        request.validate()?;

        let run_id = Uuid::new_v4();
        log::info!(
            "Generating {} MCQs on '{}' from '{}' (run {})",
            request.number,
            request.subject,
            document.filename,
            run_id
        );

        // PDF parsing is CPU-bound and pdf-extract may panic on hostile input.
        let extractor = Arc::clone(&self.extractor);
        let filename = document.filename.clone();
        let text = tokio::task::spawn_blocking(move || extractor.extract(&document))
            .await
            .map_err(|e| {
                AppError::InternalError(format!("text extraction of '{}' aborted: {}", filename, e))
            })??;
        let spec = QuizSpec::new(request.number, request.subject, request.tone, text.as_text())?;

        let output = self.chain.run(&spec).await?;
        let table = build_quiz_table(output.review.as_str());

        log::info!(
            "Run {} finished: total tokens {}, prompt tokens (input) {}, completion tokens (output) {}",
            run_id,
            output.usage.total_tokens,
            output.usage.prompt_tokens,
            output.usage.completion_tokens
        );
        match &table {
            Ok(rows) => log::info!("Run {} produced {} quiz rows", run_id, rows.len()),
            Err(err) => log::warn!("Run {} produced no table: {}", run_id, err),
        }

        Ok(GeneratedQuiz {
            run_id,
            review: output.review,
            table,
            usage: output.usage,
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        services::{
            model_service::{MockChatModel, ModelResponse},
            text_extractor::{ExtractedText, FileTextExtractor, MockTextExtractor},
        },
        test_utils::fixtures::{quiz_request, REVIEWED_QUIZ},
    };

    fn model_returning(review: &'static str) -> MockChatModel {
        let mut model = MockChatModel::new();
        model
            .expect_complete()
            .times(2)
            .returning(move |_| Ok(ModelResponse::from_text(review)));
        model
    }

    #[tokio::test]
    async fn generates_table_from_text_upload() {
        let service = QuizService::new(Arc::new(FileTextExtractor), Arc::new(model_returning(REVIEWED_QUIZ)));
        let document = SourceDocument::from_upload("math.txt", "Two plus two equals four.").unwrap();

        let quiz = service.generate_quiz(document, quiz_request()).await.unwrap();

        assert_eq!(quiz.review, REVIEWED_QUIZ);
        let rows = quiz.table.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].correct, "b: 4");
    }

    #[tokio::test]
    async fn keeps_review_when_table_cannot_be_built() {
        let service = QuizService::new(
            Arc::new(FileTextExtractor),
            Arc::new(model_returning("The quiz looks great, no changes needed.")),
        );
        let document = SourceDocument::from_upload("math.txt", "Two plus two equals four.").unwrap();

        let quiz = service.generate_quiz(document, quiz_request()).await.unwrap();

        assert_eq!(quiz.review, "The quiz looks great, no changes needed.");
        assert!(matches!(quiz.table, Err(TableError::MalformedInput(_))));
    }

    #[tokio::test]
    async fn invalid_request_never_reaches_extractor_or_model() {
        let mut extractor = MockTextExtractor::new();
        extractor.expect_extract().never();
        let mut model = MockChatModel::new();
        model.expect_complete().never();

        let service = QuizService::new(Arc::new(extractor), Arc::new(model));
        let document = SourceDocument::from_upload("math.txt", "text").unwrap();
        let request = QuizRequest {
            number: 2,
            ..quiz_request()
        };

        let result = service.generate_quiz(document, request).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn extraction_failure_never_reaches_model() {
        let mut extractor = MockTextExtractor::new();
        extractor
            .expect_extract()
            .times(1)
            .returning(|_| Err(AppError::PdfRead("trailer not found".to_string())));
        let mut model = MockChatModel::new();
        model.expect_complete().never();

        let service = QuizService::new(Arc::new(extractor), Arc::new(model));
        let document = SourceDocument::from_upload("scan.pdf", b"%PDF-1.4".to_vec()).unwrap();

        let result = service.generate_quiz(document, quiz_request()).await;
        assert!(matches!(result, Err(AppError::PdfRead(_))));
    }

    #[tokio::test]
    async fn panicking_extractor_becomes_internal_error() {
        struct PanickingExtractor;

        impl TextExtractor for PanickingExtractor {
            fn extract(&self, _document: &SourceDocument) -> AppResult<ExtractedText> {
                panic!("malformed cross-reference stream")
            }
        }

        let mut model = MockChatModel::new();
        model.expect_complete().never();

        let service = QuizService::new(Arc::new(PanickingExtractor), Arc::new(model));
        let document = SourceDocument::from_upload("hostile.pdf", b"%PDF-1.7".to_vec()).unwrap();

        let result = service.generate_quiz(document, quiz_request()).await;
        assert!(matches!(result, Err(AppError::InternalError(msg)) if msg.contains("hostile.pdf")));
    }

    #[tokio::test]
    async fn raw_text_upload_is_passed_to_model_lossily() {
        let mut extractor = MockTextExtractor::new();
        extractor
            .expect_extract()
            .returning(|_| Ok(ExtractedText::Raw(vec![b'o', b'k', 0xFF])));
        let mut model = MockChatModel::new();
        model.expect_complete().times(2).returning(|prompt| {
            if prompt.contains("You are an expert MCQ maker") {
                assert!(prompt.contains("ok\u{FFFD}"));
            }
            Ok(ModelResponse::from_text(REVIEWED_QUIZ))
        });

        let service = QuizService::new(Arc::new(extractor), Arc::new(model));
        let document = SourceDocument::from_upload("legacy.txt", vec![b'o', b'k', 0xFF]).unwrap();

        let quiz = service.generate_quiz(document, quiz_request()).await.unwrap();
        assert!(quiz.table.is_ok());
    }
}
