use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::SourceDocument,
        dto::{
            request::{GenerateQuizQuery, OutputFormat},
            response::GeneratedQuizDto,
        },
    },
    services::{
        http_helpers::{csv_attachment, quiz_csv_filename, success_json},
        quiz_table::to_csv,
    },
};

#[post("/api/quizzes")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    query: web::Query<GenerateQuizQuery>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let document = SourceDocument::from_upload(query.filename.as_str(), body.to_vec())?;

    let quiz = state
        .quiz_service
        .generate_quiz(document, query.quiz_request())
        .await?;

    match query.format {
        OutputFormat::Json => Ok(success_json(GeneratedQuizDto::from(quiz))),
        OutputFormat::Csv => {
            let rows = quiz.table.map_err(AppError::from)?;
            Ok(csv_attachment(quiz_csv_filename(&query.subject), to_csv(&rows)?))
        }
    }
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok"
    }))
}
