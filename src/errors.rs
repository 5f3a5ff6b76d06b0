use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Message shown to the user for failures that are only meaningful in the logs.
pub const GENERIC_FAILURE_MESSAGE: &str = "Error";

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("unsupported file format: only PDF and text files are supported")]
    UnsupportedFormat(String),

    #[error("error reading the PDF file: {0}")]
    PdfRead(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Table error: {0}")]
    TableError(#[from] TableError),

    #[error("Model error: {0}")]
    ModelError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Why a quiz table could not be built from model output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("no quiz data found in the response")]
    NoData,

    #[error("malformed quiz data: {0}")]
    MalformedInput(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            AppError::PdfRead(_) => "PDF_READ_ERROR",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::TableError(_) => "TABLE_ERROR",
            AppError::ModelError(_) => "MODEL_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Text safe to show to the end user.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ModelError(_) | AppError::InternalError(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::PdfRead(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::TableError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ModelError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("Quiz generation failed: {:?}", self);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message(),
            code: self.status_code().as_u16(),
            kind: self.error_code(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::ModelError(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::InternalError(format!("CSV encoding error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
