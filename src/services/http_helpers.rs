use actix_web::{
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    HttpResponse,
};

/// Creates a success JSON response
pub fn success_json<T: serde::Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(data)
}

/// Creates a CSV download response
pub fn csv_attachment(filename: impl Into<String>, body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename.into())],
        })
        .body(body)
}

/// File name offered for a subject's exported quiz
pub fn quiz_csv_filename(subject: &str) -> String {
    let subject: String = subject
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{}_quiz_output.csv", subject)
}
