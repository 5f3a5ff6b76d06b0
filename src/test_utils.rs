#[cfg(test)]
pub mod fixtures {
    use crate::models::dto::request::QuizRequest;

    /// Review-stage output as a model typically returns it: analysis, then the quiz.
    pub const REVIEWED_QUIZ: &str = "Complexity analysis: simple arithmetic suited to the students.\n```json\n{\"1\": {\"mcq\": \"2+2?\", \"options\": {\"a\": \"3\", \"b\": \"4\", \"c\": \"5\", \"d\": \"6\"}, \"correct\": \"b\"}}\n```";

    /// Creates a valid submission for the minimum question count
    pub fn quiz_request() -> QuizRequest {
        QuizRequest {
            number: 3,
            subject: "Math".to_string(),
            tone: "Simple".to_string(),
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::quiz_table::build_quiz_table;
    use validator::Validate;

    #[test]
    fn test_fixtures_quiz_request_is_valid() {
        assert!(quiz_request().validate().is_ok());
    }

    #[test]
    fn test_fixtures_reviewed_quiz_builds_a_table() {
        let rows = build_quiz_table(REVIEWED_QUIZ).unwrap();
        assert_eq!(rows.len(), 1);
    }
}
