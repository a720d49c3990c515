use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

/// The only two failure modes this API surfaces. Every other operation
/// succeeds unconditionally, including deletes of missing records.
#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    NotFound(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    // Single code path for every failure envelope the API emits.
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::Unauthorized(msg) | ApiError::NotFound(msg) => msg,
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "message": message
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_variants() {
        assert_eq!(
            ApiError::Unauthorized("Invalid credentials".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("Case not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn display_prefixes_the_kind() {
        let err = ApiError::NotFound("User not found".into());
        assert_eq!(err.to_string(), "Not found: User not found");
    }
}
