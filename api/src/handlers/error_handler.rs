//! Mapping of domain and request errors onto HTTP responses
//!
//! Authorization failures share one status and one message so a client cannot
//! tell which half of a token pair was rejected.

use actix_web::error::InternalError;
use actix_web::HttpResponse;
use validator::ValidationErrors;

use tp_core::errors::{DomainError, TokenError};
use tp_shared::{error_codes, ErrorResponse};

pub const UNAUTHORIZED_MESSAGE: &str = "Invalid or expired credentials";
pub const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Handle domain errors and convert them to HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::InvalidSubject { .. } => {
            tracing::info!("Rejected malformed subject identifier");
            HttpResponse::BadRequest().json(ErrorResponse::new(
                error_codes::INVALID_SUBJECT,
                "Invalid subject identifier",
            ))
        }
        DomainError::SubjectNotFound => HttpResponse::BadRequest().json(ErrorResponse::new(
            error_codes::NOT_FOUND,
            "Subject not found",
        )),
        DomainError::NoSuchCredential
        | DomainError::Token(TokenError::InvalidToken)
        | DomainError::Token(TokenError::RefreshMismatch) => HttpResponse::Unauthorized().json(
            ErrorResponse::new(error_codes::UNAUTHORIZED, UNAUTHORIZED_MESSAGE),
        ),
        DomainError::Token(TokenError::KeyUnavailable { .. })
        | DomainError::Token(TokenError::SigningFailed)
        | DomainError::Token(TokenError::EntropySourceFailed)
        | DomainError::StorageFailure { .. }
        | DomainError::Internal { .. } => {
            tracing::error!(error = %error, "Request failed");
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                error_codes::INTERNAL_ERROR,
                INTERNAL_MESSAGE,
            ))
        }
    }
}

/// 400 response for a request that failed field validation
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
    fields.sort_unstable();
    HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::VALIDATION_ERROR,
        format!("Invalid request fields: {}", fields.join(", ")),
    ))
}

/// Converts a JSON or query extraction failure into a 400 with the standard body
pub fn extractor_error<E>(error: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::BAD_REQUEST,
        error.to_string(),
    ));
    InternalError::from_response(error, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                DomainError::InvalidSubject {
                    subject: "u1".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (DomainError::SubjectNotFound, StatusCode::BAD_REQUEST),
            (DomainError::NoSuchCredential, StatusCode::UNAUTHORIZED),
            (TokenError::InvalidToken.into(), StatusCode::UNAUTHORIZED),
            (TokenError::RefreshMismatch.into(), StatusCode::UNAUTHORIZED),
            (
                TokenError::key_unavailable("empty").into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (TokenError::SigningFailed.into(), StatusCode::INTERNAL_SERVER_ERROR),
            (
                TokenError::EntropySourceFailed.into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (DomainError::storage("timeout"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            let label = error.to_string();
            assert_eq!(handle_domain_error(error).status(), status, "{label}");
        }
    }
}
