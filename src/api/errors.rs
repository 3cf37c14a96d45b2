//! HTTP rendering of domain errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::DomainError;

pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::Database(_) | DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = status_for(&self);

        let body = match self {
            DomainError::Validation { message, fields } if fields.is_empty() => {
                json!({ "error": message })
            }
            DomainError::Validation { message, fields } => {
                json!({ "error": message, "fields": fields })
            }
            DomainError::Database(msg) | DomainError::Internal(msg) => {
                tracing::error!("Request failed: {}", msg);
                json!({ "error": "Internal server error" })
            }
            DomainError::NotFound(msg) => json!({ "error": format!("{} not found", msg) }),
            DomainError::Conflict(msg)
            | DomainError::Unauthorized(msg)
            | DomainError::Forbidden(msg) => json!({ "error": msg }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_error_kind_has_its_status() {
        assert_eq!(
            status_for(&DomainError::Conflict("x".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&DomainError::NotFound("x".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&DomainError::field("date", "x")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&DomainError::Forbidden("x".into())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_for(&DomainError::Database("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
