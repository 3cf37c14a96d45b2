//! Request body extraction with domain-shaped rejections

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::domain::{DomainError, FieldErrors};

/// `Json<T>` whose failures answer 400 with the usual `{"error", "fields"}` body.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = DomainError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(rejection_to_domain(rejection)),
        }
    }
}

fn rejection_to_domain(rejection: JsonRejection) -> DomainError {
    let message = rejection.body_text();
    tracing::debug!("Rejected request body: {}", message);

    let mut fields = FieldErrors::new();
    if let Some(field) = missing_field(&message) {
        fields.insert(field.to_string(), vec!["This field is required.".to_string()]);
    }

    DomainError::Validation { message, fields }
}

/// Field name out of serde's "missing field `name`" message.
fn missing_field(message: &str) -> Option<&str> {
    let rest = message.split("missing field `").nth(1)?;
    rest.split('`').next().filter(|f| !f.is_empty())
}
