//! Response mapping for article handlers.
//!
//! Every article route answers `200 OK`, whether the store call succeeded or
//! not. Callers tell the two apart by payload shape: plain text or article
//! JSON on success, a [`StoreErrorBody`] object on failure.

use axum::{
    extract::rejection::FormRejection,
    response::{IntoResponse, Json, Response},
    Form,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wiki_core::StoreError;

/// JSON body returned when a store operation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StoreErrorBody {
    pub name: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
}

impl From<&StoreError> for StoreErrorBody {
    fn from(err: &StoreError) -> Self {
        Self {
            name: err.name().to_string(),
            message: err.to_string(),
            code: err.code(),
        }
    }
}

/// Unwraps a form body.
///
/// A missing body or a non-form content type yields an empty field set. A
/// form body that cannot be decoded, such as one repeating a key, becomes a `200 OK` error body, and the store is never called.
pub fn form_or_default<T: Default>(
    operation: &str,
    form: Result<Form<T>, FormRejection>,
) -> Result<T, Response> {
    match form {
        Ok(Form(value)) => Ok(value),
        Err(FormRejection::InvalidFormContentType(_)) => Ok(T::default()),
        Err(rejection) => {
            let message = rejection.body_text();
            tracing::error!("{} rejected body: {}", operation, message);
            Err(Json(StoreErrorBody {
                name: "CastError".to_string(),
                message,
                code: None,
            })
            .into_response())
        }
    }
}

/// Logs `err` and renders it as a `200 OK` error body.
pub fn store_failure(operation: &str, err: StoreError) -> Response {
    tracing::error!("{} error: {:?}", operation, err);
    Json(StoreErrorBody::from(&err)).into_response()
}

/// Renders a confirmation text, or the store error.
pub fn confirm(operation: &str, outcome: Result<(), StoreError>, message: &'static str) -> Response {
    match outcome {
        Ok(()) => message.into_response(),
        Err(e) => store_failure(operation, e),
    }
}
