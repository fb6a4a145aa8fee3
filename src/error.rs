use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::store::{Operation, StoreError};
use crate::submission::fields::FieldErrors;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Validation(FieldErrors),
    Store { op: Operation, source: StoreError },
}

impl AppError {
    pub fn store(op: Operation) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Store { op, source }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::Validation(errors) => {
                let names: Vec<&str> = errors.keys().map(|field| field.name()).collect();
                write!(f, "Missing required fields: {}", names.join(", "))
            }
            AppError::Store { op, source } => write!(f, "{}: {source}", op.failure_message()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Missing required fields", "fields": errors }),
            ),
            AppError::Store { op, source } => {
                tracing::error!(operation = ?op, "Store error: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": op.failure_message() }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
