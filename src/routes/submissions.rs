use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;
use crate::store::Operation;
use crate::submission::fields;

pub async fn list(State(state): State<SharedState>) -> Result<Json<Value>, AppError> {
    let submissions = state
        .store
        .list()
        .await
        .map_err(AppError::store(Operation::List))?;
    Ok(Json(submissions))
}

pub async fn create(
    State(state): State<SharedState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    reject_blank_required(&body)?;

    let created = state
        .store
        .create(&body)
        .await
        .map_err(AppError::store(Operation::Create))?;

    let id = created.get("id").cloned().unwrap_or_default();
    tracing::info!(id = %id, "Submission created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    reject_blank_required(&body)?;

    let updated = state
        .store
        .update(&id, &body)
        .await
        .map_err(AppError::store(Operation::Update))?;

    tracing::info!(id = %id, "Submission updated");
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state
        .store
        .delete(&id)
        .await
        .map_err(AppError::store(Operation::Delete))?;

    tracing::info!(id = %id, "Submission deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Same required-field rule the form applies, enforced again at the relay.
///
/// Only reads the body; what gets forwarded is the body as received.
fn reject_blank_required(body: &Value) -> Result<(), AppError> {
    let record = Submission::deserialize(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid submission: {e}")))?;

    let errors = fields::validate_required(&record);
    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!("Rejected submission with blank fields: {errors:?}");
        Err(AppError::Validation(errors))
    }
}
