use super::main::AppState;
use super::response::{ApiError, ClassifyRequest, ClassifyResponse, HealthResponse};
use crate::error::ClassifyError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

#[tracing::instrument(name = "GET /health", skip(state))]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model_loaded: state.classification_service.model_loaded(),
    })
}

#[tracing::instrument(name = "POST /classify", skip_all)]
pub async fn classify(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let logger = state.logger.clone();

    classify_request(state, payload)
        .await
        .inspect_err(|e| e.log(logger.as_ref()))
}

async fn classify_request(
    state: AppState,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let Json(request) = payload.map_err(rejection_to_error)?;

    let image = match request.image {
        Some(image) if !image.trim().is_empty() => image,
        _ => return Err(ClassifyError::EmptyImage.into()),
    };

    let classification_service = state.classification_service.clone();
    let result = tokio::task::spawn_blocking(move || classification_service.classify_base64(&image))
        .await
        .map_err(|e| ApiError::internal_error(format!("Classification task failed: {}", e)))??;

    Ok(Json(ClassifyResponse::from(result)))
}

/// Oversized bodies keep their 413; every other malformed body is a 400.
fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    let status = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        StatusCode::PAYLOAD_TOO_LARGE
    } else {
        StatusCode::BAD_REQUEST
    };
    ApiError::new(status, rejection.body_text())
}
