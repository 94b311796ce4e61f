use crate::classification_service::ClassificationResult;
use crate::error::{ClassifyError, ErrorKind};
use crate::library::logger::interface::Logger;
use crate::waste::{BinColor, DisposalAction};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub category: String,
    /// Fraction in [0, 1], not a percentage.
    pub confidence: f32,
    pub disposal: DisposalAction,
    pub bin_color: BinColor,
}

impl From<ClassificationResult> for ClassifyResponse {
    fn from(result: ClassificationResult) -> Self {
        Self {
            category: result.top_category,
            confidence: result.confidence,
            disposal: result.disposal.action,
            bin_color: result.disposal.bin_color,
        }
    }
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Server errors at error level, client errors at warn.
    pub fn log(&self, logger: &dyn Logger) {
        let line = format!("{} {}", self.status.as_u16(), self.message);
        let _ = if self.status.is_server_error() {
            logger.error(&line)
        } else {
            logger.warn(&line)
        };
    }
}

impl From<ClassifyError> for ApiError {
    fn from(error: ClassifyError) -> Self {
        match error.kind() {
            ErrorKind::Input => ApiError::bad_request(error.to_string()),
            ErrorKind::Adapter => ApiError::internal_error(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorBody<'a> {
            error: &'a str,
        }

        (
            self.status,
            Json(ErrorBody {
                error: &self.message,
            }),
        )
            .into_response()
    }
}
