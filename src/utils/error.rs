use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::domain::model::ErrorResponse;

#[derive(Error, Debug)]
pub enum PredictError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("OpenAI API error: {status} - {body}")]
    UpstreamError { status: u16, body: String },

    #[error("OpenAI API returned no choices")]
    MissingChoiceError,

    #[error("Empty response from model")]
    EmptyResponseError,

    #[error("Invalid CAC: {value}")]
    InvalidCacError { value: String, reason: String },

    #[error("No valid CAC values collected")]
    NoSamplesError,

    #[error("Prediction error: {0}")]
    PredictionError(Box<PredictError>),

    #[error("Missing {field}")]
    MissingFieldError { field: String },

    #[error("Invalid request body: {message}")]
    InvalidBodyError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PredictError {
    /// 客戶端請求問題回 400，其餘一律 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            PredictError::MissingFieldError { .. } | PredictError::InvalidBodyError { .. } => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            tracing::warn!("⚠️ Rejected request: {}", self);
        } else {
            tracing::error!("❌ Endpoint error: {}", self);
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, PredictError>;
