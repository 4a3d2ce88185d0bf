//! HTTP handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::app::state::AppState;
use crate::domain::model::{HealthResponse, PredictBoxRequest, PredictBoxResponse};
use crate::utils::error::{PredictError, Result};

/// `POST /predict_box_score`
pub async fn predict_box_score(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PredictBoxRequest>, JsonRejection>,
) -> Result<Json<PredictBoxResponse>> {
    // 格式錯誤的 body 一律回 400，不用 axum 預設的 415/422
    let Json(request) = payload.map_err(|rejection| PredictError::InvalidBodyError {
        message: rejection.body_text(),
    })?;

    let future_box_info = request.future_box_info_text().ok_or_else(|| {
        PredictError::MissingFieldError {
            field: "future_box_info".to_string(),
        }
    })?;
    let historical_data = request.historical_data_text();

    tracing::info!("🚀 Predicting CAC for future box");
    let predicted_cac = state
        .predictor
        .predict(&historical_data, &future_box_info)
        .await?;

    Ok(Json(PredictBoxResponse { predicted_cac }))
}

/// `GET /health`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
