use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::app::handlers::{health_check, predict_box_score};
use crate::app::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/predict_box_score", post(predict_box_score))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
