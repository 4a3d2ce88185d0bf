use crate::core::predictor::CacPredictor;
use std::sync::Arc;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<CacPredictor>,
}

impl AppState {
    pub fn new(predictor: CacPredictor) -> Self {
        Self {
            predictor: Arc::new(predictor),
        }
    }
}
