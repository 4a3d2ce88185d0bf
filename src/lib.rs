pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::OpenAiClient;
pub use crate::app::{create_router, AppState};
pub use crate::config::{toml_config::ModelSettings, ServerConfig};
pub use crate::core::predictor::CacPredictor;
pub use crate::domain::ports::CompletionClient;
pub use crate::utils::error::{PredictError, Result};
