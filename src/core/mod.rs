pub mod cac;
pub mod predictor;
pub mod prompt;

pub use crate::domain::model::{CompletionRequest, PredictBoxRequest, PredictBoxResponse};
pub use crate::domain::ports::CompletionClient;
pub use crate::utils::error::Result;
