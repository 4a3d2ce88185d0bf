use crate::config::toml_config::ModelSettings;
use crate::domain::model::{ChatMessage, CompletionRequest};

pub const SYSTEM_PROMPT: &str =
    "You are an expert in predicting Goodiebox performance, skilled at analyzing historical trends.";

const INSTRUCTIONS: &str = "You are an expert in evaluating Goodiebox welcome boxes for their ability to attract new members at low Customer Acquisition Cost (CAC). Based on the historical data provided, which includes box features and their corresponding CAC in euros, predict the CAC for the future welcome box. The CAC should be a numerical value in euros, with two decimal places (e.g., 10.50). Consider factors such as the number of products, total retail value, number of unique categories, number of full-size products, number of premium products (>€20), total weight, average product rating, average brand rating, and average category rating. Return only the numerical CAC value in euros (e.g., 10.50).";

pub fn build_user_prompt(historical_data: &str, future_box_info: &str) -> String {
    format!(
        "\n{}\n\nHistorical Data: {}\n\nFuture Box Info: {}\n",
        INSTRUCTIONS, historical_data, future_box_info
    )
}

/// 每次取樣都送出相同內容，靠固定 seed 與低 temperature 讓結果穩定
pub fn build_completion_request(
    settings: &ModelSettings,
    historical_data: &str,
    future_box_info: &str,
) -> CompletionRequest {
    CompletionRequest {
        model: settings.name.clone(),
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_user_prompt(historical_data, future_box_info)),
        ],
        max_tokens: Some(settings.max_tokens),
        temperature: Some(settings.temperature),
        seed: Some(settings.seed),
    }
}
