use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const NO_HISTORICAL_DATA: &str = "No historical data provided";

/// `POST /predict_box_score` 的請求內容。欄位內容不做解析，原樣嵌入 prompt。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictBoxRequest {
    #[serde(default)]
    pub historical_data: Option<Value>,
    #[serde(default)]
    pub future_box_info: Option<Value>,
}

impl PredictBoxRequest {
    pub fn historical_data_text(&self) -> String {
        self.historical_data
            .as_ref()
            .map(render_field)
            .unwrap_or_else(|| NO_HISTORICAL_DATA.to_string())
    }

    /// `null` 與缺欄位一樣視為未提供
    pub fn future_box_info_text(&self) -> Option<String> {
        self.future_box_info.as_ref().map(render_field)
    }
}

fn render_field(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictBoxResponse {
    pub predicted_cac: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completion 請求（OpenAI 格式）
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    #[serde(default)]
    pub message: Option<CompletionMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_defaults_historical_data() {
        let request: PredictBoxRequest =
            serde_json::from_value(json!({"future_box_info": "5 products"})).unwrap();

        assert_eq!(request.historical_data_text(), NO_HISTORICAL_DATA);
        assert_eq!(request.future_box_info_text().as_deref(), Some("5 products"));
    }

    #[test]
    fn test_request_null_future_box_info_is_missing() {
        let request: PredictBoxRequest =
            serde_json::from_value(json!({"future_box_info": null})).unwrap();
        assert!(request.future_box_info_text().is_none());
    }

    #[test]
    fn test_request_non_string_fields_render_as_json() {
        let request: PredictBoxRequest = serde_json::from_value(json!({
            "historical_data": [{"box": "May", "cac": 12.4}],
            "future_box_info": {"products": 6}
        }))
        .unwrap();

        assert_eq!(request.historical_data_text(), r#"[{"box":"May","cac":12.4}]"#);
        assert_eq!(
            request.future_box_info_text().as_deref(),
            Some(r#"{"products":6}"#)
        );
    }

    #[test]
    fn test_completion_request_serialization() {
        let request = CompletionRequest {
            model: "gpt-4o".to_string(),
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("hi")],
            max_tokens: Some(10),
            temperature: Some(0.2),
            seed: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hi");
        assert_eq!(value["temperature"], 0.2);
        assert!(value.get("seed").is_none());
    }

    #[test]
    fn test_completion_response_tolerates_missing_fields() {
        let response: CompletionResponse = serde_json::from_value(json!({"id": "x"})).unwrap();
        assert!(response.choices.is_empty());

        let response: CompletionResponse =
            serde_json::from_value(json!({"choices": [{"index": 0}]})).unwrap();
        assert!(response.choices[0].message.is_none());
    }
}
