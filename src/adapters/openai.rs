use crate::domain::model::{CompletionRequest, CompletionResponse};
use crate::domain::ports::CompletionClient;
use crate::utils::error::{PredictError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// OpenAI chat completions API（或相容端點）
pub struct OpenAiClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// `timeout` 為 `None` 時沿用 reqwest 預設（不設逾時）
    pub fn with_timeout(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_url: api_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        tracing::debug!("Sending request to OpenAI API: {}", self.api_url);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("OpenAI API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error: {} - {}", status.as_u16(), body);
            return Err(PredictError::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = response.json().await?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(PredictError::MissingChoiceError)?;

        Ok(choice
            .message
            .and_then(|message| message.content)
            .unwrap_or_default())
    }
}
