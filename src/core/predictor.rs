use crate::config::toml_config::ModelSettings;
use crate::core::cac::{average, format_cac, parse_cac};
use crate::core::prompt::build_completion_request;
use crate::domain::ports::CompletionClient;
use crate::utils::error::{PredictError, Result};
use std::sync::Arc;

/// 取樣數次後取平均的 CAC 預測器。
///
/// 各次呼叫依序執行，任何一次失敗就中止整個預測，不會回傳部分平均。
pub struct CacPredictor {
    client: Arc<dyn CompletionClient>,
    settings: ModelSettings,
}

impl CacPredictor {
    pub fn new(client: Arc<dyn CompletionClient>, settings: ModelSettings) -> Self {
        Self { client, settings }
    }

    /// 回傳兩位小數的平均 CAC 字串
    pub async fn predict(&self, historical_data: &str, future_box_info: &str) -> Result<String> {
        let outcome = self
            .collect_samples(historical_data, future_box_info)
            .await
            .and_then(|samples| average(&samples).map(|avg| (samples.len(), avg)));

        match outcome {
            Ok((runs, avg)) => {
                let final_cac = format_cac(avg);
                tracing::info!("📊 Averaged CAC from {} runs: {}", runs, final_cac);
                Ok(final_cac)
            }
            Err(e) => {
                tracing::error!("Error in prediction: {}", e);
                Err(PredictError::PredictionError(Box::new(e)))
            }
        }
    }

    async fn collect_samples(
        &self,
        historical_data: &str,
        future_box_info: &str,
    ) -> Result<Vec<f64>> {
        let request = build_completion_request(&self.settings, historical_data, future_box_info);
        let mut samples = Vec::with_capacity(self.settings.samples);

        for run in 1..=self.settings.samples {
            tracing::debug!("Sending request to completion API: {:?}", request);
            let content = self.client.complete(&request).await?;
            tracing::info!("Run {}/{} response: {}", run, self.settings.samples, content.trim());

            samples.push(parse_cac(&content)?);
        }

        Ok(samples)
    }
}
