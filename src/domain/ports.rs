use crate::domain::model::CompletionRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 外部 LLM completion 服務
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// 回傳第一個 choice 的文字內容，沒有內容時回傳空字串
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
