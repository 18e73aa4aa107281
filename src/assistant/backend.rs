use super::error::AssistantResult;
use super::message::AnswerRequest;
use async_trait::async_trait;

/// 問答服務後端
///
/// 單次請求/回應；不重試。實際的網路實作由宿主程式提供。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerBackend: Send + Sync {
    /// 送出請求並取得回答文字
    async fn generate(&self, request: &AnswerRequest) -> AssistantResult<String>;
}
