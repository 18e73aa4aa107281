use thiserror::Error;

/// 使用者看到的唯一失敗訊息
pub const FAILURE_MESSAGE: &str =
    "I encountered an error connecting to the analysis engine. Please try again later.";

/// 問答端錯誤
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("API Key is missing.")]
    MissingApiKey,

    #[error("問答服務錯誤: {0}")]
    Backend(String),

    #[error("問答服務無法連線: {0}")]
    Unreachable(String),
}

impl AssistantError {
    /// 呈現給使用者的訊息；所有錯誤都收斂為同一句
    pub fn user_message(&self) -> &'static str {
        FAILURE_MESSAGE
    }
}

pub type AssistantResult<T> = Result<T, AssistantError>;
