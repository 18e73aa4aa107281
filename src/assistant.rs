//! 問答端介面
//!
//! 將解析後的資料原樣交給外部問答服務作為依據。本模組只定義邊界：
//! 明確傳入的配置（含憑證）、系統指示組裝、對話狀態與後端特徵。
//! 任何失敗都只以一句訊息呈現給使用者，不影響核心資料，也不重試。

pub mod backend;
pub mod config;
pub mod context;
pub mod error;
pub mod message;
pub mod session;

pub use backend::AnswerBackend;
pub use config::AssistantConfig;
pub use context::DataContext;
pub use error::{AssistantError, AssistantResult, FAILURE_MESSAGE};
pub use message::{AnswerRequest, ChatMessage, ChatRole, ChatTurn};
pub use session::{ChatSession, EMPTY_ANSWER_FALLBACK, WELCOME_MESSAGE};
