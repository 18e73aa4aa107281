use super::backend::AnswerBackend;
use super::config::AssistantConfig;
use super::context::DataContext;
use super::error::{AssistantError, AssistantResult};
use super::message::{AnswerRequest, ChatMessage, ChatTurn};
use crate::domain_types::Metal;

/// 歡迎訊息
pub const WELCOME_MESSAGE: &str = "Hello! I'm your Precious Metals Analyst. \
I have analyzed the entire price history of Gold and Silver from 1915 to 2025. \
Ask me anything about the data!";

/// 問答服務回傳空白時的替代文字
pub const EMPTY_ANSWER_FALLBACK: &str = "I couldn't generate a response based on the data.";

/// 一段問答對話
pub struct ChatSession<B: AnswerBackend> {
    config: AssistantConfig,
    context: DataContext,
    backend: B,
    active: Metal,
    messages: Vec<ChatMessage>,
}

impl<B: AnswerBackend> ChatSession<B> {
    pub fn new(config: AssistantConfig, context: DataContext, backend: B) -> Self {
        Self {
            config,
            context,
            backend,
            active: Metal::Gold,
            messages: vec![ChatMessage::model(WELCOME_MESSAGE).with_id("welcome")],
        }
    }

    /// 切換目前檢視的金屬
    pub fn set_active(&mut self, metal: Metal) {
        self.active = metal;
    }

    pub fn active(&self) -> Metal {
        self.active
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// 送出一個問題
    ///
    /// 空白輸入不做任何事並返回 None；否則返回新加入的回答（或錯誤訊息）。
    pub async fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }

        // 歷史只取先前的非錯誤訊息
        let history: Vec<ChatTurn> = self
            .messages
            .iter()
            .filter(|m| !m.is_error)
            .map(ChatMessage::to_turn)
            .collect();

        let user = ChatMessage::user(text);
        let request = self.build_request(history, &user);
        self.messages.push(user);

        let reply = match request {
            Ok(request) => self.backend.generate(&request).await,
            Err(e) => Err(e),
        };

        let message = match reply {
            Ok(answer) if answer.trim().is_empty() => ChatMessage::model(EMPTY_ANSWER_FALLBACK),
            Ok(answer) => ChatMessage::model(answer),
            Err(e) => {
                tracing::error!("問答服務錯誤: {}", e);
                ChatMessage::error(e.user_message())
            }
        };
        self.messages.push(message);
        self.messages.last()
    }

    fn build_request(
        &self,
        mut history: Vec<ChatTurn>,
        user: &ChatMessage,
    ) -> AssistantResult<AnswerRequest> {
        let api_key = self
            .config
            .api_key()
            .ok_or(AssistantError::MissingApiKey)?
            .to_string();

        history.push(user.to_turn());
        Ok(AnswerRequest {
            api_key,
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            system_instruction: self.context.system_instruction(self.active),
            contents: history,
        })
    }
}
