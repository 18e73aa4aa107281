use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 對話角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// 對話訊息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_error: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text, false)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Model, text, false)
    }

    /// 錯誤訊息；不會被放進送往問答服務的歷史
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Model, text, true)
    }

    fn new(role: ChatRole, text: impl Into<String>, is_error: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
            is_error,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// 轉為送往問答服務的一輪對話
    pub fn to_turn(&self) -> ChatTurn {
        ChatTurn {
            role: self.role,
            text: self.text.clone(),
        }
    }
}

/// 問答請求中的一輪對話
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

/// 送往問答服務的完整請求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub api_key: String,
    pub model: String,
    pub temperature: f64,
    pub system_instruction: String,
    pub contents: Vec<ChatTurn>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let user = ChatMessage::user("hi");
        assert_eq!(user.role, ChatRole::User);
        assert!(!user.is_error);

        let err = ChatMessage::error("oops");
        assert_eq!(err.role, ChatRole::Model);
        assert!(err.is_error);
        assert_ne!(user.id, err.id);
    }

    #[test]
    fn test_serialized_shape() {
        let msg = ChatMessage::model("answer").with_id("m1");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["id"], "m1");
        assert_eq!(json["role"], "model");
        assert_eq!(json["isError"], false);
    }
}
