use crate::config::validation::{ValidationError, ValidationUtils, Validator};
use crate::utils::serde_helpers::empty_string_as_none;
use serde::{Deserialize, Serialize};

/// 預設模型
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
/// 預設溫度，偏低以貼近資料作答
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// 問答端配置
///
/// 憑證由呼叫端明確傳入，程式庫不會自行讀取環境變數。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
        }
    }
}

impl AssistantConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// 可用的憑證；空白字串視為未設定
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }
}

impl Validator for AssistantConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        ValidationUtils::not_empty(&self.model, "assistant.model")?;
        ValidationUtils::in_range(self.temperature, 0.0, 2.0, "assistant.temperature")?;
        Ok(())
    }
}
