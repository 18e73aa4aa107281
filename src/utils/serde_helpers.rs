// utils/serde_helpers.rs - 序列化與反序列化輔助函數
use serde::{Deserialize, Deserializer};

/// 將空白字串反序列化為 None
///
/// 配置檔與環境變數常以空字串表示「未設定」，例如尚未填入的 API 憑證。
///
/// ```
/// use serde::Deserialize;
/// use metals_analytics::utils::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize)]
/// struct Section {
///     #[serde(default, deserialize_with = "empty_string_as_none")]
///     api_key: Option<String>,
/// }
///
/// let section: Section = serde_json::from_str(r#"{"api_key": "  "}"#).unwrap();
/// assert!(section.api_key.is_none());
/// ```
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(s))
    }
}
