use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 金屬名稱解析錯誤
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("無效的金屬：{0}")]
pub struct MetalParseError(pub String);

/// 貴金屬種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum Metal {
    Gold,
    Silver,
}

impl Metal {
    /// 所有支援的金屬
    pub const ALL: [Metal; 2] = [Metal::Gold, Metal::Silver];

    /// 顯示名稱
    pub fn name(&self) -> &'static str {
        match self {
            Metal::Gold => "Gold",
            Metal::Silver => "Silver",
        }
    }
}

impl FromStr for Metal {
    type Err = MetalParseError;

    /// 從字串解析金屬種類（不分大小寫）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gold" => Ok(Metal::Gold),
            "silver" => Ok(Metal::Silver),
            _ => Err(MetalParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
