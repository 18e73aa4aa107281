use super::error::{CsvError, CsvResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 日期欄位的曆法檢查模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarPolicy {
    /// 不檢查，超出範圍的月份與日期原樣保留
    #[default]
    Permissive,
    /// 丟棄無法構成真實日期的列
    Strict,
}

impl CalendarPolicy {
    /// 從字串解析
    pub fn parse(s: &str) -> CsvResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "permissive" => Ok(CalendarPolicy::Permissive),
            "strict" => Ok(CalendarPolicy::Strict),
            other => Err(CsvError::UnsupportedCalendarPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for CalendarPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarPolicy::Permissive => write!(f, "permissive"),
            CalendarPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// 解析選項
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    pub calendar: CalendarPolicy,
}

impl ParserOptions {
    /// 預設（寬鬆）選項
    pub fn permissive() -> Self {
        Self::default()
    }

    /// 嚴格曆法檢查
    pub fn strict() -> Self {
        Self {
            calendar: CalendarPolicy::Strict,
        }
    }

    /// 設定曆法檢查模式
    pub fn with_calendar(mut self, calendar: CalendarPolicy) -> Self {
        self.calendar = calendar;
        self
    }
}
