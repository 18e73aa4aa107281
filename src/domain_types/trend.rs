use super::data_point::IsoDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 趨勢方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendKind {
    /// 多頭（年增率高於上漲門檻）
    Up,
    /// 空頭（年增率低於下跌門檻）
    Down,
}

impl fmt::Display for TrendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendKind::Up => write!(f, "up"),
            TrendKind::Down => write!(f, "down"),
        }
    }
}

/// 一段連續的趨勢區間，起訖日期皆取自序列本身
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendWindow {
    pub start: IsoDate,
    pub end: IsoDate,
    pub kind: TrendKind,
}

impl TrendWindow {
    pub fn new(kind: TrendKind, start: IsoDate, end: IsoDate) -> Self {
        Self { start, end, kind }
    }

    /// 日期是否落在區間內（含端點）
    pub fn contains(&self, date: IsoDate) -> bool {
        self.start <= date && date <= self.end
    }
}
