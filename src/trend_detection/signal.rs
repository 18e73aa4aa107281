use crate::domain_types::TrendKind;

/// 年增率回看的觀測值數（月資料約一年）
pub const LOOKBACK: usize = 12;
/// 年增率高於此值為多頭訊號（嚴格大於）
pub const UP_THRESHOLD: f64 = 0.20;
/// 年增率低於此值為空頭訊號（嚴格小於）
pub const DOWN_THRESHOLD: f64 = -0.15;

/// 年增率訊號分類
pub struct YoySignal;

impl YoySignal {
    /// 年增率；基期為零或結果非有限數時返回 None
    pub fn change(current: f64, past: f64) -> Option<f64> {
        if past == 0.0 {
            return None;
        }
        let change = (current - past) / past;
        change.is_finite().then_some(change)
    }

    /// 將年增率分類為趨勢訊號
    pub fn classify_change(change: f64) -> Option<TrendKind> {
        if change > UP_THRESHOLD {
            Some(TrendKind::Up)
        } else if change < DOWN_THRESHOLD {
            Some(TrendKind::Down)
        } else {
            None
        }
    }

    /// 由當期與一年前的價格求出訊號
    pub fn classify(current: f64, past: f64) -> Option<TrendKind> {
        Self::change(current, past).and_then(Self::classify_change)
    }
}
