//! 趨勢區間偵測模組
//!
//! 以年增率（與 12 筆前的價格比較）為唯一訊號：
//! 高於 +20% 為多頭、低於 -15% 為空頭，其餘為無訊號。
//! 門檻為固定常數，不開放設定。

pub mod detector;
pub mod signal;
pub mod state;

pub use detector::TrendDetector;
pub use signal::{YoySignal, DOWN_THRESHOLD, LOOKBACK, UP_THRESHOLD};
pub use state::WindowState;
