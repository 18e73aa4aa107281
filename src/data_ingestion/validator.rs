//! 資料驗證器模組
//!
//! 檢查解析後的序列是否符合不變量，並提供序列統計。
//! 解析器本身從不因壞資料失敗；驗證器只供載入端在事後報告問題。

pub mod error;
pub mod time_series_validator;
pub mod traits;

pub use error::{ValidationError, ValidationErrors, ValidationResult};
pub use time_series_validator::{TimeSeriesStats, TimeSeriesValidator};
pub use traits::Validator;
