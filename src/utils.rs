// utils.rs - 公共工具模組
//
// 顯示格式化與序列化輔助函數。

pub mod display;
pub mod serde_helpers;

pub use display::{format_currency, format_month_year, year_label};
pub use serde_helpers::empty_string_as_none;
