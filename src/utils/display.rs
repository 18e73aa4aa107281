// utils/display.rs - 圖表顯示用的格式化函數

use crate::domain_types::IsoDate;
use chrono::NaiveDate;

/// 超過此絕對值時不再以分為單位四捨五入
const MAX_FORMATTED_AMOUNT: f64 = 1e30;

/// 以美元格式顯示價格，固定兩位小數並加千分位
///
/// 非有限數與極大值直接以 Rust 預設格式輸出。
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() || value.abs() >= MAX_FORMATTED_AMOUNT {
        return value.to_string();
    }

    let cents = (value.abs() * 100.0).round() as u128;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

/// 月份與年份，例如 "January 1915"；月份超出範圍時返回 None
pub fn format_month_year(date: IsoDate) -> Option<String> {
    // 日期欄位可能不合法，只取年月
    let first_of_month =
        NaiveDate::from_ymd_opt(i32::from(date.year()), u32::from(date.month()), 1)?;
    Some(first_of_month.format("%B %Y").to_string())
}

/// 座標軸上的年份標籤
pub fn year_label(date: IsoDate) -> String {
    date.year().to_string()
}
