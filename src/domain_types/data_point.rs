use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 日期鍵解析錯誤
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("無效的 ISO 日期鍵: {0}")]
pub struct IsoDateParseError(pub String);

/// ISO 排序用的日期鍵（YYYY-MM-DD）
///
/// 欄位按原樣保存，不做曆法檢查：月份 13 或日期 45 都會原封不動地保留下來。
/// 排序依 (年, 月, 日) 逐欄比較，和比較零填充後的 ISO 字串結果一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    year: u16,
    month: u8,
    day: u8,
}

impl IsoDate {
    /// 以年月日欄位建立日期鍵
    pub fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// 從 `DD/MM/YYYY` 字樣重組為日期鍵
    ///
    /// 只檢查欄位寬度與數字，不檢查月份或日期範圍。
    pub fn from_dmy(token: &str) -> Option<Self> {
        let mut parts = token.split('/');
        let day = parts.next()?;
        let month = parts.next()?;
        let year = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        if day.len() != 2 || month.len() != 2 || year.len() != 4 {
            return None;
        }
        if ![day, month, year]
            .iter()
            .all(|field| field.bytes().all(|b| b.is_ascii_digit()))
        {
            return None;
        }

        Some(Self {
            year: year.parse().ok()?,
            month: month.parse().ok()?,
            day: day.parse().ok()?,
        })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// 轉換為真實的曆法日期；欄位超出範圍時返回 None
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }

    /// 是否為有效的曆法日期
    pub fn is_calendar_date(&self) -> bool {
        self.to_naive_date().is_some()
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for IsoDate {
    type Err = IsoDateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || IsoDateParseError(s.to_string());
        let mut parts = s.split('-');
        let (year, month, day) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d), None) => (y, m, d),
            _ => return Err(err()),
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(err());
        }

        Ok(Self {
            year: year.parse().map_err(|_| err())?,
            month: month.parse().map_err(|_| err())?,
            day: day.parse().map_err(|_| err())?,
        })
    }
}

impl Serialize for IsoDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IsoDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// 單筆價格觀測值
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// 排序鍵
    pub date: IsoDate,
    /// 原始日期字樣，僅供顯示
    pub display_date: String,
    /// 價格（美元）
    pub value: f64,
}

impl Observation {
    pub fn new(date: IsoDate, display_date: impl Into<String>, value: f64) -> Self {
        Self {
            date,
            display_date: display_date.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dmy_reassembles_fields() {
        let date = IsoDate::from_dmy("01/02/1915").unwrap();
        assert_eq!(date.year(), 1915);
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 1);
        assert_eq!(date.to_string(), "1915-02-01");
    }

    #[test]
    fn test_from_dmy_passes_out_of_range_fields_through() {
        let date = IsoDate::from_dmy("45/13/1999").unwrap();
        assert_eq!(date.to_string(), "1999-13-45");
        assert!(!date.is_calendar_date());
    }

    #[test]
    fn test_from_dmy_rejects_wrong_shape() {
        assert!(IsoDate::from_dmy("1/1/1915").is_none());
        assert!(IsoDate::from_dmy("01/01/15").is_none());
        assert!(IsoDate::from_dmy("01-01-1915").is_none());
        assert!(IsoDate::from_dmy("01/01/1915/02").is_none());
        assert!(IsoDate::from_dmy("aa/01/1915").is_none());
    }

    #[test]
    fn test_ordering_matches_iso_string_ordering() {
        let a = IsoDate::new(1915, 12, 31);
        let b = IsoDate::new(1916, 1, 1);
        let c = IsoDate::new(1916, 1, 2);
        assert!(a < b && b < c);
        assert!(a.to_string() < b.to_string());
    }

    #[test]
    fn test_iso_string_round_trip() {
        let date: IsoDate = "2025-06-01".parse().unwrap();
        assert_eq!(date, IsoDate::new(2025, 6, 1));
        assert!("2025-6-1".parse::<IsoDate>().is_err());
        assert!("garbage".parse::<IsoDate>().is_err());
    }

    #[test]
    fn test_observation_serializes_as_camel_case() {
        let obs = Observation::new(IsoDate::new(1915, 1, 1), "01/01/1915", 0.51);
        let json = serde_json::to_value(&obs).unwrap();
        assert_eq!(json["date"], "1915-01-01");
        assert_eq!(json["displayDate"], "01/01/1915");
        assert_eq!(json["value"], 0.51);
    }
}
