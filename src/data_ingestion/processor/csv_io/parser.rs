//! CSV 資料解析器
//!
//! 輸入為整段文字：第一行一律視為標題丟棄，其後每行需符合
//! `"DD/MM/YYYY",<數值>` 格式。不符合的列直接略過，不回報也不記錄，
//! 一筆壞資料不應使整段百年序列失效。

use super::options::{CalendarPolicy, ParserOptions};
use crate::domain_types::{IsoDate, Observation, Series};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// 資料列格式：帶引號的日期、逗號、只含數字與至多一個小數點的數值
static RECORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^"(\d{2}/\d{2}/\d{4})",(\d+(?:\.\d*)?|\.\d+)$"#)
        .expect("record pattern is a valid regex")
});

/// 解析統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    /// 標題之後的行數（含空行）
    pub data_lines: usize,
    /// 符合資料列格式的行數
    pub matched: usize,
    /// 不符合格式而略過的行數
    pub unmatched: usize,
    /// 嚴格模式下因日期無效而丟棄的列數
    pub rejected_dates: usize,
    /// 數值無法轉為有限浮點數而丟棄的列數
    pub invalid_values: usize,
    /// 最終保留的觀測值數
    pub accepted: usize,
}

impl ParseReport {
    /// 被丟棄的列數（不含標題）
    pub fn dropped(&self) -> usize {
        self.data_lines.saturating_sub(self.accepted)
    }
}

/// CSV 解析器
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvParser {
    options: ParserOptions,
}

impl CsvParser {
    /// 創建新的解析器
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// 以預設選項解析整段文字
    pub fn parse(raw_text: &str) -> Series {
        Self::default().parse_text(raw_text)
    }

    /// 解析整段文字為序列
    pub fn parse_text(&self, raw_text: &str) -> Series {
        self.parse_with_report(raw_text).0
    }

    /// 解析整段文字，並返回解析統計
    pub fn parse_with_report(&self, raw_text: &str) -> (Series, ParseReport) {
        let mut report = ParseReport::default();
        let mut observations = Vec::new();

        for line in raw_text.trim().split('\n').skip(1) {
            report.data_lines += 1;

            let Some(caps) = RECORD_PATTERN.captures(line.trim()) else {
                report.unmatched += 1;
                continue;
            };
            let display_date = &caps[1];
            let Some(date) = IsoDate::from_dmy(display_date) else {
                report.unmatched += 1;
                continue;
            };
            report.matched += 1;

            if self.options.calendar == CalendarPolicy::Strict && !date.is_calendar_date() {
                report.rejected_dates += 1;
                continue;
            }

            match caps[2].parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    observations.push(Observation::new(date, display_date, value));
                }
                _ => report.invalid_values += 1,
            }
        }

        report.accepted = observations.len();
        (Series::from_unsorted(observations), report)
    }

    /// 單行是否符合資料列格式
    pub fn is_record_line(line: &str) -> bool {
        RECORD_PATTERN.is_match(line.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_header_then_single_row() {
        let series = CsvParser::parse("Date,Value\n\"01/01/1915\",0.51");

        assert_eq!(series.len(), 1);
        let obs = &series.observations()[0];
        assert_eq!(obs.date.to_string(), "1915-01-01");
        assert_eq!(obs.display_date, "01/01/1915");
        assert_eq!(obs.value, 0.51);
    }

    #[test]
    fn test_first_line_is_dropped_even_when_it_is_data() {
        let series = CsvParser::parse("\"01/01/1915\",0.51\n\"01/02/1915\",0.52");
        assert_eq!(series.len(), 1);
        assert_eq!(series.observations()[0].display_date, "01/02/1915");
    }

    #[test]
    fn test_malformed_row_is_skipped() {
        let (series, report) = CsvParser::default()
            .parse_with_report("Date,Value\n\"01/01/1915\",0.51\n\"bad-date\",oops");

        assert_eq!(series.len(), 1);
        assert_eq!(report.data_lines, 2);
        assert_eq!(report.matched, 1);
        assert_eq!(report.unmatched, 1);
        assert_eq!(report.accepted, 1);
        assert_eq!(report.dropped(), 1);
    }

    #[test]
    fn test_blank_lines_and_carriage_returns() {
        let raw = "Date,Value\r\n\r\n\"01/03/1915\",0.50\r\n   \n\"01/01/1915\",0.51\r\n";
        let series = CsvParser::parse(raw);

        assert_eq!(series.len(), 2);
        assert_eq!(series.observations()[0].display_date, "01/01/1915");
        assert_eq!(series.observations()[1].display_date, "01/03/1915");
    }

    #[test]
    fn test_output_sorted_by_iso_date() {
        let raw = "h\n\"01/01/1920\",3\n\"15/06/1915\",1\n\"01/01/1916\",2";
        let series = CsvParser::parse(raw);
        assert_eq!(series.values(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_duplicate_dates_keep_input_order() {
        let raw = "h\n\"01/01/1915\",2\n\"01/01/1915\",1\n\"01/01/1914\",0";
        let series = CsvParser::parse(raw);
        assert_eq!(series.values(), vec![0.0, 2.0, 1.0]);
    }

    #[test]
    fn test_empty_and_header_only_inputs() {
        assert!(CsvParser::parse("").is_empty());
        assert!(CsvParser::parse("Date,Value").is_empty());
        assert!(CsvParser::parse("\n\n").is_empty());
    }

    #[test]
    fn test_permissive_passes_out_of_range_dates_through() {
        let series = CsvParser::parse("h\n\"45/13/1999\",1.0");
        assert_eq!(series.len(), 1);
        assert_eq!(series.observations()[0].date.to_string(), "1999-13-45");
    }

    #[test]
    fn test_strict_rejects_out_of_range_dates() {
        let parser = CsvParser::new(ParserOptions::strict());
        let text = "h\n\"45/13/1999\",1.0\n\"29/02/2001\",2.0\n\"29/02/2000\",3.0";
        let (series, report) = parser.parse_with_report(text);

        assert_eq!(series.len(), 1);
        assert_eq!(series.observations()[0].display_date, "29/02/2000");
        assert_eq!(report.rejected_dates, 2);
        assert_eq!(report.matched, 3);
    }

    #[rstest]
    #[case("\"01/01/1915\",0.51", true)]
    #[case("\"01/01/1915\",12", true)]
    #[case("\"01/01/1915\",12.", true)]
    #[case("\"01/01/1915\",.5", true)]
    #[case("  \"01/01/1915\",0.51  ", true)]
    #[case("\"01/01/1915\",-0.51", false)]
    #[case("\"01/01/1915\",1,234.5", false)]
    #[case("\"01/01/1915\",1e3", false)]
    #[case("\"01/01/1915\",1.2.3", false)]
    #[case("\"01/01/1915\",", false)]
    #[case("\"01/01/1915\", 0.51", false)]
    #[case("01/01/1915,0.51", false)]
    #[case("\"1915-01-01\",0.51", false)]
    #[case("\"bad-date\",oops", false)]
    #[case("# comment", false)]
    #[case("", false)]
    fn test_record_line_pattern(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(CsvParser::is_record_line(line), expected, "line: {line:?}");
    }

    #[test]
    fn test_oversized_value_is_dropped() {
        let huge = "9".repeat(400);
        let raw = format!("h\n\"01/01/1915\",{huge}\n\"01/02/1915\",1.0");
        let (series, report) = CsvParser::default().parse_with_report(&raw);

        assert_eq!(series.len(), 1);
        assert_eq!(report.invalid_values, 1);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let raw = "h\n\"01/02/1915\",0.52\n\"01/01/1915\",0.51\n\"01/01/1915\",0.49";
        assert_eq!(CsvParser::parse(raw), CsvParser::parse(raw));
    }
}
