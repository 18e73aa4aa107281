use super::csv_io::{CsvParser, CsvResult, ParseReport, ParserOptions};
use crate::data_ingestion::validator::{TimeSeriesStats, TimeSeriesValidator};
use crate::domain_types::{Metal, Series};
use std::fs;
use std::path::Path;

/// 已載入的單一金屬資料集
///
/// 保留原始文字，供問答端原樣引用。
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub metal: Metal,
    pub raw_text: String,
    pub series: Series,
    pub report: ParseReport,
}

impl LoadedDataset {
    /// 序列統計
    pub fn stats(&self) -> TimeSeriesStats {
        TimeSeriesValidator::new().stats(&self.series)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DataLoader {
    parser: CsvParser,
}

impl DataLoader {
    pub fn new(options: ParserOptions) -> Self {
        Self {
            parser: CsvParser::new(options),
        }
    }

    /// 從已在記憶體中的文字載入
    pub fn load_text(&self, metal: Metal, raw_text: impl Into<String>) -> LoadedDataset {
        let raw_text = raw_text.into();
        let (series, report) = self.parser.parse_with_report(&raw_text);

        tracing::info!(
            "載入 {} 資料: {} 筆有效, {} 列略過",
            metal,
            report.accepted,
            report.dropped()
        );
        if let Some((start, end)) = series.date_range() {
            tracing::debug!("{} 資料範圍: {} ~ {}", metal, start, end);
        }
        if report.rejected_dates > 0 {
            tracing::warn!("{} 有 {} 列日期無效已丟棄", metal, report.rejected_dates);
        }

        // 解析器保證排序，這裡只用於提前發現異常
        if let Err(errors) = TimeSeriesValidator::new()
            .with_allow_duplicates(true)
            .validate_series(&series)
        {
            tracing::warn!("{} 序列驗證發現 {} 個問題", metal, errors.error_count());
        }

        LoadedDataset {
            metal,
            raw_text,
            series,
            report,
        }
    }

    /// 從檔案載入
    pub fn load_file(&self, metal: Metal, path: impl AsRef<Path>) -> CsvResult<LoadedDataset> {
        let path = path.as_ref();
        tracing::debug!("讀取 {} 資料檔: {}", metal, path.display());
        let raw_text = fs::read_to_string(path)?;
        Ok(self.load_text(metal, raw_text))
    }

    /// 依序載入多個資料檔
    pub fn load_all<'a, I, P>(&self, entries: I) -> CsvResult<Vec<LoadedDataset>>
    where
        I: IntoIterator<Item = (Metal, &'a P)>,
        P: AsRef<Path> + ?Sized + 'a,
    {
        entries
            .into_iter()
            .map(|(metal, path)| self.load_file(metal, path))
            .collect()
    }
}
