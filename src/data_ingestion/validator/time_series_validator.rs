use super::error::{ValidationError, ValidationErrors, ValidationResult};
use super::traits::Validator;
use crate::domain_types::{IsoDate, Observation, Series};
use serde::{Deserialize, Serialize};

/// 時間序列驗證器
///
/// 檢查解析後序列的不變量：日期非遞減、價格為非負有限數。
/// 重複日期預設視為錯誤，可改為只計數。
#[derive(Debug, Clone)]
pub struct TimeSeriesValidator {
    /// 是否允許重複日期
    allow_duplicates: bool,
    /// 是否要求日期為真實曆法日期
    require_calendar_dates: bool,
}

impl TimeSeriesValidator {
    /// 創建新的時間序列驗證器
    pub fn new() -> Self {
        Self {
            allow_duplicates: false,
            require_calendar_dates: false,
        }
    }

    /// 設置是否允許重複
    pub fn with_allow_duplicates(mut self, allow: bool) -> Self {
        self.allow_duplicates = allow;
        self
    }

    /// 設置是否要求真實日期
    pub fn with_calendar_dates(mut self, required: bool) -> Self {
        self.require_calendar_dates = required;
        self
    }

    /// 驗證時間序列
    pub fn validate_series(&self, series: &Series) -> Result<TimeSeriesStats, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let observations = series.observations();

        for (i, obs) in observations.iter().enumerate() {
            if let Err(e) = self.validate_record(obs) {
                errors.add(i, e);
            }

            if i == 0 {
                continue;
            }
            let prev = &observations[i - 1];

            if obs.date < prev.date {
                errors.add(
                    i,
                    ValidationError::OutOfOrder {
                        previous: prev.date.to_string(),
                        current: obs.date.to_string(),
                    },
                );
            } else if obs.date == prev.date && !self.allow_duplicates {
                errors.add(
                    i,
                    ValidationError::DuplicateEntry {
                        date: obs.date.to_string(),
                    },
                );
            }
        }

        if errors.has_errors() {
            Err(errors)
        } else {
            Ok(self.stats(series))
        }
    }

    /// 計算序列統計，不做驗證
    pub fn stats(&self, series: &Series) -> TimeSeriesStats {
        let mut stats = TimeSeriesStats {
            total_records: series.len(),
            ..Default::default()
        };

        if let Some((start, end)) = series.date_range() {
            stats.start_date = Some(start);
            stats.end_date = Some(end);
        }

        stats.duplicate_count = series
            .observations()
            .windows(2)
            .filter(|pair| pair[0].date == pair[1].date)
            .count();

        if let Some(max) = series.max_by_value() {
            stats.max_value = Some(max.value);
            stats.max_date = Some(max.date);
        }
        if let Some(min) = series.min_by_value() {
            stats.min_value = Some(min.value);
            stats.min_date = Some(min.date);
        }
        if !series.is_empty() {
            let sum: f64 = series.iter().map(|o| o.value).sum();
            stats.mean_value = Some(sum / series.len() as f64);
        }

        stats
    }
}

impl Default for TimeSeriesValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for TimeSeriesValidator {
    type Data = Observation;

    fn name(&self) -> &str {
        "TimeSeriesValidator"
    }

    fn validate_record(&self, record: &Observation) -> ValidationResult<()> {
        if !record.value.is_finite() {
            return Err(ValidationError::InvalidValue {
                date: record.date.to_string(),
                value: record.value,
                reason: "價格必須為有限數".to_string(),
            });
        }
        if record.value < 0.0 {
            return Err(ValidationError::InvalidValue {
                date: record.date.to_string(),
                value: record.value,
                reason: "價格不可為負".to_string(),
            });
        }
        if self.require_calendar_dates && !record.date.is_calendar_date() {
            return Err(ValidationError::InvalidDate {
                date: record.date.to_string(),
            });
        }
        Ok(())
    }
}

/// 時間序列統計資訊
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesStats {
    /// 總記錄數
    pub total_records: usize,
    pub start_date: Option<IsoDate>,
    pub end_date: Option<IsoDate>,
    /// 相鄰重複日期數
    pub duplicate_count: usize,
    pub min_value: Option<f64>,
    pub min_date: Option<IsoDate>,
    pub max_value: Option<f64>,
    pub max_date: Option<IsoDate>,
    pub mean_value: Option<f64>,
}
