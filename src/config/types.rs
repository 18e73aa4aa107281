use crate::assistant::AssistantConfig;
use crate::config::validation::{ValidationError, ValidationUtils, Validator};
use crate::data_ingestion::processor::csv_io::{CalendarPolicy, ParserOptions};
use crate::domain_types::Metal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 應用程序配置結構
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationConfig {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub datasets: DatasetsConfig,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
}

impl Validator for ApplicationConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        self.log.validate()?;
        self.datasets.validate()?;
        self.assistant.validate()?;
        Ok(())
    }
}

/// 日誌配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Validator for LogConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        ValidationUtils::one_of(
            &self.level.to_lowercase(),
            &["trace", "debug", "info", "warn", "error"],
            "log.level",
        )?;
        ValidationUtils::one_of(&self.format.to_lowercase(), &["pretty", "json"], "log.format")?;
        Ok(())
    }
}

/// 資料檔位置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetsConfig {
    pub gold: PathBuf,
    pub silver: PathBuf,
}

impl Default for DatasetsConfig {
    fn default() -> Self {
        Self {
            gold: PathBuf::from("data/gold.csv"),
            silver: PathBuf::from("data/silver.csv"),
        }
    }
}

impl DatasetsConfig {
    /// 指定金屬的資料檔
    pub fn path(&self, metal: Metal) -> &PathBuf {
        match metal {
            Metal::Gold => &self.gold,
            Metal::Silver => &self.silver,
        }
    }

    /// 所有金屬與其資料檔
    pub fn entries(&self) -> impl Iterator<Item = (Metal, &PathBuf)> + '_ {
        Metal::ALL.into_iter().map(move |metal| (metal, self.path(metal)))
    }
}

impl Validator for DatasetsConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        ValidationUtils::not_empty(&self.gold.to_string_lossy(), "datasets.gold")?;
        ValidationUtils::not_empty(&self.silver.to_string_lossy(), "datasets.silver")?;
        Ok(())
    }
}

/// 解析器配置
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ParserConfig {
    #[serde(default)]
    pub calendar: CalendarPolicy,
}

impl ParserConfig {
    pub fn options(&self) -> ParserOptions {
        ParserOptions::default().with_calendar(self.calendar)
    }
}
