//! CSV 處理錯誤定義

use thiserror::Error;

/// CSV 處理錯誤類型
///
/// 單列格式錯誤不屬於此類：解析器會直接略過該列。
#[derive(Error, Debug)]
pub enum CsvError {
    #[error("檔案讀取錯誤: {0}")]
    IoError(#[from] std::io::Error),

    #[error("不支援的曆法檢查模式: {0}")]
    UnsupportedCalendarPolicy(String),
}

/// CSV 處理結果類型
pub type CsvResult<T> = Result<T, CsvError>;
