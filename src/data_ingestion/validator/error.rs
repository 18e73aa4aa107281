use thiserror::Error;

/// 序列驗證錯誤
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("時間順序錯誤: {current} 早於 {previous}")]
    OutOfOrder { previous: String, current: String },

    #[error("重複的日期: {date}")]
    DuplicateEntry { date: String },

    #[error("無效的價格: {date} = {value}, {reason}")]
    InvalidValue {
        date: String,
        value: f64,
        reason: String,
    },

    #[error("無效的日期: {date}")]
    InvalidDate { date: String },
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// 依序列索引收集的驗證錯誤
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<(usize, ValidationError)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, index: usize, error: ValidationError) {
        self.errors.push((index, error));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(usize, ValidationError)> {
        self.errors.iter()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} 個驗證錯誤", self.errors.len())?;
        if let Some((index, first)) = self.errors.first() {
            write!(f, "，第一個位於索引 {}: {}", index, first)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
