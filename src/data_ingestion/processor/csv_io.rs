//! CSV 文字解析與正規化模組

pub mod error;
pub mod options;
pub mod parser;

pub use error::{CsvError, CsvResult};
pub use options::{CalendarPolicy, ParserOptions};
pub use parser::{CsvParser, ParseReport};
