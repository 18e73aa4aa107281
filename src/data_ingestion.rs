pub mod processor;
pub mod validator;

pub use processor::{CsvParser, DataLoader, LoadedDataset, ParseReport, ParserOptions};
