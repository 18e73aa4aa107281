pub mod csv_io;
pub mod data_loader;

pub use csv_io::{CalendarPolicy, CsvError, CsvParser, CsvResult, ParseReport, ParserOptions};
pub use data_loader::{DataLoader, LoadedDataset};
