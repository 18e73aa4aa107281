// 模組定義
pub mod assistant;
pub mod config;
pub mod data_ingestion;
pub mod domain_types;
pub mod trend_detection;
pub mod utils;
