pub mod asset_types;
pub mod chart_data;
pub mod data_point;
pub mod series;
pub mod trend;

pub use asset_types::{Metal, MetalParseError};
pub use chart_data::ChartData;
pub use data_point::{IsoDate, IsoDateParseError, Observation};
pub use series::Series;
pub use trend::{TrendKind, TrendWindow};
