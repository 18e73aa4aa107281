/// 配置管理模組
///
/// 本模組負責加載與驗證宿主程式的配置。
/// 配置依環境（開發／正式）讀取 TOML 檔，並可由 `METALS__*` 環境變數覆寫。
/// 程式庫核心不讀取任何配置；配置只在宿主程式中載入後明確傳入。
pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{ConfigExt, ConfigLoader, Environment};
pub use types::*;
pub use validation::{ValidationError, ValidationUtils, Validator};
