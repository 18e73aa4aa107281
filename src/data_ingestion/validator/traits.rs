use super::error::{ValidationErrors, ValidationResult};

/// 數據驗證器特徵
pub trait Validator {
    type Data;

    /// 驗證器名稱
    fn name(&self) -> &str;

    /// 驗證單筆資料
    fn validate_record(&self, record: &Self::Data) -> ValidationResult<()>;

    /// 批次驗證，收集所有錯誤
    fn validate_batch(&self, data: &[Self::Data]) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for (i, record) in data.iter().enumerate() {
            if let Err(e) = self.validate_record(record) {
                errors.add(i, e);
            }
        }

        if errors.has_errors() {
            Err(errors)
        } else {
            Ok(())
        }
    }
}
