//! 問答端的資料脈絡
//!
//! 原始 CSV 文字原封不動地放進系統指示，回答才能追溯回解析後的序列。

use crate::data_ingestion::LoadedDataset;
use crate::domain_types::Metal;

/// 每種金屬的原始資料文字
#[derive(Debug, Clone, Default)]
pub struct DataContext {
    datasets: Vec<(Metal, String)>,
}

impl DataContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入一份原始資料；同一金屬重複加入時覆蓋舊資料
    pub fn with_raw(mut self, metal: Metal, raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        match self.datasets.iter_mut().find(|(m, _)| *m == metal) {
            Some(entry) => entry.1 = raw_text,
            None => self.datasets.push((metal, raw_text)),
        }
        self
    }

    /// 由已載入的資料集建立
    pub fn from_datasets(datasets: &[LoadedDataset]) -> Self {
        datasets
            .iter()
            .fold(Self::new(), |ctx, ds| ctx.with_raw(ds.metal, ds.raw_text.clone()))
    }

    pub fn raw(&self, metal: Metal) -> Option<&str> {
        self.datasets
            .iter()
            .find(|(m, _)| *m == metal)
            .map(|(_, raw)| raw.as_str())
    }

    pub fn metals(&self) -> impl Iterator<Item = Metal> + '_ {
        self.datasets.iter().map(|(m, _)| *m)
    }

    /// 組出系統指示
    pub fn system_instruction(&self, active: Metal) -> String {
        let mut out = String::new();
        out.push_str("You are an expert financial commodities analyst.\n");
        out.push_str(
            "You have access to historical monthly price data \
             for precious metals from 1915 to 2025.\n\n",
        );
        out.push_str("CURRENT USER CONTEXT:\n");
        out.push_str(&format!(
            "The user is currently viewing the **{active}** price chart.\n\
             Questions such as \"what is the trend?\" or \"highest price\" \
             refer to the **{active}** data \
             unless the user explicitly asks about another metal.\n\n"
        ));
        out.push_str("CONTEXT DATA:\n");
        out.push_str(
            "The raw CSV data below is the only source for your answers. \
             Each line holds a date (DD/MM/YYYY) and a value (price in USD).\n\n",
        );

        for (metal, raw) in &self.datasets {
            let name = metal.name().to_uppercase();
            out.push_str(&format!("--- {name} DATA START ---\n"));
            out.push_str(raw);
            if !raw.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&format!("--- {name} DATA END ---\n\n"));
        }

        out.push_str("INSTRUCTIONS:\n");
        out.push_str("1. Answer strictly from the data provided above.\n");
        out.push_str(&format!("2. Prioritize the metal currently being viewed ({active}).\n"));
        out.push_str("3. Look up specific dates in the data when asked.\n");
        out.push_str("4. Analyze the numbers provided when asked about trends.\n");
        out.push_str("5. Be concise but helpful. Use Markdown for tables, lists and bold text.\n");
        out.push_str("6. The \"Value\" is the price in USD.\n");
        out
    }
}
