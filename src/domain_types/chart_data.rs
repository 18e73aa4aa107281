//! 提供給繪圖端的資料契約

use super::{Metal, Series, TrendWindow};
use serde::{Deserialize, Serialize};

/// 單一金屬的圖表資料：序列與其趨勢區間
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub metal: Metal,
    pub observations: Series,
    pub trends: Vec<TrendWindow>,
}

impl ChartData {
    pub fn new(metal: Metal, observations: Series, trends: Vec<TrendWindow>) -> Self {
        Self {
            metal,
            observations,
            trends,
        }
    }

    /// 觀測值筆數
    pub fn record_count(&self) -> usize {
        self.observations.len()
    }

    /// 轉為 JSON 字串
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
