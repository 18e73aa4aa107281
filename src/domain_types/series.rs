//! 價格時間序列

use super::data_point::{IsoDate, Observation};
use serde::{Deserialize, Deserializer, Serialize};

/// 單一商品的觀測值序列
///
/// 只能透過排序建立，保證按日期非遞減；日期相同的觀測值保留輸入順序。
/// 建立後不可變更，重新解析會得到全新的序列。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Series {
    observations: Vec<Observation>,
}

impl Series {
    /// 以穩定排序建立序列
    pub fn from_unsorted(mut observations: Vec<Observation>) -> Self {
        // sort_by_key 為穩定排序
        observations.sort_by_key(|obs| obs.date);
        Self { observations }
    }

    /// 空序列
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn get(&self, index: usize) -> Option<&Observation> {
        self.observations.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// 所有價格
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|obs| obs.value).collect()
    }

    /// 所有日期鍵
    pub fn dates(&self) -> Vec<IsoDate> {
        self.observations.iter().map(|obs| obs.date).collect()
    }

    /// 序列涵蓋的日期範圍
    pub fn date_range(&self) -> Option<(IsoDate, IsoDate)> {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }

    /// 最高價觀測值；價格相同時取最早的一筆
    pub fn max_by_value(&self) -> Option<&Observation> {
        self.observations
            .iter()
            .fold(None, |best: Option<&Observation>, obs| match best {
                Some(b) if b.value >= obs.value => Some(b),
                _ => Some(obs),
            })
    }

    /// 最低價觀測值；價格相同時取最早的一筆
    pub fn min_by_value(&self) -> Option<&Observation> {
        self.observations
            .iter()
            .fold(None, |best: Option<&Observation>, obs| match best {
                Some(b) if b.value <= obs.value => Some(b),
                _ => Some(obs),
            })
    }
}

impl From<Vec<Observation>> for Series {
    fn from(observations: Vec<Observation>) -> Self {
        Self::from_unsorted(observations)
    }
}

// 反序列化同樣經過排序
impl<'de> Deserialize<'de> for Series {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Observation>::deserialize(deserializer).map(Self::from_unsorted)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}
