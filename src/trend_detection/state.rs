use crate::domain_types::{IsoDate, TrendKind, TrendWindow};

/// 趨勢區間累加器
///
/// 掃描時至多只有一個進行中的區間。`step` 是完整的狀態轉移表，
/// 可脫離序列單獨測試。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowState {
    /// 沒有進行中的區間
    #[default]
    Idle,
    /// 進行中的區間
    Open { kind: TrendKind, start: IsoDate },
}

impl WindowState {
    /// 處理一個索引的訊號
    ///
    /// `prev_date` 為前一個觀測值的日期，關閉區間時作為終點；
    /// `date` 為當前觀測值的日期，開啟新區間時作為起點。
    pub fn step(
        self,
        signal: Option<TrendKind>,
        prev_date: IsoDate,
        date: IsoDate,
    ) -> (WindowState, Option<TrendWindow>) {
        match (self, signal) {
            (WindowState::Idle, None) => (WindowState::Idle, None),
            (WindowState::Idle, Some(kind)) => (WindowState::Open { kind, start: date }, None),
            (WindowState::Open { kind, start }, Some(next)) if next == kind => {
                (WindowState::Open { kind, start }, None)
            }
            (WindowState::Open { kind, start }, next) => {
                let closed = TrendWindow::new(kind, start, prev_date);
                let state = match next {
                    Some(kind) => WindowState::Open { kind, start: date },
                    None => WindowState::Idle,
                };
                (state, Some(closed))
            }
        }
    }

    /// 掃描結束時關閉仍在進行的區間
    pub fn finish(self, last_date: IsoDate) -> Option<TrendWindow> {
        match self {
            WindowState::Idle => None,
            WindowState::Open { kind, start } => Some(TrendWindow::new(kind, start, last_date)),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, WindowState::Open { .. })
    }
}
