use super::signal::{YoySignal, LOOKBACK};
use super::state::WindowState;
use crate::domain_types::{Series, TrendWindow};

/// 趨勢區間偵測器
///
/// 以 12 筆前的價格計算年增率，將連續同向的訊號合併為區間。
/// 結果按時間排序且互不重疊。
pub struct TrendDetector;

impl TrendDetector {
    /// 偵測序列中的多頭與空頭區間
    pub fn detect(series: &Series) -> Vec<TrendWindow> {
        let observations = series.observations();
        if observations.len() <= LOOKBACK {
            return Vec::new();
        }

        let (state, mut windows) = (LOOKBACK..observations.len()).fold(
            (WindowState::Idle, Vec::new()),
            |(state, mut windows), i| {
                let (current, past) = (&observations[i], &observations[i - LOOKBACK]);
                let signal = YoySignal::classify(current.value, past.value);
                let (next, closed) = state.step(signal, observations[i - 1].date, current.date);
                windows.extend(closed);
                (next, windows)
            },
        );

        if let Some(last) = observations.last() {
            windows.extend(state.finish(last.date));
        }

        tracing::debug!(
            "偵測到 {} 個趨勢區間（{} 筆觀測值）",
            windows.len(),
            observations.len()
        );
        windows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_types::{IsoDate, Observation, TrendKind};

    fn monthly(values: &[f64]) -> Series {
        Series::from_unsorted(
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| {
                    let year = 1915 + (i / 12) as u16;
                    let month = (i % 12) as u8 + 1;
                    Observation::new(
                        IsoDate::new(year, month, 1),
                        format!("01/{month:02}/{year}"),
                        v,
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_short_series_has_no_windows() {
        assert!(TrendDetector::detect(&Series::empty()).is_empty());
        assert!(TrendDetector::detect(&monthly(&[1.0; 11])).is_empty());
        assert!(TrendDetector::detect(&monthly(&[1.0; 12])).is_empty());
    }

    #[test]
    fn test_single_up_sample_at_end() {
        let mut values = vec![1.0; 13];
        values[12] = 1.21;
        let series = monthly(&values);

        let windows = TrendDetector::detect(&series);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].kind, TrendKind::Up);
        assert_eq!(windows[0].start, series.observations()[12].date);
        assert_eq!(windows[0].end, series.observations()[12].date);
    }

    #[test]
    fn test_zero_base_is_no_signal() {
        let mut values = vec![0.0; 14];
        values[12] = 5.0;
        values[13] = 5.0;
        assert!(TrendDetector::detect(&monthly(&values)).is_empty());
    }

    #[test]
    fn test_up_then_gap_then_down() {
        // 第二年: 前三個月 +50%，接著兩個月持平，再三個月 -50%
        let mut values = vec![100.0; 12];
        values.extend([150.0, 150.0, 150.0, 100.0, 100.0, 50.0, 50.0, 50.0]);
        let series = monthly(&values);
        let dates = series.dates();

        let windows = TrendDetector::detect(&series);
        assert_eq!(
            windows,
            vec![
                TrendWindow::new(TrendKind::Up, dates[12], dates[14]),
                TrendWindow::new(TrendKind::Down, dates[17], dates[19]),
            ]
        );
    }

    #[test]
    fn test_direct_reversal_shares_no_date() {
        let mut values = vec![100.0; 12];
        values.extend([150.0, 150.0, 50.0, 50.0]);
        let series = monthly(&values);
        let dates = series.dates();

        let windows = TrendDetector::detect(&series);
        assert_eq!(
            windows,
            vec![
                TrendWindow::new(TrendKind::Up, dates[12], dates[13]),
                TrendWindow::new(TrendKind::Down, dates[14], dates[15]),
            ]
        );
    }
}
