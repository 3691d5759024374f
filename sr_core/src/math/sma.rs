use crate::common::utils::effective_window;

/// Simple moving average with a window that grows from 1 at the start of the series.
///
/// Each position is averaged directly over its window, so a NaN only affects
/// the positions whose window contains it.
pub fn rolling_sma(series: &[f64], window: usize) -> Vec<f64> {
    let window = effective_window(window, series.len());
    (0..series.len())
        .map(|i| {
            let slice = &series[(i + 1).saturating_sub(window)..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

/// Average of the trailing window ending at the last element
pub fn latest_sma(series: &[f64], window: usize) -> Option<f64> {
    if series.is_empty() {
        return None;
    }
    let window = effective_window(window, series.len());
    let slice = &series[series.len() - window..];
    Some(slice.iter().sum::<f64>() / slice.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_sma() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(rolling_sma(&series, 2), vec![1.0, 1.5, 2.5, 3.5, 4.5]);
        assert_eq!(rolling_sma(&series, 3), vec![1.0, 1.5, 2.0, 3.0, 4.0]);
        assert_eq!(rolling_sma(&series, 1), series.to_vec());
    }

    #[test]
    fn test_empty() {
        assert!(rolling_sma(&[], 3).is_empty());
        assert_eq!(latest_sma(&[], 3), None);
    }

    #[test]
    fn test_latest_matches_rolling() {
        let series = [1.45, 1.48, 1.52, 1.49, 1.51, 1.47, 1.53];
        for w in 1..10 {
            assert_eq!(latest_sma(&series, w), rolling_sma(&series, w).last().copied());
        }
    }

    #[test]
    fn test_nan_is_local() {
        let series = [f64::NAN, 2.0, 4.0];
        let sma = rolling_sma(&series, 2);
        assert!(sma[0].is_nan());
        assert!(sma[1].is_nan());
        assert_eq!(sma[2], 3.0);
    }
}
