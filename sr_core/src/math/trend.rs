use serde::Serialize;

use crate::common::enums::TrendLabel;
use crate::math::sma::latest_sma;

/// Trend label plus the averages it was derived from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    pub label: TrendLabel,
    pub message: String,
    pub short_sma: Option<f64>,
    pub long_sma: Option<f64>,
}

/// Classifies trend from the ordering of the latest value and two moving averages
pub struct TrendClassifier;

impl TrendClassifier {
    pub fn classify(series: &[f64], short_window: usize, long_window: usize) -> TrendLabel {
        Self::classify_detailed(series, short_window, long_window).label
    }

    pub fn classify_detailed(
        series: &[f64],
        short_window: usize,
        long_window: usize,
    ) -> TrendReport {
        let (Some(&v), false) = (series.last(), series.len() < long_window) else {
            return TrendReport {
                label: TrendLabel::InsufficientData,
                message: format!(
                    "Not enough data for a trend: {} points available, SMA{} needs {}.",
                    series.len(),
                    long_window,
                    long_window
                ),
                short_sma: None,
                long_sma: None,
            };
        };

        let s = latest_sma(series, short_window).unwrap_or(f64::NAN);
        let l = latest_sma(series, long_window).unwrap_or(f64::NAN);

        // Strict comparisons: any tie or NaN lands in Stable
        let (label, message) = if v > s && s > l {
            (
                TrendLabel::Bullish,
                format!(
                    "Bullish trend: latest {:.4} > SMA{} {:.4} > SMA{} {:.4}.",
                    v, short_window, s, long_window, l
                ),
            )
        } else if v < s && s < l {
            (
                TrendLabel::Bearish,
                format!(
                    "Bearish trend: latest {:.4} < SMA{} {:.4} < SMA{} {:.4}.",
                    v, short_window, s, long_window, l
                ),
            )
        } else {
            (
                TrendLabel::Stable,
                format!(
                    "Stable: latest {:.4}, SMA{} {:.4} and SMA{} {:.4} show no ordered trend.",
                    v, short_window, s, long_window, l
                ),
            )
        };

        TrendReport {
            label,
            message,
            short_sma: Some(s),
            long_sma: Some(l),
        }
    }
}
