use serde::Serialize;

use crate::common::enums::AlertTier;
use crate::config::sr_config::SrConfig;
use crate::math::extrema::{ExtremaSeries, WindowedExtremaCalculator};
use crate::math::sma::rolling_sma;

/// Horizontal line drawn across the whole chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceLine {
    pub label: String,
    pub value: f64,
}

/// Series overlaid on the price chart.
///
/// Support/resistance here use the plain rolling window (floor 1), not the
/// engine's floor-2 window, so short series still show per-point levels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub prices: Vec<f64>,
    pub levels: ExtremaSeries,
    pub short_sma: Option<Vec<f64>>,
    pub long_sma: Option<Vec<f64>>,
    pub reference_lines: Vec<ReferenceLine>,
}

/// One CSV row per observation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub index: usize,
    pub price: f64,
    pub support: f64,
    pub resistance: f64,
    pub short_sma: Option<f64>,
    pub long_sma: Option<f64>,
}

impl ChartData {
    pub fn build(series: &[f64], config: &SrConfig) -> Self {
        let levels = WindowedExtremaCalculator::compute(series, config.window);

        // Each average is only drawn once there is enough data to fill it
        let sma_line = |window: usize| {
            (!series.is_empty() && series.len() >= window).then(|| rolling_sma(series, window))
        };

        let mut reference_lines = vec![ReferenceLine {
            label: format!("Target {:.2}", config.target),
            value: config.target,
        }];
        reference_lines.extend(AlertTier::ALL.iter().rev().map(|tier| ReferenceLine {
            label: format!("Alert {}", tier),
            value: tier.level(),
        }));

        Self {
            prices: series.to_vec(),
            levels,
            short_sma: sma_line(config.short_sma_window),
            long_sma: sma_line(config.long_sma_window),
            reference_lines,
        }
    }

    pub fn rows(&self) -> Vec<ChartRow> {
        self.prices
            .iter()
            .enumerate()
            .map(|(i, &price)| ChartRow {
                index: i,
                price,
                support: self.levels.support[i],
                resistance: self.levels.resistance[i],
                short_sma: self.short_sma.as_ref().map(|s| s[i]),
                long_sma: self.long_sma.as_ref().map(|s| s[i]),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(window: usize, short: usize, long: usize) -> SrConfig {
        SrConfig {
            window,
            short_sma_window: short,
            long_sma_window: long,
            ..SrConfig::default()
        }
    }

    #[test]
    fn test_plot_window_floor_is_one() {
        let series = [1.0, 2.0, 3.0];
        let chart = ChartData::build(&series, &config(1, 2, 3));
        assert_eq!(chart.levels.support, series.to_vec());
        assert_eq!(chart.levels.resistance, series.to_vec());
    }

    #[test]
    fn test_sma_lines_need_enough_data() {
        let series = [1.0, 2.0, 3.0, 4.0];
        let chart = ChartData::build(&series, &config(10, 2, 5));
        assert_eq!(chart.short_sma, Some(vec![1.0, 1.5, 2.5, 3.5]));
        assert!(chart.long_sma.is_none());

        let chart = ChartData::build(&[], &config(10, 2, 5));
        assert!(chart.short_sma.is_none());
        assert!(chart.rows().is_empty());
    }

    #[test]
    fn test_reference_lines() {
        let chart = ChartData::build(&[1.0], &SrConfig::default());
        let values: Vec<f64> = chart.reference_lines.iter().map(|l| l.value).collect();
        assert_eq!(values, vec![1.50, 2.0, 5.0, 10.0]);
        assert_eq!(chart.reference_lines[0].label, "Target 1.50");
        assert_eq!(chart.reference_lines[3].label, "Alert 10.00");
    }

    #[test]
    fn test_rows_align() {
        let series = [3.0, 1.0, 2.0];
        let chart = ChartData::build(&series, &config(2, 1, 2));
        let rows = chart.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].support, 1.0);
        assert_eq!(rows[1].resistance, 3.0);
        assert_eq!(rows[2].long_sma, Some(1.5));
    }
}
