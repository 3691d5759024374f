use std::collections::VecDeque;

use serde::Serialize;

use crate::common::utils::effective_window;

/// Rolling support (minimum) and resistance (maximum), index-aligned with the input
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtremaSeries {
    pub support: Vec<f64>,
    pub resistance: Vec<f64>,
}

impl ExtremaSeries {
    /// `(support, resistance)` at the final index
    pub fn latest(&self) -> Option<(f64, f64)> {
        Some((*self.support.last()?, *self.resistance.last()?))
    }
}

/// Trailing-window min/max over a price series.
///
/// The window grows from one element at the start of the series up to the
/// effective window, then slides. Each index is pushed and popped at most once
/// per deque, so a full pass is linear in the series length.
pub struct WindowedExtremaCalculator;

impl WindowedExtremaCalculator {
    pub fn compute(series: &[f64], requested_window: usize) -> ExtremaSeries {
        if series.is_empty() {
            return ExtremaSeries::default();
        }

        let window = effective_window(requested_window, series.len());
        let mut support = Vec::with_capacity(series.len());
        let mut resistance = Vec::with_capacity(series.len());

        // Indices of candidate minima (increasing values) and maxima (decreasing values)
        let mut min_q: VecDeque<usize> = VecDeque::with_capacity(window);
        let mut max_q: VecDeque<usize> = VecDeque::with_capacity(window);
        let mut last_nan: Option<usize> = None;

        for (i, &v) in series.iter().enumerate() {
            let start = (i + 1).saturating_sub(window);

            if v.is_nan() {
                last_nan = Some(i);
            } else {
                while min_q.back().is_some_and(|&j| series[j] >= v) {
                    min_q.pop_back();
                }
                min_q.push_back(i);

                while max_q.back().is_some_and(|&j| series[j] <= v) {
                    max_q.pop_back();
                }
                max_q.push_back(i);
            }

            while min_q.front().is_some_and(|&j| j < start) {
                min_q.pop_front();
            }
            while max_q.front().is_some_and(|&j| j < start) {
                max_q.pop_front();
            }

            // A NaN anywhere in the window leaves both levels undefined
            if last_nan.is_some_and(|n| n >= start) {
                support.push(f64::NAN);
                resistance.push(f64::NAN);
            } else {
                support.push(min_q.front().map_or(f64::NAN, |&j| series[j]));
                resistance.push(max_q.front().map_or(f64::NAN, |&j| series[j]));
            }
        }

        ExtremaSeries {
            support,
            resistance,
        }
    }
}
