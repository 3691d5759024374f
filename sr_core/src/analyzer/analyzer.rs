use log::{debug, info, warn};

use crate::analyzer::result::{Alert, AnalysisResult, AnalysisWarning, Prediction};
use crate::common::enums::{AlertSeverity, AlertTier, PredictionKind, TrendLabel, WarningKind};
use crate::common::utils::engine_window;
use crate::config::sr_config::SrConfig;
use crate::math::extrema::WindowedExtremaCalculator;
use crate::math::trend::TrendClassifier;

/// Prediction engine: resolves windows, runs the rolling calculators and
/// turns the latest levels into alerts and a directional prediction.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: SrConfig,
}

impl Analyzer {
    pub fn new(config: SrConfig) -> Self {
        Self { config }
    }

    pub fn predict(&self, series: &[f64]) -> AnalysisResult {
        let conf = &self.config;
        let mut warnings = Vec::new();

        if series.is_empty() {
            push_warning(&mut warnings, WarningKind::NoData, "Error: no data to analyze.");
            return AnalysisResult {
                latest_value: None,
                latest_support: None,
                latest_resistance: None,
                target: conf.target,
                threshold: conf.threshold,
                effective_window: None,
                prediction: Prediction {
                    kind: PredictionKind::NoData,
                    message: "No data".to_string(),
                },
                alert_tier10: None,
                alert_tier5: None,
                alert_tier2: None,
                trend: None,
                warnings,
            };
        }

        let len = series.len();
        let window = engine_window(conf.window, len);
        debug!("requested window {} resolved to {} for {} points", conf.window, window, len);

        if len == 1 {
            push_warning(
                &mut warnings,
                WarningKind::SinglePoint,
                "Note: with a single data point, support and resistance are the same value. \
                 The prediction will be limited.",
            );
        } else if window < conf.window {
            push_warning(
                &mut warnings,
                WarningKind::WindowAdjusted,
                format!(
                    "Note: the requested window of {} is larger than the available data ({}). \
                     The window was adjusted to {}.",
                    conf.window, len, window
                ),
            );
        }

        let extrema = WindowedExtremaCalculator::compute(series, window);
        let latest = series[len - 1];
        let (support, resistance) = extrema.latest().unwrap_or((f64::NAN, f64::NAN));

        let [alert_tier10, alert_tier5, alert_tier2] =
            AlertTier::ALL.map(|tier| evaluate_tier(tier, latest, resistance));

        let trend = TrendClassifier::classify_detailed(
            series,
            conf.short_sma_window,
            conf.long_sma_window,
        );
        if trend.label == TrendLabel::InsufficientData {
            push_warning(
                &mut warnings,
                WarningKind::InsufficientDataForTrend,
                trend.message.clone(),
            );
        }

        let prediction = if support.is_nan() || resistance.is_nan() {
            push_warning(
                &mut warnings,
                WarningKind::NumericIndeterminacy,
                "Warning: support/resistance levels could not be fully computed with the \
                 current data/window. The prediction may be less accurate.",
            );
            Prediction {
                kind: PredictionKind::Indeterminate,
                message: "Insufficient data or S/R not computable".to_string(),
            }
        } else {
            predict_direction(latest, support, resistance, conf.target, conf.threshold)
        };

        info!(
            "analyzed {} points: latest={:.4} support={:.4} resistance={:.4} -> {}",
            len, latest, support, resistance, prediction.kind
        );

        AnalysisResult {
            latest_value: Some(latest),
            latest_support: Some(support),
            latest_resistance: Some(resistance),
            target: conf.target,
            threshold: conf.threshold,
            effective_window: Some(window),
            prediction,
            alert_tier10,
            alert_tier5,
            alert_tier2,
            trend: Some(trend),
            warnings,
        }
    }
}

/// Run one analysis with an explicit parameter set
pub fn analyze(series: &[f64], config: &SrConfig) -> AnalysisResult {
    Analyzer::new(config.clone()).predict(series)
}

fn push_warning(warnings: &mut Vec<AnalysisWarning>, kind: WarningKind, msg: impl Into<String>) {
    let warning = AnalysisWarning::new(kind, msg);
    warn!("{}: {}", warning.kind, warning.message);
    warnings.push(warning);
}

/// One tier of the alert ladder.
///
/// The resistance check only runs when the value check for the same tier
/// failed. Tiers do not suppress each other, so a value above 10.00 can still
/// produce a lower-tier resistance message.
fn evaluate_tier(tier: AlertTier, value: f64, resistance: f64) -> Option<Alert> {
    if tier.contains(value) {
        let (severity, message) = match tier {
            AlertTier::Tier10 => (
                AlertSeverity::Alert,
                format!(
                    "MAXIMUM ALERT! The current value ({:.4}) is at or above 10.00. Extreme attention!",
                    value
                ),
            ),
            AlertTier::Tier5 => (
                AlertSeverity::Alert,
                format!("ALERT! The current value ({:.4}) is at or above 5.00.", value),
            ),
            AlertTier::Tier2 => (
                AlertSeverity::Note,
                format!("Positive note: the current value ({:.4}) is at or above 2.00.", value),
            ),
        };
        Some(Alert {
            tier,
            severity,
            message,
        })
    } else if tier.contains(resistance) {
        let (severity, message) = match tier {
            AlertTier::Tier10 => (
                AlertSeverity::Warning,
                format!(
                    "High warning: the detected resistance ({:.4}) is at or above 10.00. Potentially very high!",
                    resistance
                ),
            ),
            AlertTier::Tier5 => (
                AlertSeverity::Warning,
                format!(
                    "Warning: the detected resistance ({:.4}) is at or above 5.00.",
                    resistance
                ),
            ),
            AlertTier::Tier2 => (
                AlertSeverity::Info,
                format!(
                    "Note: the detected resistance ({:.4}) is at or above 2.00.",
                    resistance
                ),
            ),
        };
        Some(Alert {
            tier,
            severity,
            message,
        })
    } else {
        None
    }
}

/// Support is checked before resistance, so overlapping bands resolve upward
fn predict_direction(
    value: f64,
    support: f64,
    resistance: f64,
    target: f64,
    threshold: f64,
) -> Prediction {
    if value <= support + threshold {
        Prediction {
            kind: PredictionKind::AboveTarget,
            message: format!(
                "PREDICTION: expect a move ABOVE {:.4} (near support).",
                target
            ),
        }
    } else if value >= resistance - threshold {
        Prediction {
            kind: PredictionKind::BelowTarget,
            message: format!(
                "PREDICTION: expect a move BELOW {:.4} (near resistance).",
                target
            ),
        }
    } else {
        Prediction {
            kind: PredictionKind::Uncertain,
            message: "PREDICTION: the current value is between support and resistance. \
                      The direction is UNCERTAIN."
                .to_string(),
        }
    }
}
