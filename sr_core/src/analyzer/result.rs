use serde::Serialize;

use crate::common::enums::{AlertSeverity, AlertTier, PredictionKind, WarningKind};
use crate::math::trend::TrendReport;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub kind: PredictionKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub tier: AlertTier,
    pub severity: AlertSeverity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisWarning {
    pub kind: WarningKind,
    pub message: String,
}

impl AnalysisWarning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Everything one analysis run produces, handed to the presentation layer as-is
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub latest_value: Option<f64>,
    pub latest_support: Option<f64>,
    pub latest_resistance: Option<f64>,
    pub target: f64,
    pub threshold: f64,
    /// Support/resistance window after adjustment; `None` when nothing was computed
    pub effective_window: Option<usize>,
    pub prediction: Prediction,
    pub alert_tier10: Option<Alert>,
    pub alert_tier5: Option<Alert>,
    pub alert_tier2: Option<Alert>,
    /// `None` only when the input was empty
    pub trend: Option<TrendReport>,
    pub warnings: Vec<AnalysisWarning>,
}

impl AnalysisResult {
    pub fn prediction_kind(&self) -> PredictionKind {
        self.prediction.kind
    }

    pub fn alert(&self, tier: AlertTier) -> Option<&Alert> {
        match tier {
            AlertTier::Tier10 => self.alert_tier10.as_ref(),
            AlertTier::Tier5 => self.alert_tier5.as_ref(),
            AlertTier::Tier2 => self.alert_tier2.as_ref(),
        }
    }

    /// Triggered alerts, highest tier first
    pub fn alerts(&self) -> impl Iterator<Item = &Alert> {
        AlertTier::ALL.into_iter().filter_map(move |t| self.alert(t))
    }

    pub fn has_warning(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|w| w.kind == kind)
    }
}
