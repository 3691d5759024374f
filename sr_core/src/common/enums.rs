use serde::Serialize;
use strum_macros::{Display, EnumString};

/// Trend classification from the short/long moving average ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendLabel {
    Bullish,
    Bearish,
    Stable,
    InsufficientData,
}

/// Directional prediction relative to the target value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PredictionKind {
    AboveTarget,
    BelowTarget,
    Uncertain,
    Indeterminate,
    NoData,
}

/// Fixed alert levels, evaluated from the highest down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
pub enum AlertTier {
    #[strum(serialize = "10.00")]
    Tier10,
    #[strum(serialize = "5.00")]
    Tier5,
    #[strum(serialize = "2.00")]
    Tier2,
}

impl AlertTier {
    pub const ALL: [AlertTier; 3] = [AlertTier::Tier10, AlertTier::Tier5, AlertTier::Tier2];

    pub fn level(&self) -> f64 {
        match self {
            Self::Tier10 => 10.0,
            Self::Tier5 => 5.0,
            Self::Tier2 => 2.0,
        }
    }

    /// Exclusive upper bound of the band this tier covers
    pub fn ceiling(&self) -> f64 {
        match self {
            Self::Tier10 => f64::INFINITY,
            Self::Tier5 => 10.0,
            Self::Tier2 => 5.0,
        }
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.level() && v < self.ceiling()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    Alert,
    Warning,
    Note,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningKind {
    NoData,
    SinglePoint,
    WindowAdjusted,
    InsufficientDataForTrend,
    NumericIndeterminacy,
}

impl WarningKind {
    /// Error-class warnings replace the analysis rather than annotate it
    pub fn is_error(&self) -> bool {
        matches!(self, Self::NoData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_bands() {
        assert!(AlertTier::Tier10.contains(10.0));
        assert!(AlertTier::Tier10.contains(250.0));
        assert!(!AlertTier::Tier5.contains(10.0));
        assert!(AlertTier::Tier5.contains(5.0));
        assert!(AlertTier::Tier2.contains(4.99));
        assert!(!AlertTier::Tier2.contains(1.99));
        assert!(!AlertTier::Tier2.contains(f64::NAN));
    }

    #[test]
    fn test_labels() {
        assert_eq!(TrendLabel::InsufficientData.to_string(), "INSUFFICIENT_DATA");
        assert_eq!(AlertTier::Tier5.to_string(), "5.00");
        assert!(WarningKind::NoData.is_error());
        assert!(!WarningKind::WindowAdjusted.is_error());
    }
}
