use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::sr_exception::{ErrCode, SrException};

pub const DEFAULT_TARGET: f64 = 1.50;
pub const DEFAULT_WINDOW: usize = 10;
pub const DEFAULT_THRESHOLD: f64 = 0.01;
pub const DEFAULT_SHORT_SMA: usize = 5;
pub const DEFAULT_LONG_SMA: usize = 20;

/// Parameters for one analysis run.
///
/// Passed explicitly into every call; the engine keeps no state between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SrConfig {
    /// Value the directional prediction is stated against
    pub target: f64,
    /// Requested support/resistance window, clamped against the data length
    pub window: usize,
    /// Margin around support/resistance that triggers a prediction
    pub threshold: f64,
    pub short_sma_window: usize,
    pub long_sma_window: usize,
}

impl Default for SrConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            window: DEFAULT_WINDOW,
            threshold: DEFAULT_THRESHOLD,
            short_sma_window: DEFAULT_SHORT_SMA,
            long_sma_window: DEFAULT_LONG_SMA,
        }
    }
}

impl SrConfig {
    /// Build a config from a loose key-value map, falling back to defaults.
    pub fn new(conf: Option<HashMap<String, Value>>) -> Result<Self, SrException> {
        let mut conf = ConfigWithCheck::new(conf.unwrap_or_default());
        let default = Self::default();

        let config = Self {
            target: conf.get("target")?.unwrap_or(default.target),
            window: conf.get("window")?.unwrap_or(default.window),
            threshold: conf.get("threshold")?.unwrap_or(default.threshold),
            short_sma_window: conf
                .get("short_sma_window")?
                .unwrap_or(default.short_sma_window),
            long_sma_window: conf
                .get("long_sma_window")?
                .unwrap_or(default.long_sma_window),
        };

        conf.check()?;
        config.check()?;
        Ok(config)
    }

    pub fn check(&self) -> Result<(), SrException> {
        if self.window == 0 || self.short_sma_window == 0 || self.long_sma_window == 0 {
            return Err(SrException::new(
                format!(
                    "windows must be at least 1 (window={}, short={}, long={})",
                    self.window, self.short_sma_window, self.long_sma_window
                ),
                ErrCode::ParaError,
            ));
        }
        if self.short_sma_window >= self.long_sma_window {
            return Err(SrException::new(
                format!(
                    "short_sma_window={} must be less than long_sma_window={}",
                    self.short_sma_window, self.long_sma_window
                ),
                ErrCode::ParaError,
            ));
        }
        if !self.target.is_finite() {
            return Err(SrException::new(
                format!("target={} is not finite", self.target),
                ErrCode::ParaError,
            ));
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(SrException::new(
                format!("threshold={} must be a finite value >= 0", self.threshold),
                ErrCode::ParaError,
            ));
        }
        Ok(())
    }

    /// Key-value form accepted by [`SrConfig::new`]
    pub fn to_map(&self) -> HashMap<String, Value> {
        let mut map = HashMap::new();
        map.insert("target".to_string(), Value::from(self.target));
        map.insert("window".to_string(), Value::from(self.window));
        map.insert("threshold".to_string(), Value::from(self.threshold));
        map.insert(
            "short_sma_window".to_string(),
            Value::from(self.short_sma_window),
        );
        map.insert(
            "long_sma_window".to_string(),
            Value::from(self.long_sma_window),
        );
        map
    }
}

/// Consumes keys as they are read so leftovers can be reported as unknown
struct ConfigWithCheck {
    conf: HashMap<String, Value>,
}

impl ConfigWithCheck {
    fn new(conf: HashMap<String, Value>) -> Self {
        Self { conf }
    }

    fn get<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>, SrException> {
        match self.conf.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(v) => serde_json::from_value(v.clone()).map(Some).map_err(|e| {
                SrException::new(
                    format!("para {} has invalid value {}: {}", key, v, e),
                    ErrCode::ConfigError,
                )
            }),
        }
    }

    fn check(&self) -> Result<(), SrException> {
        let mut unknown: Vec<&String> = self.conf.keys().collect();
        unknown.sort();
        match unknown.first() {
            Some(k) => Err(SrException::new(
                format!("unknown para = {}", k),
                ErrCode::ParaError,
            )),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(v: Value) -> HashMap<String, Value> {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = SrConfig::new(None).unwrap();
        assert_eq!(config, SrConfig::default());
        assert_eq!(config.target, 1.50);
        assert_eq!(config.window, 10);
        assert_eq!(config.threshold, 0.01);
    }

    #[test]
    fn test_overrides() {
        let config = SrConfig::new(Some(map(json!({
            "target": 2.0,
            "window": 5,
            "long_sma_window": 30
        }))))
        .unwrap();
        assert_eq!(config.target, 2.0);
        assert_eq!(config.window, 5);
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.long_sma_window, 30);
    }

    #[test]
    fn test_unknown_para() {
        let err = SrConfig::new(Some(map(json!({ "windw": 5 })))).unwrap_err();
        assert_eq!(err.errcode, ErrCode::ParaError);
        assert!(err.msg.contains("windw"));
    }

    #[test]
    fn test_wrong_type() {
        let err = SrConfig::new(Some(map(json!({ "window": "ten" })))).unwrap_err();
        assert_eq!(err.errcode, ErrCode::ConfigError);
    }

    #[test]
    fn test_check_rejects_bad_values() {
        let mut config = SrConfig::default();
        config.window = 0;
        assert!(config.check().is_err());

        let mut config = SrConfig::default();
        config.short_sma_window = 20;
        assert!(config.check().is_err());

        let mut config = SrConfig::default();
        config.threshold = -0.1;
        assert!(config.check().is_err());

        let mut config = SrConfig::default();
        config.target = f64::NAN;
        assert!(config.check().is_err());

        let mut config = SrConfig::default();
        config.threshold = 0.0;
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_map_round_trip() {
        let config = SrConfig {
            target: 3.25,
            window: 7,
            threshold: 0.05,
            short_sma_window: 3,
            long_sma_window: 9,
        };
        assert_eq!(SrConfig::new(Some(config.to_map())).unwrap(), config);
    }
}
