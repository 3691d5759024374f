//! Remembers the parameters chosen on the previous run.
//!
//! Stored as a flat key-value map so it feeds straight into `SrConfig::new`.
use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsFile {
    pub saved_at: DateTime<Utc>,
    pub values: HashMap<String, Value>,
}

/// Load saved values; a missing file is not an error
pub fn load(path: &Path) -> Result<Option<SettingsFile>, Box<dyn Error>> {
    if !path.exists() {
        log::debug!("no settings at {}", path.display());
        return Ok(None);
    }
    let text = fs::read_to_string(path)?;
    let settings: SettingsFile = serde_json::from_str(&text)?;
    log::info!(
        "loaded {} settings from {} (saved {})",
        settings.values.len(),
        path.display(),
        settings.saved_at
    );
    Ok(Some(settings))
}

pub fn save(path: &Path, values: HashMap<String, Value>) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let settings = SettingsFile {
        saved_at: Utc::now(),
        values,
    };
    fs::write(path, serde_json::to_string_pretty(&settings)?)?;
    log::info!("saved settings to {}", path.display());
    Ok(())
}
