use std::{collections::HashMap, fs, io::ErrorKind, path::Path, time::Duration};

use serde::Serialize;
use shared::{domain::ROOT_PATH, error::SiteError};

use crate::{highlight::DEFAULT_INTERVAL, nav::SCROLL_THRESHOLD_PX};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteSettings {
    pub scroll_threshold_px: f64,
    pub highlight_interval_ms: u64,
    pub default_path: String,
    pub site_title: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            scroll_threshold_px: SCROLL_THRESHOLD_PX,
            highlight_interval_ms: DEFAULT_INTERVAL.as_millis() as u64,
            default_path: ROOT_PATH.into(),
            site_title: "Kongu V GUVI".into(),
        }
    }
}

impl SiteSettings {
    pub fn highlight_interval(&self) -> Duration {
        Duration::from_millis(self.highlight_interval_ms)
    }
}

/// Defaults, then `path` if it exists, then `SITE__*` environment overrides.
pub fn load_settings(path: impl AsRef<Path>) -> Result<SiteSettings, SiteError> {
    let path = path.as_ref();
    let mut settings = SiteSettings::default();

    match fs::read_to_string(path) {
        Ok(raw) => apply_file(&mut settings, &raw)
            .map_err(|err| SiteError::Config(format!("{}: {err}", path.display())))?,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file; using defaults");
        }
        Err(err) => {
            return Err(SiteError::Config(format!(
                "failed to read '{}': {err}",
                path.display()
            )))
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    validate(&settings)?;
    Ok(settings)
}

/// Rejects values the shell cannot run with: a zero-length highlight period,
/// a threshold that is negative or not finite, or a default path that is not
/// a route path.
pub fn validate(settings: &SiteSettings) -> Result<(), SiteError> {
    if settings.highlight_interval_ms == 0 {
        return Err(SiteError::Config("highlight_interval_ms must be greater than zero".into()));
    }
    let threshold = settings.scroll_threshold_px;
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(SiteError::Config(format!(
            "scroll_threshold_px must be a finite, non-negative number, got {threshold}"
        )));
    }
    if !settings.default_path.starts_with('/') {
        return Err(SiteError::Config(format!(
            "default_path must start with '/', got '{}'",
            settings.default_path
        )));
    }
    Ok(())
}

fn apply_file(settings: &mut SiteSettings, raw: &str) -> Result<(), String> {
    let file_cfg = toml::from_str::<HashMap<String, toml::Value>>(raw).map_err(|e| e.to_string())?;

    if let Some(v) = file_cfg.get("scroll_threshold_px") {
        settings.scroll_threshold_px = match v {
            toml::Value::Float(f) => *f,
            toml::Value::Integer(i) => *i as f64,
            other => return Err(format!("scroll_threshold_px must be a number, got {other}")),
        };
    }
    if let Some(v) = file_cfg.get("highlight_interval_ms") {
        settings.highlight_interval_ms = v
            .as_integer()
            .and_then(|i| u64::try_from(i).ok())
            .ok_or_else(|| format!("highlight_interval_ms must be a non-negative integer, got {v}"))?;
    }
    if let Some(v) = file_cfg.get("default_path").and_then(|v| v.as_str()) {
        settings.default_path = v.to_string();
    }
    if let Some(v) = file_cfg.get("site_title").and_then(|v| v.as_str()) {
        settings.site_title = v.to_string();
    }
    Ok(())
}

fn apply_env(settings: &mut SiteSettings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("SITE__SCROLL_THRESHOLD_PX") {
        if let Ok(parsed) = v.parse::<f64>() {
            settings.scroll_threshold_px = parsed;
        }
    }
    if let Some(v) = var("SITE__HIGHLIGHT_INTERVAL_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.highlight_interval_ms = parsed;
        }
    }
    if let Some(v) = var("SITE__TITLE") {
        settings.site_title = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
