//! Page tunables read from an inline JSON `<script>` element.
//!
//! Missing fields take their defaults. A config that fails to parse or
//! validate is logged and replaced wholesale by [`PageConfig::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;

/// Page tunables. Every field has a default, so an empty JSON object
/// (or no config element at all) yields [`PageConfig::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Fixed header height subtracted from each section's top when
    /// deciding which section the scroll offset falls in.
    pub header_offset_px: f64,
    /// Hero carousel advance interval.
    pub hero_interval_ms: u32,
    /// Delay between showing a skill detail panel and marking it active.
    pub reveal_delay_ms: u32,
    /// Storage key of the theme preference.
    pub theme_key: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_offset_px: 80.0,
            hero_interval_ms: 5000,
            reveal_delay_ms: 10,
            theme_key: "theme".into(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a config from inline JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a field holds an unusable value.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`PageConfig::from_json`], but falls back to defaults and logs
    /// the problem instead of failing. `None` means no config was supplied.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default page config");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.hero_interval_ms == 0 {
            return Err(ConfigError::Invalid { field: "hero_interval_ms", reason: "must be greater than zero" });
        }
        if !self.header_offset_px.is_finite() {
            return Err(ConfigError::Invalid { field: "header_offset_px", reason: "must be a finite number" });
        }
        if self.theme_key.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "theme_key", reason: "must not be empty" });
        }
        Ok(())
    }
}
