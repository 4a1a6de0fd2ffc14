//! Blinker configuration and persisted state
//!
//! Two plain records cross the host boundary:
//! - [`BlinkerConfig`] - how a view is created (loadable from a `[blinker]` TOML table)
//! - [`BlinkerState`] - what a host saves and restores across its own lifecycle

use blinker_animation::{validate_interval, DEFAULT_INTERVAL_MS};
use blinker_core::{BlinkerError, Result};
use blinker_layout::ScaleMode;
use serde::{Deserialize, Serialize};

// =============================================================================
// BlinkerConfig
// =============================================================================

/// Construction settings for a [`crate::BlinkerView`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlinkerConfig {
    pub scale_mode: ScaleMode,
    /// Length of one half of a blink, in milliseconds
    pub interval_ms: i64,
    /// Smooth fade instead of a hard on/off cut
    pub fade: bool,
    /// Start blinking as soon as the view is attached
    pub autostart: bool,
    /// Edit/preview mode: always draw fully opaque
    pub preview: bool,
}

impl Default for BlinkerConfig {
    fn default() -> Self {
        Self {
            scale_mode: ScaleMode::Stretch,
            interval_ms: DEFAULT_INTERVAL_MS as i64,
            fade: true,
            autostart: false,
            preview: false,
        }
    }
}

/// Top-level document shape: settings live under `[blinker]`
#[derive(Debug, Default, Deserialize, Serialize)]
struct BlinkerDocument {
    #[serde(default)]
    blinker: BlinkerConfig,
}

impl BlinkerConfig {
    pub fn scale_mode(mut self, scale_mode: ScaleMode) -> Self {
        self.scale_mode = scale_mode;
        self
    }

    pub fn interval_ms(mut self, interval_ms: i64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    pub fn fade(mut self, fade: bool) -> Self {
        self.fade = fade;
        self
    }

    pub fn autostart(mut self, autostart: bool) -> Self {
        self.autostart = autostart;
        self
    }

    pub fn preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    /// Check every field that has constraints
    pub fn validate(&self) -> Result<()> {
        validate_interval(self.interval_ms).map(|_| ())
    }

    /// Parse and validate a TOML document with a `[blinker]` table
    ///
    /// Missing keys (or a missing table) take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let document: BlinkerDocument =
            toml::from_str(source).map_err(|e| BlinkerError::Config(e.to_string()))?;
        document.blinker.validate()?;
        Ok(document.blinker)
    }

    /// Serialize as a TOML document with a `[blinker]` table
    pub fn to_toml_string(&self) -> Result<String> {
        let document = BlinkerDocument {
            blinker: self.clone(),
        };
        toml::to_string_pretty(&document).map_err(|e| BlinkerError::Config(e.to_string()))
    }
}

// =============================================================================
// BlinkerState
// =============================================================================

/// Snapshot a host persists across its own save/restore cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlinkerState {
    pub scale_mode: ScaleMode,
    pub interval_ms: i64,
    pub fade: bool,
    /// The "should blink" intent, not whether a sweep was running
    pub enabled: bool,
}

impl BlinkerState {
    pub fn validate(&self) -> Result<()> {
        validate_interval(self.interval_ms).map(|_| ())
    }
}
