//! blinker.toml handling
//!
//! The CLI reads view settings from a `blinker.toml` file with a
//! `[blinker]` table; command-line flags override whatever it contains.

use anyhow::{Context, Result};
use blinker_view::BlinkerConfig;
use std::fs;
use std::path::Path;

/// Default config file name looked up in the working directory
pub const CONFIG_FILE: &str = "blinker.toml";

/// Load a config file
pub fn load(path: &Path) -> Result<BlinkerConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    BlinkerConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load `path` if given, else `./blinker.toml` if present, else defaults
///
/// The demo starts blinking on its own unless the file says otherwise.
pub fn resolve(path: Option<&Path>) -> Result<BlinkerConfig> {
    if let Some(path) = path {
        return load(path);
    }

    let fallback = Path::new(CONFIG_FILE);
    if fallback.exists() {
        tracing::debug!("Using {}", fallback.display());
        return load(fallback);
    }

    Ok(BlinkerConfig::default().autostart(true))
}

/// Write a default config file, refusing to overwrite
pub fn write_default(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }

    let content = BlinkerConfig::default()
        .autostart(true)
        .to_toml_string()
        .context("Failed to serialize default config")?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
