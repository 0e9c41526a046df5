pub mod schema;

pub use schema::{ChartConfig, ThemeConfig, ViewerConfig, WindowConfig};

use histview_core::{HistError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `ViewerConfig::default()` if
/// the file doesn't exist so the viewer always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<ViewerConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(ViewerConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| HistError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| HistError::Config(format!("TOML parse error: {e}")))
}

/// Resolve the configuration for one run.
///
/// An `explicit` path (from `--config`) must exist and parse. Without one the
/// default location is tried and any problem there falls back to defaults.
pub fn resolve(explicit: Option<&Path>) -> Result<ViewerConfig> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(HistError::Config(format!(
                    "config file '{}' does not exist",
                    path.display()
                )));
            }
            load(path)
        }
        None => {
            let path = default_path();
            Ok(load(&path).unwrap_or_else(|e| {
                tracing::warn!("Ignoring config at '{}': {e}", path.display());
                ViewerConfig::default()
            }))
        }
    }
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("histview").join("histview.toml")
}
