use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::charts::DEFAULT_YLIM_DERIV;
use crate::data::filter::View;

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

/// Settings of the viewer window, read from an optional JSON file.
///
/// ```json
/// { "width": 1400, "dark_mode": true, "view": { "x": { "lo": 300, "hi": 900 } } }
/// ```
///
/// Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub width: f32,
    pub height: f32,
    pub dark_mode: bool,
    /// Initial view window of every chart.
    pub view: View,
    /// Initial half-range of the derivative axis.
    pub ylim_deriv: f64,
    /// Seed of the demo spectrum.
    pub seed: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            dark_mode: false,
            view: View::default(),
            ylim_deriv: DEFAULT_YLIM_DERIV,
            seed: 42,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing viewer config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text)
    }
}
