use serde::{Deserialize, Serialize};

use super::model::{SpectralFrame, CATEGORY, WAVELENGTH};
use crate::error::Result;

// ---------------------------------------------------------------------------
// View window
// ---------------------------------------------------------------------------

/// Closed numeric interval `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Interval { lo, hi }
    }

    /// Inclusive on both ends. `NaN` is never contained.
    pub fn contains(&self, v: f64) -> bool {
        v >= self.lo && v <= self.hi
    }
}

impl From<(f64, f64)> for Interval {
    fn from((lo, hi): (f64, f64)) -> Self {
        Interval { lo, hi }
    }
}

/// Wavelength window `x` and intensity window `y` of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct View {
    pub x: Interval,
    pub y: Interval,
}

impl Default for View {
    fn default() -> Self {
        View {
            x: Interval::new(200.0, 1100.0),
            y: Interval::new(0.0, 1.0),
        }
    }
}

impl View {
    pub fn new(x: impl Into<Interval>, y: impl Into<Interval>) -> Self {
        View {
            x: x.into(),
            y: y.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Row masks
// ---------------------------------------------------------------------------

/// Which rows of a marker column survive into a scatter series.
#[derive(Debug, Clone, Copy)]
pub struct MarkerMask<'a> {
    /// Marker column (`Peaks`, `Halfpeaks`, ...).
    pub marker: &'a str,
    /// Required `Category` label, if the series is category-specific.
    pub category: Option<&'a str>,
    /// Wavelength window.
    pub x: Interval,
    /// Window on the marker's own value; `None` keeps every intensity.
    pub y: Option<Interval>,
}

impl<'a> MarkerMask<'a> {
    pub fn new(marker: &'a str, view: &View) -> Self {
        MarkerMask {
            marker,
            category: None,
            x: view.x,
            y: Some(view.y),
        }
    }

    pub fn category(mut self, category: &'a str) -> Self {
        self.category = Some(category);
        self
    }

    /// Drop the intensity condition (rows are selected by wavelength only).
    pub fn any_intensity(mut self) -> Self {
        self.y = None;
        self
    }
}

/// Return indices of rows passing `mask`.
///
/// A row passes when:
/// * the marker value is not missing
/// * its wavelength lies within `mask.x`
/// * its marker value lies within `mask.y` (when set)
/// * its `Category` equals `mask.category` (when set)
pub fn marker_rows(frame: &SpectralFrame, mask: &MarkerMask<'_>) -> Result<Vec<usize>> {
    let wavelength = frame.numeric(WAVELENGTH)?;
    let values = frame.numeric(mask.marker)?;
    let categories = match mask.category {
        Some(_) => Some(frame.category(CATEGORY)?),
        None => None,
    };

    Ok(values
        .iter()
        .zip(wavelength)
        .enumerate()
        .filter(|(i, (&v, &w))| {
            if v.is_nan() || !mask.x.contains(w) {
                return false;
            }
            if let Some(y) = &mask.y {
                if !y.contains(v) {
                    return false;
                }
            }
            match (mask.category, categories) {
                (Some(wanted), Some(labels)) => {
                    labels.get(*i).and_then(|l| l.as_deref()) == Some(wanted)
                }
                _ => true,
            }
        })
        .map(|(i, _)| i)
        .collect())
}

/// Indices of every row where `column` is not missing, ignoring any window.
pub fn present_rows(frame: &SpectralFrame, column: &str) -> Result<Vec<usize>> {
    Ok(frame
        .numeric(column)?
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_nan())
        .map(|(i, _)| i)
        .collect())
}
