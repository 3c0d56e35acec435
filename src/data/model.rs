use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};

/// Column names written by the upstream analysis modules. Case-sensitive.
pub const WAVELENGTH: &str = "Wavelength";
pub const SPECTRUM: &str = "Spectrum";
pub const SPECTRUM2: &str = "Spectrum2";
pub const PEAKS: &str = "Peaks";
pub const HALFPEAKS: &str = "Halfpeaks";
pub const CATEGORY: &str = "Category";
pub const CONTINUUM: &str = "Continuum";
pub const TROUGH: &str = "trough";
pub const TROUGH_FILTERED: &str = "trough_filtered";

// ---------------------------------------------------------------------------
// Column – one named column of the frame
// ---------------------------------------------------------------------------

/// A column of a [`SpectralFrame`].
///
/// Numeric columns use `NaN` as the missing-value sentinel, mirroring the
/// marker columns (`Peaks`, `Halfpeaks`, `trough`, ...) that only carry a
/// value on the rows where the marker applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Numeric(Vec<f64>),
    Category(Vec<Option<String>>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Category(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// SpectralFrame – the row-aligned table every chart reads
// ---------------------------------------------------------------------------

/// Row-aligned table: one row per measured wavelength sample.
///
/// `Wavelength` and `Spectrum` always exist; every other column is optional
/// and is looked up by name when a chart needs it. Deserialized frames go
/// through the same checks as [`SpectralFrame::new`] and `with_*`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFrame")]
pub struct SpectralFrame {
    columns: BTreeMap<String, Column>,
    rows: usize,
}

/// Serialized shape of a frame; the stored row count is recomputed.
#[derive(Deserialize)]
struct RawFrame {
    columns: BTreeMap<String, Column>,
}

impl TryFrom<RawFrame> for SpectralFrame {
    type Error = PlotError;

    fn try_from(raw: RawFrame) -> Result<Self> {
        let mut columns = raw.columns;
        let mut mandatory = |name: &str| match columns.remove(name) {
            Some(Column::Numeric(values)) => Ok(values),
            _ => Err(PlotError::MissingColumn(name.to_string())),
        };
        let wavelength = mandatory(WAVELENGTH)?;
        let spectrum = mandatory(SPECTRUM)?;
        columns
            .into_iter()
            .try_fold(SpectralFrame::new(wavelength, spectrum)?, |frame, (name, column)| {
                frame.with_column(&name, column)
            })
    }
}

impl SpectralFrame {
    /// Create a frame from the two mandatory columns.
    pub fn new(wavelength: Vec<f64>, spectrum: Vec<f64>) -> Result<Self> {
        if wavelength.len() != spectrum.len() {
            return Err(PlotError::LengthMismatch {
                column: SPECTRUM.to_string(),
                expected: wavelength.len(),
                found: spectrum.len(),
            });
        }
        let rows = wavelength.len();
        let mut columns = BTreeMap::new();
        columns.insert(WAVELENGTH.to_string(), Column::Numeric(wavelength));
        columns.insert(SPECTRUM.to_string(), Column::Numeric(spectrum));
        Ok(SpectralFrame { columns, rows })
    }

    /// Add (or replace) a numeric column.
    pub fn with_numeric(self, name: &str, values: Vec<f64>) -> Result<Self> {
        self.with_column(name, Column::Numeric(values))
    }

    /// Add (or replace) a categorical column. `None` marks a missing label.
    pub fn with_category<S: Into<String>>(
        self,
        name: &str,
        values: Vec<Option<S>>,
    ) -> Result<Self> {
        let values = values.into_iter().map(|v| v.map(Into::into)).collect();
        self.with_column(name, Column::Category(values))
    }

    fn with_column(mut self, name: &str, column: Column) -> Result<Self> {
        if column.len() != self.rows {
            return Err(PlotError::LengthMismatch {
                column: name.to_string(),
                expected: self.rows,
                found: column.len(),
            });
        }
        if (name == WAVELENGTH || name == SPECTRUM) && !matches!(column, Column::Numeric(_)) {
            return Err(PlotError::MissingColumn(name.to_string()));
        }
        self.columns.insert(name.to_string(), column);
        Ok(self)
    }

    /// Number of rows (wavelength samples).
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Whether the column exists at all, regardless of how many values are missing.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Look up a numeric column.
    pub fn numeric(&self, name: &str) -> Result<&[f64]> {
        match self.columns.get(name) {
            Some(Column::Numeric(v)) => Ok(v),
            _ => Err(PlotError::MissingColumn(name.to_string())),
        }
    }

    /// Look up a categorical column.
    pub fn category(&self, name: &str) -> Result<&[Option<String>]> {
        match self.columns.get(name) {
            Some(Column::Category(v)) => Ok(v),
            _ => Err(PlotError::MissingColumn(name.to_string())),
        }
    }

    pub fn wavelength(&self) -> &[f64] {
        // Present since construction.
        self.numeric(WAVELENGTH).unwrap_or(&[])
    }

    pub fn spectrum(&self) -> &[f64] {
        self.numeric(SPECTRUM).unwrap_or(&[])
    }
}

// ---------------------------------------------------------------------------
// Derivative1st – finite-difference derivative between consecutive samples
// ---------------------------------------------------------------------------

/// `(midpoint_wavelength, normalized_derivative)` pairs, normally one fewer
/// than the rows of the frame they were computed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Derivative1st {
    points: Vec<[f64; 2]>,
}

impl Derivative1st {
    pub fn new(points: Vec<[f64; 2]>) -> Self {
        Derivative1st { points }
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether this derivative lines up with `frame` (one pair per gap between rows).
    pub fn matches(&self, frame: &SpectralFrame) -> bool {
        frame.len().saturating_sub(1) == self.len()
    }
}
