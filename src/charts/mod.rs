/// Chart builders: one function per chart kind, each a pure function of the
/// frame and the view window returning a [`Figure`].
///
/// Drawing a figure is left to [`crate::ui::plot`].
pub mod categories;
mod continuum;
mod derivatives;
mod peaks;
mod per_category;
mod troughs;

pub use categories::{CategorySelection, HalfpeakCategory, PeakCategory};
pub use continuum::plot_continuum;
pub use derivatives::{plot_derivatives, DEFAULT_YLIM_DERIV};
pub use peaks::plot_peaks;
pub use per_category::plot_peaks_per_category;
pub use troughs::plot_troughpoints;

use eframe::egui::Color32;

use crate::data::model::{SpectralFrame, WAVELENGTH};
use crate::error::Result;
use crate::figure::{Marker, ScatterSeries};

pub const WAVELENGTH_NM: &str = "Wavelength (nm)";
pub const INTENSITY: &str = "Intensity";

/// `(Wavelength, column)` pairs for every row.
fn column_points(frame: &SpectralFrame, column: &str) -> Result<Vec<[f64; 2]>> {
    let x = frame.numeric(WAVELENGTH)?;
    let y = frame.numeric(column)?;
    Ok(x.iter().zip(y).map(|(&x, &y)| [x, y]).collect())
}

/// `(Wavelength, column)` pairs for the given rows.
fn row_points(frame: &SpectralFrame, column: &str, rows: &[usize]) -> Result<Vec<[f64; 2]>> {
    let x = frame.numeric(WAVELENGTH)?;
    let y = frame.numeric(column)?;
    Ok(rows.iter().map(|&i| [x[i], y[i]]).collect())
}

/// Diamond series of `column` at `rows`.
fn diamonds(
    frame: &SpectralFrame,
    column: &str,
    rows: &[usize],
    color: Color32,
    area: f32,
    label: Option<String>,
) -> Result<ScatterSeries> {
    Ok(ScatterSeries {
        points: row_points(frame, column, rows)?,
        color,
        marker: Marker::Diamond,
        area,
        label,
    })
}
