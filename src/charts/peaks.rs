use super::{column_points, diamonds, INTENSITY, WAVELENGTH_NM};
use crate::color;
use crate::data::filter::{marker_rows, MarkerMask, View};
use crate::data::model::{SpectralFrame, HALFPEAKS, PEAKS, SPECTRUM};
use crate::error::Result;
use crate::figure::{plain_label, Figure, LineSeries, Panel};

/// Spectrum with every detected peak and half peak, no category breakdown.
///
/// `Halfpeaks` (red) and `Peaks` (black) are drawn only when the columns
/// exist; their rows are limited to the view window on both axes.
pub fn plot_peaks(data: &SpectralFrame, view: &View) -> Result<Figure> {
    let mut panel = Panel::new(view.x, view.y).labels(WAVELENGTH_NM, Some(INTENSITY));
    panel
        .lines
        .push(LineSeries::new(column_points(data, SPECTRUM)?, color::blue(), "Spectrum"));

    for (column, name, color) in [
        (HALFPEAKS, "Half peaks", color::red()),
        (PEAKS, "Peaks", color::black()),
    ] {
        if !data.has_column(column) {
            continue;
        }
        let rows = marker_rows(data, &MarkerMask::new(column, view))?;
        let label = plain_label(name, rows.len());
        panel.scatters.push(diamonds(data, column, &rows, color, 60.0, label)?);
    }

    log::debug!("plot_peaks: {} markers in view", panel.marker_count());
    Ok(Figure::single("Peaks", panel))
}
