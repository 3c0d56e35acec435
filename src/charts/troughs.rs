use super::{column_points, diamonds};
use crate::color;
use crate::data::filter::{present_rows, View};
use crate::data::model::{SpectralFrame, CONTINUUM, SPECTRUM, TROUGH, TROUGH_FILTERED};
use crate::error::Result;
use crate::figure::{plain_label, Figure, LineSeries, Panel};

/// Spectrum and continuum with trough candidates and surviving troughs.
///
/// Trough markers are taken from every row; the view only sets the axis
/// ranges. As in the other charts, a marker series with no points stays out
/// of the legend.
pub fn plot_troughpoints(data: &SpectralFrame, view: &View) -> Result<Figure> {
    let mut panel = Panel::new(view.x, view.y).labels("Wavelength", Some("Intensity"));
    panel
        .lines
        .push(LineSeries::new(column_points(data, SPECTRUM)?, color::blue(), "Spectrum"));
    panel.lines.push(
        LineSeries::new(column_points(data, CONTINUUM)?, color::green(), "Continuum")
            .width(2.0)
            .dashed(),
    );

    for (column, name, color, area) in [
        (TROUGH, "Trough Points", color::black(), 30.0),
        (TROUGH_FILTERED, "Non-Filtered Troughs", color::red(), 60.0),
    ] {
        let rows = present_rows(data, column)?;
        let label = plain_label(name, rows.len());
        panel.scatters.push(diamonds(data, column, &rows, color, area, label)?);
    }

    log::debug!("plot_troughpoints: {} trough markers", panel.marker_count());
    Ok(Figure::single("Trough points", panel))
}
