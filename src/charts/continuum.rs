use super::column_points;
use crate::color;
use crate::data::filter::View;
use crate::data::model::{SpectralFrame, CONTINUUM, SPECTRUM2};
use crate::error::Result;
use crate::figure::{Figure, LineSeries, Panel};

/// The continuum-corrected spectrum (`Spectrum2`) against the fitted continuum.
pub fn plot_continuum(data: &SpectralFrame, view: &View) -> Result<Figure> {
    let mut panel = Panel::new(view.x, view.y).labels("Wavelength", Some("Intensity"));
    panel
        .lines
        .push(LineSeries::new(column_points(data, SPECTRUM2)?, color::blue(), "New Spectrum"));
    panel.lines.push(
        LineSeries::new(column_points(data, CONTINUUM)?, color::red(), "Continuum")
            .width(2.0)
            .dashed(),
    );
    Ok(Figure::single("Continuum", panel))
}
