use super::{column_points, diamonds, HalfpeakCategory, WAVELENGTH_NM};
use crate::color;
use crate::data::filter::{marker_rows, Interval, MarkerMask, View};
use crate::data::model::{Derivative1st, SpectralFrame, HALFPEAKS, PEAKS, SPECTRUM, WAVELENGTH};
use crate::error::Result;
use crate::figure::{counted_label, plain_label, Figure, LineSeries, Marker, Panel, SegmentSeries};

/// Half-range of the derivative axis when the caller has no preference.
pub const DEFAULT_YLIM_DERIV: f64 = 0.3;

/// Spectrum (top) and first derivative (bottom) on a shared wavelength axis.
///
/// Top panel: the spectrum with a marker at every sample, half peaks split
/// into big / small / noise, and peaks when present. Bottom panel: the
/// derivative curve with a zero line, and a vertical segment spanning
/// `±ylim_deriv` at every half peak in the wavelength window. The segments
/// ignore the intensity window; only the wavelength decides their place.
pub fn plot_derivatives(
    data: &SpectralFrame,
    derivative1st: &Derivative1st,
    view: &View,
    ylim_deriv: f64,
) -> Result<Figure> {
    if !data.is_empty() && !derivative1st.matches(data) {
        log::warn!(
            "derivative has {} points for {} spectrum rows; drawing it as given",
            derivative1st.len(),
            data.len()
        );
    }

    // ---- Top: spectrum and markers ----
    let mut top = Panel::new(view.x, view.y);
    top.grid_x = true;
    top.lines
        .push(LineSeries::new(column_points(data, SPECTRUM)?, color::blue(), "Spectrum"));
    let all_rows: Vec<usize> = (0..data.len()).collect();
    top.scatters
        .push(diamonds(data, SPECTRUM, &all_rows, color::blue(), 5.0, None)?);

    // ---- Bottom: derivative ----
    let deriv_range = Interval::new(-ylim_deriv, ylim_deriv);
    let mut bottom = Panel::new(view.x, deriv_range).labels(WAVELENGTH_NM, None);
    bottom.grid_x = true;
    bottom.lines.push(
        LineSeries::new(vec![[view.x.lo, 0.0], [view.x.hi, 0.0]], color::black(), "zero").unlabelled(),
    );
    bottom.lines.push(LineSeries::new(
        derivative1st.points().to_vec(),
        color::green(),
        "1st Derivative",
    ));

    if data.has_column(HALFPEAKS) {
        let wavelength = data.numeric(WAVELENGTH)?;
        for category in HalfpeakCategory::ALL {
            let (name, color, marker, area) = match category {
                HalfpeakCategory::Big => ("Big Half Peaks", color::magenta(), Marker::Diamond, 80.0),
                HalfpeakCategory::Small => ("Small Half Peaks", color::dark_orange(), Marker::Diamond, 80.0),
                HalfpeakCategory::Noise => ("Noise Half Peaks", color::black(), Marker::Cross, 60.0),
            };

            let mask = MarkerMask::new(HALFPEAKS, view).category(category.as_str());
            let rows = marker_rows(data, &mask)?;
            let mut series = diamonds(data, HALFPEAKS, &rows, color, area, counted_label(name, rows.len()))?;
            series.marker = marker;
            top.scatters.push(series);

            let rows = marker_rows(data, &mask.any_intensity())?;
            bottom.segments.push(SegmentSeries {
                xs: rows.iter().map(|&i| wavelength[i]).collect(),
                y_span: deriv_range,
                color,
                width: 2.0,
                label: plain_label(&format!("Half Peaks ({})", category.as_str()), rows.len()),
            });
        }
    }

    if data.has_column(PEAKS) {
        let rows = marker_rows(data, &MarkerMask::new(PEAKS, view))?;
        let label = counted_label("Peaks", rows.len());
        top.scatters
            .push(diamonds(data, PEAKS, &rows, color::black(), 80.0, label)?);
    }

    log::debug!(
        "plot_derivatives: {} markers, {} half-peak segments",
        top.marker_count() - data.len(),
        bottom.segments.iter().map(|s| s.xs.len()).sum::<usize>()
    );

    Ok(Figure {
        title: "Derivatives".to_string(),
        panels: vec![top, bottom],
        link_x: true,
    })
}
