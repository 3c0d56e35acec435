use super::{column_points, diamonds, CategorySelection, HalfpeakCategory, PeakCategory, INTENSITY, WAVELENGTH_NM};
use crate::color;
use crate::data::filter::{marker_rows, MarkerMask, View};
use crate::data::model::{SpectralFrame, HALFPEAKS, PEAKS, SPECTRUM};
use crate::error::Result;
use crate::figure::{counted_label, Figure, LineSeries, Panel, ScatterSeries};

/// Spectrum with peaks and half peaks coloured by category.
///
/// `category` is one of `all`, `clearly_visible`, `visible`, `small`,
/// `noise` or `halfpeaks`; anything else is rejected before any column is
/// read. `halfpeaks` does not need a `Peaks` column, the single peak
/// categories do not need `Halfpeaks`, and `all` draws whichever of the two
/// columns exist.
pub fn plot_peaks_per_category(data: &SpectralFrame, category: &str, view: &View) -> Result<Figure> {
    let selection: CategorySelection = category.parse()?;

    let mut panel = Panel::new(view.x, view.y).labels(WAVELENGTH_NM, Some(INTENSITY));
    panel
        .lines
        .push(LineSeries::new(column_points(data, SPECTRUM)?, color::black(), "Spectrum"));

    match selection {
        CategorySelection::Peak(peak) => {
            panel.scatters.push(peak_series(data, view, peak, 60.0)?);
        }
        CategorySelection::Halfpeaks => {
            for hp in HalfpeakCategory::ALL {
                panel.scatters.push(halfpeak_series(data, view, hp)?);
            }
        }
        CategorySelection::All => {
            // Back to front: the most confident peaks end up on top.
            if data.has_column(PEAKS) {
                for peak in [
                    PeakCategory::Noise,
                    PeakCategory::Small,
                    PeakCategory::Visible,
                    PeakCategory::ClearlyVisible,
                ] {
                    let area = if peak == PeakCategory::Noise { 20.0 } else { 60.0 };
                    panel.scatters.push(peak_series(data, view, peak, area)?);
                }
            }
            if data.has_column(HALFPEAKS) {
                for hp in [HalfpeakCategory::Noise, HalfpeakCategory::Big, HalfpeakCategory::Small] {
                    panel.scatters.push(halfpeak_series(data, view, hp)?);
                }
            }
        }
    }

    log::debug!(
        "plot_peaks_per_category({selection}): {} markers in view",
        panel.marker_count()
    );
    Ok(Figure::single(&format!("Peaks per category: {selection}"), panel))
}

fn peak_series(data: &SpectralFrame, view: &View, peak: PeakCategory, area: f32) -> Result<ScatterSeries> {
    let rows = marker_rows(data, &MarkerMask::new(PEAKS, view).category(peak.as_str()))?;
    let label = counted_label(&peak.title(), rows.len());
    diamonds(data, PEAKS, &rows, peak.color(), area, label)
}

fn halfpeak_series(data: &SpectralFrame, view: &View, hp: HalfpeakCategory) -> Result<ScatterSeries> {
    let (name, area) = halfpeak_style(hp);
    let rows = marker_rows(data, &MarkerMask::new(HALFPEAKS, view).category(hp.as_str()))?;
    diamonds(data, HALFPEAKS, &rows, hp.color(), area, counted_label(name, rows.len()))
}

fn halfpeak_style(hp: HalfpeakCategory) -> (&'static str, f32) {
    match hp {
        HalfpeakCategory::Big => ("Big Half Peaks", 60.0),
        HalfpeakCategory::Small => ("Small Half Peaks", 60.0),
        HalfpeakCategory::Noise => ("Noise HP", 20.0),
    }
}
