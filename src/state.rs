use crate::charts::{
    plot_continuum, plot_derivatives, plot_peaks, plot_peaks_per_category, plot_troughpoints,
    CategorySelection,
};
use crate::config::ViewerConfig;
use crate::data::filter::View;
use crate::data::model::{Derivative1st, SpectralFrame};
use crate::error::Result;
use crate::figure::Figure;

// ---------------------------------------------------------------------------
// Chart kinds offered by the viewer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Peaks,
    Derivatives,
    PerCategory,
    Troughs,
    Continuum,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Peaks,
        ChartKind::Derivatives,
        ChartKind::PerCategory,
        ChartKind::Troughs,
        ChartKind::Continuum,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Peaks => "Peaks",
            ChartKind::Derivatives => "Derivatives",
            ChartKind::PerCategory => "Per category",
            ChartKind::Troughs => "Troughs",
            ChartKind::Continuum => "Continuum",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
pub struct AppState {
    /// Frame being charted (None until one is set).
    pub frame: Option<SpectralFrame>,

    /// Derivative paired with `frame`.
    pub derivative: Derivative1st,

    /// Which chart is shown.
    pub kind: ChartKind,

    /// Selection for the per-category chart.
    pub category: CategorySelection,

    /// View window shared by all charts.
    pub view: View,

    /// Half-range of the derivative axis.
    pub ylim_deriv: f64,

    /// Figure for the current settings (cached).
    pub figure: Option<Figure>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    pub dark_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&ViewerConfig::default())
    }
}

impl AppState {
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            frame: None,
            derivative: Derivative1st::default(),
            kind: ChartKind::default(),
            category: CategorySelection::default(),
            view: config.view,
            ylim_deriv: config.ylim_deriv,
            figure: None,
            status_message: None,
            dark_mode: config.dark_mode,
        }
    }

    /// Ingest a frame and its derivative, and build the current chart.
    pub fn set_dataset(&mut self, frame: SpectralFrame, derivative: Derivative1st) {
        log::info!(
            "Charting {} rows with columns {:?}",
            frame.len(),
            frame.column_names().collect::<Vec<_>>()
        );
        self.frame = Some(frame);
        self.derivative = derivative;
        self.rebuild();
    }

    pub fn set_kind(&mut self, kind: ChartKind) {
        if self.kind != kind {
            self.kind = kind;
            self.rebuild();
        }
    }

    pub fn set_category(&mut self, category: CategorySelection) {
        if self.category != category {
            self.category = category;
            self.rebuild();
        }
    }

    /// Rebuild the cached figure after any setting changed.
    pub fn rebuild(&mut self) {
        let Some(frame) = &self.frame else {
            self.figure = None;
            return;
        };
        match self.build(frame) {
            Ok(figure) => {
                self.figure = Some(figure);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to build {} chart: {e}", self.kind.label());
                self.figure = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    fn build(&self, frame: &SpectralFrame) -> Result<Figure> {
        match self.kind {
            ChartKind::Peaks => plot_peaks(frame, &self.view),
            ChartKind::Derivatives => plot_derivatives(frame, &self.derivative, &self.view, self.ylim_deriv),
            ChartKind::PerCategory => plot_peaks_per_category(frame, self.category.as_str(), &self.view),
            ChartKind::Troughs => plot_troughpoints(frame, &self.view),
            ChartKind::Continuum => plot_continuum(frame, &self.view),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::SPECTRUM2;
    use crate::data::synthetic::demo_frame;

    #[test]
    fn every_kind_builds_for_the_demo_frame() {
        let (frame, derivative) = demo_frame(3).unwrap();
        let mut state = AppState::default();
        state.set_dataset(frame, derivative);
        for kind in ChartKind::ALL {
            state.set_kind(kind);
            assert!(state.figure.is_some(), "{kind:?}");
            assert!(state.status_message.is_none());
        }
    }

    #[test]
    fn missing_column_becomes_a_status_message() {
        let frame = SpectralFrame::new(vec![400.0, 500.0], vec![0.2, 0.3]).unwrap();
        let mut state = AppState::default();
        state.set_dataset(frame, Derivative1st::default());
        state.set_kind(ChartKind::Continuum);
        assert!(state.figure.is_none());
        let msg = state.status_message.unwrap();
        assert!(msg.contains(SPECTRUM2), "{msg}");
    }
}
