//! Annotated charts of spectra: the spectrum itself plus the peaks, half
//! peaks, troughs and continuum that upstream analysis found in it.
//!
//! Every chart operation in [`charts`] is a pure function of a
//! [`SpectralFrame`] and a [`View`] window, returning a [`Figure`] that holds
//! the complete content of the chart. [`show_figure`] puts a figure on screen;
//! [`ui::plot::figure_plot`] draws one inside an existing egui `Ui`.

pub mod app;
pub mod charts;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod figure;
pub mod state;
pub mod ui;

pub use app::{run_viewer, show_figure};
pub use charts::{
    plot_continuum, plot_derivatives, plot_peaks, plot_peaks_per_category, plot_troughpoints,
    CategorySelection, DEFAULT_YLIM_DERIV,
};
pub use config::ViewerConfig;
pub use data::filter::{Interval, View};
pub use data::model::{Derivative1st, SpectralFrame};
pub use error::PlotError;
pub use figure::Figure;
