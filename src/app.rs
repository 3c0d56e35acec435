use eframe::egui;

use crate::config::ViewerConfig;
use crate::figure::Figure;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation: the interactive viewer
// ---------------------------------------------------------------------------

pub struct SpectralPlotApp {
    pub state: AppState,
}

impl SpectralPlotApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SpectralPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: chart selector ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: view window, legend ----
        egui::SidePanel::left("view_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_view(ui, &self.state);
        });
    }
}

// ---------------------------------------------------------------------------
// Single-figure window
// ---------------------------------------------------------------------------

/// Shows one prebuilt figure and nothing else.
pub struct FigureWindow {
    figure: Figure,
    dark_mode: bool,
}

impl eframe::App for FigureWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::figure_plot(ui, &self.figure, self.dark_mode);
        });
    }
}

pub fn native_options(config: &ViewerConfig) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    }
}

fn apply_theme(ctx: &egui::Context, dark_mode: bool) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
}

/// Open a window displaying `figure`; returns when the window is closed.
pub fn show_figure(figure: Figure, config: &ViewerConfig) -> eframe::Result {
    let title = figure.title.clone();
    let dark_mode = config.dark_mode;
    eframe::run_native(
        &title,
        native_options(config),
        Box::new(move |cc| {
            apply_theme(&cc.egui_ctx, dark_mode);
            Ok(Box::new(FigureWindow { figure, dark_mode }))
        }),
    )
}

/// Open the interactive viewer on `state`; returns when the window is closed.
pub fn run_viewer(state: AppState, config: &ViewerConfig) -> eframe::Result {
    let dark_mode = state.dark_mode;
    eframe::run_native(
        "Spectral Plot – Peak Viewer",
        native_options(config),
        Box::new(move |cc| {
            apply_theme(&cc.egui_ctx, dark_mode);
            Ok(Box::new(SpectralPlotApp::new(state)))
        }),
    )
}
