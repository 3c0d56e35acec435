use eframe::egui::{self, Ui};
use egui_plot::{Corner, Legend, Line, LineStyle, MarkerShape, Plot, PlotBounds, PlotPoints, Points};

use crate::color;
use crate::figure::{self, Figure, Marker, Panel};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Figure drawing (central panel)
// ---------------------------------------------------------------------------

/// Render the current chart in the central panel.
pub fn chart_view(ui: &mut Ui, state: &AppState) {
    match &state.figure {
        Some(figure) => figure_plot(ui, figure, state.dark_mode),
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                let text = if state.frame.is_none() {
                    "No spectrum to chart."
                } else {
                    "This chart cannot be drawn for the current data."
                };
                ui.heading(text);
            });
        }
    }
}

/// Draw every panel of `figure`, stacked vertically and splitting the
/// available height evenly.
pub fn figure_plot(ui: &mut Ui, figure: &Figure, dark_mode: bool) {
    let n = figure.panels.len().max(1) as f32;
    let spacing = ui.spacing().item_spacing.y;
    let height = ((ui.available_height() - spacing * (n - 1.0)) / n).max(100.0);
    let link_group = egui::Id::new(("figure_link", &figure.title));

    for (i, panel) in figure.panels.iter().enumerate() {
        let mut plot = Plot::new(("figure_panel", &figure.title, i))
            .height(height)
            .legend(Legend::default().position(Corner::RightTop))
            .show_grid([panel.grid_x, true])
            .allow_boxed_zoom(true)
            .allow_drag(true)
            .allow_scroll(true)
            .allow_zoom(true);
        if let Some(label) = &panel.x_label {
            plot = plot.x_axis_label(label.as_str());
        }
        if let Some(label) = &panel.y_label {
            plot = plot.y_axis_label(label.as_str());
        }
        if figure.link_x {
            plot = plot.link_axis(link_group, [true, false]).link_cursor(link_group, [true, false]);
        }

        // Apply the view window once per change so pan and zoom still work.
        let window_key = egui::Id::new(("figure_window", &figure.title, i));
        let window = view_window(panel);
        let previous = ui.ctx().data(|d| d.get_temp::<[f64; 4]>(window_key));
        let reset = previous != Some(window);
        if reset {
            ui.ctx().data_mut(|d| d.insert_temp(window_key, window));
        }

        plot.show(ui, |plot_ui| {
            if reset {
                plot_ui.set_plot_bounds(panel_bounds(panel));
            }
            draw_panel(plot_ui, panel, dark_mode);
        });
    }
}

/// `[x_lo, x_hi, y_lo, y_hi]` of a panel.
fn view_window(panel: &Panel) -> [f64; 4] {
    [panel.x_range.lo, panel.x_range.hi, panel.y_range.lo, panel.y_range.hi]
}

/// Displayed region of a panel: its view window on both axes.
pub fn panel_bounds(panel: &Panel) -> PlotBounds {
    PlotBounds::from_min_max(
        [panel.x_range.lo, panel.y_range.lo],
        [panel.x_range.hi, panel.y_range.hi],
    )
}

fn draw_panel(plot_ui: &mut egui_plot::PlotUi, panel: &Panel, dark_mode: bool) {
    for series in &panel.lines {
        let points: PlotPoints = series
            .points
            .iter()
            .filter(|p| p[0].is_finite() && p[1].is_finite())
            .copied()
            .collect();
        let mut line = Line::new(points)
            .color(color::for_theme(series.color, dark_mode))
            .width(series.width)
            .style(match series.style {
                figure::LineStyle::Solid => LineStyle::Solid,
                figure::LineStyle::Dashed => LineStyle::Dashed { length: 10.0 },
            });
        if let Some(label) = &series.label {
            line = line.name(label);
        }
        plot_ui.line(line);
    }

    for series in &panel.scatters {
        if series.is_empty() {
            continue;
        }
        let points: PlotPoints = series
            .points
            .iter()
            .filter(|p| p[0].is_finite() && p[1].is_finite())
            .copied()
            .collect();
        let mut markers = Points::new(points)
            .color(color::for_theme(series.color, dark_mode))
            .radius(series.radius())
            .filled(true)
            .shape(match series.marker {
                Marker::Diamond => MarkerShape::Diamond,
                Marker::Cross => MarkerShape::Cross,
            });
        if let Some(label) = &series.label {
            markers = markers.name(label);
        }
        plot_ui.points(markers);
    }

    // One line item per segment; items sharing a name share a legend entry.
    for series in &panel.segments {
        let color = color::for_theme(series.color, dark_mode);
        for &x in &series.xs {
            let mut line = Line::new(PlotPoints::new(vec![[x, series.y_span.lo], [x, series.y_span.hi]]))
                .color(color)
                .width(series.width);
            if let Some(label) = &series.label {
                line = line.name(label);
            }
            plot_ui.line(line);
        }
    }
}
