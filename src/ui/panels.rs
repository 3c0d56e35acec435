use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::charts::CategorySelection;
use crate::state::{AppState, ChartKind};

// ---------------------------------------------------------------------------
// Left side panel – view window and legend summary
// ---------------------------------------------------------------------------

/// Render the left settings panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("View");
    ui.separator();

    if state.frame.is_none() {
        ui.label("No spectrum loaded.");
        return;
    }

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- View window ----
            egui::Grid::new("view_window").num_columns(3).show(ui, |ui: &mut Ui| {
                ui.label("Wavelength (nm)");
                changed |= ui.add(egui::DragValue::new(&mut state.view.x.lo).speed(1.0)).changed();
                changed |= ui.add(egui::DragValue::new(&mut state.view.x.hi).speed(1.0)).changed();
                ui.end_row();

                ui.label("Intensity");
                changed |= ui.add(egui::DragValue::new(&mut state.view.y.lo).speed(0.01)).changed();
                changed |= ui.add(egui::DragValue::new(&mut state.view.y.hi).speed(0.01)).changed();
                ui.end_row();
            });

            if state.kind == ChartKind::Derivatives {
                ui.horizontal(|ui: &mut Ui| {
                    ui.label("Derivative range ±");
                    changed |= ui
                        .add(egui::DragValue::new(&mut state.ylim_deriv).speed(0.01).range(0.001..=10.0))
                        .changed();
                });
            }
            ui.separator();

            // ---- Category selector ----
            if state.kind == ChartKind::PerCategory {
                ui.strong("Category");
                let current = state.category;
                egui::ComboBox::from_id_salt("category")
                    .selected_text(current.as_str())
                    .show_ui(ui, |ui: &mut Ui| {
                        for c in CategorySelection::ALL {
                            if ui.selectable_label(current == c, c.as_str()).clicked() {
                                state.set_category(c);
                            }
                        }
                    });
                ui.separator();
            }

            legend_table(ui, state);
        });

    if changed {
        state.rebuild();
    }
}

/// Series of the current figure with their point counts.
fn legend_table(ui: &mut Ui, state: &AppState) {
    let Some(figure) = &state.figure else {
        return;
    };
    ui.strong("Series");

    let rows: Vec<(String, usize, Color32)> = figure
        .panels
        .iter()
        .flat_map(|p| p.scatters.iter())
        .filter_map(|s| Some((s.label.clone()?, s.len(), s.color)))
        .collect();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder())
        .column(Column::auto())
        .header(18.0, |mut header| {
            header.col(|ui| {
                ui.label("Legend");
            });
            header.col(|ui| {
                ui.label("Points");
            });
        })
        .body(|mut body| {
            for (label, count, color) in &rows {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(RichText::new(label).color(*color));
                    });
                    row.col(|ui| {
                        ui.label(count.to_string());
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the chart selector / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        for kind in ChartKind::ALL {
            if ui.selectable_label(state.kind == kind, kind.label()).clicked() {
                state.set_kind(kind);
            }
        }

        ui.separator();

        if let Some(frame) = &state.frame {
            ui.label(format!("{} samples", frame.len()));
        }

        ui.separator();

        if ui.selectable_label(state.dark_mode, "Dark").clicked() {
            state.dark_mode = !state.dark_mode;
            let visuals = if state.dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            };
            ui.ctx().set_visuals(visuals);
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
