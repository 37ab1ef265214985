// src/gui/components/export_bar.rs

use eframe::egui;

use crate::config::options::ExportFormat;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    {
        let export = &mut app.state.options.export;

        // --- Format ---
        let prev_fmt = export.format;
        ui.horizontal(|ui| {
            ui.label("Format:");
            for fmt in ExportFormat::ALL {
                ui.selectable_value(&mut export.format, fmt, fmt.label());
            }
        });

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    // --- Output field + actions ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.button("Download CSV").clicked() {
            actions::export(app);
        }
    });

    ui.label(format!("Status: {}", app.status_text()));
    ui.add_space(4.0);
}
