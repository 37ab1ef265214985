// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    app.apply_out_path();

    if app.records.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    logf!("Export: Begin rows={} format={:?}", app.records.len(), app.state.options.export.format);

    match file::write_export(&app.state.options.export, &app.records) {
        Ok(path) => {
            app.out_path_text = path.to_string_lossy().into_owned();
            app.status(format!("Exported {} job(s) to {}", app.records.len(), path.display()));
            app.save_settings();
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}
