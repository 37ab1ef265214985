// src/gui/actions/scrape.rs
use crate::{gui::app::App, gui::progress::GuiProgress, scrape};

/// Runs on the UI thread; the window is unresponsive until the last page is in.
pub fn scrape(app: &mut App) {
    let opts = app.state.options.scrape.clone();
    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the scrape happens ←
    match scrape::collect_jobs(&opts, Some(&mut prog)) {
        Ok(records) => {
            app.records = records;
            app.save_settings();
        }
        Err(e) => {
            loge!("Scrape: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
