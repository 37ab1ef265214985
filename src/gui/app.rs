// src/gui/app.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::{
    config::state::{self, AppState, Settings},
    data::JobRecord,
};

pub const TITLE: &str = "Job Scraper & Skill Analyzer";

pub fn run(options: eframe::NativeOptions) -> eframe::Result<()> {
    eframe::run_native(
        TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state::load(&state::settings_path()))))),
    )
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // results of the last scrape, in page order
    pub records: Vec<JobRecord>,

    // status line (progress sink writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let state = AppState::from_settings(&settings);
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        logf!(
            "Init: query={:?} location={:?} pages={}",
            state.options.scrape.query,
            state.options.scrape.location,
            state.options.scrape.page_count()
        );

        Self {
            state,
            out_path_text,
            out_path_dirty: false,
            records: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Push a dirty output-path text field into ExportOptions.
    pub fn apply_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            logf!("Export: Out path set → {}", self.state.options.export.out_path().display());
            self.out_path_dirty = false;
        }
    }

    /// Best-effort: a failed save only costs the user their last inputs.
    pub fn save_settings(&self) {
        let settings = Settings::capture(&self.state.options, &self.out_path_text);
        if let Err(e) = state::save(&state::settings_path(), &settings) {
            loge!("Settings: save failed: {}", e);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("search").show(ctx, |ui| {
            crate::gui::components::search_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("export").show(ctx, |ui| {
            crate::gui::components::export_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
