// src/config/state.rs
use std::{fs, path::{Path, PathBuf}};

use serde::{Deserialize, Serialize};

use super::consts::{SETTINGS_FILE, STORE_DIR};
use super::options::{AppOptions, ExportFormat};
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,
    /// Row height for the results table
    pub row_height: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100.0,
            window_h: 700.0,
            row_height: 20.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    /// Defaults overlaid with whatever the last session persisted.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut state = Self::default();
        settings.apply(&mut state.options);
        state
    }
}

/// The part of the GUI state that survives restarts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub query: String,
    pub location: String,
    pub pages: u32,
    pub format: ExportFormat,
    /// Output path as last typed; empty means the default
    pub out_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::capture(&AppOptions::default(), "")
    }
}

impl Settings {
    pub fn capture(options: &AppOptions, out_path_text: &str) -> Self {
        Self {
            query: options.scrape.query.clone(),
            location: options.scrape.location.clone(),
            pages: options.scrape.page_count(),
            format: options.export.format,
            out_path: s!(out_path_text.trim()),
        }
    }

    pub fn apply(&self, options: &mut AppOptions) {
        options.scrape.query = self.query.clone();
        options.scrape.location = self.location.clone();
        options.scrape.set_pages(self.pages);
        options.export.format = self.format;
        options.export.set_path(&self.out_path);
    }
}

pub fn settings_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(SETTINGS_FILE)
}

/// Missing or unreadable settings are not an error; we just start from defaults.
pub fn load(path: &Path) -> Settings {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            logd!("Settings: not loaded from {} ({})", path.display(), e);
            return Settings::default();
        }
    };
    match serde_json::from_str(&text) {
        Ok(s) => s,
        Err(e) => {
            loge!("Settings: malformed {} ({}), using defaults", path.display(), e);
            Settings::default()
        }
    }
}

pub fn save(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let text = serde_json::to_string_pretty(settings)?;
    fs::write(path, text)?;
    Ok(())
}
