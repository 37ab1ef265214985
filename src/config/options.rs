// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// What to search for and how many result pages to walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub query: String,
    pub location: String,
    /// Requested page count. Read through `page_count()`, which enforces the bounds.
    pub pages: u32,
    pub base_url: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            query: s!(DEFAULT_QUERY),
            location: s!(DEFAULT_LOCATION),
            pages: MIN_PAGES,
            base_url: s!(BASE_URL),
        }
    }
}

impl ScrapeOptions {
    pub fn new(query: impl Into<String>, location: impl Into<String>, pages: u32) -> Self {
        let mut opts = Self {
            query: query.into(),
            location: location.into(),
            ..Self::default()
        };
        opts.set_pages(pages);
        opts
    }

    pub fn set_pages(&mut self, pages: u32) {
        self.pages = pages.clamp(MIN_PAGES, MAX_PAGES);
    }

    pub fn page_count(&self) -> u32 {
        self.pages.clamp(MIN_PAGES, MAX_PAGES)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Csv, ExportFormat::Tsv];

    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
    pub fn label(&self) -> &'static str {
        match self { ExportFormat::Csv => "CSV", ExportFormat::Tsv => "TSV" }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
}

impl ExportOptions {
    /// Final file path: `<dir>/<stem>.<ext>`. The extension follows the format
    /// unless the user typed one of their own.
    pub fn out_path(&self) -> PathBuf {
        let ext = self.out_path.ext.as_deref().unwrap_or(self.format.ext());
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(join!(stem, ".", ext))
    }

    /// Parse user text into dir + stem (+ custom extension).
    /// Empty text resets to the default; a trailing separator or an existing
    /// directory means "default file name inside this directory".
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = OutputPath::default();
            return;
        }

        let p = PathBuf::from(normalize_separators(s));
        if looks_like_dir_hint(s) || p.is_dir() {
            self.out_path = OutputPath { dir: p, ..OutputPath::default() };
            return;
        }

        let dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        let file_stem = p
            .file_stem()
            .map(|x| x.to_os_string())
            .unwrap_or_else(|| OsString::from(DEFAULT_FILE));
        // Known format extensions stay under the format toggle's control.
        let ext = p
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .filter(|e| !ExportFormat::ALL.iter().any(|f| e.eq_ignore_ascii_case(f.ext())));

        self.out_path = OutputPath { dir, file_stem, ext };
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<String>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn looks_like_dir_hint(p: &str) -> bool {
    p.ends_with('/') || p.ends_with('\\')
}
