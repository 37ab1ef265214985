// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::write_records;
use crate::data::JobRecord;
use crate::error::{Error, Result};

/// Write one export file according to ExportOptions (path + format).
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, records: &[JobRecord]) -> Result<PathBuf> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut out = BufWriter::new(File::create(&path)?); // truncate/overwrite
    write_records(&mut out, records, export.format)?;
    out.flush()?;

    logf!("Export: wrote {} record(s) to {}", records.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.display().to_string()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
