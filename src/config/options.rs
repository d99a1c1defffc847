// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// `file:<path>`, `http://…`, or a plain path
    pub source: String,
    pub columns: ColumnMap,
    pub export: ExportOptions,
    pub log: LogOptions,
    /// Print the ranked bar charts to stdout after the run
    pub summary: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            source: s!(DEFAULT_SOURCE),
            columns: ColumnMap::default(),
            export: ExportOptions::default(),
            log: LogOptions::default(),
            summary: false,
        }
    }
}

/// Which of the cells sharing the plain `no-wrap text-right` class hold
/// price and volume (0-based, counted among those cells only).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnMap {
    pub price: usize,
    pub volume: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self { price: PRICE_COLUMN, volume: VOLUME_COLUMN }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    /// Optional extension appended to every artifact name ("pk" → "plot1.pk")
    pub ext: Option<String>,
    /// Also dump the typed records as CSV here
    pub csv: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            ext: None,
            csv: None,
        }
    }
}

impl ExportOptions {
    /// Final path for one artifact stem, e.g. `plot2_axes`.
    pub fn artifact_path(&self, stem: &str) -> PathBuf {
        let name = match self.ext.as_deref().map(|e| e.trim_start_matches('.')) {
            Some(ext) if !ext.is_empty() => join!(stem, ".", ext),
            _ => s!(stem),
        };
        self.out_dir.join(name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogOptions {
    pub verbose: bool,
    pub file: Option<PathBuf>,
}
