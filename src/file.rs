// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::chart::{Axes, Chart, ChartData, Charts};
use crate::config::consts::*;
use crate::config::options::ExportOptions;
use crate::csv::rows_to_string;
use crate::error::{Result, ScrapeError};
use crate::record::TypedRecord;

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::io(
            dir,
            std::io::Error::other("path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ScrapeError::io(dir, e))?;
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

/// Artifact Writer: MessagePack-encode `value` into `path`, creating or
/// truncating the file. Struct fields are written by name so the blob is
/// self-describing.
pub fn write_artifact<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let bytes = rmp_serde::to_vec_named(value).map_err(|e| ScrapeError::Serialize {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    ensure_parent(path)?;
    fs::write(path, &bytes).map_err(|e| ScrapeError::io(path, e))?;
    logd!(bytes = bytes.len(), "Wrote {}", path.display());
    Ok(())
}

/// Matching reader for [`write_artifact`].
pub fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).map_err(|e| ScrapeError::io(path, e))?;
    rmp_serde::from_slice(&bytes).map_err(|e| ScrapeError::Deserialize {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// What goes into one artifact file.
#[derive(Clone, Copy, Debug)]
pub enum Part<'a> {
    Chart(&'a Chart),
    Axes(&'a Axes),
    Data(&'a ChartData),
}

impl Part<'_> {
    pub fn write(&self, path: &Path) -> Result<()> {
        match self {
            Part::Chart(c) => write_artifact(*c, path),
            Part::Axes(a) => write_artifact(*a, path),
            Part::Data(d) => write_artifact(*d, path),
        }
    }
}

/// The six artifacts of a run: bar charts whole, scatter plots split into
/// axes and data.
pub fn artifact_plan(charts: &Charts) -> [(&'static str, Part<'_>); 6] {
    [
        (PLOT1_FILE, Part::Chart(&charts.market_cap)),
        (PLOT2_AXES_FILE, Part::Axes(charts.price_vs_market_cap.axes())),
        (PLOT2_DATA_FILE, Part::Data(charts.price_vs_market_cap.data())),
        (PLOT3_AXES_FILE, Part::Axes(charts.price_vs_volume.axes())),
        (PLOT3_DATA_FILE, Part::Data(charts.price_vs_volume.data())),
        (PLOT4_FILE, Part::Chart(&charts.change)),
    ]
}

/// Write all six artifacts in order. Stops at the first failure; files
/// already written stay on disk.
pub fn write_charts(
    charts: &Charts,
    export: &ExportOptions,
    mut on_written: impl FnMut(&Path),
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(6);
    for (stem, part) in artifact_plan(charts) {
        let path = export.artifact_path(stem);
        part.write(&path)?;
        on_written(&path);
        written.push(path);
    }
    Ok(written)
}

/// Typed records as CSV with a header row.
pub fn write_records_csv(records: &[TypedRecord], path: &Path) -> Result<()> {
    let rows: Vec<Vec<String>> = records.iter().map(TypedRecord::to_row).collect();
    let contents = rows_to_string(&rows, &Some(TypedRecord::headers()), ',');
    ensure_parent(path)?;
    fs::write(path, contents).map_err(|e| ScrapeError::io(path, e))?;
    logf!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
