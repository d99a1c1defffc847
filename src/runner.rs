// src/runner.rs
use std::path::PathBuf;

use scraper::Html;

use crate::{
    chart::{self, Charts},
    config::options::Options,
    core::html::load_page,
    error::Result,
    file,
    normalize::normalize_records,
    progress::Progress,
    record::TypedRecord,
    specs::table::{build_records, extract_rows, TableSchema},
};

/// load, extract, normalize, chart, export, artifacts
const STAGES: usize = 6;

/// Summary of what was produced.
pub struct RunSummary {
    pub records: Vec<TypedRecord>,
    pub charts: Charts,
    pub artifacts: Vec<PathBuf>,
}

/// Extractor → Builder → Normalizer over an already parsed page.
pub fn records_from_document(doc: &Html, schema: &TableSchema) -> Result<Vec<TypedRecord>> {
    let rows = extract_rows(doc)?;
    let raw = build_records(&rows, schema)?;
    normalize_records(&raw)
}

/// Same as [`records_from_document`] but from HTML text.
pub fn records_from_html(html: &str, schema: &TableSchema) -> Result<Vec<TypedRecord>> {
    records_from_document(&Html::parse_document(html), schema)
}

/// Top-level pipeline: load, extract, normalize, chart, persist.
/// Halts on the first error; `progress` can be None.
pub fn run(opts: &Options, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(STAGES);
    }
    let mut stage = |name: &str| {
        logd!("Stage: {}", name);
        if let Some(p) = progress.as_deref_mut() {
            p.stage(name);
        }
    };

    stage("load");
    let doc = load_page(&opts.source)?;

    stage("extract");
    let schema = TableSchema::coinmarketcap(opts.columns);
    let rows = extract_rows(&doc)?;
    let raw = build_records(&rows, &schema)?;

    stage("normalize");
    let records = normalize_records(&raw)?;

    stage("chart");
    let charts = chart::build_all(&records);

    stage("export");
    if let Some(csv_path) = &opts.export.csv {
        file::write_records_csv(&records, csv_path)?;
    }

    stage("artifacts");
    let artifacts = file::write_charts(&charts, &opts.export, |path| {
        if let Some(p) = progress.as_deref_mut() {
            p.artifact_written(path);
        }
    })?;
    logf!("Wrote {} artifacts to {}", artifacts.len(), opts.export.out_dir.display());

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(RunSummary { records, charts, artifacts })
}
