// src/core/html.rs
// Page loading: resolve a locator, read it once, build the DOM.

use std::path::PathBuf;

use scraper::{ElementRef, Html};

use crate::core::net;
use crate::error::{Result, ScrapeError};

/// Where a locator points.
#[derive(Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Http(String),
}

/// `file:<path>` / `file://<path>` → local file, `http(s)://` → network,
/// anything else → plain filesystem path.
pub fn resolve(locator: &str) -> Source {
    let l = locator.trim();
    if let Some(rest) = l.strip_prefix("file://") {
        return Source::File(PathBuf::from(rest));
    }
    if let Some(rest) = l.strip_prefix("file:") {
        return Source::File(PathBuf::from(rest));
    }
    if l.starts_with("http://") || l.starts_with("https://") {
        return Source::Http(s!(l));
    }
    Source::File(PathBuf::from(l))
}

/// Read the raw bytes behind a locator. Single attempt.
pub fn read_source(locator: &str) -> Result<Vec<u8>> {
    match resolve(locator) {
        Source::File(path) => {
            std::fs::read(&path).map_err(|e| ScrapeError::retrieval(locator, e))
        }
        Source::Http(url) => net::http_get(&url),
    }
}

/// Build a document tree from raw bytes.
///
/// The HTML parser itself never rejects input, so "unparseable" here means
/// bytes that are not UTF-8, or content with no markup at all.
pub fn parse_document(locator: &str, bytes: &[u8]) -> Result<Html> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ScrapeError::parse(locator, format!("content is not UTF-8 ({})", e)))?;
    if text.trim().is_empty() {
        return Err(ScrapeError::parse(locator, "document is empty"));
    }

    let doc = Html::parse_document(text);
    if !has_markup(&doc) {
        return Err(ScrapeError::parse(locator, "no HTML elements found"));
    }
    if !doc.errors.is_empty() {
        logd!("{} recoverable HTML parse errors in {}", doc.errors.len(), locator);
    }
    Ok(doc)
}

/// Page Loader: locator in, parsed document out.
pub fn load_page(locator: &str) -> Result<Html> {
    logf!("Loading page from {}", locator);
    let bytes = read_source(locator)?;
    logd!(bytes = bytes.len(), "Source read");
    parse_document(locator, &bytes)
}

/// True if the tree holds any element besides the parser-implied skeleton.
fn has_markup(doc: &Html) -> bool {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .any(|el| !matches!(el.value().name(), "html" | "head" | "body"))
}
