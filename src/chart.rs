// src/chart.rs
//! Chart Builders.
//!
//! Each builder is a pure function from the typed records to an immutable
//! [`Chart`] description (canvas, axes, data). Nothing here draws; a chart is
//! plain data that can be persisted and re-rendered elsewhere. Input records
//! are only borrowed and sorted through references, so builders can run in
//! any order without seeing each other.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::config::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, MARKER_SIZES, SCATTER_LIMIT, TOP_N};
use crate::record::{NumericField, TypedRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortBy {
    /// By a numeric column
    Value(NumericField, Direction),
    /// By integer rank, ascending; unparseable ranks go last
    Rank,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotSpec {
    /// Currency names on the category axis, one bar per record, top to bottom
    HorizontalBar { value: NumericField },
    /// One point per record, colored and sized by `hue`
    Scatter { x: NumericField, y: NumericField, hue: NumericField },
}

/// Fixed display parameters of one chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartSpec {
    pub title: &'static str,
    pub sort: SortBy,
    pub limit: Option<usize>,
    pub plot: PlotSpec,
}

pub const TOP_MARKET_CAP: ChartSpec = ChartSpec {
    title: "Top 10 cryptocurrencies by market cap",
    sort: SortBy::Value(NumericField::MarketCap, Direction::Descending),
    limit: Some(TOP_N),
    plot: PlotSpec::HorizontalBar { value: NumericField::MarketCap },
};

pub const PRICE_VS_MARKET_CAP: ChartSpec = ChartSpec {
    title: "Price vs market cap (top 50 by rank)",
    sort: SortBy::Rank,
    limit: Some(SCATTER_LIMIT),
    plot: PlotSpec::Scatter {
        x: NumericField::Price,
        y: NumericField::MarketCap,
        hue: NumericField::Price,
    },
};

pub const PRICE_VS_VOLUME: ChartSpec = ChartSpec {
    title: "Price vs 24h volume",
    sort: SortBy::Rank,
    limit: None,
    plot: PlotSpec::Scatter {
        x: NumericField::Price,
        y: NumericField::Volume,
        hue: NumericField::Price,
    },
};

pub const TOP_CHANGE: ChartSpec = ChartSpec {
    title: "Top 10 cryptocurrencies by 24h change",
    sort: SortBy::Value(NumericField::Change, Direction::Descending),
    limit: Some(TOP_N),
    plot: PlotSpec::HorizontalBar { value: NumericField::Change },
};

/* ---------------- Chart description ---------------- */

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self { width: CANVAS_WIDTH, height: CANVAS_HEIGHT }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Scale {
    /// Categories in display order (top to bottom for a horizontal bar chart)
    Category(Vec<String>),
    Linear { min: f64, max: f64 },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub label: String,
    pub scale: Scale,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub category: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub hue: f64,
}

/// Color/size mapping for scatter points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HueLegend {
    pub field: String,
    pub min: f64,
    pub max: f64,
    /// Marker size at `min` and at `max`
    pub sizes: (f64, f64),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ChartData {
    Bars(Vec<Bar>),
    Points { points: Vec<Point>, legend: HueLegend },
}

impl ChartData {
    pub fn len(&self) -> usize {
        match self {
            ChartData::Bars(b) => b.len(),
            ChartData::Points { points, .. } => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub title: String,
    pub canvas: Canvas,
    pub axes: Axes,
    pub data: ChartData,
}

impl Chart {
    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    pub fn data(&self) -> &ChartData {
        &self.data
    }

    pub fn bars(&self) -> Option<&[Bar]> {
        match &self.data {
            ChartData::Bars(b) => Some(b),
            ChartData::Points { .. } => None,
        }
    }

    pub fn points(&self) -> Option<&[Point]> {
        match &self.data {
            ChartData::Points { points, .. } => Some(points),
            ChartData::Bars(_) => None,
        }
    }
}

/* ---------------- Builders ---------------- */

/// Numeric order where `-0.0 == 0.0`. Values are finite after normalizing.
fn cmp_value(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Stable sort by the chart's key, then truncate to its limit.
pub fn working_set<'a>(records: &'a [TypedRecord], sort: SortBy, limit: Option<usize>) -> Vec<&'a TypedRecord> {
    let mut picked: Vec<&TypedRecord> = records.iter().collect();
    match sort {
        SortBy::Value(field, Direction::Descending) => {
            picked.sort_by(|a, b| cmp_value(b.value(field), a.value(field)));
        }
        SortBy::Value(field, Direction::Ascending) => {
            picked.sort_by(|a, b| cmp_value(a.value(field), b.value(field)));
        }
        SortBy::Rank => {
            picked.sort_by_key(|r| {
                let n = r.rank_number();
                (n.is_none(), n.unwrap_or(0))
            });
        }
    }
    if let Some(n) = limit {
        picked.truncate(n);
    }
    picked
}

pub fn build(records: &[TypedRecord], spec: &ChartSpec) -> Chart {
    let set = working_set(records, spec.sort, spec.limit);
    let (axes, data) = match spec.plot {
        PlotSpec::HorizontalBar { value } => bar_parts(&set, value),
        PlotSpec::Scatter { x, y, hue } => scatter_parts(&set, x, y, hue),
    };
    logd!(title = spec.title, items = data.len(), "Chart built");
    Chart { title: s!(spec.title), canvas: Canvas::default(), axes, data }
}

fn bar_parts(set: &[&TypedRecord], value: NumericField) -> (Axes, ChartData) {
    let bars: Vec<Bar> = set
        .iter()
        .map(|r| Bar { category: r.currency_name.clone(), value: r.value(value) })
        .collect();

    // Bars grow from zero, so the extent always includes it.
    let (lo, hi) = extent(bars.iter().map(|b| b.value));
    let axes = Axes {
        x: Axis {
            label: s!(value.name()),
            scale: Scale::Linear { min: lo.min(0.0), max: hi.max(0.0) },
        },
        y: Axis {
            label: s!("currency_name"),
            scale: Scale::Category(bars.iter().map(|b| b.category.clone()).collect()),
        },
    };
    (axes, ChartData::Bars(bars))
}

fn scatter_parts(set: &[&TypedRecord], x: NumericField, y: NumericField, hue: NumericField) -> (Axes, ChartData) {
    let points: Vec<Point> = set
        .iter()
        .map(|r| Point {
            label: r.currency_name.clone(),
            x: r.value(x),
            y: r.value(y),
            hue: r.value(hue),
        })
        .collect();

    let axes = Axes {
        x: linear_axis(x, points.iter().map(|p| p.x)),
        y: linear_axis(y, points.iter().map(|p| p.y)),
    };
    let (min, max) = extent(points.iter().map(|p| p.hue));
    let legend = HueLegend { field: s!(hue.name()), min, max, sizes: MARKER_SIZES };
    (axes, ChartData::Points { points, legend })
}

fn linear_axis(field: NumericField, vals: impl Iterator<Item = f64>) -> Axis {
    let (min, max) = extent(vals);
    Axis { label: s!(field.name()), scale: Scale::Linear { min, max } }
}

/// (min, max) of the values; (0, 0) when there are none.
fn extent(vals: impl Iterator<Item = f64>) -> (f64, f64) {
    vals.fold(None, |acc: Option<(f64, f64)>, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
    .unwrap_or((0.0, 0.0))
}

/// Top 10 by market cap, largest bar on top.
pub fn top_by_market_cap(records: &[TypedRecord]) -> Chart {
    build(records, &TOP_MARKET_CAP)
}

/// First 50 by rank, price against market cap.
pub fn price_vs_market_cap(records: &[TypedRecord]) -> Chart {
    build(records, &PRICE_VS_MARKET_CAP)
}

/// Every record by rank, price against 24h volume.
pub fn price_vs_volume(records: &[TypedRecord]) -> Chart {
    build(records, &PRICE_VS_VOLUME)
}

/// Top 10 by 24h change. Not filtered to positive changes: with fewer than
/// ten gainers the tail shows flat or falling currencies.
pub fn top_by_change(records: &[TypedRecord]) -> Chart {
    build(records, &TOP_CHANGE)
}

/// The four charts of one run.
#[derive(Clone, Debug, PartialEq)]
pub struct Charts {
    pub market_cap: Chart,
    pub price_vs_market_cap: Chart,
    pub price_vs_volume: Chart,
    pub change: Chart,
}

pub fn build_all(records: &[TypedRecord]) -> Charts {
    Charts {
        market_cap: top_by_market_cap(records),
        price_vs_market_cap: price_vs_market_cap(records),
        price_vs_volume: price_vs_volume(records),
        change: top_by_change(records),
    }
}
