// src/specs/table.rs
//! Market table spec: rows under the first `<tbody>`, seven cells per row.
//!
//! Default layout (legacy CoinMarketCap "all currencies" page):
//!
//! ```text
//! rank           td.text-center.sorting_1
//! currency_name  td.no-wrap.currency-name > a.currency-name-container.link-secondary
//! market_cap     td.no-wrap.market-cap.text-right
//! price          td.no-wrap.text-right   (1st of that exact class set)
//! volume         td.no-wrap.text-right   (2nd of that exact class set)
//! supply         td.no-wrap.text-right.circulating-supply > span
//! change         td[data-timespan="24h"]
//! ```

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::options::ColumnMap;
use crate::core::sanitize::{newlines_to_spaces, remove_newlines};
use crate::core::select::{find_field, text_of, CellRule, ClassSet, FieldRule, InnerRule};
use crate::error::{Result, ScrapeError};
use crate::record::{Field, RawRecord};

static TBODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tbody").unwrap());
static TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());

/// One rule per column; the struct shape guarantees all seven are present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSchema {
    pub rank: FieldRule,
    pub currency_name: FieldRule,
    pub market_cap: FieldRule,
    pub price: FieldRule,
    pub volume: FieldRule,
    pub supply: FieldRule,
    pub change: FieldRule,
}

impl TableSchema {
    pub fn coinmarketcap(columns: ColumnMap) -> Self {
        if columns.price == columns.volume {
            logw!(
                "price and volume both read column {} of the plain numeric cells; they will hold the same text",
                columns.price
            );
        }
        Self {
            rank: FieldRule::cell(CellRule::ByClass(ClassSet::new("text-center sorting_1"))),
            currency_name: FieldRule::nested(
                CellRule::ByClass(ClassSet::new("no-wrap currency-name")),
                InnerRule::tag_with_classes("a", "currency-name-container link-secondary"),
            ),
            market_cap: FieldRule::cell(CellRule::ByClass(ClassSet::new("no-wrap market-cap text-right"))),
            price: FieldRule::cell(CellRule::ByClassAt {
                classes: ClassSet::new("no-wrap text-right"),
                nth: columns.price,
            }),
            volume: FieldRule::cell(CellRule::ByClassAt {
                classes: ClassSet::new("no-wrap text-right"),
                nth: columns.volume,
            }),
            supply: FieldRule::nested(
                CellRule::ByClass(ClassSet::new("no-wrap text-right circulating-supply")),
                InnerRule::tag("span"),
            ),
            change: FieldRule::cell(CellRule::ByDataAttribute {
                name: s!("data-timespan"),
                value: s!("24h"),
            }),
        }
    }

    pub fn rule(&self, field: Field) -> &FieldRule {
        match field {
            Field::Rank => &self.rank,
            Field::CurrencyName => &self.currency_name,
            Field::MarketCap => &self.market_cap,
            Field::Price => &self.price,
            Field::Volume => &self.volume,
            Field::Supply => &self.supply,
            Field::Change => &self.change,
        }
    }
}

impl Default for TableSchema {
    fn default() -> Self {
        Self::coinmarketcap(ColumnMap::default())
    }
}

/// Row Extractor: every `<tr>` under the first `<tbody>`, in document order.
///
/// A missing `<tbody>` is a structure error; an empty one yields no rows.
pub fn extract_rows(doc: &Html) -> Result<Vec<ElementRef<'_>>> {
    let tbody = doc
        .select(&TBODY)
        .next()
        .ok_or_else(|| ScrapeError::Structure(s!("expected one <tbody> element, found 0")))?;

    let rows: Vec<_> = tbody.select(&TR).collect();
    logd!(rows = rows.len(), "Table body located");
    Ok(rows)
}

/// Record Builder: one [`RawRecord`] per row, same order.
pub fn build_records(rows: &[ElementRef], schema: &TableSchema) -> Result<Vec<RawRecord>> {
    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        records.push(build_record(i, *row, schema)?);
    }
    logf!("Extracted {} records", records.len());
    Ok(records)
}

fn build_record(row_ix: usize, row: ElementRef, schema: &TableSchema) -> Result<RawRecord> {
    let mut rec = RawRecord::default();
    for field in Field::ALL {
        let el = find_field(row, schema.rule(field))
            .ok_or(ScrapeError::FieldExtraction { row: row_ix, field })?;
        *rec.slot(field) = clean_text(field, &text_of(el));
    }
    Ok(rec)
}

/// Line breaks inside cells come from markup wrapping: the name keeps word
/// boundaries, every other column drops them outright.
fn clean_text(field: Field, text: &str) -> String {
    match field {
        Field::CurrencyName => newlines_to_spaces(text),
        _ => remove_newlines(text),
    }
}
