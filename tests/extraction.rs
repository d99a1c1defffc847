// tests/extraction.rs
mod common;

use cmc_scrape::config::options::ColumnMap;
use cmc_scrape::core::html::parse_document;
use cmc_scrape::record::Field;
use cmc_scrape::runner::records_from_html;
use cmc_scrape::specs::table::{build_records, extract_rows, TableSchema};
use cmc_scrape::ScrapeError;

use common::*;

#[test]
fn raw_and_typed_lengths_match_row_count() {
    let html = std::fs::read_to_string(fixture_path()).unwrap();
    let doc = parse_document("fixture", html.as_bytes()).unwrap();
    let rows = extract_rows(&doc).unwrap();
    let raw = build_records(&rows, &TableSchema::default()).unwrap();
    let typed = records_from_html(&html, &TableSchema::default()).unwrap();

    assert_eq!(rows.len(), 5);
    assert_eq!(raw.len(), rows.len());
    assert_eq!(typed.len(), raw.len());
    let ranks: Vec<&str> = typed.iter().map(|r| r.rank.as_str()).collect();
    assert_eq!(ranks, vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn fixture_cells_come_out_clean() {
    let html = std::fs::read_to_string(fixture_path()).unwrap();
    let doc = parse_document("fixture", html.as_bytes()).unwrap();
    let rows = extract_rows(&doc).unwrap();
    let raw = build_records(&rows, &TableSchema::default()).unwrap();

    let xrp = &raw[2];
    assert_eq!(xrp.rank, "3");
    assert_eq!(xrp.currency_name, "XRP");
    assert_eq!(xrp.market_cap, "$17,877,223,064");
    assert_eq!(xrp.price, "$0.455183");
    assert_eq!(xrp.volume, "$299,548,026");
    assert_eq!(xrp.supply, "39,275,298,134");
    assert_eq!(xrp.change, "0.02%");
    assert_eq!(raw[3].currency_name, "Bitcoin Cash");
}

#[test]
fn swapped_column_map_swaps_price_and_volume() {
    let html = page(&[row("1", "Alpha", "$1", "$10", "$20", "1", "1%")]);
    let schema = TableSchema::coinmarketcap(ColumnMap { price: 1, volume: 0 });
    let typed = records_from_html(&html, &schema).unwrap();
    assert_eq!((typed[0].price, typed[0].volume), (20.0, 10.0));
}

#[test]
fn missing_cell_reports_row_index() {
    let broken = row("2", "Beta", "$1", "$1", "$1", "1", "1%")
        .replace(r#"class="no-wrap market-cap text-right""#, r#"class="no-wrap text-right market""#);
    let html = page(&[row("1", "Alpha", "$1", "$1", "$1", "1", "1%"), broken]);
    match records_from_html(&html, &TableSchema::default()) {
        Err(ScrapeError::FieldExtraction { row, field }) => {
            assert_eq!(row, 1);
            assert_eq!(field, Field::MarketCap);
        }
        other => panic!("expected FieldExtraction, got {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn no_tbody_differs_from_empty_tbody() {
    let no_body = "<html><body><p>maintenance</p></body></html>";
    assert!(matches!(
        records_from_html(no_body, &TableSchema::default()),
        Err(ScrapeError::Structure(_))
    ));

    let empty = page(&[]);
    assert!(records_from_html(&empty, &TableSchema::default()).unwrap().is_empty());
}
