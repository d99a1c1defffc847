// tests/common/mod.rs
#![allow(dead_code)]
use std::fs;
use std::path::PathBuf;

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("cmc_it_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/cmc_sample.html")
}

/// Minimal market table row in the legacy page layout.
pub fn row(rank: &str, name: &str, cap: &str, price: &str, volume: &str, supply: &str, change: &str) -> String {
    format!(
        r##"<tr>
<td class="text-center sorting_1">{rank}</td>
<td class="no-wrap currency-name"><a class="currency-name-container link-secondary" href="#">{name}</a></td>
<td class="no-wrap market-cap text-right">{cap}</td>
<td class="no-wrap text-right"><a class="price">{price}</a></td>
<td class="no-wrap text-right"><a class="volume">{volume}</a></td>
<td class="no-wrap text-right circulating-supply"><span>{supply}</span></td>
<td class="no-wrap percent-change text-right" data-timespan="24h">{change}</td>
</tr>"##
    )
}

pub fn page(rows: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>t</title></head><body><table><tbody>\n{}\n</tbody></table></body></html>",
        rows.join("\n")
    )
}

/// The three-row table: caps 500k / 1.2M / 300k, changes 10.5 / -2.0 / 20.0.
pub fn three_rows() -> String {
    page(&[
        row("1", "Alpha", "$500,000", "$5.00", "$1,000", "100,000", "10.5%"),
        row("2", "Beta", "$1,200,000", "$12.00", "$2,000", "100,000", "-2.0%"),
        row("3", "Gamma", "$300,000", "$3.00", "$3,000", "100,000", "20.0%"),
    ])
}
