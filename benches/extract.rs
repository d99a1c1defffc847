// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use cmc_scrape::{chart, runner::records_from_html, specs::table::TableSchema};

fn load_sample() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/cmc_sample.html"))
        .expect("read tests/fixtures/cmc_sample.html")
}

/// Repeat the fixture's rows to reach a full 100-row page.
fn hundred_rows(doc: &str) -> String {
    let start = doc.find("<tbody>").expect("fixture has <tbody>") + "<tbody>".len();
    let end = doc.find("</tbody>").expect("fixture has </tbody>");
    let body = &doc[start..end];
    let mut out = String::with_capacity(doc.len() * 20);
    out.push_str(&doc[..start]);
    for _ in 0..20 {
        out.push_str(body);
    }
    out.push_str(&doc[end..]);
    out
}

fn bench_extract(c: &mut Criterion) {
    let doc = hundred_rows(&load_sample());
    let schema = TableSchema::default();

    c.bench_function("records_from_html_100", |b| {
        b.iter(|| {
            let records = records_from_html(black_box(&doc), &schema).unwrap();
            black_box(records.len())
        })
    });

    let records = records_from_html(&doc, &schema).unwrap();
    c.bench_function("build_all_charts_100", |b| {
        b.iter(|| black_box(chart::build_all(black_box(&records))))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
