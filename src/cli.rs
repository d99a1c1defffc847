// src/cli.rs
use std::{env, path::{Path, PathBuf}};

use thiserror::Error;

use crate::chart::Chart;
use crate::config::options::Options;
use crate::error::ScrapeError;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Scrape(#[from] ScrapeError),
}

type CliResult<T> = std::result::Result<T, CliError>;

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
}

pub fn run() -> CliResult<()> {
    let opts = match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!("{}", include_str!("cli_help.txt"));
            return Ok(());
        }
        Command::Run(opts) => opts,
    };

    crate::log::init(&opts.log)?;

    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&opts, Some(&mut progress)).inspect_err(|e| loge!("Run failed: {}", e))?;

    println!(
        "Scraped {} currencies, wrote {} artifacts to {}",
        summary.records.len(),
        summary.artifacts.len(),
        opts.export.out_dir.display()
    );
    if opts.summary {
        print_summary(&summary);
    }
    Ok(())
}

pub fn parse_args<I: Iterator<Item = String>>(mut args: I) -> CliResult<Command> {
    let mut opts = Options::default();
    let usage = |msg: String| CliError::Usage(msg);

    while let Some(a) = args.next() {
        let mut value = |flag: &str| {
            args.next().ok_or_else(|| usage(format!("Missing value for {}", flag)))
        };
        match a.as_str() {
            "-s" | "--source" => opts.source = value(&a)?,
            "-o" | "--out" => opts.export.out_dir = PathBuf::from(value(&a)?),
            "--ext" => opts.export.ext = Some(value(&a)?),
            "--csv" => opts.export.csv = Some(PathBuf::from(value(&a)?)),
            "--price-column" => opts.columns.price = parse_index(&a, &value(&a)?)?,
            "--volume-column" => opts.columns.volume = parse_index(&a, &value(&a)?)?,
            "--log-file" => opts.log.file = Some(PathBuf::from(value(&a)?)),
            "--summary" => opts.summary = true,
            "-v" | "--verbose" => opts.log.verbose = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(usage(format!("Unknown arg: {}", a))),
        }
    }
    Ok(Command::Run(opts))
}

fn parse_index(flag: &str, v: &str) -> CliResult<usize> {
    v.trim()
        .parse()
        .map_err(|_| CliError::Usage(format!("{} expects a column index (0, 1, …), got {:?}", flag, v)))
}

/// Prints stage lines to stderr.
#[derive(Default)]
struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, stages: usize) {
        self.total = stages;
        self.done = 0;
    }

    fn stage(&mut self, name: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done, self.total, name);
    }

    fn artifact_written(&mut self, path: &Path) {
        eprintln!("      wrote {}", path.display());
    }
}

fn print_summary(summary: &RunSummary) {
    print_bars(&summary.charts.market_cap);
    print_bars(&summary.charts.change);
}

/// Bar chart as a text table, top bar first.
pub fn bars_to_text(chart: &Chart) -> String {
    let mut out = format!("{}\n", chart.title);
    if let Some(bars) = chart.bars() {
        for (i, b) in bars.iter().enumerate() {
            out.push_str(&format!("{:>3}  {:<28} {:>20.2}\n", i + 1, truncate(&b.category, 28), b.value));
        }
    }
    out
}

fn print_bars(chart: &Chart) {
    println!("\n{}", bars_to_text(chart));
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max - 1).collect();
        join!(&truncated, "…")
    }
}
