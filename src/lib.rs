// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod normalize;
pub mod progress;
pub mod record;
pub mod runner;
pub mod specs;

pub use error::{Result, ScrapeError};
