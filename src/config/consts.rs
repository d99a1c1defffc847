// src/config/consts.rs

// Input
pub const DEFAULT_SOURCE: &str =
    "file:data/input_html/Cryptocurrency Market Capitalizations _ CoinMarketCap.html";

// Net config
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "cmc_scrape/0.3";

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const PLOT1_FILE: &str = "plot1";
pub const PLOT2_AXES_FILE: &str = "plot2_axes";
pub const PLOT2_DATA_FILE: &str = "plot2_data";
pub const PLOT3_AXES_FILE: &str = "plot3_axes";
pub const PLOT3_DATA_FILE: &str = "plot3_data";
pub const PLOT4_FILE: &str = "plot4";

// Charts
pub const TOP_N: usize = 10;
pub const SCATTER_LIMIT: usize = 50;
pub const CANVAS_WIDTH: f64 = 10.0;
pub const CANVAS_HEIGHT: f64 = 2.0;
pub const MARKER_SIZES: (f64, f64) = (10.0, 2.0);

// Table layout: price is the first plain "no-wrap text-right" cell, volume the second
pub const PRICE_COLUMN: usize = 0;
pub const VOLUME_COLUMN: usize = 1;
