// src/record.rs
//! Row-level data: the seven logical columns, as extracted and as typed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The seven logical columns of the market table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Rank,
    CurrencyName,
    MarketCap,
    Price,
    Volume,
    Supply,
    Change,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Rank,
        Field::CurrencyName,
        Field::MarketCap,
        Field::Price,
        Field::Volume,
        Field::Supply,
        Field::Change,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Rank => "rank",
            Field::CurrencyName => "currency_name",
            Field::MarketCap => "market_cap",
            Field::Price => "price",
            Field::Volume => "volume",
            Field::Supply => "supply",
            Field::Change => "change",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Columns that normalize to a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericField {
    MarketCap,
    Price,
    Volume,
    Supply,
    Change,
}

impl NumericField {
    pub fn field(self) -> Field {
        match self {
            NumericField::MarketCap => Field::MarketCap,
            NumericField::Price => Field::Price,
            NumericField::Volume => Field::Volume,
            NumericField::Supply => Field::Supply,
            NumericField::Change => Field::Change,
        }
    }

    pub fn name(self) -> &'static str {
        self.field().name()
    }
}

/// One table row, every column still the cell text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub rank: String,
    pub currency_name: String,
    pub market_cap: String,
    pub price: String,
    pub volume: String,
    pub supply: String,
    pub change: String,
}

impl RawRecord {
    pub fn get(&self, field: Field) -> &str {
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

    pub(crate) fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Rank => &mut self.rank,
            Field::CurrencyName => &mut self.currency_name,
            Field::MarketCap => &mut self.market_cap,
            Field::Price => &mut self.price,
            Field::Volume => &mut self.volume,
            Field::Supply => &mut self.supply,
            Field::Change => &mut self.change,
        }
    }
}

/// One row after normalization. Numbers are plain `f64`; `change` is in
/// percent (`-3.25` means -3.25 %).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypedRecord {
    pub rank: String,
    pub currency_name: String,
    pub market_cap: f64,
    pub price: f64,
    pub volume: f64,
    pub supply: f64,
    pub change: f64,
}

impl TypedRecord {
    pub fn value(&self, field: NumericField) -> f64 {
        match field {
            NumericField::MarketCap => self.market_cap,
            NumericField::Price => self.price,
            NumericField::Volume => self.volume,
            NumericField::Supply => self.supply,
            NumericField::Change => self.change,
        }
    }

    /// Rank as an integer, if the cell held one.
    pub fn rank_number(&self) -> Option<u64> {
        self.rank.trim().parse().ok()
    }

    /// Header row for tabular export.
    pub fn headers() -> Vec<String> {
        Field::ALL.iter().map(|f| s!(f.name())).collect()
    }

    /// Cells in header order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.rank.clone(),
            self.currency_name.clone(),
            self.market_cap.to_string(),
            self.price.to_string(),
            self.volume.to_string(),
            self.supply.to_string(),
            self.change.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_number_tolerates_padding_only() {
        let mut r = TypedRecord {
            rank: s!(" 7 "),
            currency_name: s!("X"),
            market_cap: 0.0,
            price: 0.0,
            volume: 0.0,
            supply: 0.0,
            change: 0.0,
        };
        assert_eq!(r.rank_number(), Some(7));
        r.rank = s!("7a");
        assert_eq!(r.rank_number(), None);
    }

    #[test]
    fn row_follows_header_order() {
        let r = TypedRecord {
            rank: s!("1"),
            currency_name: s!("Bitcoin"),
            market_cap: 1234567.89,
            price: 2.5,
            volume: 10.0,
            supply: 98765.0,
            change: -3.25,
        };
        assert_eq!(TypedRecord::headers()[2], "market_cap");
        assert_eq!(r.to_row(), vec!["1", "Bitcoin", "1234567.89", "2.5", "10", "98765", "-3.25"]);
    }
}
