// src/normalize.rs
//! Field Normalizer: strip currency/thousands/percent decoration and cast.

use crate::core::sanitize::{normalize_ws, strip_chars};
use crate::error::{Result, ScrapeError};
use crate::record::{Field, NumericField, RawRecord, TypedRecord};

/// Decoration removed from each numeric column before parsing.
pub fn decoration(field: NumericField) -> &'static [char] {
    match field {
        NumericField::MarketCap | NumericField::Price | NumericField::Volume => &['$', ','],
        NumericField::Supply => &[','],
        NumericField::Change => &['%'],
    }
}

/// Clean and parse one numeric cell. Non-finite results (`NaN`, `inf`) are
/// rejected like any other unparseable text. `-0` comes back as `0`.
pub fn parse_number(row: usize, field: NumericField, raw: &str) -> Result<f64> {
    let cleaned = strip_chars(raw, decoration(field));
    match cleaned.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v + 0.0),
        _ => Err(ScrapeError::Normalization {
            row,
            field: field.field(),
            raw: s!(raw),
        }),
    }
}

pub fn normalize_record(row: usize, raw: &RawRecord) -> Result<TypedRecord> {
    let num = |f: NumericField| parse_number(row, f, raw.get(f.field()));
    Ok(TypedRecord {
        rank: raw.get(Field::Rank).to_string(),
        currency_name: normalize_ws(raw.get(Field::CurrencyName)),
        market_cap: num(NumericField::MarketCap)?,
        price: num(NumericField::Price)?,
        volume: num(NumericField::Volume)?,
        supply: num(NumericField::Supply)?,
        change: num(NumericField::Change)?,
    })
}

/// Typed collection, same length and order as the input. Stops at the
/// first value that will not parse.
pub fn normalize_records(raw: &[RawRecord]) -> Result<Vec<TypedRecord>> {
    let typed = raw
        .iter()
        .enumerate()
        .map(|(i, r)| normalize_record(i, r))
        .collect::<Result<Vec<_>>>()?;
    logd!(records = typed.len(), "Records normalized");
    Ok(typed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(rank: &str, cap: &str, price: &str, change: &str) -> RawRecord {
        RawRecord {
            rank: s!(rank),
            currency_name: s!(" Bitcoin  Cash "),
            market_cap: s!(cap),
            price: s!(price),
            volume: s!("$1,000"),
            supply: s!("98,765"),
            change: s!(change),
        }
    }

    #[test]
    fn strips_all_decoration_before_parsing() {
        assert_eq!(parse_number(0, NumericField::MarketCap, "$1,234,567.89").unwrap(), 1234567.89);
        assert_eq!(parse_number(0, NumericField::Change, "-3.25%").unwrap(), -3.25);
        assert_eq!(parse_number(0, NumericField::Supply, "98,765").unwrap(), 98765.0);
        assert_eq!(parse_number(0, NumericField::Price, " $0.004512 ").unwrap(), 0.004512);
    }

    #[test]
    fn negative_zero_reads_as_zero() {
        let v = parse_number(0, NumericField::Change, "-0.00%").unwrap();
        assert_eq!(v, 0.0);
        assert!(v.is_sign_positive());
    }

    #[test]
    fn supply_keeps_dollar_as_invalid() {
        // Only commas are decoration for supply.
        assert!(parse_number(0, NumericField::Supply, "$5").is_err());
    }

    #[test]
    fn bad_price_is_an_error_not_zero() {
        let err = normalize_records(&[raw("1", "$1", "$1", "1%"), raw("2", "$1", "abc", "1%")]).unwrap_err();
        match err {
            ScrapeError::Normalization { row, field, raw } => {
                assert_eq!(row, 1);
                assert_eq!(field, Field::Price);
                assert_eq!(raw, "abc");
            }
            other => panic!("expected Normalization, got {:?}", other),
        }
    }

    #[test]
    fn nan_and_infinity_are_rejected() {
        assert!(parse_number(0, NumericField::Price, "NaN").is_err());
        assert!(parse_number(0, NumericField::Change, "inf%").is_err());
    }

    #[test]
    fn keeps_length_order_and_text_fields() {
        let input = vec![raw("2", "$1,200,000", "$3", "-2.0%"), raw("1", "$500,000", "$1", "10.5%")];
        let typed = normalize_records(&input).unwrap();
        assert_eq!(typed.len(), 2);
        assert_eq!(typed[0].rank, "2");
        assert_eq!(typed[0].market_cap, 1_200_000.0);
        assert_eq!(typed[1].change, 10.5);
        assert_eq!(typed[0].currency_name, "Bitcoin Cash");
    }

    #[test]
    fn deterministic() {
        let r = raw("1", "$1,234,567.89", "$2.50", "-3.25%");
        assert_eq!(normalize_record(0, &r).unwrap(), normalize_record(0, &r).unwrap());
    }
}
