//! Interactive entry errors and the field parsers that produce them.

use core::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use stockbook_inventory::{Category, LineCodec};

/// A value typed at a prompt could not be turned into its field type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputParseError {
    /// Input ended before the field was supplied.
    #[error("input ended before {field} was entered")]
    EndOfInput { field: &'static str },

    /// The value does not parse as the field's type.
    #[error("invalid {field} {value:?}: {reason}")]
    Invalid {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl InputParseError {
    pub fn end_of_input(field: &'static str) -> Self {
        Self::EndOfInput { field }
    }

    /// The answer for `field` arrived but was not readable text.
    pub fn unreadable(field: &'static str, source: &std::io::Error) -> Self {
        Self::invalid(field, "", format!("unreadable input ({source})"))
    }

    pub fn invalid(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Invalid {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

pub fn parse_integer(field: &'static str, raw: &str) -> Result<i32, InputParseError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|e| InputParseError::invalid(field, raw, e.to_string()))
}

pub fn parse_price(field: &'static str, raw: &str) -> Result<Decimal, InputParseError> {
    Decimal::from_str(raw.trim()).map_err(|e| InputParseError::invalid(field, raw, e.to_string()))
}

pub fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, InputParseError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| InputParseError::invalid(field, raw, format!("{e} (expected yyyy-MM-dd)")))
}

/// Category by ordinal (`0`–`3`) or by name, ignoring case.
pub fn parse_category(field: &'static str, raw: &str) -> Result<Category, InputParseError> {
    let value = raw.trim();
    let by_ordinal = value.parse::<u8>().ok().and_then(Category::from_ordinal);
    let by_name = || {
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(value))
    };

    by_ordinal.or_else(by_name).ok_or_else(|| {
        InputParseError::invalid(
            field,
            raw,
            "expected 0 - Electronics, 1 - Clothing, 2 - Groceries, 3 - Furniture",
        )
    })
}

/// Free text that will be stored verbatim; the line format has no escaping,
/// so the delimiter is refused here.
pub fn parse_text(field: &'static str, raw: &str) -> Result<String, InputParseError> {
    if raw.contains(LineCodec::DELIMITER) {
        return Err(InputParseError::invalid(
            field,
            raw,
            format!("must not contain '{}'", LineCodec::DELIMITER),
        ));
    }
    Ok(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_tolerate_surrounding_whitespace() {
        assert_eq!(parse_integer("quantity", " 12 "), Ok(12));
        assert!(matches!(
            parse_integer("quantity", "twelve"),
            Err(InputParseError::Invalid { field: "quantity", .. })
        ));
    }

    #[test]
    fn category_by_ordinal_or_name() {
        assert_eq!(parse_category("category", "2"), Ok(Category::Groceries));
        assert_eq!(parse_category("category", "furniture"), Ok(Category::Furniture));
        assert_eq!(parse_category("category", "Clothing"), Ok(Category::Clothing));
        assert!(parse_category("category", "4").is_err());
        assert!(parse_category("category", "").is_err());
    }

    #[test]
    fn dates_are_iso() {
        assert_eq!(
            parse_date("date added", "2024-01-10"),
            Ok(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap())
        );
        assert!(parse_date("date added", "10.01.2024").is_err());
    }

    #[test]
    fn prices_keep_their_scale() {
        assert_eq!(parse_price("unit price", "1.50").unwrap().to_string(), "1.50");
        assert!(parse_price("unit price", "1,50").is_err());
    }

    #[test]
    fn text_refuses_delimiter() {
        assert_eq!(parse_text("name", "Milk 2%"), Ok("Milk 2%".to_string()));
        let err = parse_text("name", "Milk;2%").unwrap_err();
        assert_eq!(err.to_string(), "invalid name \"Milk;2%\": must not contain ';'");
    }
}
