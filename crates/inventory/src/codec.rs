//! Single-line text codec for stock entries.
//!
//! Line layout (fixed field order, no header, no escaping):
//!
//! ```text
//! warehouseNumber;categoryName;code;name;YYYY-MM-DD;shelfLifeDays;quantity;unitPrice
//! ```
//!
//! A `;` inside `code` or `name` corrupts the line. There is no escaping
//! mechanism; callers must keep the delimiter out of free-text fields.

use core::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use stockbook_core::{DecodeError, DecodeResult};

use crate::item::{Category, InventoryItem};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Zero-sized handle over the line format.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct LineCodec;

impl LineCodec {
    pub const DELIMITER: char = ';';
    pub const FIELD_COUNT: usize = 8;

    pub fn encode(&self, item: &InventoryItem) -> String {
        encode(item)
    }

    pub fn decode(&self, line: &str) -> DecodeResult<InventoryItem> {
        decode(line)
    }
}

/// Render one entry as a line (without a trailing line break).
pub fn encode(item: &InventoryItem) -> String {
    format!(
        "{};{};{};{};{};{};{};{}",
        item.warehouse_number,
        item.category.name(),
        item.code,
        item.name,
        item.date_added.format(DATE_FORMAT),
        item.shelf_life_days,
        item.quantity,
        item.unit_price,
    )
}

/// Parse one line back into an entry.
///
/// Fields are taken verbatim; surrounding whitespace is not trimmed.
pub fn decode(line: &str) -> DecodeResult<InventoryItem> {
    let fields: Vec<&str> = line.split(LineCodec::DELIMITER).collect();
    let [
        warehouse_number,
        category,
        code,
        name,
        date_added,
        shelf_life_days,
        quantity,
        unit_price,
    ] = fields.as_slice()
    else {
        return Err(DecodeError::field_count(LineCodec::FIELD_COUNT, fields.len()));
    };

    Ok(InventoryItem {
        warehouse_number: parse_int("warehouse_number", warehouse_number)?,
        category: Category::from_str(category)?,
        code: (*code).to_string(),
        name: (*name).to_string(),
        date_added: parse_date(date_added)?,
        shelf_life_days: parse_int("shelf_life_days", shelf_life_days)?,
        quantity: parse_int("quantity", quantity)?,
        unit_price: parse_decimal("unit_price", unit_price)?,
    })
}

fn parse_int(field: &'static str, raw: &str) -> DecodeResult<i32> {
    raw.parse::<i32>()
        .map_err(|_| DecodeError::invalid_integer(field, raw))
}

fn parse_decimal(field: &'static str, raw: &str) -> DecodeResult<Decimal> {
    Decimal::from_str(raw).map_err(|_| DecodeError::invalid_decimal(field, raw))
}

fn parse_date(raw: &str) -> DecodeResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| DecodeError::invalid_date(raw))
}
