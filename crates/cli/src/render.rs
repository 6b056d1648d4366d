//! Display formatting of entry listings.

use rust_decimal::Decimal;

use stockbook_inventory::InventoryItem;

use crate::config::OutputFormat;
use crate::console::OutputSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    format: OutputFormat,
    currency: String,
}

impl Renderer {
    pub fn new(format: OutputFormat, currency: impl Into<String>) -> Self {
        Self {
            format,
            currency: currency.into(),
        }
    }

    pub fn row(&self, item: &InventoryItem) -> String {
        match self.format {
            OutputFormat::Text => {
                let mut row = String::new();
                // Writing into a String cannot fail.
                let _ = item.write_row(&mut row, self.money(item.unit_price));
                row
            }
            OutputFormat::Json => serde_json::to_string(item).unwrap_or_else(|err| {
                tracing::error!(error = %err, "failed to serialize entry");
                format!("{{\"error\":\"{err}\"}}")
            }),
        }
    }

    /// Print every entry, then a count/value summary line (text format only).
    pub fn listing<O: OutputSink + ?Sized>(&self, out: &mut O, items: &[InventoryItem]) {
        for item in items {
            out.line(&self.row(item));
        }
        if self.format == OutputFormat::Text {
            out.line(&self.summary(items));
        }
    }

    pub fn summary(&self, items: &[InventoryItem]) -> String {
        let total = items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.total_value()?));
        match total {
            Some(total) => format!("{} item(s), total value {}", items.len(), self.money(total)),
            None => format!("{} item(s), total value out of range", items.len()),
        }
    }

    fn money(&self, amount: Decimal) -> String {
        if amount.is_sign_negative() {
            format!("-{}{:.2}", self.currency, amount.abs())
        } else {
            format!("{}{:.2}", self.currency, amount)
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(OutputFormat::Text, "$")
    }
}
