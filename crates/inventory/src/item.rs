use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockbook_core::DecodeError;

/// Product category of a stock entry.
///
/// The ordinals (0–3) are stable; interactive entry selects a category by them.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Electronics,
    Clothing,
    Groceries,
    Furniture,
}

impl Category {
    /// All variants in ordinal order.
    pub const ALL: [Category; 4] = [
        Category::Electronics,
        Category::Clothing,
        Category::Groceries,
        Category::Furniture,
    ];

    /// Name → variant lookup used when decoding stored lines.
    const BY_NAME: [(&'static str, Category); 4] = [
        ("Electronics", Category::Electronics),
        ("Clothing", Category::Clothing),
        ("Groceries", Category::Groceries),
        ("Furniture", Category::Furniture),
    ];

    pub fn ordinal(self) -> u8 {
        match self {
            Category::Electronics => 0,
            Category::Clothing => 1,
            Category::Groceries => 2,
            Category::Furniture => 3,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }

    /// Symbolic name, as written to the data file.
    pub fn name(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Groceries => "Groceries",
            Category::Furniture => "Furniture",
        }
    }

    /// Exact (case-sensitive) lookup by symbolic name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::BY_NAME
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, category)| *category)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Category {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DecodeError::unknown_category(s))
    }
}

/// One warehouse stock entry.
///
/// Entries are plain values: they are built once (from user input or from a
/// stored line) and never updated afterwards. `Default` is the blank entry
/// substituted when interactive entry fails.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InventoryItem {
    pub warehouse_number: i32,
    pub category: Category,
    /// Product code. Must not contain `;`.
    pub code: String,
    /// Product name. Must not contain `;`.
    pub name: String,
    pub date_added: NaiveDate,
    pub shelf_life_days: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl InventoryItem {
    /// Stock value of the entry (`quantity × unit_price`), `None` on overflow.
    pub fn total_value(&self) -> Option<Decimal> {
        Decimal::from(self.quantity).checked_mul(self.unit_price)
    }

    /// Write the console row, with `price` as the last cell.
    ///
    /// `Display` uses this with the bare price; listings pass their own money
    /// formatting.
    pub fn write_row<W: core::fmt::Write>(
        &self,
        w: &mut W,
        price: impl core::fmt::Display,
    ) -> core::fmt::Result {
        write!(
            w,
            "{} | {} | {} | {} | {} | {} days | {} | {}",
            self.warehouse_number,
            self.category,
            self.code,
            self.name,
            self.date_added.format("%Y-%m-%d"),
            self.shelf_life_days,
            self.quantity,
            price,
        )
    }
}

impl core::fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.write_row(f, format_args!("{:.2}", self.unit_price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> InventoryItem {
        InventoryItem {
            warehouse_number: 1,
            category: Category::Electronics,
            code: "E1".to_string(),
            name: "Laptop Pro".to_string(),
            date_added: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            shelf_life_days: 365,
            quantity: 5,
            unit_price: Decimal::new(99999, 2),
        }
    }

    #[test]
    fn ordinals_are_stable() {
        for (idx, category) in Category::ALL.iter().enumerate() {
            assert_eq!(usize::from(category.ordinal()), idx);
            assert_eq!(Category::from_ordinal(idx as u8), Some(*category));
        }
        assert_eq!(Category::from_ordinal(4), None);
    }

    #[test]
    fn name_lookup_is_exact() {
        assert_eq!(Category::from_name("Groceries"), Some(Category::Groceries));
        assert_eq!(Category::from_name("groceries"), None);
        assert_eq!(Category::from_name(" Groceries"), None);
        assert!(matches!(
            "Toys".parse::<Category>(),
            Err(DecodeError::UnknownCategory(v)) if v == "Toys"
        ));
    }

    #[test]
    fn name_and_display_agree() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.name());
            assert_eq!(category.name().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn display_renders_console_row() {
        assert_eq!(
            laptop().to_string(),
            "1 | Electronics | E1 | Laptop Pro | 2024-01-10 | 365 days | 5 | 999.99"
        );
    }

    #[test]
    fn row_takes_custom_price_cell() {
        let mut row = String::new();
        laptop().write_row(&mut row, "n/a").unwrap();
        assert_eq!(row, "1 | Electronics | E1 | Laptop Pro | 2024-01-10 | 365 days | 5 | n/a");
    }

    #[test]
    fn default_is_blank_entry() {
        let blank = InventoryItem::default();
        assert_eq!(blank.warehouse_number, 0);
        assert_eq!(blank.category, Category::Electronics);
        assert!(blank.code.is_empty());
        assert!(blank.name.is_empty());
        assert_eq!(blank.unit_price, Decimal::ZERO);
    }

    #[test]
    fn total_value_multiplies_quantity_and_price() {
        assert_eq!(laptop().total_value(), Some(Decimal::new(499995, 2)));
    }

    #[test]
    fn serializes_category_by_name() {
        let json = serde_json::to_value(laptop()).unwrap();
        assert_eq!(json["category"], "Electronics");
        assert_eq!(json["date_added"], "2024-01-10");
    }
}
