//! Attribute search over loaded stock entries.
//!
//! A linear scan: every entry is tested against each supplied predicate.

use serde::{Deserialize, Serialize};

use crate::item::{Category, InventoryItem};

/// Filter criteria for entry searches. Every predicate is optional; an unset
/// predicate is skipped.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Exact warehouse number.
    pub warehouse_number: Option<i32>,
    /// Exact category.
    pub category: Option<Category>,
    /// Case-insensitive substring of the entry name.
    pub name_contains: Option<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_warehouse(mut self, warehouse_number: i32) -> Self {
        self.warehouse_number = Some(warehouse_number);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_name(mut self, fragment: impl Into<String>) -> Self {
        self.name_contains = Some(fragment.into());
        self
    }

    /// True when no predicate is set (matches everything).
    pub fn is_empty(&self) -> bool {
        self.warehouse_number.is_none() && self.category.is_none() && self.name_contains.is_none()
    }

    pub fn matches(&self, item: &InventoryItem) -> bool {
        self.warehouse_number
            .is_none_or(|wh| item.warehouse_number == wh)
            && self.category.is_none_or(|c| item.category == c)
            && self
                .name_contains
                .as_deref()
                .is_none_or(|fragment| contains_ignore_case(&item.name, fragment))
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Return the entries matching `criteria`, in their original order.
pub fn filter(items: &[InventoryItem], criteria: &SearchCriteria) -> Vec<InventoryItem> {
    items
        .iter()
        .filter(|item| criteria.matches(item))
        .cloned()
        .collect()
}
