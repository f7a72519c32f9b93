//! Product record.

use serde::{Deserialize, Serialize};

/// A catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID (1-based, dense).
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Price in cents.
    pub price_cents: u64,
    /// Stock keeping unit, eight uppercase alphanumerics.
    pub sku: String,
}

impl Product {
    /// Price formatted as `12.34`.
    #[must_use]
    pub fn price_display(&self) -> String {
        format!("{}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}
