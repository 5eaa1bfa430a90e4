//! Cart contents.
//!
//! A [`CartLine`] is keyed by the product it reserves, so the cart can hold at most one line
//! per product. Its `unit_price` is copied from the catalog when the line is created and is
//! changed afterwards only by discounts.

use serde::{Deserialize, Serialize};

use super::ProductId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: ProductId,
    pub item_name: String,
    #[serde(rename = "price")]
    pub unit_price: f64,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLineCreate {
    pub item_id: ProductId,
    pub item_name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLineUpdate {
    pub quantity: u32,
}

/// Snapshot of the whole cart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartLine>,
    pub total_price: f64,
}

impl CartView {
    /// Builds the view and its total from lines in store order.
    pub fn from_lines(items: Vec<CartLine>) -> Self {
        let total_price = items.iter().map(CartLine::line_total).sum();
        Self { items, total_price }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
