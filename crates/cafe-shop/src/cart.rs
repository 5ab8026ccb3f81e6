//! # Cart
//!
//! The session's shopping cart: an ordered list of lines, one per distinct product
//! name, mutated only through [`Cart::add_item`], [`Cart::remove_item`],
//! [`Cart::set_quantity`] and [`Cart::clear`].
//!
//! The cart is owned by whoever drives the session and passed by reference to the
//! surfaces that need it. Totals are recomputed from the lines on every read.
//!
//! Views that want to redraw on change call [`Cart::subscribe`]; every mutation that
//! changes the lines publishes a fresh [`CartSummary`] before it returns.

use crate::model::{MenuItem, OrderItem};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::watch;
use tracing::debug;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Price of {name} must not be negative, got {price}")]
    NegativePrice { name: String, price: Decimal },

    #[error("Product name must not be empty")]
    EmptyName,
}

/// A product offered to the cart.
///
/// Constructed through [`CartItem::new`] or from a [`MenuItem`], both of which refuse
/// blank names and negative prices, so [`Cart::add_item`] has nothing left to reject.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    name: String,
    unit_price: Decimal,
    category: String,
    image_ref: String,
}

impl CartItem {
    pub fn new(
        name: impl Into<String>,
        unit_price: Decimal,
        category: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Result<Self, CartError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CartError::EmptyName);
        }
        if unit_price < Decimal::ZERO {
            return Err(CartError::NegativePrice {
                name,
                price: unit_price,
            });
        }
        Ok(Self {
            name,
            unit_price,
            category: category.into(),
            image_ref: image_ref.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }
}

impl From<&MenuItem> for CartItem {
    fn from(item: &MenuItem) -> Self {
        Self {
            name: item.name().to_string(),
            unit_price: item.price(),
            category: item.category().to_string(),
            image_ref: item.image_ref().to_string(),
        }
    }
}

/// One distinct product in the cart. `quantity` is never zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub category: String,
    pub image_ref: String,
}

impl CartLine {
    /// Unit price × quantity, saturating at `Decimal::MAX`.
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// What observers receive after each change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSummary {
    /// Distinct products.
    pub lines: usize,
    /// Sum of quantities, the badge count.
    pub items: u64,
    pub total: Decimal,
}

/// Immutable copy of the cart taken at submission time.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    pub items: Vec<OrderItem>,
    pub total: Decimal,
}

pub struct Cart {
    lines: Vec<CartLine>,
    changes: watch::Sender<CartSummary>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Cart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cart").field("lines", &self.lines).finish()
    }
}

impl Cart {
    /// An empty cart.
    pub fn new() -> Self {
        let (changes, _) = watch::channel(CartSummary::default());
        Self {
            lines: Vec::new(),
            changes,
        }
    }

    /// Adds one unit of `item`.
    ///
    /// An existing line with the same name is incremented and keeps its original
    /// price, category and image; otherwise a new line is appended.
    pub fn add_item(&mut self, item: impl Into<CartItem>) {
        let item = item.into();
        match self.lines.iter_mut().find(|line| line.name == item.name) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                debug!(name = %line.name, quantity = line.quantity, "Cart line incremented");
            }
            None => {
                debug!(name = %item.name, price = %item.unit_price, "Cart line added");
                self.lines.push(CartLine {
                    name: item.name,
                    unit_price: item.unit_price,
                    quantity: 1,
                    category: item.category,
                    image_ref: item.image_ref,
                });
            }
        }
        self.publish();
    }

    /// Removes the line called `name`. Absent names are ignored.
    pub fn remove_item(&mut self, name: &str) {
        let before = self.lines.len();
        self.lines.retain(|line| line.name != name);
        if self.lines.len() != before {
            debug!(name, "Cart line removed");
            self.publish();
        }
    }

    /// Sets the quantity of the line called `name`.
    ///
    /// A quantity of zero or less removes the line. Absent names are ignored.
    pub fn set_quantity(&mut self, name: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(name);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|line| line.name == name) {
            if line.quantity != quantity {
                line.quantity = quantity;
                debug!(name, quantity, "Cart quantity set");
                self.publish();
            }
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        if !self.lines.is_empty() {
            self.lines.clear();
            debug!("Cart cleared");
            self.publish();
        }
    }

    /// Σ unit price × quantity, saturating at `Decimal::MAX`.
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .fold(Decimal::ZERO, |sum, line| sum.saturating_add(line.line_total()))
    }

    /// Σ quantity.
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self.lines.len(),
            items: self.count(),
            total: self.total(),
        }
    }

    /// The lines as order items, with the total they add up to.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self
                .lines
                .iter()
                .map(|line| OrderItem {
                    name: line.name.clone(),
                    price: line.unit_price,
                    quantity: line.quantity,
                    category: line.category.clone(),
                })
                .collect(),
            total: self.total(),
        }
    }

    /// A receiver that observes every subsequent change.
    pub fn subscribe(&self) -> watch::Receiver<CartSummary> {
        self.changes.subscribe()
    }

    fn publish(&self) {
        self.changes.send_replace(self.summary());
    }
}
