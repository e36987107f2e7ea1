//! Read-only stock listing.

use core::fmt;

use stockroom_core::Money;

use crate::item::Item;

/// One listed item.
#[derive(Debug, Clone, PartialEq)]
pub struct StockLine {
    pub name: String,
    pub quantity: u32,
    pub price: Money,
}

impl From<&Item> for StockLine {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name().to_string(),
            quantity: item.quantity(),
            price: item.price(),
        }
    }
}

/// Snapshot of the inventory in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum StockReport {
    Empty,
    Items(Vec<StockLine>),
}

impl StockReport {
    pub fn lines(&self) -> &[StockLine] {
        match self {
            StockReport::Empty => &[],
            StockReport::Items(lines) => lines,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, StockReport::Empty)
    }
}

impl fmt::Display for StockReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockReport::Empty => writeln!(f, "Inventory empty."),
            StockReport::Items(lines) => {
                for line in lines {
                    writeln!(f, "Item name: {}", line.name)?;
                    writeln!(f, "Quantity: {}", line.quantity)?;
                    writeln!(f, "Price: {}", line.price)?;
                    writeln!(f)?;
                }
                Ok(())
            }
        }
    }
}
