use serde::{Deserialize, Serialize};

use stockroom_core::Money;

/// A single stocked product: fixed name and unit price, mutable quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    quantity: u32,
    price: Money,
}

impl Item {
    pub fn new(name: impl Into<String>, quantity: u32, price: Money) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Overwrite the held quantity. The owning inventory decides when this is allowed.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// Exact, case-sensitive name comparison (no trimming).
    pub fn is_match(&self, candidate: &str) -> bool {
        self.name == candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bat() -> Item {
        Item::new("Bat", 10, Money::new(25.0).unwrap())
    }

    #[test]
    fn new_item_exposes_its_fields() {
        let item = bat();
        assert_eq!(item.name(), "Bat");
        assert_eq!(item.quantity(), 10);
        assert_eq!(item.price().amount(), 25.0);
    }

    #[test]
    fn is_match_is_exact_and_case_sensitive() {
        let item = bat();
        assert!(item.is_match("Bat"));
        assert!(!item.is_match("bat"));
        assert!(!item.is_match(" Bat"));
        assert!(!item.is_match("Bat "));
        assert!(!item.is_match("Ba"));
    }

    #[test]
    fn set_quantity_changes_only_the_quantity() {
        let mut item = bat();
        item.set_quantity(3);
        assert_eq!(item.quantity(), 3);
        assert_eq!(item.name(), "Bat");
        assert_eq!(item.price().amount(), 25.0);
    }
}
