use chrono::Utc;

use stockroom_core::{DomainError, DomainResult, Money};
use stockroom_events::Journal;

use crate::event::{InventoryEvent, ItemAdded, ItemRemoved, ItemSold};
use crate::item::Item;
use crate::report::{StockLine, StockReport};

/// Receipt for one completed sale.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub proceeds: Money,
    /// Quantity still held after the sale.
    pub remaining: u32,
    /// Whether the sale exhausted the item and erased it.
    pub removed: bool,
}

/// Ordered collection of stocked items plus accumulated revenue.
///
/// Items keep insertion order. Names are not unique: lookups by name resolve
/// to the earliest-inserted match.
#[derive(Debug, Default)]
pub struct Inventory {
    items: Vec<Item>,
    total_money: Money,
    journal: Journal<InventoryEvent>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all completed sale proceeds since creation.
    pub fn total_money(&self) -> Money {
        self.total_money
    }

    pub fn journal(&self) -> &Journal<InventoryEvent> {
        &self.journal
    }

    /// Append a new item to the end of the sequence.
    ///
    /// Rejects an empty name, a zero quantity, and a negative or non-finite
    /// price. Duplicate names are accepted.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        quantity: u32,
        price: f64,
    ) -> DomainResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            tracing::warn!("rejected add: empty name");
            return Err(DomainError::validation("name cannot be empty"));
        }
        if quantity == 0 {
            tracing::warn!(name = %name, "rejected add: zero quantity");
            return Err(DomainError::validation("quantity must be positive"));
        }
        let price = Money::new(price).inspect_err(|err| {
            tracing::warn!(name = %name, error = %err, "rejected add: bad price");
        })?;

        tracing::info!(name = %name, quantity, price = price.amount(), "item added");
        self.journal.append(InventoryEvent::ItemAdded(ItemAdded {
            name: name.clone(),
            quantity,
            price,
            occurred_at: Utc::now(),
        }));
        self.items.push(Item::new(name, quantity, price));
        Ok(())
    }

    /// Position of the first item (insertion order) whose name matches exactly.
    pub fn position_of(&self, name: &str) -> DomainResult<usize> {
        let position = self.items.iter().position(|item| item.is_match(name));
        tracing::debug!(name, ?position, "item lookup");
        position.ok_or_else(|| DomainError::not_found(name))
    }

    /// Sell `requested` units of the first item named `name`.
    pub fn sell_item(&mut self, name: &str, requested: u32) -> DomainResult<Sale> {
        let position = self.position_of(name).inspect_err(|_| {
            tracing::warn!(name, "rejected sale: item not in inventory");
        })?;
        self.remove_item(position, requested)
    }

    /// Sell `requested` units of the item at `position`.
    ///
    /// All or nothing: asking for more than is held changes neither the item
    /// nor the revenue total. An item whose quantity reaches zero is erased,
    /// shifting later items down by one.
    pub fn remove_item(&mut self, position: usize, requested: u32) -> DomainResult<Sale> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(position)
            .ok_or_else(|| DomainError::invalid_position(position, len))?;

        let held = item.quantity();
        if requested > held {
            tracing::warn!(
                name = item.name(),
                requested,
                held,
                "rejected sale: insufficient quantity"
            );
            return Err(DomainError::insufficient(requested, held));
        }

        let unit_price = item.price();
        let amounts = unit_price.times(requested).and_then(|proceeds| {
            self.total_money
                .checked_add(proceeds)
                .map(|total| (proceeds, total))
        });
        let (proceeds, total_money) = match amounts {
            Ok(amounts) => amounts,
            Err(err) => {
                tracing::warn!(
                    name = item.name(),
                    requested,
                    error = %err,
                    "rejected sale: amount out of range"
                );
                return Err(err);
            }
        };
        let remaining = held - requested;
        item.set_quantity(remaining);
        let name = item.name().to_string();

        let removed = remaining == 0;
        if removed {
            self.items.remove(position);
        }
        self.total_money = total_money;

        tracing::info!(
            name = %name,
            quantity = requested,
            proceeds = proceeds.amount(),
            remaining,
            removed,
            "item sold"
        );

        let occurred_at = Utc::now();
        self.journal.append(InventoryEvent::ItemSold(ItemSold {
            name: name.clone(),
            quantity: requested,
            proceeds,
            remaining,
            occurred_at,
        }));
        if removed {
            self.journal.append(InventoryEvent::ItemRemoved(ItemRemoved {
                name: name.clone(),
                position,
                occurred_at,
            }));
        }

        Ok(Sale {
            name,
            quantity: requested,
            unit_price,
            proceeds,
            remaining,
            removed,
        })
    }

    /// Snapshot of every item in insertion order.
    pub fn list_items(&self) -> StockReport {
        if self.items.is_empty() {
            return StockReport::Empty;
        }
        StockReport::Items(self.items.iter().map(StockLine::from).collect())
    }
}
