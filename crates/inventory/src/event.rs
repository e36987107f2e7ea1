use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::Money;
use stockroom_events::Event;

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub name: String,
    pub quantity: u32,
    pub price: Money,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemSold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSold {
    pub name: String,
    pub quantity: u32,
    pub proceeds: Money,
    /// Quantity left on the item after this sale.
    pub remaining: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved (quantity reached zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub name: String,
    /// Position the item occupied before it was erased.
    pub position: usize,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InventoryEvent {
    ItemAdded(ItemAdded),
    ItemSold(ItemSold),
    ItemRemoved(ItemRemoved),
}

impl InventoryEvent {
    /// Proceeds carried by a sale event, zero for everything else.
    pub fn proceeds(&self) -> Money {
        match self {
            InventoryEvent::ItemSold(e) => e.proceeds,
            _ => Money::ZERO,
        }
    }
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemAdded(_) => "inventory.item.added",
            InventoryEvent::ItemSold(_) => "inventory.item.sold",
            InventoryEvent::ItemRemoved(_) => "inventory.item.removed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ItemAdded(e) => e.occurred_at,
            InventoryEvent::ItemSold(e) => e.occurred_at,
            InventoryEvent::ItemRemoved(e) => e.occurred_at,
        }
    }
}
