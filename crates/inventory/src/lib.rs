//! Inventory ledger domain module.
//!
//! Stocked items, the sell/remove rules that govern them, and the running
//! revenue total. Pure domain logic: no console IO and no storage.

pub mod event;
pub mod inventory;
pub mod item;
pub mod report;

pub use event::{InventoryEvent, ItemAdded, ItemRemoved, ItemSold};
pub use inventory::{Inventory, Sale};
pub use item::Item;
pub use report::{StockLine, StockReport};
