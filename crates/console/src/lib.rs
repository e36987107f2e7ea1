//! Line-oriented console front end: menu loop, prompts and text reports
//! around a single in-memory [`Inventory`](stockroom_inventory::Inventory).

pub mod config;
pub mod error;
pub mod input;
pub mod menu;
pub mod session;

pub use config::Cli;
pub use error::ConsoleError;
pub use session::{Session, SessionOptions};
