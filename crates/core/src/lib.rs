//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no console concerns).

pub mod error;
pub mod money;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use money::Money;
pub use value_object::ValueObject;
