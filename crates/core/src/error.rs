//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: an operation that fails with one of these
/// leaves the inventory exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// No stocked item matches the requested name.
    #[error("item not in inventory: {0}")]
    NotFound(String),

    /// A sale asked for more units than are held.
    #[error("cannot sell {requested} items, only {available} held")]
    InsufficientQuantity { requested: u32, available: u32 },

    /// A position does not address an item in the current sequence.
    #[error("no item at position {position} (inventory holds {len})")]
    InvalidPosition { position: usize, len: usize },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn insufficient(requested: u32, available: u32) -> Self {
        Self::InsufficientQuantity {
            requested,
            available,
        }
    }

    pub fn invalid_position(position: usize, len: usize) -> Self {
        Self::InvalidPosition { position, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_quantity_message_names_both_amounts() {
        let err = DomainError::insufficient(7, 3);
        assert_eq!(err.to_string(), "cannot sell 7 items, only 3 held");
    }

    #[test]
    fn not_found_carries_the_looked_up_name() {
        match DomainError::not_found("Ball") {
            DomainError::NotFound(name) => assert_eq!(name, "Ball"),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }
}
