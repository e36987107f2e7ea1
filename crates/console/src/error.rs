use thiserror::Error;

use stockroom_core::DomainError;

/// Failures of the console channel itself.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// A numeric field could not be parsed from the typed token.
    #[error("Invalid {field}: '{input}'")]
    InvalidNumber { field: &'static str, input: String },
}

/// User-facing line for a rejected inventory operation.
pub fn describe(err: &DomainError) -> String {
    match err {
        DomainError::NotFound(_) => "This item is not in your Inventory".to_string(),
        DomainError::InsufficientQuantity { .. } => {
            "Cannot sell more items than you have.".to_string()
        }
        DomainError::Validation(msg) => format!("Item not added: {msg}"),
        DomainError::InvalidPosition { .. } => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_domain_errors_in_console_wording() {
        assert_eq!(
            describe(&DomainError::not_found("Bat")),
            "This item is not in your Inventory"
        );
        assert_eq!(
            describe(&DomainError::insufficient(5, 2)),
            "Cannot sell more items than you have."
        );
        assert_eq!(
            describe(&DomainError::validation("quantity must be positive")),
            "Item not added: quantity must be positive"
        );
    }

    #[test]
    fn invalid_number_names_field_and_input() {
        let err = ConsoleError::InvalidNumber {
            field: "price",
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid price: 'abc'");
    }
}
