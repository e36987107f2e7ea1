//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two prices of
/// `25.0` are the same price, whereas two items named `"Bat"` are still two
/// distinct stock entries.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Money(f64);
///
/// impl ValueObject for Money {}
///
/// assert_eq!(Money(25.0), Money(25.0));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
