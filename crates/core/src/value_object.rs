//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values.
/// A warehouse location code is one: `"WH-1-A1"` equals any other
/// `"WH-1-A1"`, while a stock record is an entity keyed by its product.
///
/// Value objects are immutable. To "change" one, build a new one (for example
/// by parsing a new location code) and replace it on the owning entity.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct BinCode(String);
///
/// impl ValueObject for BinCode {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
