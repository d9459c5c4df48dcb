//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are domain objects that are **immutable** and **compared by
/// value** - two with the same attributes are interchangeable. A quality
/// score of 7 is a quality score of 7, whichever item happens to carry it;
/// "modifying" one means producing a new value.
///
/// The trait requires:
/// - **Clone**: values are cheap to copy around the rule set
/// - **PartialEq**: values are compared by their attributes
/// - **Debug**: values show up readably in assertions and logs
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Quality(i32);
///
/// impl ValueObject for Quality {}
///
/// // Equal by value, not identity
/// assert_eq!(Quality(7), Quality(7));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
