//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two ticket requests for two adults are the same request.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one; constructors are the single place invariants are checked,
/// so a value object that exists is a valid one.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Seats(u32);
///
/// impl ValueObject for Seats {}
///
/// assert_eq!(Seats(2), Seats(2));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
