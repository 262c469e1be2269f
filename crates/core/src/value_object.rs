//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined
//! entirely by their attribute values. Two value objects with the same values are
//! considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// create a new instance with the new values.
///
/// - `Isbn("978-0134685991")` is a value object
/// - `User { id: UserId(...), .. }` is an entity
///
/// The trait requires `Clone` (values are cheap to copy), `PartialEq`
/// (comparison by attribute values) and `Debug` (logging, testing).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
