//! Value object trait: equality by value, not identity.

/// Marker trait for domain objects that are **compared by value**.
///
/// Two value objects with the same attribute values are considered equal;
/// there is no separate notion of identity. Implementors opt in explicitly so
/// that value equality is a documented design decision rather than an
/// incidental derive.
///
/// Example: an `Account` that is equal to another account whenever `owner`
/// and `balance` match is a value object — two logically distinct accounts
/// sharing both fields are indistinguishable in sets and maps, and that must
/// be intentional.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
