//! Type equality under nullability
//!
//! Rust has no runtime classes; the exact runtime type of a value is its
//! `TypeId`. Subtyping does not exist for concrete types, so "same class"
//! always means "same `TypeId`".

use std::any::Any;

/// Whether two references point at the same instance
///
/// Compares addresses only, ignoring pointer metadata, so a value and a
/// trait object built from it are the same instance.
pub fn same_instance<A: ?Sized, B: ?Sized>(a: &A, b: &B) -> bool {
    std::ptr::eq(
        (a as *const A).cast::<()>(),
        (b as *const B).cast::<()>(),
    )
}

/// Whether two optional values have exactly the same runtime type
///
/// - both absent: `true`
/// - exactly one absent: `false`
/// - the same instance: `true`
/// - otherwise `true` iff both `TypeId`s are identical
///
/// Pass the values themselves, not their smart pointers: a `&Box<T>`
/// coerced to `&dyn Any` reports the type `Box<T>`.
///
/// # Examples
///
/// ```
/// use ownstate_core::equal_classes;
///
/// assert!(equal_classes(None, None));
/// assert!(equal_classes(Some(&1i32), Some(&2i32)));
/// assert!(!equal_classes(Some(&1i32), Some(&1i64)));
/// assert!(!equal_classes(Some(&1i32), None));
/// ```
pub fn equal_classes(first: Option<&dyn Any>, second: Option<&dyn Any>) -> bool {
    match (first, second) {
        (None, None) => true,
        // The identical-instance case is covered: an instance has one type.
        // Checking addresses alone would be wrong for zero-sized values of
        // different types, which may share an address.
        (Some(a), Some(b)) => a.type_id() == b.type_id(),
        _ => false,
    }
}
