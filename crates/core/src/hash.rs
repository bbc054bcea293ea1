//! Hash aggregation for composite objects
//!
//! All arithmetic is wrapping `i32`, so a given owner type and member
//! sequence always produce the same hash on every platform.

use crate::value::MemberValue;

/// Hash returned for an absent owner
pub const ABSENT_OWNER_HASH: i32 = -1;

/// Non-zero starting value for [`compute_hash_code`]
pub const HASH_SEED: i32 = 17;

/// Starting value for member sequence hashes
pub const SEQUENCE_SEED: i32 = 1;

/// Multiplier applied before folding in each hash
pub const HASH_PRIME: i32 = 31;

#[inline]
fn fold(acc: i32, h: i32) -> i32 {
    acc.wrapping_mul(HASH_PRIME).wrapping_add(h)
}

/// Hash a string over its UTF-16 code units
pub fn string_hash(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |h, unit| fold(h, unit as i32))
}

/// Aggregate hash of an ordered member sequence
///
/// Absent members contribute 0, so they still shift the positions of the
/// members after them. This is the hash the state comparator checks on its
/// fast path.
pub fn sequence_hash(members: &[MemberValue]) -> i32 {
    members
        .iter()
        .fold(SEQUENCE_SEED, |h, m| fold(h, m.member_hash()))
}

/// Combined hash of an owner's type and its members
///
/// Returns [`ABSENT_OWNER_HASH`] if `owner` is `None`. Otherwise starts
/// from [`HASH_SEED`], folds in the hash of the owner's type name and then
/// every present member in order. Absent members are skipped outright
/// rather than folded as a sentinel, so `[a, Null]` and `[Null, a]` collide.
///
/// The type identity comes from `T`, which must be a concrete type. Trait
/// object owners do not compile; hash those with
/// [`OwnState::state_hash`](crate::traits::OwnState::state_hash) or pass the
/// concrete name to [`hash_with_type_name`].
///
/// # Examples
///
/// ```
/// use ownstate_core::{compute_hash_code, MemberValue};
///
/// struct Point;
/// let members = [MemberValue::Int(1), MemberValue::Int(2)];
///
/// assert_eq!(compute_hash_code(None::<&Point>, &members), -1);
/// assert_eq!(
///     compute_hash_code(Some(&Point), &members),
///     compute_hash_code(Some(&Point), &members),
/// );
/// ```
///
/// ```compile_fail
/// use ownstate_core::{compute_hash_code, MemberValue};
/// use std::any::Any;
///
/// struct Point;
/// let owner: &dyn Any = &Point;
/// compute_hash_code(Some(owner), &[MemberValue::Int(1)]);
/// ```
pub fn compute_hash_code<T>(owner: Option<&T>, members: &[MemberValue]) -> i32 {
    match owner {
        None => ABSENT_OWNER_HASH,
        Some(_) => hash_with_type_name(std::any::type_name::<T>(), members),
    }
}

/// [`compute_hash_code`] for an owner identified by type name
pub fn hash_with_type_name(type_name: &str, members: &[MemberValue]) -> i32 {
    let result = fold(HASH_SEED, string_hash(type_name));
    members
        .iter()
        .filter(|m| !m.is_null())
        .fold(result, |h, m| fold(h, m.member_hash()))
}
