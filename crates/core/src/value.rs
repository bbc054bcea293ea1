//! Member value types for ownstate
//!
//! This module defines:
//! - MemberValue: variant-typed value for one significant member of a state
//! - StateSnapshot: a nested state captured as a member
//!
//! ## Equality and Hash Contract
//!
//! Every variant hashes to a deterministic 32-bit value, and equal values
//! always hash equal. The hash functions follow the JVM `hashCode`
//! conventions:
//!
//! - `Null` hashes to 0
//! - `Bool(true)` is 1231, `Bool(false)` is 1237
//! - `Long` folds its high and low words
//! - `String` folds its UTF-16 code units
//! - `List` folds positionally from a seed of 1
//! - `Map` sums `key_hash ^ value_hash` (order independent)
//!
//! Different variants are NEVER equal: `Int(1) != Long(1)`.
//!
//! Floating point members compare by canonical bit pattern, not IEEE-754
//! `==`: `NaN == NaN` and `0.0 != -0.0`. IEEE equality would break the
//! hash contract for NaN.

use crate::error::Error;
use crate::hash::{hash_with_type_name, sequence_hash, string_hash};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// A nested state captured by type name and member sequence.
///
/// Produced by [`OwnState::snapshot`](crate::traits::OwnState::snapshot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Fully qualified type name of the captured state
    pub type_name: String,
    /// The captured member sequence
    pub members: Vec<MemberValue>,
}

impl StateSnapshot {
    /// Create a snapshot from a type name and members
    pub fn new(type_name: impl Into<String>, members: Vec<MemberValue>) -> Self {
        Self {
            type_name: type_name.into(),
            members,
        }
    }

    /// Hash of the snapshot, identical to the hash of the live state
    pub fn snapshot_hash(&self) -> i32 {
        hash_with_type_name(&self.type_name, &[MemberValue::List(self.members.clone())])
    }
}

/// One significant member of a state
///
/// `Null` stands for an absent member. Absent members still occupy their
/// position in a member sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MemberValue {
    /// Absent value
    Null,
    /// Boolean value
    Bool(bool),
    /// 32-bit signed integer
    Int(i32),
    /// 64-bit signed integer
    Long(i64),
    /// 32-bit floating point
    Float(f32),
    /// 64-bit floating point
    Double(f64),
    /// Single character
    Char(char),
    /// UTF-8 string
    String(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Ordered list of values
    List(Vec<MemberValue>),
    /// Map with string keys
    Map(BTreeMap<String, MemberValue>),
    /// Nested state
    State(StateSnapshot),
}

const CANONICAL_NAN_F32: u32 = 0x7fc0_0000;
const CANONICAL_NAN_F64: u64 = 0x7ff8_0000_0000_0000;

fn float_bits(f: f32) -> u32 {
    if f.is_nan() {
        CANONICAL_NAN_F32
    } else {
        f.to_bits()
    }
}

fn double_bits(d: f64) -> u64 {
    if d.is_nan() {
        CANONICAL_NAN_F64
    } else {
        d.to_bits()
    }
}

fn long_hash(v: i64) -> i32 {
    let bits = v as u64;
    (bits ^ (bits >> 32)) as i32
}

impl PartialEq for MemberValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (MemberValue::Null, MemberValue::Null) => true,
            (MemberValue::Bool(a), MemberValue::Bool(b)) => a == b,
            (MemberValue::Int(a), MemberValue::Int(b)) => a == b,
            (MemberValue::Long(a), MemberValue::Long(b)) => a == b,
            (MemberValue::Float(a), MemberValue::Float(b)) => float_bits(*a) == float_bits(*b),
            (MemberValue::Double(a), MemberValue::Double(b)) => {
                double_bits(*a) == double_bits(*b)
            }
            (MemberValue::Char(a), MemberValue::Char(b)) => a == b,
            (MemberValue::String(a), MemberValue::String(b)) => a == b,
            (MemberValue::Bytes(a), MemberValue::Bytes(b)) => a == b,
            (MemberValue::List(a), MemberValue::List(b)) => a == b,
            (MemberValue::Map(a), MemberValue::Map(b)) => a == b,
            (MemberValue::State(a), MemberValue::State(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for MemberValue {}

impl MemberValue {
    /// Deterministic 32-bit hash of this member
    pub fn member_hash(&self) -> i32 {
        match self {
            MemberValue::Null => 0,
            MemberValue::Bool(true) => 1231,
            MemberValue::Bool(false) => 1237,
            MemberValue::Int(i) => *i,
            MemberValue::Long(l) => long_hash(*l),
            MemberValue::Float(f) => float_bits(*f) as i32,
            MemberValue::Double(d) => long_hash(double_bits(*d) as i64),
            MemberValue::Char(c) => *c as i32,
            MemberValue::String(s) => string_hash(s),
            MemberValue::Bytes(b) => b
                .iter()
                .fold(1i32, |h, byte| h.wrapping_mul(31).wrapping_add(*byte as i8 as i32)),
            MemberValue::List(items) => sequence_hash(items),
            MemberValue::Map(entries) => entries.iter().fold(0i32, |h, (k, v)| {
                h.wrapping_add(string_hash(k) ^ v.member_hash())
            }),
            MemberValue::State(snapshot) => snapshot.snapshot_hash(),
        }
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            MemberValue::Null => "Null",
            MemberValue::Bool(_) => "Bool",
            MemberValue::Int(_) => "Int",
            MemberValue::Long(_) => "Long",
            MemberValue::Float(_) => "Float",
            MemberValue::Double(_) => "Double",
            MemberValue::Char(_) => "Char",
            MemberValue::String(_) => "String",
            MemberValue::Bytes(_) => "Bytes",
            MemberValue::List(_) => "List",
            MemberValue::Map(_) => "Map",
            MemberValue::State(_) => "State",
        }
    }

    /// Check if this member is absent
    pub fn is_null(&self) -> bool {
        matches!(self, MemberValue::Null)
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MemberValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i32 if this is an Int value
    pub fn as_int(&self) -> Option<i32> {
        match self {
            MemberValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int or Long value
    pub fn as_long(&self) -> Option<i64> {
        match self {
            MemberValue::Int(i) => Some(*i as i64),
            MemberValue::Long(l) => Some(*l),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float or Double value
    pub fn as_double(&self) -> Option<f64> {
        match self {
            MemberValue::Float(f) => Some(*f as f64),
            MemberValue::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MemberValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as &[MemberValue] if this is a List value
    pub fn as_list(&self) -> Option<&[MemberValue]> {
        match self {
            MemberValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get as &BTreeMap if this is a Map value
    pub fn as_map(&self) -> Option<&BTreeMap<String, MemberValue>> {
        match self {
            MemberValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for ergonomic member lists
// ============================================================================

impl From<bool> for MemberValue {
    fn from(b: bool) -> Self {
        MemberValue::Bool(b)
    }
}

impl From<i32> for MemberValue {
    fn from(i: i32) -> Self {
        MemberValue::Int(i)
    }
}

impl From<i64> for MemberValue {
    fn from(l: i64) -> Self {
        MemberValue::Long(l)
    }
}

impl From<f32> for MemberValue {
    fn from(f: f32) -> Self {
        MemberValue::Float(f)
    }
}

impl From<f64> for MemberValue {
    fn from(d: f64) -> Self {
        MemberValue::Double(d)
    }
}

impl From<char> for MemberValue {
    fn from(c: char) -> Self {
        MemberValue::Char(c)
    }
}

impl From<&str> for MemberValue {
    fn from(s: &str) -> Self {
        MemberValue::String(s.to_string())
    }
}

impl From<String> for MemberValue {
    fn from(s: String) -> Self {
        MemberValue::String(s)
    }
}

impl From<&String> for MemberValue {
    fn from(s: &String) -> Self {
        MemberValue::String(s.clone())
    }
}

impl From<Cow<'_, str>> for MemberValue {
    fn from(s: Cow<'_, str>) -> Self {
        MemberValue::String(s.into_owned())
    }
}

impl From<Vec<u8>> for MemberValue {
    fn from(b: Vec<u8>) -> Self {
        MemberValue::Bytes(b)
    }
}

impl From<Vec<MemberValue>> for MemberValue {
    fn from(items: Vec<MemberValue>) -> Self {
        MemberValue::List(items)
    }
}

impl From<BTreeMap<String, MemberValue>> for MemberValue {
    fn from(m: BTreeMap<String, MemberValue>) -> Self {
        MemberValue::Map(m)
    }
}

impl From<StateSnapshot> for MemberValue {
    fn from(s: StateSnapshot) -> Self {
        MemberValue::State(s)
    }
}

impl From<()> for MemberValue {
    fn from(_: ()) -> Self {
        MemberValue::Null
    }
}

impl<T: Into<MemberValue>> From<Option<T>> for MemberValue {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(MemberValue::Null, Into::into)
    }
}

// ============================================================================
// Typed extraction
// ============================================================================

fn mismatch(expected: &'static str, actual: &MemberValue) -> Error {
    Error::TypeMismatch {
        expected,
        actual: actual.type_name(),
    }
}

impl TryFrom<&MemberValue> for bool {
    type Error = Error;

    fn try_from(v: &MemberValue) -> Result<Self, Self::Error> {
        v.as_bool().ok_or_else(|| mismatch("Bool", v))
    }
}

impl TryFrom<&MemberValue> for i32 {
    type Error = Error;

    fn try_from(v: &MemberValue) -> Result<Self, Self::Error> {
        v.as_int().ok_or_else(|| mismatch("Int", v))
    }
}

impl TryFrom<&MemberValue> for i64 {
    type Error = Error;

    fn try_from(v: &MemberValue) -> Result<Self, Self::Error> {
        v.as_long().ok_or_else(|| mismatch("Long", v))
    }
}

impl TryFrom<&MemberValue> for f64 {
    type Error = Error;

    fn try_from(v: &MemberValue) -> Result<Self, Self::Error> {
        v.as_double().ok_or_else(|| mismatch("Double", v))
    }
}

impl TryFrom<&MemberValue> for String {
    type Error = Error;

    fn try_from(v: &MemberValue) -> Result<Self, Self::Error> {
        v.as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch("String", v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_hash_is_zero() {
        assert_eq!(MemberValue::Null.member_hash(), 0);
        assert!(MemberValue::Null.is_null());
    }

    #[test]
    fn test_bool_hash() {
        assert_eq!(MemberValue::Bool(true).member_hash(), 1231);
        assert_eq!(MemberValue::Bool(false).member_hash(), 1237);
    }

    #[test]
    fn test_int_hash_is_identity() {
        assert_eq!(MemberValue::Int(42).member_hash(), 42);
        assert_eq!(MemberValue::Int(-7).member_hash(), -7);
    }

    #[test]
    fn test_long_hash_folds_words() {
        assert_eq!(MemberValue::Long(5).member_hash(), 5);
        assert_eq!(MemberValue::Long(-1).member_hash(), 0);
        assert_eq!(MemberValue::Long(1 << 32).member_hash(), 1);
    }

    #[test]
    fn test_double_hash_matches_jvm() {
        // Double.valueOf(1.0).hashCode() == 1072693248
        assert_eq!(MemberValue::Double(1.0).member_hash(), 1072693248);
        assert_eq!(MemberValue::Double(0.0).member_hash(), 0);
    }

    #[test]
    fn test_string_hash_matches_jvm() {
        // "hello".hashCode() == 99162322
        assert_eq!(MemberValue::from("hello").member_hash(), 99162322);
        assert_eq!(MemberValue::from("").member_hash(), 0);
    }

    #[test]
    fn test_known_string_collision() {
        let a = MemberValue::from("Aa");
        let b = MemberValue::from("BB");
        assert_eq!(a.member_hash(), b.member_hash());
        assert_ne!(a, b);
    }

    #[test]
    fn test_list_hash_counts_nulls_as_zero() {
        let list = MemberValue::List(vec![MemberValue::Null, MemberValue::Int(1)]);
        // 31 * (31 * 1 + 0) + 1
        assert_eq!(list.member_hash(), 962);
    }

    #[test]
    fn test_map_hash_is_order_independent() {
        let mut a = BTreeMap::new();
        a.insert("x".to_string(), MemberValue::Int(1));
        a.insert("y".to_string(), MemberValue::Int(2));
        let map = MemberValue::Map(a);
        let expected = (string_hash("x") ^ 1).wrapping_add(string_hash("y") ^ 2);
        assert_eq!(map.member_hash(), expected);
    }

    #[test]
    fn test_bytes_hash_uses_signed_bytes() {
        // Arrays.hashCode(new byte[]{-1}) == 31 - 1
        assert_eq!(MemberValue::Bytes(vec![0xFF]).member_hash(), 30);
    }

    #[test]
    fn test_int_not_equal_long() {
        assert_ne!(MemberValue::Int(1), MemberValue::Long(1));
    }

    #[test]
    fn test_nan_equals_nan() {
        let a = MemberValue::Double(f64::NAN);
        let b = MemberValue::Double(-f64::NAN);
        assert_eq!(a, b);
        assert_eq!(a.member_hash(), b.member_hash());
    }

    #[test]
    fn test_negative_zero_not_equal_zero() {
        assert_ne!(MemberValue::Double(-0.0), MemberValue::Double(0.0));
        assert_ne!(MemberValue::Float(-0.0), MemberValue::Float(0.0));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(MemberValue::from(None::<i32>), MemberValue::Null);
        assert_eq!(MemberValue::from(Some(3)), MemberValue::Int(3));
        assert_eq!(MemberValue::from(Some("a")), MemberValue::String("a".into()));
    }

    #[test]
    fn test_borrowed_and_owned_text_are_equal_members() {
        let borrowed = MemberValue::from(Cow::Borrowed("text"));
        let owned = MemberValue::from(Cow::<str>::Owned("text".to_string()));
        assert_eq!(borrowed, owned);
        assert_eq!(borrowed, MemberValue::from("text"));
    }

    #[test]
    fn test_typed_extraction() {
        let v = MemberValue::Int(9);
        assert_eq!(i32::try_from(&v).unwrap(), 9);
        assert_eq!(i64::try_from(&v).unwrap(), 9);

        let err = bool::try_from(&v).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch {
                expected: "Bool",
                actual: "Int"
            }
        ));
    }

    #[test]
    fn test_snapshot_equality() {
        let a = StateSnapshot::new("Point", vec![1.into(), 2.into()]);
        let b = StateSnapshot::new("Point", vec![1.into(), 2.into()]);
        let c = StateSnapshot::new("Vector", vec![1.into(), 2.into()]);
        assert_eq!(MemberValue::from(a.clone()), MemberValue::from(b));
        assert_ne!(MemberValue::from(a.clone()), MemberValue::from(c.clone()));
        assert_ne!(a.snapshot_hash(), c.snapshot_hash());
    }

    #[test]
    fn test_serialization_round_trip() {
        let value = MemberValue::List(vec![
            MemberValue::Null,
            MemberValue::Int(1),
            MemberValue::String("two".to_string()),
        ]);
        let json = serde_json::to_string(&value).unwrap();
        let back: MemberValue = serde_json::from_str(&json).unwrap();
        assert_eq!(value, back);
    }
}
