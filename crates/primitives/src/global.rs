//! Keyed store snapshot
//!
//! A `GlobalState` maps store keys to member values. Updates never mutate a
//! snapshot: `clone_and_set_value` returns a new one, so a snapshot handed to
//! observers stays valid for comparison.
//!
//! ## Equality
//!
//! The whole map is the single member, so two snapshots are equal iff they
//! hold the same keys with equal values. Map hashing is order independent.

use std::collections::BTreeMap;
use std::fmt;

use ownstate_core::{Error, MemberValue, OwnState, Result};
use serde::{Deserialize, Serialize};

/// Immutable keyed store snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlobalState {
    values: BTreeMap<String, MemberValue>,
}

impl GlobalState {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a snapshot from initial key/value pairs
    pub fn with_values<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<MemberValue>,
    {
        Self::new().clone_and_set_values(pairs)
    }

    /// Value stored under `key`
    pub fn get(&self, key: &str) -> Option<&MemberValue> {
        self.values.get(key)
    }

    /// Value stored under `key`, converted to `T`
    ///
    /// Returns `Ok(None)` when the key is missing or holds `Null`.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` when the stored value has another type.
    pub fn get_as<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: for<'a> TryFrom<&'a MemberValue, Error = Error>,
    {
        match self.values.get(key) {
            None | Some(MemberValue::Null) => Ok(None),
            Some(value) => T::try_from(value).map(Some),
        }
    }

    /// Nested snapshot stored under `key` as a map
    pub fn get_nested(&self, key: &str) -> Option<GlobalState> {
        self.values.get(key)?.as_map().map(|values| GlobalState {
            values: values.clone(),
        })
    }

    /// New snapshot with one value set
    pub fn clone_and_set_value(
        &self,
        key: impl Into<String>,
        value: impl Into<MemberValue>,
    ) -> Self {
        self.clone_and_set_values([(key, value)])
    }

    /// New snapshot with several values set, later pairs winning. Any key,
    /// including the empty string, is accepted.
    pub fn clone_and_set_values<I, K, V>(&self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<MemberValue>,
    {
        let mut next = self.clone();
        for (key, value) in pairs {
            next.values.insert(key.into(), value.into());
        }
        next
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no key is set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl OwnState for GlobalState {
    fn members(&self) -> Vec<MemberValue> {
        vec![MemberValue::Map(self.values.clone())]
    }
}

impl From<GlobalState> for MemberValue {
    fn from(state: GlobalState) -> Self {
        MemberValue::Map(state.values)
    }
}

impl fmt::Display for GlobalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={:?}", key, value)?;
        }
        f.write_str("}")
    }
}
