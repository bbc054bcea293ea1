//! Core traits for comparable state
//!
//! This module defines the OwnState capability that every state or props
//! object exposes to the comparator, and the OwnProps marker for props.

use std::any::{Any, TypeId};
use std::fmt::Debug;

use crate::class::same_instance;
use crate::hash::hash_with_type_name;
use crate::value::{MemberValue, StateSnapshot};

/// A component-owned state snapshot that can be compared for re-rendering
///
/// Implementors list every member whose change should cause a re-render,
/// always in the same order for the same logical state. Implementors must
/// be immutable snapshots: once handed to the framework a state's members
/// never change, so identity implies content equality.
///
/// # Examples
///
/// ```
/// use ownstate_core::{MemberValue, OwnState};
///
/// #[derive(Debug)]
/// struct Point {
///     x: i32,
///     y: Option<i32>,
/// }
///
/// impl OwnState for Point {
///     fn members(&self) -> Vec<MemberValue> {
///         vec![self.x.into(), self.y.into()]
///     }
/// }
///
/// let a = Point { x: 1, y: Some(2) };
/// let b = Point { x: 1, y: Some(2) };
/// assert!(a.state_eq(&b));
/// assert_eq!(a.state_hash(), b.state_hash());
/// ```
pub trait OwnState: Any + Debug {
    /// All state-relevant members, in a fixed order
    fn members(&self) -> Vec<MemberValue>;

    /// Fully qualified name of the concrete state type
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// `TypeId` of the concrete state type, also through `dyn OwnState`
    fn state_type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Hash of this state: the type name combined with the member list
    ///
    /// The whole member list is folded as a single member, so absent
    /// members keep their positions here.
    fn state_hash(&self) -> i32 {
        hash_with_type_name(self.type_name(), &[MemberValue::List(self.members())])
    }

    /// Equality by identity, or by exact type and member sequence
    fn state_eq(&self, other: &dyn OwnState) -> bool {
        if same_instance(self, other) && self.state_type_id() == other.state_type_id() {
            return true;
        }
        self.state_type_id() == other.state_type_id() && self.members() == other.members()
    }

    /// Capture this state as a nested member of another state
    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(self.type_name(), self.members())
    }
}

/// Marker for states used as component props
pub trait OwnProps: OwnState {}

impl<T: OwnState> OwnState for Box<T> {
    fn members(&self) -> Vec<MemberValue> {
        (**self).members()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn state_type_id(&self) -> TypeId {
        (**self).state_type_id()
    }
}

impl<T: OwnState> OwnState for std::sync::Arc<T> {
    fn members(&self) -> Vec<MemberValue> {
        (**self).members()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn state_type_id(&self) -> TypeId {
        (**self).state_type_id()
    }
}
