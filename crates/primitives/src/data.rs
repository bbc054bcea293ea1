//! Props wrapping a single data model
//!
//! `DataProps` always carries its model; `SingleTypeProps` may be empty.
//! The model should be an immutable value: its member conversion is taken
//! fresh on every comparison. Models that implement `OwnState` themselves
//! are wrapped through their snapshot with [`DataProps::from_state`].

use ownstate_core::{MemberValue, OwnProps, OwnState, StateSnapshot};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Props for components that render one data model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataProps<T> {
    /// The rendered model
    pub data: T,
}

impl<T> DataProps<T> {
    /// Wrap a model
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl DataProps<StateSnapshot> {
    /// Wrap a model that is itself a state
    ///
    /// The model's type name and members are captured, so models of
    /// different types never compare equal.
    pub fn from_state<S: OwnState + ?Sized>(model: &S) -> Self {
        Self::new(model.snapshot())
    }
}

impl<T> OwnState for DataProps<T>
where
    T: Clone + Debug + Into<MemberValue> + 'static,
{
    fn members(&self) -> Vec<MemberValue> {
        vec![self.data.clone().into()]
    }
}

impl<T> OwnProps for DataProps<T> where T: Clone + Debug + Into<MemberValue> + 'static {}

/// Props holding an optional value of one type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleTypeProps<T> {
    /// The wrapped value
    pub value: Option<T>,
}

impl<T> SingleTypeProps<T> {
    /// Wrap a value (or `None`)
    pub fn new(value: Option<T>) -> Self {
        Self { value }
    }

    /// The wrapped value, if any
    pub fn get_or_none(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T> Default for SingleTypeProps<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T> OwnState for SingleTypeProps<T>
where
    T: Clone + Debug + Into<MemberValue> + 'static,
{
    fn members(&self) -> Vec<MemberValue> {
        vec![self.value.clone().into()]
    }
}

impl<T> OwnProps for SingleTypeProps<T> where T: Clone + Debug + Into<MemberValue> + 'static {}
