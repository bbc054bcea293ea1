//! States and props with no members
//!
//! Any two instances are equal, so components using them render once per
//! mount.

use ownstate_core::{MemberValue, OwnProps, OwnState};
use serde::{Deserialize, Serialize};

/// Own state for components without internal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmptyOwnState;

impl OwnState for EmptyOwnState {
    fn members(&self) -> Vec<MemberValue> {
        Vec::new()
    }
}

/// Props for components that take no input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmptyOwnProps;

impl OwnState for EmptyOwnProps {
    fn members(&self) -> Vec<MemberValue> {
        Vec::new()
    }
}

impl OwnProps for EmptyOwnProps {}
