//! Ready-made states and props for ownstate
//!
//! Provides the common OwnState implementations components share:
//! - **Single-value states/props**: `IntState`, `StringProps`, ...
//! - **DataProps / SingleTypeProps**: props around one data model
//! - **EmptyOwnState / EmptyOwnProps**: no members at all
//! - **GlobalState**: immutable keyed store snapshot
//!
//! All of them are immutable snapshots, which the comparator's identity fast
//! path relies on.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod data;
pub mod empty;
pub mod global;
pub mod single;

pub use data::{DataProps, SingleTypeProps};
pub use empty::{EmptyOwnProps, EmptyOwnState};
pub use global::GlobalState;
pub use single::{
    BooleanProps, BooleanState, CharSequenceProps, CharSequenceState, DoubleProps, DoubleState,
    IntProps, IntState, LongProps, LongState, StringProps, StringState,
};
