//! ownstate - own-state equality for React-style re-render decisions
//!
//! A component re-renders when its props or own state change. ownstate
//! decides "changed" cheaply: every state lists its significant members, the
//! member sequences are hashed, and equal hashes mean equal states. In strict
//! mode (the default in debug builds) equal hashes are double-checked with
//! full equality, and any mismatch is logged as a hash collision.
//!
//! # Quick Start
//!
//! ```
//! use ownstate::{MemberValue, OwnState, StateComparator};
//!
//! #[derive(Debug)]
//! struct Counter {
//!     count: i32,
//!     label: Option<String>,
//! }
//!
//! impl OwnState for Counter {
//!     fn members(&self) -> Vec<MemberValue> {
//!         vec![self.count.into(), self.label.clone().into()]
//!     }
//! }
//!
//! let comparator = StateComparator::default();
//! let current = Counter { count: 1, label: None };
//! let next = Counter { count: 2, label: None };
//!
//! assert!(comparator.should_update(Some(&current), Some(&next)));
//! ```
//!
//! # Architecture
//!
//! - `ownstate-core`: member values, hashing, the `OwnState` trait, type equality
//! - `ownstate-engine`: the comparator and its configuration
//! - `ownstate-primitives`: ready-made states and props

pub use ownstate_core::*;
pub use ownstate_engine::*;
pub use ownstate_primitives::*;
