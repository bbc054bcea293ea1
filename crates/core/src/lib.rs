//! Core types and traits for ownstate
//!
//! This crate defines the foundational pieces of state comparison:
//! - MemberValue: variant-typed member value with a deterministic hash
//! - OwnState / OwnProps: the "ordered significant members" capability
//! - compute_hash_code: combined hash of an owner type and its members
//! - equal_classes: exact runtime type equality under nullability
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod class;
pub mod error;
pub mod hash;
pub mod traits;
pub mod value;

pub use class::{equal_classes, same_instance};
pub use error::{Error, Result};
pub use hash::{
    compute_hash_code, hash_with_type_name, sequence_hash, string_hash, ABSENT_OWNER_HASH,
};
pub use traits::{OwnProps, OwnState};
pub use value::{MemberValue, StateSnapshot};
