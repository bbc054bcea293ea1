//! Comparison engine for ownstate
//!
//! Provides the StateComparator that decides whether a component's own
//! state or props changed enough to require a re-render, and the
//! configuration that selects strict or lenient mode.
//!
//! ## Strict Mode
//!
//! Lenient mode accepts equal member hashes as equality. Strict mode also
//! compares the members, logs any mismatch at error level under the
//! `ownstate::comparator` target, and reports the states as different.
//! Strict mode is fixed when the comparator is built.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod comparator;
pub mod config;

pub use comparator::{Comparison, StateComparator, LOG_TARGET};
pub use config::{ComparatorConfig, ConfigError, ConfigResult, CONFIG_FILE_NAME};
