//! Shallow equality between state snapshots
//!
//! The comparator decides whether a component needs to re-render. Member
//! sequence hashes are the fast path: different hashes always mean different
//! states. Equal hashes are accepted as equality, unless strict mode is on,
//! in which case the members are compared one by one and a mismatch is
//! logged as a hash collision.

use ownstate_core::{same_instance, sequence_hash, OwnState};
use tracing::{error, trace};

use crate::config::ComparatorConfig;

/// `tracing` target for comparator events
pub const LOG_TARGET: &str = "ownstate::comparator";

/// How a comparison was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Neither state present
    BothAbsent,
    /// Exactly one state present
    OneAbsent,
    /// Both arguments are the same instance
    Identical,
    /// Member sequence hashes differ
    HashMismatch,
    /// Hashes match (and, in strict mode, so do the members)
    HashMatch,
    /// Strict mode only: hashes match but the members differ
    Collision,
}

impl Comparison {
    /// Whether this verdict means the states are equal
    pub fn is_equal(self) -> bool {
        matches!(
            self,
            Comparison::BothAbsent | Comparison::Identical | Comparison::HashMatch
        )
    }
}

/// Decides own-state/props equality for re-render decisions
///
/// Holds only its immutable configuration, so one comparator can be shared
/// freely across threads.
///
/// # Examples
///
/// ```
/// use ownstate_core::{MemberValue, OwnState};
/// use ownstate_engine::StateComparator;
///
/// #[derive(Debug)]
/// struct Point { x: i32, y: i32 }
///
/// impl OwnState for Point {
///     fn members(&self) -> Vec<MemberValue> {
///         vec![self.x.into(), self.y.into()]
///     }
/// }
///
/// let comparator = StateComparator::strict();
/// let a = Point { x: 1, y: 2 };
/// let b = Point { x: 1, y: 2 };
/// let c = Point { x: 1, y: 3 };
///
/// assert!(comparator.shallow_equality(Some(&a), Some(&b)));
/// assert!(!comparator.shallow_equality(Some(&a), Some(&c)));
/// assert!(comparator.shallow_equality(None, None));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateComparator {
    config: ComparatorConfig,
}

impl StateComparator {
    /// Create a comparator from configuration
    pub fn new(config: ComparatorConfig) -> Self {
        Self { config }
    }

    /// Comparator with strict mode on
    pub fn strict() -> Self {
        Self::new(ComparatorConfig::strict())
    }

    /// Comparator with strict mode off
    pub fn lenient() -> Self {
        Self::new(ComparatorConfig::lenient())
    }

    /// The configuration this comparator was built with
    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    /// Whether hash matches are verified with full equality
    pub fn is_strict(&self) -> bool {
        self.config.strict_mode
    }

    /// Compare two optional states and report how the verdict was reached.
    ///
    /// Logs an error-level event on [`Comparison::Collision`].
    pub fn compare(
        &self,
        first: Option<&dyn OwnState>,
        second: Option<&dyn OwnState>,
    ) -> Comparison {
        let (first, second) = match (first, second) {
            (None, None) => return Comparison::BothAbsent,
            (Some(a), Some(b)) => (a, b),
            _ => return Comparison::OneAbsent,
        };

        if same_instance(first, second) && first.state_type_id() == second.state_type_id() {
            trace!(target: LOG_TARGET, "Same state instance, skipping member inspection");
            return Comparison::Identical;
        }

        let first_members = first.members();
        let second_members = second.members();

        let first_hash = sequence_hash(&first_members);
        let second_hash = sequence_hash(&second_members);
        if first_hash != second_hash {
            trace!(target: LOG_TARGET, first_hash, second_hash, "Member hashes differ");
            return Comparison::HashMismatch;
        }

        if self.config.strict_mode && first_members != second_members {
            error!(
                target: LOG_TARGET,
                hash = first_hash,
                "ownState/props have same hashcode but are not equal:\n{:?}\n\n{:?}",
                first,
                second
            );
            return Comparison::Collision;
        }

        Comparison::HashMatch
    }

    /// Whether two optional states are equal for re-render purposes.
    ///
    /// - both absent: `true`
    /// - exactly one absent: `false`
    /// - the same instance: `true`
    /// - member hashes differ: `false`
    /// - member hashes match: `true`, except in strict mode when the members
    ///   differ, which is logged and yields `false`
    pub fn shallow_equality(
        &self,
        first: Option<&dyn OwnState>,
        second: Option<&dyn OwnState>,
    ) -> bool {
        self.compare(first, second).is_equal()
    }

    /// Whether moving from `current` to `next` requires a re-render
    pub fn should_update(
        &self,
        current: Option<&dyn OwnState>,
        next: Option<&dyn OwnState>,
    ) -> bool {
        !self.shallow_equality(current, next)
    }
}
