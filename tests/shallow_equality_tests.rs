//! End-to-end equality scenarios through the `ownstate` facade
//!
//! Covers the observable contract in one place:
//!
//! 1. Absent and identical states
//! 2. Member-wise equality of distinct instances
//! 3. Combined hash codes of owners and members
//! 4. Exact type equality
//! 5. Comparators built from configuration text

use ownstate::{
    compute_hash_code, equal_classes, ComparatorConfig, Comparison, IntState, MemberValue,
    OwnState, StateComparator, StringState,
};

// ============================================================================
// Test Helpers
// ============================================================================

#[derive(Debug, Clone)]
struct Point {
    x: i32,
    y: i32,
}

impl OwnState for Point {
    fn members(&self) -> Vec<MemberValue> {
        vec![self.x.into(), self.y.into()]
    }
}

fn point(x: i32, y: i32) -> Point {
    Point { x, y }
}

fn both_modes() -> [StateComparator; 2] {
    [StateComparator::strict(), StateComparator::lenient()]
}

// ============================================================================
// Shallow Equality
// ============================================================================

#[test]
fn test_absent_states() {
    let a = point(1, 2);
    for c in both_modes() {
        assert!(c.shallow_equality(None, None));
        assert!(!c.shallow_equality(Some(&a), None));
        assert!(!c.shallow_equality(None, Some(&a)));
    }
}

#[test]
fn test_identity_fast_path() {
    let a = point(1, 2);
    for c in both_modes() {
        assert_eq!(c.compare(Some(&a), Some(&a)), Comparison::Identical);
    }
}

#[test]
fn test_equal_points() {
    let a = point(1, 2);
    let b = point(1, 2);
    for c in both_modes() {
        assert!(c.shallow_equality(Some(&a), Some(&b)));
    }
    assert_eq!(a.state_hash(), b.state_hash());
}

#[test]
fn test_moved_point() {
    let a = point(1, 2);
    let b = point(1, 3);
    for c in both_modes() {
        assert!(!c.shallow_equality(Some(&a), Some(&b)));
    }
}

#[test]
fn test_crafted_collision() {
    let a = StringState::from("Aa");
    let b = StringState::from("BB");
    assert!(!StateComparator::strict().shallow_equality(Some(&a), Some(&b)));
    assert!(StateComparator::lenient().shallow_equality(Some(&a), Some(&b)));
}

// ============================================================================
// Hash Codes
// ============================================================================

#[test]
fn test_compute_hash_code_absent_owner() {
    assert_eq!(compute_hash_code(None::<&Point>, &[MemberValue::Int(1)]), -1);
}

#[test]
fn test_compute_hash_code_deterministic_and_ordered() {
    let owner = point(0, 0);
    let a = MemberValue::Int(1);
    let b = MemberValue::Int(2);

    let ab = compute_hash_code(Some(&owner), &[a.clone(), b.clone()]);
    assert_eq!(ab, compute_hash_code(Some(&owner), &[a.clone(), b.clone()]));
    assert_ne!(ab, compute_hash_code(Some(&owner), &[b, a]));
}

// ============================================================================
// Type Equality
// ============================================================================

#[test]
fn test_equal_classes() {
    let a = point(1, 2);
    let b = point(3, 4);
    let other = IntState::new(1);

    assert!(equal_classes(None, None));
    assert!(!equal_classes(Some(&a), None));
    assert!(equal_classes(Some(&a), Some(&a)));
    assert!(equal_classes(Some(&a), Some(&b)));
    assert!(!equal_classes(Some(&a), Some(&other)));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_comparator_from_config_text() {
    let config = ComparatorConfig::from_toml_str("strict_mode = false").unwrap();
    let comparator = StateComparator::new(config);
    assert!(!comparator.is_strict());

    let a = StringState::from("Aa");
    let b = StringState::from("BB");
    assert_eq!(comparator.compare(Some(&a), Some(&b)), Comparison::HashMatch);
}

#[test]
fn test_comparator_shared_across_threads() {
    let comparator = StateComparator::strict();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let a = point(i, i);
                let b = point(i, i);
                comparator.shallow_equality(Some(&a), Some(&b))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
