use auricle::allocator::{WeightAllocator, WEIGHT_BUDGET};
use auricle::usecase::UseCase;
use proptest::prelude::*;
use strum::IntoEnumIterator;

// --- STRATEGIES ---

#[derive(Debug, Clone)]
enum Edit {
    Toggle(usize),
    SetWeight(usize, i64),
}

fn arb_edit() -> impl Strategy<Value = Edit> {
    let cases = UseCase::iter().count();
    prop_oneof![
        (0..cases).prop_map(Edit::Toggle),
        ((0..cases), -500i64..500).prop_map(|(i, v)| Edit::SetWeight(i, v)),
    ]
}

fn case_at(index: usize) -> UseCase {
    UseCase::iter().nth(index).unwrap()
}

fn apply(edits: &[Edit]) -> WeightAllocator {
    let mut allocator = WeightAllocator::new();
    for edit in edits {
        match edit {
            Edit::Toggle(i) => allocator.toggle(case_at(*i)),
            Edit::SetWeight(i, v) => {
                allocator.set_weight(case_at(*i), *v);
            }
        }
    }
    allocator
}

proptest! {
    #[test]
    fn explicit_total_never_exceeds_budget(edits in proptest::collection::vec(arb_edit(), 0..60)) {
        let mut allocator = WeightAllocator::new();
        for edit in &edits {
            match edit {
                Edit::Toggle(i) => allocator.toggle(case_at(*i)),
                Edit::SetWeight(i, v) => {
                    allocator.set_weight(case_at(*i), *v);
                }
            }
            // The invariant holds after every single edit, not just at the end.
            prop_assert!(allocator.explicit_total() <= WEIGHT_BUDGET);
        }
    }

    #[test]
    fn finalize_covers_exactly_the_selection(edits in proptest::collection::vec(arb_edit(), 0..60)) {
        let allocator = apply(&edits);
        let vector = allocator.finalize();

        let selected: Vec<UseCase> = allocator.selected().collect();
        prop_assert_eq!(vector.len(), selected.len());
        for entry in &vector {
            prop_assert!(selected.contains(&entry.name));
        }
    }

    #[test]
    fn finalize_total_matches_budget_policy(
        edits in proptest::collection::vec(arb_edit(), 0..60)
    ) {
        let allocator = apply(&edits);
        if allocator.selected().next().is_none() {
            return Ok(());
        }
        let vector = allocator.finalize();
        let total: f64 = vector.iter().map(|e| e.percentage).sum();

        if allocator.unspecified().is_empty() {
            // Fully pinned: total is whatever the user allocated.
            prop_assert!(total <= f64::from(WEIGHT_BUDGET) + 1e-9);
        } else {
            prop_assert!((total - f64::from(WEIGHT_BUDGET)).abs() < 1e-9);
        }
    }

    #[test]
    fn finalized_percentages_are_never_negative(
        edits in proptest::collection::vec(arb_edit(), 0..60)
    ) {
        let vector = apply(&edits).finalize();
        for entry in &vector {
            prop_assert!(entry.percentage >= 0.0);
        }
    }
}
