use crate::error::{AuResult, AuricleError};
use crate::protocol::UseCaseWeight;
use crate::usecase::UseCase;
use indexmap::{IndexMap, IndexSet};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::debug;

/// The percentage budget shared by all explicit weights.
pub const WEIGHT_BUDGET: u32 = 100;

/// Distributes the 100% budget across the currently selected use cases.
///
/// Edits are local: `set_weight` only ever touches the edited entry, and is
/// clamped against the room left by every other pinned weight, so the sum of
/// explicit weights can never exceed the budget at any observable point.
/// Whatever budget the user leaves unassigned is split equally among the
/// selected-but-unweighted use cases at `finalize` time.
///
/// There are no failure states: out-of-range input is clamped, not rejected.
#[derive(Debug, Default, Clone)]
pub struct WeightAllocator {
    selected: IndexSet<UseCase>,
    weights: IndexMap<UseCase, u32>,
}

impl WeightAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an allocator from textual specs (`gaming=40` or bare `travel`).
    /// Specs drive the allocator exactly like UI events would: toggle, then
    /// pin the weight if one was given. Non-numeric weight text maps to 0.
    pub fn from_specs(specs: &[String]) -> AuResult<Self> {
        let mut allocator = Self::new();

        for spec in specs {
            let (name, value) = match spec.split_once('=') {
                Some((n, v)) => (n.trim(), Some(v.trim())),
                None => (spec.trim(), None),
            };

            let case = UseCase::from_str(name).map_err(|_| {
                let known: Vec<String> = UseCase::iter().map(|c| c.to_string()).collect();
                AuricleError::Input(format!(
                    "Unknown use case '{}' (expected one of: {})",
                    name,
                    known.join(", ")
                ))
            })?;

            if !allocator.is_selected(case) {
                allocator.toggle(case);
            }
            if let Some(v) = value {
                allocator.set_weight(case, v.parse::<i64>().unwrap_or(0));
            }
        }

        Ok(allocator)
    }

    /// Select or deselect a use case. Deselection drops any explicit weight,
    /// so toggling off and back on resets the entry to "unspecified".
    pub fn toggle(&mut self, case: UseCase) {
        if self.selected.shift_remove(&case) {
            self.weights.shift_remove(&case);
            debug!("deselected {}", case);
        } else {
            self.selected.insert(case);
            debug!("selected {}", case);
        }
    }

    pub fn is_selected(&self, case: UseCase) -> bool {
        self.selected.contains(&case)
    }

    pub fn selected(&self) -> impl Iterator<Item = UseCase> + '_ {
        self.selected.iter().copied()
    }

    /// The explicit weight for a use case, if the user has pinned one.
    pub fn weight_of(&self, case: UseCase) -> Option<u32> {
        self.weights.get(&case).copied()
    }

    /// Pin an explicit weight. `requested` is clamped to [0, 100] first
    /// (negative input maps to 0), then capped at the budget left over by
    /// every OTHER explicit weight. Returns the value actually stored.
    pub fn set_weight(&mut self, case: UseCase, requested: i64) -> u32 {
        let wanted = requested.clamp(0, i64::from(WEIGHT_BUDGET)) as u32;

        let others: u32 = self
            .weights
            .iter()
            .filter(|(c, _)| **c != case)
            .map(|(_, w)| *w)
            .sum();
        let cap = WEIGHT_BUDGET.saturating_sub(others);

        let stored = wanted.min(cap);
        if stored < wanted {
            debug!("weight for {} capped at {} (requested {})", case, stored, wanted);
        }
        self.weights.insert(case, stored);
        stored
    }

    /// Sum of all explicit weights. Never exceeds [`WEIGHT_BUDGET`].
    pub fn explicit_total(&self) -> u32 {
        self.weights.values().sum()
    }

    /// Budget not yet pinned by an explicit weight.
    pub fn remaining_budget(&self) -> u32 {
        WEIGHT_BUDGET.saturating_sub(self.explicit_total())
    }

    /// Selected use cases with no explicit weight, in selection order.
    pub fn unspecified(&self) -> Vec<UseCase> {
        self.selected
            .iter()
            .filter(|c| !self.weights.contains_key(*c))
            .copied()
            .collect()
    }

    /// Produce the finalized use-case vector.
    ///
    /// Each selected use case gets its explicit weight if one was pinned;
    /// otherwise an equal share of the leftover budget. Stray weight entries
    /// for deselected use cases are ignored. When every selected use case
    /// was pinned explicitly the leftover is NOT redistributed, so an
    /// under-allocated vector totals less than 100.
    pub fn finalize(&self) -> Vec<UseCaseWeight> {
        if self.selected.is_empty() {
            return Vec::new();
        }

        let specified_total: u32 = self
            .selected
            .iter()
            .filter_map(|c| self.weights.get(c))
            .sum();
        let unspecified = self.unspecified();
        let remaining = WEIGHT_BUDGET.saturating_sub(specified_total);

        let share = if unspecified.is_empty() {
            0.0
        } else {
            f64::from(remaining) / unspecified.len() as f64
        };

        self.selected
            .iter()
            .map(|c| UseCaseWeight {
                name: *c,
                percentage: self
                    .weights
                    .get(c)
                    .map(|w| f64::from(*w))
                    .unwrap_or(share),
            })
            .collect()
    }
}
