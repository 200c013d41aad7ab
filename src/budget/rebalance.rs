//! Proportional reallocation of projected surplus across deficits.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::budget::categories::TOTAL_BUDGET_KEY;
use crate::models::BudgetMap;

/// Proposed top-ups for categories projected to run over budget.
///
/// Invariant: the top-ups never sum to more than the total surplus;
/// they sum to exactly the surplus whenever both surplus and deficit
/// are positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebalancePlan {
    /// Deficit category → proposed top-up. Enumerates every deficit
    /// category even when the available surplus is zero.
    pub top_ups: BTreeMap<String, f32>,
    pub total_surplus: f32,
    pub total_deficit: f32,
}

impl RebalancePlan {
    /// True when no category is projected over budget.
    pub fn all_within_budget(&self) -> bool {
        self.total_deficit == 0.0
    }
}

/// Compute the rebalance plan for predicted spend against a budget.
///
/// Per category `diff = predicted - budget`: positive diffs are deficits
/// (over budget), negated negative diffs are surpluses. Each deficit
/// category receives `(deficit / total_deficit) * total_surplus`. The
/// synthetic total entry never participates.
pub fn plan_rebalance(predicted: &BTreeMap<String, f32>, budget: &BudgetMap) -> RebalancePlan {
    let categories: BTreeSet<&String> = predicted
        .keys()
        .chain(budget.keys())
        .filter(|name| name.as_str() != TOTAL_BUDGET_KEY)
        .collect();

    let mut deficits: BTreeMap<String, f32> = BTreeMap::new();
    let mut total_deficit = 0.0f32;
    let mut total_surplus = 0.0f32;

    for category in categories {
        let spend = predicted.get(category).copied().unwrap_or(0.0);
        let allowance = budget.get(category).copied().unwrap_or(0.0);
        let diff = spend - allowance;
        if diff > 0.0 {
            deficits.insert(category.clone(), diff);
            total_deficit += diff;
        } else {
            total_surplus += -diff;
        }
    }

    if total_deficit == 0.0 {
        return RebalancePlan {
            top_ups: BTreeMap::new(),
            total_surplus,
            total_deficit: 0.0,
        };
    }

    let top_ups = deficits
        .into_iter()
        .map(|(category, deficit)| {
            let share = (deficit / total_deficit) * total_surplus;
            (category, share)
        })
        .collect();

    RebalancePlan {
        top_ups,
        total_surplus,
        total_deficit,
    }
}
