//! Fixed-capacity rolling history of daily category totals.
//!
//! Replaces an unbounded imperative history list with a ring buffer whose
//! trailing-window semantics are explicit and testable. Statistics are
//! taken over however many days the buffer currently holds, so a freshly
//! started history degrades to single-value mean and zero std.

use std::collections::VecDeque;

use crate::models::DailyTotals;

#[derive(Debug, Clone)]
pub struct RollingHistory {
    capacity: usize,
    days: VecDeque<DailyTotals>,
}

impl RollingHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            days: VecDeque::with_capacity(capacity),
        }
    }

    /// Push one day's totals, evicting the oldest day once full.
    pub fn push(&mut self, totals: DailyTotals) {
        if self.days.len() == self.capacity {
            self.days.pop_front();
        }
        self.days.push_back(totals);
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Amounts of one category across the buffered days, oldest first.
    /// Days missing the category contribute 0.
    fn values(&self, category: &str) -> impl Iterator<Item = f32> + '_ {
        let category = category.to_string();
        self.days
            .iter()
            .map(move |day| day.get(&category).copied().unwrap_or(0.0))
    }

    /// Rolling mean of one category over the buffered days.
    pub fn mean(&self, category: &str) -> f32 {
        if self.days.is_empty() {
            return 0.0;
        }
        self.values(category).sum::<f32>() / self.days.len() as f32
    }

    /// Population standard deviation of one category over the buffered days.
    pub fn std(&self, category: &str) -> f32 {
        if self.days.is_empty() {
            return 0.0;
        }
        let mean = self.mean(category);
        let variance = self
            .values(category)
            .map(|v| (v - mean) * (v - mean))
            .sum::<f32>()
            / self.days.len() as f32;
        variance.sqrt()
    }
}
