//! Limits on how much work one search may do

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Expansion limit, deadline and cancel flag for a single search
///
/// Checked once per frontier expansion. Running out yields
/// `PathResult::Cancelled`, never a partial path.
#[derive(Debug, Clone, Default)]
pub struct SearchBudget {
    max_expansions: Option<usize>,
    deadline: Option<Instant>,
    cancel: Option<Arc<AtomicBool>>,
}

impl SearchBudget {
    /// No limits
    #[must_use]
    pub fn unlimited() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    #[must_use]
    pub const fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Deadline measured from now
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Cancel when `flag` becomes true
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    #[must_use]
    pub const fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }

    /// True once `expanded` nodes is too many, time is up, or cancel was requested
    #[must_use]
    pub fn is_exhausted(&self, expanded: usize) -> bool {
        if self.max_expansions.is_some_and(|max| expanded >= max) {
            return true;
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return true;
        }
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_never_exhausts() {
        let budget = SearchBudget::unlimited();
        assert!(!budget.is_exhausted(0));
        assert!(!budget.is_exhausted(usize::MAX));
    }

    #[test]
    fn expansion_limit() {
        let budget = SearchBudget::unlimited().with_max_expansions(3);
        assert!(!budget.is_exhausted(2));
        assert!(budget.is_exhausted(3));
        assert_eq!(budget.max_expansions(), Some(3));
    }

    #[test]
    fn past_deadline_exhausts() {
        let budget = SearchBudget::unlimited().with_deadline(Instant::now());
        assert!(budget.is_exhausted(0));
    }

    #[test]
    fn cancel_flag_exhausts() {
        let flag = Arc::new(AtomicBool::new(false));
        let budget = SearchBudget::unlimited().with_cancel_flag(Arc::clone(&flag));
        assert!(!budget.is_exhausted(0));

        flag.store(true, Ordering::Relaxed);
        assert!(budget.is_exhausted(0));
    }
}
