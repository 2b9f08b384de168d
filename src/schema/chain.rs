//! Ordered chains of value-level constraint functions.

use std::fmt;
use std::sync::Arc;

use crate::error::ValueError;

/// A single value-level constraint.
///
/// Receives the coerced value and returns either the (possibly transformed)
/// value or the reason it is invalid.
pub type ValueCheck<T> = Arc<dyn Fn(T) -> Result<T, ValueError> + Send + Sync>;

/// An ordered, persistent list of [`ValueCheck`]s.
///
/// Pushing returns a new chain; the receiver keeps its own checks. Applying the
/// chain stops at the first failing check.
pub(crate) struct CheckChain<T> {
    checks: Vec<ValueCheck<T>>,
}

impl<T> CheckChain<T> {
    pub(crate) fn new() -> Self {
        Self { checks: Vec::new() }
    }

    pub(crate) fn with<F>(&self, check: F) -> Self
    where
        F: Fn(T) -> Result<T, ValueError> + Send + Sync + 'static,
    {
        let mut checks = self.checks.clone();
        checks.push(Arc::new(check));
        Self { checks }
    }

    pub(crate) fn apply(&self, value: T) -> Result<T, ValueError> {
        self.checks.iter().try_fold(value, |value, check| check(value))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.checks.len()
    }
}

impl<T> Clone for CheckChain<T> {
    fn clone(&self) -> Self {
        Self {
            checks: self.checks.clone(),
        }
    }
}

impl<T> fmt::Debug for CheckChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CheckChain({} check(s))", self.checks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_empty_chain_passes_value_through() {
        let chain = CheckChain::<i64>::new();
        assert_eq!(chain.apply(5), Ok(5));
    }

    #[test]
    fn test_checks_run_in_order_and_transform() {
        let chain = CheckChain::<i64>::new()
            .with(|v| Ok(v + 1))
            .with(|v| Ok(v * 10));
        assert_eq!(chain.apply(1), Ok(20));
    }

    #[test]
    fn test_first_failure_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let chain = CheckChain::<i64>::new()
            .with(|_| Err(ValueError::INVALID))
            .with(move |v| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(v)
            });

        assert_eq!(chain.apply(1), Err(ValueError::INVALID));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_with_leaves_receiver_untouched() {
        let base = CheckChain::<i64>::new().with(Ok);
        let extended = base.with(|_| Err(ValueError::INVALID));

        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
        assert_eq!(base.apply(3), Ok(3));
    }
}
