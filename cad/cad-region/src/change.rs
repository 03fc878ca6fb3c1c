//! Lazily recomputed "changed" flags.
//!
//! A [`ChangeSignal`] holds a baseline snapshot of some watched fields and a
//! cached answer to "do the fields still match the baseline?". Mutators only
//! invalidate the cache; the comparison runs on the next read and is cached
//! until the next invalidation.

use std::cell::Cell;

/// A derived boolean that reports whether watched fields differ from a baseline.
///
/// # Example
///
/// ```
/// use cad_region::ChangeSignal;
///
/// let mut value = 5;
/// let signal = ChangeSignal::new(value);
/// assert!(!signal.get(|baseline| *baseline != value));
///
/// value = 6;
/// signal.invalidate();
/// assert!(signal.get(|baseline| *baseline != value));
/// ```
#[derive(Debug)]
pub struct ChangeSignal<T> {
    baseline: T,
    cached: Cell<Option<bool>>,
}

impl<T> ChangeSignal<T> {
    /// Create a clean signal watching fields that currently equal `baseline`.
    #[must_use]
    pub const fn new(baseline: T) -> Self {
        Self {
            baseline,
            cached: Cell::new(Some(false)),
        }
    }

    /// Drop the cached value so the next read recomputes it.
    pub fn invalidate(&self) {
        self.cached.set(None);
    }

    /// Whether a cached value is available.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.cached.get().is_some()
    }

    /// Read the signal, recomputing with `differs` if the cache is stale.
    ///
    /// `differs` receives the baseline and returns whether the current field
    /// values differ from it.
    pub fn get(&self, differs: impl FnOnce(&T) -> bool) -> bool {
        if let Some(changed) = self.cached.get() {
            return changed;
        }
        let changed = differs(&self.baseline);
        self.cached.set(Some(changed));
        changed
    }

    /// The snapshot the watched fields are compared against.
    #[must_use]
    pub const fn baseline(&self) -> &T {
        &self.baseline
    }

    /// Replace the baseline; the signal reads clean afterwards.
    pub fn rebaseline(&mut self, baseline: T) {
        self.baseline = baseline;
        self.cached.set(Some(false));
    }
}

/// The three change flags of a region, read together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionChanges {
    /// Any of x, y, width, height changed.
    pub boundary: bool,
    /// Any surface name changed.
    pub surface_names: bool,
    /// Any surface bypass flag or material name changed.
    pub surface_values: bool,
}

impl RegionChanges {
    /// Whether anything changed.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.boundary || self.surface_names || self.surface_values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_starts_clean_and_cached() {
        let signal = ChangeSignal::new(1);
        assert!(signal.is_valid());
        assert!(!signal.get(|_| panic!("cached value should be used")));
    }

    #[test]
    fn test_signal_recomputes_once_after_invalidate() {
        let signal = ChangeSignal::new(String::from("a"));
        signal.invalidate();
        assert!(!signal.is_valid());

        let mut evaluations = 0;
        assert!(signal.get(|baseline| {
            evaluations += 1;
            baseline != "b"
        }));
        assert!(signal.get(|_| {
            evaluations += 1;
            false
        }));
        assert_eq!(evaluations, 1);
    }

    #[test]
    fn test_signal_reverts_when_values_return_to_baseline() {
        let signal = ChangeSignal::new(10);
        signal.invalidate();
        assert!(!signal.get(|baseline| *baseline != 10));
    }

    #[test]
    fn test_rebaseline_clears() {
        let mut signal = ChangeSignal::new(1);
        signal.invalidate();
        assert!(signal.get(|baseline| *baseline != 2));

        signal.rebaseline(2);
        assert_eq!(*signal.baseline(), 2);
        assert!(!signal.get(|_| true));
    }

    #[test]
    fn test_region_changes_any() {
        assert!(!RegionChanges::default().any());
        let changes = RegionChanges {
            surface_values: true,
            ..RegionChanges::default()
        };
        assert!(changes.any());
    }
}
