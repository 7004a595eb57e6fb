//! Repeated-state detection for iterated simulations.

use indexmap::IndexSet;
use std::hash::Hash;

/// A detected repetition: the state at step `start` recurs every `period`
/// steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cycle {
    /// Index of the first state on the cycle.
    pub start: usize,
    /// Steps between repetitions.
    pub period: usize,
}

/// Memo of the states produced by iterating a step function.
///
/// The memo is owned by the call site and keyed by immutable snapshots of
/// the state (typically a whole grid). Once a snapshot repeats, the
/// remaining steps are resolved by indexing into the recorded history
/// instead of simulating them.
///
/// # Examples
///
/// ```
/// use gridfold_grid::CycleMemo;
///
/// let mut memo = CycleMemo::new();
/// // 0 -> 1 -> 2 -> 0 -> ...
/// let s = memo.advance(0u8, 1_000_000_000, |s| (s + 1) % 3);
/// assert_eq!(s, 1);
/// assert_eq!(memo.cycle().map(|c| c.period), Some(3));
/// ```
#[derive(Clone, Debug)]
pub struct CycleMemo<S> {
    history: IndexSet<S>,
    cycle: Option<Cycle>,
}

impl<S: Eq + Hash + Clone> CycleMemo<S> {
    /// An empty memo.
    pub fn new() -> Self {
        Self {
            history: IndexSet::new(),
            cycle: None,
        }
    }

    /// The state after applying `step` to `state` `n` times.
    ///
    /// A memo already holding a cycle reached from the same initial state
    /// answers without calling `step`. A different initial state discards
    /// the recorded history.
    pub fn advance<F>(&mut self, state: S, n: usize, mut step: F) -> S
    where
        F: FnMut(&S) -> S,
    {
        if self.history.first() == Some(&state) {
            if let Some(found) = self.resolve(n) {
                return found;
            }
        }
        self.history.clear();
        self.cycle = None;

        let mut current = state;
        for i in 0..n {
            if let Some(first) = self.history.get_index_of(&current) {
                self.cycle = Some(Cycle {
                    start: first,
                    period: i - first,
                });
                log::debug!("state repeats at step {i}, first seen at {first}");
                if let Some(found) = self.resolve(n) {
                    return found;
                }
            }
            self.history.insert(current.clone());
            current = step(&current);
        }
        current
    }

    /// The cycle found by the last [`advance`](Self::advance), if any.
    pub fn cycle(&self) -> Option<Cycle> {
        self.cycle
    }

    /// Distinct states recorded so far.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// `true` if no state has been recorded.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    fn resolve(&self, n: usize) -> Option<S> {
        if n < self.history.len() {
            return self.history.get_index(n).cloned();
        }
        let Cycle { start, period } = self.cycle?;
        self.history
            .get_index(start + (n - start) % period)
            .cloned()
    }
}

impl<S: Eq + Hash + Clone> Default for CycleMemo<S> {
    fn default() -> Self {
        Self::new()
    }
}
