//! The bogobogosort engine.
//!
//! Two mutually recursive routines:
//!
//! - the **Driver** ([`Bogobogosort::sort`]) shuffles a sequence until the
//!   Oracle accepts it;
//! - the **Oracle** ([`Bogobogosort::is_sorted`]) copies the sequence, drives
//!   the copy's first n-1 elements to sorted order, reshuffles the whole copy
//!   until its last element is at least the prefix maximum, and finally
//!   compares the sorted prefix with the original prefix, element by element.
//!
//! Because the prefix is sorted by a full recursive Driver, verification is
//! itself randomized and recursive. The expected running time is conjectured,
//! not proven, to grow at least like `(n!)^n`.

use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::budget::{Budget, LimitedBudget, SortLimits, Unbounded};
use crate::error::BogoResult;
use crate::permuter::{Permuter, SeededPermuter, ThreadRngPermuter};
use crate::report::SortStats;

/// Sorts `items` ascending with the system RNG and no budget.
///
/// May not return in any useful time for more than five elements.
pub fn bogobogosort<T: Ord + Clone>(items: &mut [T]) -> SortStats {
    let mut engine = Bogobogosort::new(ThreadRngPermuter);
    match engine.sort(items) {
        Ok(stats) => stats,
        Err(never) => match never {},
    }
}

/// Like [`bogobogosort`], but with a reproducible shuffle stream.
pub fn bogobogosort_seeded<T: Ord + Clone>(items: &mut [T], seed: u64) -> SortStats {
    let mut engine = Bogobogosort::new(SeededPermuter::new(seed));
    match engine.sort(items) {
        Ok(stats) => stats,
        Err(never) => match never {},
    }
}

#[derive(Debug, Default)]
struct Counters {
    shuffles: u64,
    oracle_checks: u64,
    max_depth: usize,
}

/// Bogobogosort engine over a permuter `P` and a budget `B`.
///
/// The engine owns no sequence state between calls; every call works on the
/// caller's slice and on private copies made by the Oracle.
#[derive(Debug)]
pub struct Bogobogosort<P, B = Unbounded> {
    permuter: P,
    budget: B,
    counters: Counters,
}

impl<P: Permuter> Bogobogosort<P, Unbounded> {
    /// Create an unbounded engine.
    pub fn new(permuter: P) -> Self {
        Self::with_budget(permuter, Unbounded)
    }
}

impl<P: Permuter> Bogobogosort<P, LimitedBudget> {
    /// Create an engine that gives up once `limits` are exhausted.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the limits are invalid.
    pub fn with_limits(permuter: P, limits: SortLimits) -> BogoResult<Self> {
        Ok(Self::with_budget(permuter, LimitedBudget::new(limits)?))
    }
}

impl<P: Permuter, B: Budget> Bogobogosort<P, B> {
    /// Create an engine with an arbitrary budget.
    pub fn with_budget(permuter: P, budget: B) -> Self {
        Self {
            permuter,
            budget,
            counters: Counters::default(),
        }
    }

    /// The budget.
    pub fn budget(&self) -> &B {
        &self.budget
    }

    /// Consumes the engine, returning its permuter.
    pub fn into_permuter(self) -> P {
        self.permuter
    }

    /// Sorts `items` ascending, in place.
    ///
    /// Sequences of length 0 and 1 return immediately.
    ///
    /// # Errors
    ///
    /// Returns `B::Exhausted` if the budget runs out. `items` is then left
    /// in some permutation of its original contents. With [`Unbounded`] this
    /// cannot happen.
    pub fn sort<T: Ord + Clone>(&mut self, items: &mut [T]) -> Result<SortStats, B::Exhausted> {
        let started = self.start_run();
        let outcome = self.drive(items, 0);
        let stats = self.finish_run(started);

        match &outcome {
            Ok(()) => debug!(
                len = items.len(),
                shuffles = stats.shuffles,
                oracle_checks = stats.oracle_checks,
                elapsed = ?stats.elapsed,
                "bogobogosort finished"
            ),
            Err(_) => warn!(
                len = items.len(),
                shuffles = stats.shuffles,
                oracle_checks = stats.oracle_checks,
                "bogobogosort budget exhausted"
            ),
        }

        outcome.map(|()| stats)
    }

    /// Asks the Oracle whether `items` is sorted. `items` is not modified.
    ///
    /// # Errors
    ///
    /// Returns `B::Exhausted` if the budget runs out during the check.
    pub fn is_sorted<T: Ord + Clone>(&mut self, items: &[T]) -> Result<bool, B::Exhausted> {
        self.is_sorted_with_stats(items).map(|(sorted, _)| sorted)
    }

    /// Like [`Bogobogosort::is_sorted`], also returning the work the check did.
    ///
    /// # Errors
    ///
    /// Returns `B::Exhausted` if the budget runs out during the check.
    pub fn is_sorted_with_stats<T: Ord + Clone>(
        &mut self,
        items: &[T],
    ) -> Result<(bool, SortStats), B::Exhausted> {
        let started = self.start_run();
        let sorted = self.check(items, 0)?;
        Ok((sorted, self.finish_run(started)))
    }

    fn start_run(&mut self) -> Instant {
        self.counters = Counters::default();
        self.budget.begin();
        Instant::now()
    }

    fn finish_run(&self, started: Instant) -> SortStats {
        SortStats {
            shuffles: self.counters.shuffles,
            oracle_checks: self.counters.oracle_checks,
            max_depth: self.counters.max_depth,
            elapsed: started.elapsed(),
        }
    }

    /// Driver: shuffle until the Oracle accepts.
    fn drive<T: Ord + Clone>(&mut self, items: &mut [T], depth: usize) -> Result<(), B::Exhausted> {
        self.counters.max_depth = self.counters.max_depth.max(depth);
        if items.len() <= 1 {
            return Ok(());
        }

        while !self.check(items, depth)? {
            self.shuffle(items, depth)?;
        }
        Ok(())
    }

    /// Oracle: see the module docs.
    fn check<T: Ord + Clone>(&mut self, items: &[T], depth: usize) -> Result<bool, B::Exhausted> {
        self.counters.oracle_checks += 1;
        if items.len() <= 1 {
            return Ok(true);
        }

        let split = items.len() - 1;
        let mut copy = items.to_vec();
        self.drive(&mut copy[..split], depth + 1)?;

        while last_below_prefix_max(&copy) {
            self.shuffle(&mut copy, depth)?;
            self.drive(&mut copy[..split], depth + 1)?;
        }

        Ok(copy[..split] == items[..split])
    }

    fn shuffle<T>(&mut self, items: &mut [T], depth: usize) -> Result<(), B::Exhausted> {
        self.budget.charge_shuffle()?;
        self.counters.shuffles += 1;
        trace!(depth, len = items.len(), "shuffle");
        self.permuter.permute(items);
        Ok(())
    }
}

/// True if the last element is smaller than the largest element before it.
fn last_below_prefix_max<T: Ord>(items: &[T]) -> bool {
    match items.split_last() {
        Some((last, prefix)) => prefix.iter().max().is_some_and(|max| last < max),
        None => false,
    }
}
