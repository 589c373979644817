//! # Bogobogosort
//!
//! Bogosort shuffles a deck until it happens to be sorted. Bogobogosort keeps
//! that loop, but checks sortedness by recursively bogobogosorting the first
//! n-1 elements of a copy and asking whether the copy still agrees with the
//! original. Any disagreement means the whole check starts over.
//!
//! The expected running time is unknown. It is conjectured to be at least
//! `O((n!)^n)`. Inputs of six or more elements are, for practical purposes,
//! non-terminating.
//!
//! ## Core Concepts
//!
//! - **Driver**: shuffles a sequence until the Oracle accepts it ([`Bogobogosort::sort`])
//! - **Oracle**: the recursive sortedness check ([`Bogobogosort::is_sorted`])
//! - **Permuter**: the source of uniform shuffles ([`Permuter`])
//! - **Budget**: an optional cap on shuffles or wall-clock time ([`Budget`])
//!
//! ## Usage
//!
//! ```rust
//! use bogobogosort::{bogobogosort_seeded, Bogobogosort, SeededPermuter, SortLimits};
//!
//! let mut values = vec![3, 1, 2];
//! let stats = bogobogosort_seeded(&mut values, 7);
//! assert_eq!(values, vec![1, 2, 3]);
//! assert!(stats.oracle_checks > 0);
//!
//! // With a safety valve: fails with an error instead of running forever.
//! let limits = SortLimits::default().with_max_shuffles(1);
//! let mut engine = Bogobogosort::with_limits(SeededPermuter::new(7), limits)?;
//! assert!(engine.sort(&mut vec![2, 1]).is_err());
//! # Ok::<(), bogobogosort::BogoError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod budget;
pub mod engine;
pub mod error;
pub mod permuter;
pub mod report;

// Re-export primary types at crate root for convenience
pub use budget::{Budget, LimitedBudget, SortLimits, Unbounded};
pub use engine::{bogobogosort, bogobogosort_seeded, Bogobogosort};
pub use error::{BogoError, BogoResult, ExecutionError, ValidationError};
pub use permuter::{Permuter, SeededPermuter, ThreadRngPermuter};
pub use report::{SortReport, SortStats};
