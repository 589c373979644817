//! Safety valves for interactive use.
//!
//! The reference algorithm is unbounded, and [`Unbounded`] preserves that: its
//! exhaustion type is [`Infallible`], so an unbounded sort cannot fail. A
//! [`LimitedBudget`] caps shuffles and/or wall-clock time and surfaces an
//! error when either runs out. It never turns an unfinished sort into a
//! success.

use std::convert::Infallible;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::{BogoError, BogoResult, ExecutionError, ValidationError};

/// Budget charged by the engine before every shuffle, at every recursion depth.
pub trait Budget {
    /// Error produced when the budget runs out.
    type Exhausted;

    /// Called once at the start of each top-level sort or check.
    fn begin(&mut self) {}

    /// Accounts for one shuffle that is about to happen.
    ///
    /// # Errors
    ///
    /// Returns `Self::Exhausted` when the shuffle would exceed the budget.
    fn charge_shuffle(&mut self) -> Result<(), Self::Exhausted>;
}

/// No limits. This is the reference behavior.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unbounded;

impl Budget for Unbounded {
    type Exhausted = Infallible;

    fn charge_shuffle(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Limits for a bounded sort. `None` means unlimited.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortLimits {
    /// Maximum shuffles across the entire recursion.
    pub max_shuffles: Option<u64>,
    /// Maximum wall-clock time per sort, in milliseconds.
    pub max_duration_ms: Option<u64>,
}

impl SortLimits {
    /// Sets the shuffle cap.
    #[must_use]
    pub const fn with_max_shuffles(mut self, max_shuffles: u64) -> Self {
        self.max_shuffles = Some(max_shuffles);
        self
    }

    /// Sets the wall-clock budget.
    #[must_use]
    pub const fn with_max_duration_ms(mut self, max_duration_ms: u64) -> Self {
        self.max_duration_ms = Some(max_duration_ms);
        self
    }

    /// Returns true if no limit is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.max_shuffles.is_none() && self.max_duration_ms.is_none()
    }

    /// Validate limits.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ZeroLimit` if any limit is zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_shuffles == Some(0) {
            return Err(ValidationError::ZeroLimit { field: "max_shuffles" });
        }
        if self.max_duration_ms == Some(0) {
            return Err(ValidationError::ZeroLimit { field: "max_duration_ms" });
        }
        Ok(())
    }
}

/// Budget enforcing [`SortLimits`].
#[derive(Debug, Clone)]
pub struct LimitedBudget {
    limits: SortLimits,
    shuffles: u64,
    started: Instant,
}

impl LimitedBudget {
    /// Create a budget from validated limits.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the limits are invalid.
    pub fn new(limits: SortLimits) -> BogoResult<Self> {
        limits.validate()?;
        Ok(Self {
            limits,
            shuffles: 0,
            started: Instant::now(),
        })
    }

    /// The configured limits.
    #[must_use]
    pub const fn limits(&self) -> &SortLimits {
        &self.limits
    }

    /// Shuffles charged since the last [`Budget::begin`].
    #[must_use]
    pub const fn shuffles_charged(&self) -> u64 {
        self.shuffles
    }
}

impl Budget for LimitedBudget {
    type Exhausted = BogoError;

    fn begin(&mut self) {
        self.shuffles = 0;
        self.started = Instant::now();
    }

    fn charge_shuffle(&mut self) -> Result<(), BogoError> {
        if let Some(max) = self.limits.max_shuffles {
            if self.shuffles >= max {
                return Err(ExecutionError::BudgetExceeded {
                    limit_type: "shuffles".to_string(),
                    max_value: max,
                    actual_value: self.shuffles.saturating_add(1),
                }
                .into());
            }
        }

        if let Some(max_ms) = self.limits.max_duration_ms {
            let elapsed = self.started.elapsed();
            if elapsed >= Duration::from_millis(max_ms) {
                return Err(ExecutionError::Timeout {
                    duration_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                }
                .into());
            }
        }

        self.shuffles += 1;
        Ok(())
    }
}
