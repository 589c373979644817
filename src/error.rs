//! Error types for bogobogosort.
//!
//! The algorithm itself has no failure modes: it either returns a sorted
//! sequence or never returns. Errors only arise from the optional safety valve
//! (a [`SortLimits`](crate::SortLimits) budget) and from its configuration.

use thiserror::Error;

/// Validation errors for sort limits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Limit '{field}' must be greater than zero")]
    ZeroLimit {
        field: &'static str,
    },
}

/// Errors raised while a bounded sort is running.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("Sort budget exceeded: {limit_type} (max: {max_value}, actual: {actual_value})")]
    BudgetExceeded {
        limit_type: String,
        max_value: u64,
        actual_value: u64,
    },

    #[error("Sort timed out after {duration_ms}ms")]
    Timeout {
        duration_ms: u64,
    },
}

/// Top-level error type for bogobogosort.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BogoError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),
}

impl BogoError {
    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is an execution error.
    #[must_use]
    pub const fn is_execution(&self) -> bool {
        matches!(self, Self::Execution(_))
    }

    /// Returns true if a shuffle cap or wall-clock budget ran out.
    #[must_use]
    pub const fn is_budget_exhausted(&self) -> bool {
        matches!(
            self,
            Self::Execution(ExecutionError::BudgetExceeded { .. } | ExecutionError::Timeout { .. })
        )
    }
}

/// Result type alias for bounded sort operations.
pub type BogoResult<T> = Result<T, BogoError>;
