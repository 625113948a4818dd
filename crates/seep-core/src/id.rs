//! Strongly-typed identifiers.

use std::fmt;

/// Monotonically increasing step counter.
///
/// `StepId(0)` is the initial state before any time integration;
/// `StepId(n)` is the state after `n` explicit Euler steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
