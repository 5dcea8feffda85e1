use std::fmt;

use serde::Serialize;

/// Inputs for which there is nothing to compute.
///
/// Not an error: the caller simply shows nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateInput {
    /// `lo == hi`.
    ZeroWidthInterval,
    /// A bound that is not finite, or a width that overflows.
    UnboundedInterval,
    /// A partition count of zero or less (including a refine count that
    /// rounds to zero).
    NonPositiveCount,
    /// No sum variant was selected.
    EmptySelection
}

impl fmt::Display for DegenerateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateInput::ZeroWidthInterval => write!(f, "interval has zero width"),
            DegenerateInput::UnboundedInterval => write!(f, "interval is not bounded"),
            DegenerateInput::NonPositiveCount => write!(f, "partition count is not positive"),
            DegenerateInput::EmptySelection => write!(f, "no sum variant selected")
        }
    }
}
