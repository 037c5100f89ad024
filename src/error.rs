use std::error::Error;
use std::fmt;

/// Pivot selection could not sample enough elements.
///
/// Only surfaced by [`median_of_three`](crate::quicksort::median_of_three). The partition step
/// that asks for a median recovers from it on its own, the sort entry points never see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotError {
    TooFewElements { len: usize, required: usize },
}

impl fmt::Display for PivotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PivotError::TooFewElements { len, required } => write!(
                f,
                "pivot selection requires at least {required} elements, range holds {len}"
            ),
        }
    }
}

impl Error for PivotError {}
