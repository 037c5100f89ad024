//! Comparison sorts over position ranges, specialized by traversal capability.
//!
//! Every algorithm module exposes `sort(seq, begin, end)` and `sort_by(seq, begin, end,
//! compare)`. `seq` is any [`ForwardSequence`]; the implementation is picked at compile time
//! from the sequence's [`TraversalTier`], see [`dispatch`].
//!
//! ```ignore
//! let mut v = vec![5, 3, 5, 1, 4, 3];
//! let len = v.len();
//! cursor_sort::quicksort::sort(&mut v, 0, len);
//! assert_eq!(v, [1, 3, 3, 4, 5, 5]);
//!
//! // Same values, but only forward traversal is available.
//! let mut w = [5, 3, 5, 1, 4, 3];
//! cursor_sort::quicksort::sort(&mut ForwardView::new(&mut w), 0, len);
//! assert_eq!(w, [1, 3, 3, 4, 5, 5]);
//! ```

pub mod dispatch;
pub mod error;
pub mod heapsort;
pub mod insertion;
pub mod mergesort;
pub mod quicksort;
pub mod selection;
pub mod seq;
pub mod staging;

pub use dispatch::TierDispatch;
pub use error::PivotError;
pub use seq::{
    Bidirectional, BidirectionalSequence, BidirectionalView, Forward, ForwardSequence,
    ForwardView, RandomAccess, RandomAccessSequence, TraversalTier,
};
