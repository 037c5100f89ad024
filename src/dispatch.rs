//! Compile time selection of the per-tier implementations.
//!
//! Every sequence names its tier through [`ForwardSequence::Tier`]. The sort entry points are
//! bounded on `S::Tier: TierDispatch<S>`, which only holds if the sequence actually implements
//! the traits its tier promises. The chosen implementation is fixed by the type, there is no
//! runtime check.

use crate::heapsort;
use crate::insertion;
use crate::mergesort;
use crate::quicksort;
use crate::seq::{
    BidirectionalSequence, Bidirectional, Forward, ForwardSequence, RandomAccess,
    RandomAccessSequence, TraversalTier,
};

pub trait TierDispatch<S>: TraversalTier
where
    S: ForwardSequence + ?Sized,
{
    fn insertion_sort<F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool;

    fn merge_sort<F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool;

    fn quick_sort<F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool;

    fn heap_sort<F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool;

    fn make_heap<F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool;
}

impl<S> TierDispatch<S> for Forward
where
    S: ForwardSequence + ?Sized,
{
    fn insertion_sort<F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        insertion::insertion_sort_forward(seq, begin, end, is_less);
    }

    fn merge_sort<F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        mergesort::merge_sort_forward(seq, begin, end, is_less);
    }

    fn quick_sort<F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        quicksort::quicksort_with(
            seq,
            begin,
            end,
            is_less,
            quicksort::partition_forward::<S, F>,
        );
    }

    fn heap_sort<F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        heapsort::heapsort_staged(seq, begin, end, is_less);
    }

    fn make_heap<F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        heapsort::make_heap_staged(seq, begin, end, is_less);
    }
}

impl<S> TierDispatch<S> for Bidirectional
where
    S: BidirectionalSequence + ?Sized,
{
    fn insertion_sort<F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        insertion::insertion_sort_bidirectional(seq, begin, end, is_less);
    }

    // Same as forward, the recursion still needs a count to find the midpoint.
    fn merge_sort<F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        mergesort::merge_sort_forward(seq, begin, end, is_less);
    }

    fn quick_sort<F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        quicksort::quicksort_with(
            seq,
            begin,
            end,
            is_less,
            quicksort::partition_bidirectional::<S, F>,
        );
    }

    fn heap_sort<F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        heapsort::heapsort_staged(seq, begin, end, is_less);
    }

    fn make_heap<F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        heapsort::make_heap_staged(seq, begin, end, is_less);
    }
}

impl<S> TierDispatch<S> for RandomAccess
where
    S: RandomAccessSequence + ?Sized,
{
    fn insertion_sort<F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        insertion::insertion_sort_random_access(seq, begin, end, is_less);
    }

    fn merge_sort<F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        mergesort::merge_sort_random_access(seq, begin, end, is_less);
    }

    fn quick_sort<F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        quicksort::quicksort_random_access(seq, begin, end, is_less);
    }

    fn heap_sort<F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        heapsort::heapsort_random_access(seq, begin, end, is_less);
    }

    fn make_heap<F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
    where
        F: FnMut(&S::Item, &S::Item) -> bool,
    {
        heapsort::make_heap_random_access(seq, begin, end, is_less);
    }
}
