use std::cmp::Ordering;

use crate::seq::{ForwardSequence, TraversalTier};

/// Sorts `[begin, end)` with selection sort.
///
/// This sort is unstable (i.e., may reorder equal elements) and *O*(*n*^2) for every input. It
/// only needs forward traversal and performs at most *n* - 1 swaps, so there is no per-tier
/// specialization.
#[inline]
pub fn sort<S>(seq: &mut S, begin: S::Pos, end: S::Pos)
where
    S: ForwardSequence + ?Sized,
    S::Item: Ord,
{
    selection_sort(seq, begin, end, &mut |a: &S::Item, b: &S::Item| a.lt(b));
}

/// Sorts `[begin, end)` with selection sort and a comparator function.
///
/// The comparator function must define a strict weak ordering for the elements in the range.
/// If it does not, the order of the elements is unspecified.
#[inline]
pub fn sort_by<S, F>(seq: &mut S, begin: S::Pos, end: S::Pos, mut compare: F)
where
    S: ForwardSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    selection_sort(seq, begin, end, &mut |a: &S::Item, b: &S::Item| {
        compare(a, b) == Ordering::Less
    });
}

/// Selection sort over any forward sequence.
pub fn selection_sort<S, F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
where
    S: ForwardSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    log::trace!("selection sort over a {} sequence", <S::Tier as TraversalTier>::NAME);

    let mut head = begin;
    while head != end {
        // The head itself is the first candidate, so an exhausted remainder never gets read.
        let mut smallest = head;
        let mut cursor = seq.successor(head);
        while cursor != end {
            if is_less(seq.get(cursor), seq.get(smallest)) {
                smallest = cursor;
            }
            cursor = seq.successor(cursor);
        }

        if smallest != head {
            seq.swap(head, smallest);
        }

        head = seq.successor(head);
    }
}
