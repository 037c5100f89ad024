use std::cmp::Ordering;

use crate::dispatch::TierDispatch;
use crate::seq::{BidirectionalSequence, ForwardSequence, RandomAccessSequence, TraversalTier};

/// Sorts `[begin, end)` with insertion sort.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n*^2) worst-case. It
/// runs in *O*(*n*) on already sorted input.
#[inline]
pub fn sort<S>(seq: &mut S, begin: S::Pos, end: S::Pos)
where
    S: ForwardSequence + ?Sized,
    S::Item: Ord,
    S::Tier: TierDispatch<S>,
{
    insertion_sort(seq, begin, end, &mut |a: &S::Item, b: &S::Item| a.lt(b));
}

/// Sorts `[begin, end)` with insertion sort and a comparator function.
///
/// The comparator function must define a strict weak ordering for the elements in the range.
/// If it does not, the order of the elements is unspecified.
#[inline]
pub fn sort_by<S, F>(seq: &mut S, begin: S::Pos, end: S::Pos, mut compare: F)
where
    S: ForwardSequence + ?Sized,
    S::Tier: TierDispatch<S>,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    insertion_sort(seq, begin, end, &mut |a: &S::Item, b: &S::Item| {
        compare(a, b) == Ordering::Less
    });
}

fn insertion_sort<S, F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
where
    S: ForwardSequence + ?Sized,
    S::Tier: TierDispatch<S>,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    log::trace!("insertion sort over a {} sequence", <S::Tier as TraversalTier>::NAME);
    <S::Tier as TierDispatch<S>>::insertion_sort(seq, begin, end, is_less);
}

/// Random-access insertion sort, working on offsets from `begin`.
pub fn insertion_sort_random_access<S, F>(
    seq: &mut S,
    begin: S::Pos,
    end: S::Pos,
    is_less: &mut F,
) where
    S: RandomAccessSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.distance(begin, end);

    for i in 1..len {
        let mut j = i;
        while j > 0 {
            let cur = seq.offset(begin, j);
            let prev = seq.offset(begin, j - 1);
            if !is_less(seq.get(cur), seq.get(prev)) {
                break;
            }

            seq.swap(cur, prev);
            j -= 1;
        }
    }
}

/// Bidirectional insertion sort, walking each new element backwards into the sorted prefix.
pub fn insertion_sort_bidirectional<S, F>(
    seq: &mut S,
    begin: S::Pos,
    end: S::Pos,
    is_less: &mut F,
) where
    S: BidirectionalSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if begin == end {
        return;
    }

    let mut tail = seq.successor(begin);
    while tail != end {
        let mut cur = tail;
        while cur != begin {
            let prev = seq.predecessor(cur);
            if !is_less(seq.get(cur), seq.get(prev)) {
                break;
            }

            seq.swap(cur, prev);
            cur = prev;
        }

        tail = seq.successor(tail);
    }
}

/// Forward-only insertion sort.
///
/// Without backward steps the insertion point of the tail is searched from `begin`: the first
/// element of the sorted prefix that is strictly greater than the tail. The tail is then
/// rotated into place by swapping it through the slots up to its own, which moves the rest of
/// the prefix one slot to the right. Equal elements are never passed, so this stays stable.
pub fn insertion_sort_forward<S, F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
where
    S: ForwardSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if begin == end {
        return;
    }

    let mut last_sorted = begin;
    let mut tail = seq.successor(begin);
    while tail != end {
        // Tails already in order are skipped, the common case for sorted input.
        if is_less(seq.get(tail), seq.get(last_sorted)) {
            let mut hole = begin;
            while hole != tail && !is_less(seq.get(tail), seq.get(hole)) {
                hole = seq.successor(hole);
            }

            while hole != tail {
                seq.swap(hole, tail);
                hole = seq.successor(hole);
            }
        }

        last_sorted = tail;
        tail = seq.successor(tail);
    }
}
