//! Heapsort, in place for random-access sequences and staged for everything else.

use std::cmp::Ordering;

use crate::dispatch::TierDispatch;
use crate::seq::{ForwardSequence, RandomAccessSequence, TraversalTier};
use crate::staging;

/// Sorts `[begin, end)` with heapsort.
///
/// This sort is unstable (i.e., may reorder equal elements) and *O*(*n* \* log(*n*))
/// worst-case. It is in-place for random-access sequences. Forward and bidirectional sequences
/// are staged into a random-access buffer of the whole range first, sorted there, and written
/// back.
#[inline]
pub fn sort<S>(seq: &mut S, begin: S::Pos, end: S::Pos)
where
    S: ForwardSequence + ?Sized,
    S::Item: Ord,
    S::Tier: TierDispatch<S>,
{
    heapsort(seq, begin, end, &mut |a: &S::Item, b: &S::Item| a.lt(b));
}

/// Sorts `[begin, end)` with heapsort and a comparator function.
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
    heapsort(seq, begin, end, &mut |a: &S::Item, b: &S::Item| {
        compare(a, b) == Ordering::Less
    });
}

/// Rearranges `[begin, end)` into a binary max-heap.
///
/// Offset `0` holds the greatest element and the children of offset `k` are at `2k + 1` and
/// `2k + 2`.
#[inline]
pub fn make_heap<S>(seq: &mut S, begin: S::Pos, end: S::Pos)
where
    S: ForwardSequence + ?Sized,
    S::Item: Ord,
    S::Tier: TierDispatch<S>,
{
    <S::Tier as TierDispatch<S>>::make_heap(seq, begin, end, &mut |a: &S::Item, b: &S::Item| {
        a.lt(b)
    });
}

/// Rearranges `[begin, end)` into a binary max-heap with respect to a comparator function.
#[inline]
pub fn make_heap_by<S, F>(seq: &mut S, begin: S::Pos, end: S::Pos, mut compare: F)
where
    S: ForwardSequence + ?Sized,
    S::Tier: TierDispatch<S>,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    <S::Tier as TierDispatch<S>>::make_heap(seq, begin, end, &mut |a: &S::Item, b: &S::Item| {
        compare(a, b) == Ordering::Less
    });
}

fn heapsort<S, F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
where
    S: ForwardSequence + ?Sized,
    S::Tier: TierDispatch<S>,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    log::trace!("heapsort over a {} sequence", <S::Tier as TraversalTier>::NAME);
    <S::Tier as TierDispatch<S>>::heap_sort(seq, begin, end, is_less);
}

pub fn heapsort_random_access<S, F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
where
    S: RandomAccessSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.distance(begin, end);
    if len < 2 {
        return;
    }

    make_heap_random_access(seq, begin, end, is_less);

    // Pop maximal elements from the heap.
    for heap_end in (1..len).rev() {
        let last = seq.offset(begin, heap_end);
        seq.swap(begin, last);
        sift_down(seq, begin, 0, heap_end, is_less);
    }
}

pub fn make_heap_random_access<S, F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
where
    S: RandomAccessSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.distance(begin, end);
    if len < 2 {
        return;
    }

    // From the parent of the last element down to the root.
    for node in (0..=(len - 2) / 2).rev() {
        sift_down(seq, begin, node, len, is_less);
    }
}

/// Heapsort for sequences without random access, run on a staged copy of the range order.
pub fn heapsort_staged<S, F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
where
    S: ForwardSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    staging::sort_staged(seq, begin, end, is_less, |staged, len, is_less| {
        heapsort_random_access(staged, 0, len, is_less);
    });
}

pub fn make_heap_staged<S, F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
where
    S: ForwardSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    staging::sort_staged(seq, begin, end, is_less, |staged, len, is_less| {
        make_heap_random_access(staged, 0, len, is_less);
    });
}

// This binary heap respects the invariant `parent >= child`.
//
// `node` and `heap_len` are offsets from `begin`, the start of the whole heap, never from the
// subtree being sifted.
fn sift_down<S, F>(seq: &mut S, begin: S::Pos, mut node: usize, heap_len: usize, is_less: &mut F)
where
    S: RandomAccessSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    loop {
        let left = 2 * node + 1;
        if left >= heap_len {
            break;
        }

        let mut winner = node;
        if is_less(seq.get(seq.offset(begin, winner)), seq.get(seq.offset(begin, left))) {
            winner = left;
        }

        let right = left + 1;
        if right < heap_len
            && is_less(seq.get(seq.offset(begin, winner)), seq.get(seq.offset(begin, right)))
        {
            winner = right;
        }

        if winner == node {
            break;
        }

        let (node_pos, winner_pos) = (seq.offset(begin, node), seq.offset(begin, winner));
        seq.swap(node_pos, winner_pos);
        node = winner;
    }
}
