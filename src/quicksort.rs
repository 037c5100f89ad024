use std::cmp::Ordering;

use crate::dispatch::TierDispatch;
use crate::error::PivotError;
use crate::insertion;
use crate::seq::{BidirectionalSequence, ForwardSequence, RandomAccessSequence, TraversalTier};

/// Random-access ranges of up to this length get sorted using insertion sort.
pub const INSERTION_THRESHOLD: usize = 20;

/// Sorts `[begin, end)` with quicksort, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place and *O*(*n* \*
/// log(*n*)) on average. The pivot choice is a deterministic heuristic, adversarial inputs can
/// push it to *O*(*n*^2).
///
/// # Current implementation
///
/// Random-access sequences pick a median-of-three pivot, partition with a Hoare scan and hand
/// ranges of up to [`INSERTION_THRESHOLD`] elements to insertion sort. Bidirectional sequences
/// partition around their last element, forward-only sequences around their first element.
/// Both recurse down to single elements using an explicit work list.
#[inline]
pub fn sort<S>(seq: &mut S, begin: S::Pos, end: S::Pos)
where
    S: ForwardSequence + ?Sized,
    S::Item: Ord,
    S::Tier: TierDispatch<S>,
{
    quicksort(seq, begin, end, &mut |a: &S::Item, b: &S::Item| a.lt(b));
}

/// Sorts `[begin, end)` with quicksort and a comparator function, but might not preserve the
/// order of equal elements.
///
/// The comparator function must define a strict weak ordering for the elements in the range.
/// If it does not, the order of the elements is unspecified, but every element stays in the
/// range and the sort terminates.
#[inline]
pub fn sort_by<S, F>(seq: &mut S, begin: S::Pos, end: S::Pos, mut compare: F)
where
    S: ForwardSequence + ?Sized,
    S::Tier: TierDispatch<S>,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    quicksort(seq, begin, end, &mut |a: &S::Item, b: &S::Item| {
        compare(a, b) == Ordering::Less
    });
}

fn quicksort<S, F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
where
    S: ForwardSequence + ?Sized,
    S::Tier: TierDispatch<S>,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    log::trace!("quicksort over a {} sequence", <S::Tier as TraversalTier>::NAME);
    <S::Tier as TierDispatch<S>>::quick_sort(seq, begin, end, is_less);
}

pub fn quicksort_random_access<S, F>(
    seq: &mut S,
    mut begin: S::Pos,
    end: S::Pos,
    is_less: &mut F,
) where
    S: RandomAccessSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    loop {
        let len = seq.distance(begin, end);
        if len <= INSERTION_THRESHOLD {
            insertion::insertion_sort_random_access(seq, begin, end, is_less);
            return;
        }

        let split_pos = partition_random_access(seq, begin, end, is_less);
        let split = seq.distance(begin, split_pos);

        // The right scan position is not necessarily the pivot, so it stays in the left part.
        // Clamping guarantees progress even if `is_less` is not a strict weak ordering, a
        // valid ordering never returns the last position here.
        let left_end = seq.offset(begin, split.min(len - 2) + 1);

        // Recurse into the left side and continue with the right side.
        quicksort_random_access(seq, begin, left_end, is_less);
        begin = left_end;
    }
}

/// Quicksort driver for sequences without random access.
///
/// `partition` must return the final position of its pivot. The pivot is excluded from both
/// sub-ranges. Pending ranges live on an explicit work list, so inputs that degrade the
/// partition, like already sorted ones, do not grow the call stack.
pub fn quicksort_with<S, F, P>(
    seq: &mut S,
    begin: S::Pos,
    end: S::Pos,
    is_less: &mut F,
    mut partition: P,
) where
    S: ForwardSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
    P: FnMut(&mut S, S::Pos, S::Pos, &mut F) -> S::Pos,
{
    let mut pending = vec![(begin, end)];

    while let Some((begin, end)) = pending.pop() {
        if begin == end || seq.successor(begin) == end {
            continue;
        }

        let pivot = partition(seq, begin, end, is_less);
        pending.push((seq.successor(pivot), end));
        pending.push((begin, pivot));
    }
}

/// Picks the median of the first, middle and last element of `[begin, end)`.
///
/// The three positions are ordered by the value they hold using insertion sort, the middle
/// one wins. Ranges with fewer than three elements yield [`PivotError::TooFewElements`].
pub fn median_of_three<S, F>(
    seq: &S,
    begin: S::Pos,
    end: S::Pos,
    is_less: &mut F,
) -> Result<S::Pos, PivotError>
where
    S: RandomAccessSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    const SAMPLES: usize = 3;

    let len = seq.distance(begin, end);
    if len < SAMPLES {
        return Err(PivotError::TooFewElements {
            len,
            required: SAMPLES,
        });
    }

    let mut candidates = [begin, seq.offset(begin, len / 2), seq.offset(begin, len - 1)];
    insertion::insertion_sort_random_access(
        &mut candidates[..],
        0,
        SAMPLES,
        &mut |a: &S::Pos, b: &S::Pos| is_less(seq.get(*a), seq.get(*b)),
    );

    Ok(candidates[1])
}

/// Hoare partition of `[begin, end)` around a median-of-three pivot.
///
/// Afterwards no element in `[begin, split]` is greater than the pivot and no element in
/// `(split, end)` is less than it, where `split` is the returned position. Elements equal to
/// the pivot may end up on either side.
///
/// Ranges too small for median-of-three use their first element as pivot.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn partition_random_access<S, F>(
    seq: &mut S,
    begin: S::Pos,
    end: S::Pos,
    is_less: &mut F,
) -> S::Pos
where
    S: RandomAccessSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.distance(begin, end);
    if len == 0 {
        return begin;
    }

    let pivot_pos = match median_of_three(&*seq, begin, end, is_less) {
        Ok(pos) => pos,
        Err(err) => {
            log::trace!("{err}, falling back to the first element as pivot");
            begin
        }
    };

    let at = |seq: &S, i: usize| seq.offset(begin, i);

    // The pivot is tracked by offset instead of being copied out. Whenever a swap moves it,
    // the offset follows, so it always refers to the same value.
    let mut pivot = seq.distance(begin, pivot_pos);
    let last = len - 1;
    let (mut l, mut r) = (0, last);

    loop {
        // Find the first element not less than the pivot.
        while l < last && is_less(seq.get(at(seq, l)), seq.get(at(seq, pivot))) {
            l += 1;
        }

        // Find the last element not greater than the pivot.
        while r > 0 && is_less(seq.get(at(seq, pivot)), seq.get(at(seq, r))) {
            r -= 1;
        }

        if l >= r {
            return at(seq, r);
        }

        let (l_pos, r_pos) = (at(seq, l), at(seq, r));
        seq.swap(l_pos, r_pos);
        if pivot == l {
            pivot = r;
        } else if pivot == r {
            pivot = l;
        }

        l += 1;
        r -= 1;
    }
}

/// Lomuto partition of `[begin, end)` around its last element.
///
/// Every element less than the pivot is swapped into the next slot of a boundary that starts
/// at `begin`, so those elements keep their relative order. Finally the pivot is swapped into
/// the boundary slot, which is returned.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn partition_bidirectional<S, F>(
    seq: &mut S,
    begin: S::Pos,
    end: S::Pos,
    is_less: &mut F,
) -> S::Pos
where
    S: BidirectionalSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if begin == end {
        return begin;
    }

    let pivot = seq.predecessor(end);
    let mut boundary = begin;

    let mut cursor = begin;
    while cursor != pivot {
        if is_less(seq.get(cursor), seq.get(pivot)) {
            if boundary != cursor {
                seq.swap(cursor, boundary);
            }
            boundary = seq.successor(boundary);
        }
        cursor = seq.successor(cursor);
    }

    if boundary != pivot {
        seq.swap(pivot, boundary);
    }
    boundary
}

/// Partition of `[begin, end)` around its first element, using forward steps only.
///
/// `boundary` is the last slot known to hold an element less than the pivot, starting at the
/// pivot itself. Each smaller element found by the scan is swapped into the slot after
/// `boundary`. If the scan never finds a smaller element the range is already partitioned and
/// the pivot's own position is returned. Otherwise the pivot is swapped with `boundary`, which
/// is returned. That last swap moves the most recently found smaller element to `begin`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn partition_forward<S, F>(
    seq: &mut S,
    begin: S::Pos,
    end: S::Pos,
    is_less: &mut F,
) -> S::Pos
where
    S: ForwardSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if begin == end {
        return begin;
    }

    let pivot = begin;
    let mut boundary = pivot;
    let mut precursor = pivot;

    // No element less than the pivot found yet.
    let mut no_swap = true;
    // No element not less than the pivot found yet.
    let mut first_larger = true;

    let mut cursor = seq.successor(pivot);
    while cursor != end {
        if is_less(seq.get(cursor), seq.get(pivot)) {
            let next_boundary = seq.successor(boundary);
            if next_boundary != cursor {
                seq.swap(next_boundary, cursor);
            }
            boundary = next_boundary;
            no_swap = false;
        } else if first_larger {
            // Every element before this one was smaller, the boundary is right behind it.
            boundary = precursor;
            first_larger = false;
        }

        precursor = cursor;
        cursor = seq.successor(cursor);
    }

    if no_swap {
        return pivot;
    }

    seq.swap(boundary, pivot);
    boundary
}
