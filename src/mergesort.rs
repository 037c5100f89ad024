use std::cmp::Ordering;

use crate::dispatch::TierDispatch;
use crate::insertion;
use crate::seq::{self, ForwardSequence, RandomAccessSequence, TraversalTier};
use crate::staging;

/// Random-access ranges of up to this length get sorted using insertion sort.
pub const INSERTION_THRESHOLD: usize = 10;

/// Sorts `[begin, end)` with a top-down merge sort.
///
/// This sort is stable (i.e., does not reorder equal elements) and performs *O*(*n* \* log(*n*))
/// comparisons. Every merge allocates scratch space proportional to the merged length.
///
/// # Current implementation
///
/// Random-access sequences split at `begin + len / 2` and hand ranges of up to
/// [`INSERTION_THRESHOLD`] elements to insertion sort. Forward and bidirectional sequences
/// count the range once and carry the length of each half down the recursion, splitting until
/// single elements remain.
#[inline]
pub fn sort<S>(seq: &mut S, begin: S::Pos, end: S::Pos)
where
    S: ForwardSequence + ?Sized,
    S::Item: Ord,
    S::Tier: TierDispatch<S>,
{
    merge_sort(seq, begin, end, &mut |a: &S::Item, b: &S::Item| a.lt(b));
}

/// Sorts `[begin, end)` with a top-down merge sort and a comparator function.
///
/// This sort is stable (i.e., does not reorder equal elements) and performs *O*(*n* \* log(*n*))
/// comparisons.
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
    merge_sort(seq, begin, end, &mut |a: &S::Item, b: &S::Item| {
        compare(a, b) == Ordering::Less
    });
}

fn merge_sort<S, F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
where
    S: ForwardSequence + ?Sized,
    S::Tier: TierDispatch<S>,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    log::trace!("merge sort over a {} sequence", <S::Tier as TraversalTier>::NAME);
    <S::Tier as TierDispatch<S>>::merge_sort(seq, begin, end, is_less);
}

pub fn merge_sort_random_access<S, F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
where
    S: RandomAccessSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.distance(begin, end);
    if len <= INSERTION_THRESHOLD {
        insertion::insertion_sort_random_access(seq, begin, end, is_less);
        return;
    }

    let mid = seq.offset(begin, len / 2);

    merge_sort_random_access(seq, begin, mid, is_less);
    merge_sort_random_access(seq, mid, end, is_less);
    merge(seq, begin, mid, end, is_less);
}

/// Merge sort that only steps forward.
///
/// There is no small range cutoff here, checking the length of a range is what this tier can't
/// do cheaply. The length is counted once up front and then halved on the way down, so finding
/// a midpoint costs one walk over half the range.
pub fn merge_sort_forward<S, F>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F)
where
    S: ForwardSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq::count(seq, begin, end);
    merge_sort_forward_counted(seq, begin, end, len, is_less);
}

fn merge_sort_forward_counted<S, F>(
    seq: &mut S,
    begin: S::Pos,
    end: S::Pos,
    len: usize,
    is_less: &mut F,
) where
    S: ForwardSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if len < 2 {
        return;
    }

    let half = len / 2;
    let mid = seq::advance(seq, begin, half);

    merge_sort_forward_counted(seq, begin, mid, half, is_less);
    merge_sort_forward_counted(seq, mid, end, len - half, is_less);
    merge(seq, begin, mid, end, is_less);
}

/// Merges the adjacent sorted runs `[begin, mid)` and `[mid, end)` into one sorted run.
///
/// The right candidate is only taken if it is strictly less than the left one, which keeps
/// equal elements in their original order. The merged order is built over offsets into the
/// range and then applied to `seq` in one pass.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn merge<S, F>(seq: &mut S, begin: S::Pos, mid: S::Pos, end: S::Pos, is_less: &mut F)
where
    S: ForwardSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let left = staging::collect_positions(seq, begin, mid);
    let run_split = left.len();
    let mut positions = left;
    positions.extend(staging::collect_positions(seq, mid, end));
    let len = positions.len();

    let mut order = Vec::with_capacity(len);
    let (mut a, mut b) = (0, run_split);
    while a < run_split && b < len {
        if is_less(seq.get(positions[b]), seq.get(positions[a])) {
            order.push(b);
            b += 1;
        } else {
            order.push(a);
            a += 1;
        }
    }

    // At most one of these is non-empty.
    order.extend(a..run_split);
    order.extend(b..len);

    staging::apply_order(seq, &positions, order);
}
