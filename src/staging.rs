//! Random-access staging for sequences that lack it.
//!
//! Instead of copying values out of the caller's sequence, the staging buffer records the
//! positions of `[begin, end)` and an order over them. A random-access algorithm run on the
//! staged view only permutes that order. Writing back applies the final order to the original
//! sequence with swaps, following each permutation cycle once. This needs neither `Clone` nor
//! `Default` on the element type and touches every slot at most once per cycle.

use crate::seq::{BidirectionalSequence, ForwardSequence, RandomAccess, RandomAccessSequence};

/// Random-access view over the positions of a range in some other sequence.
///
/// `swap` only exchanges entries of the order, the underlying sequence is read-only while
/// staged.
pub struct Staged<'a, S>
where
    S: ForwardSequence + ?Sized,
{
    seq: &'a S,
    positions: Vec<S::Pos>,
    order: Vec<usize>,
}

impl<'a, S> Staged<'a, S>
where
    S: ForwardSequence + ?Sized,
{
    pub fn new(seq: &'a S, begin: S::Pos, end: S::Pos) -> Self {
        let positions = collect_positions(seq, begin, end);
        let order = (0..positions.len()).collect();

        Self {
            seq,
            positions,
            order,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Releases the borrow of the underlying sequence, keeping what is needed to write back.
    pub fn into_parts(self) -> (Vec<S::Pos>, Vec<usize>) {
        (self.positions, self.order)
    }
}

impl<S> ForwardSequence for Staged<'_, S>
where
    S: ForwardSequence + ?Sized,
{
    type Item = S::Item;
    type Pos = usize;
    type Tier = RandomAccess;

    #[inline]
    fn successor(&self, pos: usize) -> usize {
        pos + 1
    }

    #[inline]
    fn get(&self, pos: usize) -> &S::Item {
        self.seq.get(self.positions[self.order[pos]])
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.order.swap(a, b);
    }
}

impl<S> BidirectionalSequence for Staged<'_, S>
where
    S: ForwardSequence + ?Sized,
{
    #[inline]
    fn predecessor(&self, pos: usize) -> usize {
        pos - 1
    }
}

impl<S> RandomAccessSequence for Staged<'_, S>
where
    S: ForwardSequence + ?Sized,
{
    #[inline]
    fn offset(&self, pos: usize, n: usize) -> usize {
        pos + n
    }

    #[inline]
    fn distance(&self, from: usize, to: usize) -> usize {
        to - from
    }
}

/// Stages `[begin, end)`, lets `run` reorder the staged view with a random-access algorithm
/// and writes the result back into `seq`.
///
/// `run` receives the staged view and its length.
pub fn sort_staged<S, F, R>(seq: &mut S, begin: S::Pos, end: S::Pos, is_less: &mut F, run: R)
where
    S: ForwardSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
    R: FnOnce(&mut Staged<'_, S>, usize, &mut F),
{
    let (positions, order) = {
        let mut staged = Staged::new(&*seq, begin, end);
        let len = staged.len();
        log::trace!("staging {len} elements for random access");

        run(&mut staged, len, is_less);
        staged.into_parts()
    };

    apply_order(seq, &positions, order);
}

/// Collects every position of `[begin, end)` in traversal order.
pub fn collect_positions<S>(seq: &S, begin: S::Pos, end: S::Pos) -> Vec<S::Pos>
where
    S: ForwardSequence + ?Sized,
{
    let mut positions = Vec::new();
    let mut pos = begin;
    while pos != end {
        positions.push(pos);
        pos = seq.successor(pos);
    }
    positions
}

/// Rearranges the values at `positions` so that afterwards `positions[i]` holds the value that
/// was previously stored at `positions[order[i]]`.
///
/// `order` must be a permutation of `0..positions.len()`.
pub fn apply_order<S>(seq: &mut S, positions: &[S::Pos], mut order: Vec<usize>)
where
    S: ForwardSequence + ?Sized,
{
    debug_assert_eq!(positions.len(), order.len());

    // Each cycle carries the value that started at `start` along until it reaches the slot
    // that wants it. Visited slots are marked by making them fixed points.
    for start in 0..order.len() {
        let mut dst = start;
        loop {
            let src = order[dst];
            order[dst] = dst;
            if src == start {
                break;
            }

            seq.swap(positions[dst], positions[src]);
            dst = src;
        }
    }
}
