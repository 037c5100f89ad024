//! Positions, sequences and traversal tiers.
//!
//! A sequence hands out opaque positions. Positions address slots, not values: swapping two
//! positions exchanges the values stored in them while the positions themselves stay valid.
//! This is what allows every algorithm to keep `begin`, `mid` and `end` around while it
//! reorders the range in between.

use std::collections::VecDeque;
use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Static traversal capability of a sequence type.
///
/// The tiers form a chain, `Forward` ⊂ `Bidirectional` ⊂ `RandomAccess`. A sequence names its
/// tier via [`ForwardSequence::Tier`] and the sort entry points pick their implementation
/// from it at compile time.
pub trait TraversalTier: sealed::Sealed + fmt::Debug + Copy + Default + 'static {
    const NAME: &'static str;
}

/// Single pass traversal, step forward and compare positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Forward;

/// Forward traversal plus stepping backward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bidirectional;

/// Bidirectional traversal plus O(1) offset and distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomAccess;

impl sealed::Sealed for Forward {}
impl sealed::Sealed for Bidirectional {}
impl sealed::Sealed for RandomAccess {}

impl TraversalTier for Forward {
    const NAME: &'static str = "forward";
}

impl TraversalTier for Bidirectional {
    const NAME: &'static str = "bidirectional";
}

impl TraversalTier for RandomAccess {
    const NAME: &'static str = "random_access";
}

/// A sequence that can be walked front to back.
///
/// `successor` is never called on the end position of a range. `swap` may be called with
/// `a == b`.
pub trait ForwardSequence {
    type Item;
    type Pos: Copy + Eq + fmt::Debug;
    type Tier: TraversalTier;

    fn successor(&self, pos: Self::Pos) -> Self::Pos;

    fn get(&self, pos: Self::Pos) -> &Self::Item;

    fn swap(&mut self, a: Self::Pos, b: Self::Pos);
}

/// A sequence that can also be walked back to front.
///
/// `predecessor` is never called on the begin position of a range.
pub trait BidirectionalSequence: ForwardSequence {
    fn predecessor(&self, pos: Self::Pos) -> Self::Pos;
}

/// A sequence with constant time offset and distance.
pub trait RandomAccessSequence: BidirectionalSequence {
    /// Position `n` steps after `pos`.
    fn offset(&self, pos: Self::Pos, n: usize) -> Self::Pos;

    /// Number of steps from `from` to `to`. `to` must be reachable from `from`.
    fn distance(&self, from: Self::Pos, to: Self::Pos) -> usize;
}

/// Counts the elements of `[begin, end)` by stepping through it.
pub fn count<S>(seq: &S, begin: S::Pos, end: S::Pos) -> usize
where
    S: ForwardSequence + ?Sized,
{
    let mut len = 0;
    let mut pos = begin;
    while pos != end {
        pos = seq.successor(pos);
        len += 1;
    }
    len
}

/// Steps `n` times forward from `pos`.
pub fn advance<S>(seq: &S, mut pos: S::Pos, n: usize) -> S::Pos
where
    S: ForwardSequence + ?Sized,
{
    for _ in 0..n {
        pos = seq.successor(pos);
    }
    pos
}

// --- Slices and std containers ---

impl<T> ForwardSequence for [T] {
    type Item = T;
    type Pos = usize;
    type Tier = RandomAccess;

    #[inline]
    fn successor(&self, pos: usize) -> usize {
        pos + 1
    }

    #[inline]
    fn get(&self, pos: usize) -> &T {
        &self[pos]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T> BidirectionalSequence for [T] {
    #[inline]
    fn predecessor(&self, pos: usize) -> usize {
        pos - 1
    }
}

impl<T> RandomAccessSequence for [T] {
    #[inline]
    fn offset(&self, pos: usize, n: usize) -> usize {
        pos + n
    }

    #[inline]
    fn distance(&self, from: usize, to: usize) -> usize {
        to - from
    }
}

impl<T> ForwardSequence for Vec<T> {
    type Item = T;
    type Pos = usize;
    type Tier = RandomAccess;

    #[inline]
    fn successor(&self, pos: usize) -> usize {
        pos + 1
    }

    #[inline]
    fn get(&self, pos: usize) -> &T {
        &self[pos]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> BidirectionalSequence for Vec<T> {
    #[inline]
    fn predecessor(&self, pos: usize) -> usize {
        pos - 1
    }
}

impl<T> RandomAccessSequence for Vec<T> {
    #[inline]
    fn offset(&self, pos: usize, n: usize) -> usize {
        pos + n
    }

    #[inline]
    fn distance(&self, from: usize, to: usize) -> usize {
        to - from
    }
}

impl<T> ForwardSequence for VecDeque<T> {
    type Item = T;
    type Pos = usize;
    type Tier = RandomAccess;

    #[inline]
    fn successor(&self, pos: usize) -> usize {
        pos + 1
    }

    #[inline]
    fn get(&self, pos: usize) -> &T {
        &self[pos]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

impl<T> BidirectionalSequence for VecDeque<T> {
    #[inline]
    fn predecessor(&self, pos: usize) -> usize {
        pos - 1
    }
}

impl<T> RandomAccessSequence for VecDeque<T> {
    #[inline]
    fn offset(&self, pos: usize, n: usize) -> usize {
        pos + n
    }

    #[inline]
    fn distance(&self, from: usize, to: usize) -> usize {
        to - from
    }
}

// --- Capability restricted views ---

/// Exposes a slice as a forward-only sequence.
///
/// Sorting through this view runs the forward tier implementation of every algorithm, even
/// though the underlying storage would allow more.
#[derive(Debug)]
pub struct ForwardView<'a, T> {
    data: &'a mut [T],
}

impl<'a, T> ForwardView<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> ForwardSequence for ForwardView<'_, T> {
    type Item = T;
    type Pos = usize;
    type Tier = Forward;

    #[inline]
    fn successor(&self, pos: usize) -> usize {
        pos + 1
    }

    #[inline]
    fn get(&self, pos: usize) -> &T {
        &self.data[pos]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }
}

/// Exposes a slice as a bidirectional sequence without offset or distance.
#[derive(Debug)]
pub struct BidirectionalView<'a, T> {
    data: &'a mut [T],
}

impl<'a, T> BidirectionalView<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> ForwardSequence for BidirectionalView<'_, T> {
    type Item = T;
    type Pos = usize;
    type Tier = Bidirectional;

    #[inline]
    fn successor(&self, pos: usize) -> usize {
        pos + 1
    }

    #[inline]
    fn get(&self, pos: usize) -> &T {
        &self.data[pos]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }
}

impl<T> BidirectionalSequence for BidirectionalView<'_, T> {
    #[inline]
    fn predecessor(&self, pos: usize) -> usize {
        pos - 1
    }
}
