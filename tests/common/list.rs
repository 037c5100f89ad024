//! Linked lists whose positions are node handles, not offsets.
//!
//! Nodes live in an arena in reverse list order, so walking the list never matches walking the
//! arena. A position of `None` is the end of the list.

use cursor_sort::{Bidirectional, BidirectionalSequence, Forward, ForwardSequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodePos(Option<usize>);

impl NodePos {
    fn node(self) -> usize {
        self.0.expect("the end position has no node")
    }
}

// --- Forward ---

#[derive(Debug)]
pub struct ForwardList<T> {
    values: Vec<T>,
    next: Vec<Option<usize>>,
    head: Option<usize>,
}

impl<T> ForwardList<T> {
    pub fn begin(&self) -> NodePos {
        NodePos(self.head)
    }

    pub fn end(&self) -> NodePos {
        NodePos(None)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        std::iter::successors(self.head, move |&node| self.next[node])
            .map(|node| &self.values[node])
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut list = Self {
            values: Vec::with_capacity(items.len()),
            next: Vec::with_capacity(items.len()),
            head: None,
        };

        for value in items.into_iter().rev() {
            let node = list.values.len();
            list.values.push(value);
            list.next.push(list.head);
            list.head = Some(node);
        }

        list
    }
}

impl<T> ForwardSequence for ForwardList<T> {
    type Item = T;
    type Pos = NodePos;
    type Tier = Forward;

    fn successor(&self, pos: NodePos) -> NodePos {
        NodePos(self.next[pos.node()])
    }

    fn get(&self, pos: NodePos) -> &T {
        &self.values[pos.node()]
    }

    fn swap(&mut self, a: NodePos, b: NodePos) {
        self.values.swap(a.node(), b.node());
    }
}

// --- Bidirectional ---

#[derive(Debug)]
pub struct BidiList<T> {
    values: Vec<T>,
    next: Vec<Option<usize>>,
    prev: Vec<Option<usize>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> BidiList<T> {
    pub fn begin(&self) -> NodePos {
        NodePos(self.head)
    }

    pub fn end(&self) -> NodePos {
        NodePos(None)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        std::iter::successors(self.head, move |&node| self.next[node])
            .map(|node| &self.values[node])
    }

    pub fn iter_rev(&self) -> impl Iterator<Item = &T> + '_ {
        std::iter::successors(self.tail, move |&node| self.prev[node])
            .map(|node| &self.values[node])
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for BidiList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut list = Self {
            values: Vec::with_capacity(items.len()),
            next: Vec::with_capacity(items.len()),
            prev: Vec::with_capacity(items.len()),
            head: None,
            tail: None,
        };

        for value in items.into_iter().rev() {
            let node = list.values.len();
            list.values.push(value);
            list.next.push(list.head);
            list.prev.push(None);

            match list.head {
                Some(old_head) => list.prev[old_head] = Some(node),
                None => list.tail = Some(node),
            }
            list.head = Some(node);
        }

        list
    }
}

impl<T> ForwardSequence for BidiList<T> {
    type Item = T;
    type Pos = NodePos;
    type Tier = Bidirectional;

    fn successor(&self, pos: NodePos) -> NodePos {
        NodePos(self.next[pos.node()])
    }

    fn get(&self, pos: NodePos) -> &T {
        &self.values[pos.node()]
    }

    fn swap(&mut self, a: NodePos, b: NodePos) {
        self.values.swap(a.node(), b.node());
    }
}

impl<T> BidirectionalSequence for BidiList<T> {
    fn predecessor(&self, pos: NodePos) -> NodePos {
        match pos.0 {
            Some(node) => NodePos(self.prev[node]),
            None => NodePos(self.tail),
        }
    }
}
