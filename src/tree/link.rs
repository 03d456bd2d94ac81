// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Persistent singly-linked lists of line ids.
//!
//! A [`Link`] is what a prefix tree hands back when asked "which lines
//! have this content?". New ids are pushed on the front, and the old list
//! stays valid as the tail of the new one, so returning the list that was
//! stored *before* an insertion costs one reference count bump.

use std::sync::Arc;

#[derive(Debug)]
struct Cell {
    datum: usize,
    next: Link,
}

/// An immutable, shareable list of ids. Cloning is O(1).
#[derive(Debug, Clone, Default)]
pub struct Link(Option<Arc<Cell>>);

impl Link {
    /// The empty list.
    pub const fn empty() -> Self {
        Link(None)
    }

    /// A new list with `datum` in front of `self`. `self` is unchanged.
    pub fn prepend(&self, datum: usize) -> Self {
        Link(Some(Arc::new(Cell {
            datum,
            next: self.clone(),
        })))
    }

    /// The first id, which is the most recently prepended one.
    pub fn datum(&self) -> Option<usize> {
        self.0.as_ref().map(|cell| cell.datum)
    }

    /// The list without its first id.
    pub fn next(&self) -> Option<&Link> {
        self.0.as_ref().map(|cell| &cell.next)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Number of ids in the list (walks the chain).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> LinkIter<'_> {
        LinkIter {
            current: self.0.as_deref(),
        }
    }
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Link {}

impl Drop for Link {
    // Unlink iteratively so that very long chains do not overflow the stack.
    fn drop(&mut self) {
        let mut next = self.0.take();
        while let Some(cell) = next {
            match Arc::try_unwrap(cell) {
                Ok(mut cell) => next = cell.next.0.take(),
                Err(_) => break,
            }
        }
    }
}

impl<'a> IntoIterator for &'a Link {
    type Item = usize;
    type IntoIter = LinkIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<usize> for Link {
    /// Builds a list whose front is the last id yielded.
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Link::empty(), |link, datum| link.prepend(datum))
    }
}

/// Iterator over the ids of a [`Link`], front to back.
pub struct LinkIter<'a> {
    current: Option<&'a Cell>,
}

impl Iterator for LinkIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let cell = self.current?;
        self.current = cell.next.0.as_deref();
        Some(cell.datum)
    }
}
