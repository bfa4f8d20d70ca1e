//! Buffering combinators: chunks, sliding windows, adjacent groups and
//! cycles.
//!
//! These are the only stages that hold more than one item at a time.
//! `Chunks`, `Windows` and `Group` keep at most one group's worth; `Cycle`
//! keeps a copy of the whole upstream so it can replay it.

use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::foundation::source::preallocation;

// ============================================================================
// Chunks
// ============================================================================

/// Created by [`Seq::chunks`](crate::Seq::chunks).
///
/// Chunks never overlap. Only the final one may hold fewer than `size`
/// items, and an exhausted upstream never produces an empty chunk.
#[derive(Debug, Clone)]
pub struct Chunks<I> {
    iter: I,
    size: usize,
}

impl<I: Iterator> Chunks<I> {
    pub(crate) fn new(iter: I, size: usize) -> Self {
        debug_assert!(size > 0, "Chunk size must be greater than 0");
        Self { iter, size }
    }

    /// Number of items in every chunk but the last.
    pub const fn chunk_size(&self) -> usize {
        self.size
    }
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.iter.next()?;
        let expected = self.iter.size_hint().0.saturating_add(1);
        let mut chunk = Vec::with_capacity(preallocation(self.size.min(expected)));
        chunk.push(first);
        chunk.extend(self.iter.by_ref().take(self.size - 1));
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (lower.div_ceil(self.size), upper.map(|u| u.div_ceil(self.size)))
    }
}

impl<I: FusedIterator> FusedIterator for Chunks<I> {}

// ============================================================================
// Sliding windows
// ============================================================================

/// Created by [`Seq::windows`](crate::Seq::windows).
///
/// Keeps a ring buffer of exactly `size` items. Each window handed out is an
/// independent `Vec` copied from the buffer, never the buffer itself.
#[derive(Debug, Clone)]
pub struct Windows<I: Iterator> {
    iter: I,
    size: usize,
    buffer: VecDeque<I::Item>,
}

impl<I: Iterator> Windows<I> {
    pub(crate) fn new(iter: I, size: usize) -> Self {
        debug_assert!(size > 0, "Window size must be greater than 0");
        let capacity = preallocation(size.min(iter.size_hint().0));
        Self {
            iter,
            size,
            buffer: VecDeque::with_capacity(capacity),
        }
    }

    /// Number of items in every window.
    pub const fn window_size(&self) -> usize {
        self.size
    }
}

impl<I> Iterator for Windows<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.buffer.len() == self.size {
            let item = self.iter.next()?;
            self.buffer.pop_front();
            self.buffer.push_back(item);
        } else {
            // First window: a short upstream leaves a partial buffer and yields nothing.
            while self.buffer.len() < self.size {
                self.buffer.push_back(self.iter.next()?);
            }
        }

        Some(self.buffer.iter().cloned().collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let buffered = self.buffer.len();
        let size = self.size;

        let remaining = |n: usize| {
            if buffered == size {
                n
            } else {
                n.saturating_add(buffered).saturating_sub(size - 1)
            }
        };

        (remaining(lower), upper.map(remaining))
    }
}

impl<I> FusedIterator for Windows<I>
where
    I: FusedIterator,
    I::Item: Clone,
{
}

// ============================================================================
// Adjacent grouping
// ============================================================================

/// Created by [`Seq::group`](crate::Seq::group).
///
/// The item that closes a group is held back as the seed of the next one.
#[derive(Debug, Clone)]
pub struct Group<I: Iterator, F> {
    iter: I,
    same: F,
    pending: Option<I::Item>,
}

impl<I: Iterator, F> Group<I, F> {
    pub(crate) const fn new(iter: I, same: F) -> Self {
        Self {
            iter,
            same,
            pending: None,
        }
    }
}

impl<I, F> Iterator for Group<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.pending.take().or_else(|| self.iter.next())?;
        let mut group = vec![first];

        for item in self.iter.by_ref() {
            let joins = group.last().is_some_and(|last| (self.same)(last, &item));
            if !joins {
                self.pending = Some(item);
                break;
            }
            group.push(item);
        }

        Some(group)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let pending = usize::from(self.pending.is_some());
        (
            usize::from(lower > 0 || pending > 0),
            upper.and_then(|u| u.checked_add(pending)),
        )
    }
}

impl<I, F> FusedIterator for Group<I, F>
where
    I: FusedIterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
}

// ============================================================================
// Cycle
// ============================================================================

/// Endless repetition created by [`Seq::cycle`](crate::Seq::cycle).
///
/// The first pass forwards upstream items and records them; every later pass
/// replays the recording.
#[derive(Debug, Clone)]
pub struct Cycle<I: Iterator> {
    iter: I,
    cache: Vec<I::Item>,
    replaying: bool,
    index: usize,
}

impl<I: Iterator> Cycle<I> {
    pub(crate) fn new(iter: I) -> Self {
        let capacity = preallocation(iter.size_hint().0);
        Self {
            iter,
            cache: Vec::with_capacity(capacity),
            replaying: false,
            index: 0,
        }
    }
}

impl<I> Iterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.replaying {
            if let Some(item) = self.iter.next() {
                self.cache.push(item.clone());
                return Some(item);
            }
            self.replaying = true;
        }

        let item = self.cache.get(self.index)?.clone();
        self.index = (self.index + 1) % self.cache.len();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.replaying {
            if self.cache.is_empty() {
                (0, Some(0))
            } else {
                (usize::MAX, None)
            }
        } else if self.cache.is_empty() {
            // Nothing seen yet: either empty or infinite.
            let (lower, upper) = self.iter.size_hint();
            if lower > 0 {
                (usize::MAX, None)
            } else if upper == Some(0) {
                (0, Some(0))
            } else {
                (0, None)
            }
        } else {
            (usize::MAX, None)
        }
    }
}

impl<I> FusedIterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
}
