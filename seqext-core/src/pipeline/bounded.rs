//! Counting and predicate-bounded combinators.
//!
//! `Take`, `TakeWhile` and `MapWhile` end early; once they have reported
//! exhaustion they never pull their upstream again, even if it has more.

use core::iter::FusedIterator;

/// Created by [`Seq::take`](crate::Seq::take).
#[derive(Debug, Clone)]
pub struct Take<I> {
    iter: I,
    remaining: usize,
}

impl<I> Take<I> {
    pub(crate) const fn new(iter: I, n: usize) -> Self {
        Self { iter, remaining: n }
    }
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let item = self.iter.next();
        self.remaining = if item.is_some() { self.remaining - 1 } else { 0 };
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }

        let (lower, upper) = self.iter.size_hint();
        let upper = upper.map_or(self.remaining, |u| u.min(self.remaining));
        (lower.min(self.remaining), Some(upper))
    }
}

impl<I: Iterator> FusedIterator for Take<I> {}

/// Created by [`Seq::drop`](crate::Seq::drop).
///
/// The skipped prefix is consumed on the first pull, not on construction.
#[derive(Debug, Clone)]
pub struct Skip<I> {
    iter: I,
    pending: usize,
}

impl<I> Skip<I> {
    pub(crate) const fn new(iter: I, n: usize) -> Self {
        Self { iter, pending: n }
    }
}

impl<I: Iterator> Iterator for Skip<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let n = core::mem::take(&mut self.pending);
        if n > 0 && self.iter.nth(n - 1).is_none() {
            return None;
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_sub(self.pending),
            upper.map(|u| u.saturating_sub(self.pending)),
        )
    }
}

impl<I: FusedIterator> FusedIterator for Skip<I> {}

/// Created by [`Seq::take_while`](crate::Seq::take_while).
#[derive(Debug, Clone)]
pub struct TakeWhile<I, P> {
    iter: I,
    predicate: P,
    done: bool,
}

impl<I, P> TakeWhile<I, P> {
    pub(crate) const fn new(iter: I, predicate: P) -> Self {
        Self {
            iter,
            predicate,
            done: false,
        }
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.iter.next() {
            Some(item) if (self.predicate)(&item) => Some(item),
            // The boundary item is dropped here, it is not put back.
            _ => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

impl<I, P> FusedIterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// Created by [`Seq::drop_while`](crate::Seq::drop_while).
///
/// The predicate is dropped as soon as it first fails, and that failing item
/// is the first one yielded.
#[derive(Debug, Clone)]
pub struct DropWhile<I, P> {
    iter: I,
    predicate: Option<P>,
}

impl<I, P> DropWhile<I, P> {
    pub(crate) const fn new(iter: I, predicate: P) -> Self {
        Self {
            iter,
            predicate: Some(predicate),
        }
    }
}

impl<I, P> Iterator for DropWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.predicate.take() {
            Some(mut predicate) => self.iter.find(|item| !predicate(item)),
            None => self.iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        if self.predicate.is_some() {
            (0, upper)
        } else {
            (lower, upper)
        }
    }
}

impl<I, P> FusedIterator for DropWhile<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// Created by [`Seq::map_while`](crate::Seq::map_while).
#[derive(Debug, Clone)]
pub struct MapWhile<I, F> {
    iter: I,
    f: F,
    done: bool,
}

impl<I, F> MapWhile<I, F> {
    pub(crate) const fn new(iter: I, f: F) -> Self {
        Self { iter, f, done: false }
    }
}

impl<I, F, B> Iterator for MapWhile<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Option<B>,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mapped = self.iter.next().and_then(&mut self.f);
        self.done = mapped.is_none();
        mapped
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

impl<I, F, B> FusedIterator for MapWhile<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Option<B>,
{
}
