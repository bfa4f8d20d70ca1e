//! Forwarding combinators: each pull reaches upstream at most until one
//! item is accepted, and nothing is buffered beyond a single pending item.

use core::iter::FusedIterator;

/// Streaming map created by [`Seq::map`](crate::Seq::map).
#[derive(Debug, Clone)]
pub struct Map<I, F> {
    iter: I,
    f: F,
}

impl<I, F> Map<I, F> {
    pub(crate) const fn new(iter: I, f: F) -> Self {
        Self { iter, f }
    }
}

impl<I, F, B> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(&mut self.f)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F, B> FusedIterator for Map<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> B,
{
}

/// Created by [`Seq::filter`](crate::Seq::filter).
#[derive(Debug, Clone)]
pub struct Filter<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> Filter<I, P> {
    pub(crate) const fn new(iter: I, predicate: P) -> Self {
        Self { iter, predicate }
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, P> FusedIterator for Filter<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// Map-and-filter in one pass, created by
/// [`Seq::filter_map`](crate::Seq::filter_map).
///
/// Items mapping to `None` are discarded and the next upstream item is
/// tried, so one pull may consume several upstream items.
#[derive(Debug, Clone)]
pub struct FilterMap<I, F> {
    iter: I,
    f: F,
}

impl<I, F> FilterMap<I, F> {
    pub(crate) const fn new(iter: I, f: F) -> Self {
        Self { iter, f }
    }
}

impl<I, F, B> Iterator for FilterMap<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Option<B>,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.iter.next() {
                Some(item) => {
                    if let Some(result) = (self.f)(item) {
                        return Some(result);
                    }
                    // Continue if f returned None (filter effect)
                }
                None => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, F, B> FusedIterator for FilterMap<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> Option<B>,
{
}

/// Created by [`Seq::tap`](crate::Seq::tap).
#[derive(Debug, Clone)]
pub struct Tap<I, F> {
    iter: I,
    f: F,
}

impl<I, F> Tap<I, F> {
    pub(crate) const fn new(iter: I, f: F) -> Self {
        Self { iter, f }
    }
}

impl<I, F> Iterator for Tap<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item),
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        (self.f)(&item);
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F> FusedIterator for Tap<I, F>
where
    I: FusedIterator,
    F: FnMut(&I::Item),
{
}

/// Separator-inserting iterator created by
/// [`Seq::intersperse`](crate::Seq::intersperse).
///
/// A separator is only produced once the item following it has been pulled,
/// so a trailing separator is impossible.
#[derive(Debug, Clone)]
pub struct Intersperse<I: Iterator> {
    iter: I,
    separator: I::Item,
    started: bool,
    pending: Option<I::Item>,
}

impl<I: Iterator> Intersperse<I> {
    pub(crate) const fn new(iter: I, separator: I::Item) -> Self {
        Self {
            iter,
            separator,
            started: false,
            pending: None,
        }
    }
}

impl<I> Iterator for Intersperse<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.pending.take() {
            return Some(item);
        }

        let item = self.iter.next()?;
        if self.started {
            self.pending = Some(item);
            Some(self.separator.clone())
        } else {
            self.started = true;
            Some(item)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let pending = usize::from(self.pending.is_some());
        let started = self.started;

        // Before the first item, n upstream items produce 2n - 1 outputs.
        let expand = |n: usize| {
            let doubled = n.checked_mul(2)?;
            let base = if started { doubled } else { doubled.saturating_sub(1) };
            base.checked_add(pending)
        };

        (expand(lower).unwrap_or(usize::MAX), upper.and_then(expand))
    }
}

impl<I> FusedIterator for Intersperse<I>
where
    I: FusedIterator,
    I::Item: Clone,
{
}
