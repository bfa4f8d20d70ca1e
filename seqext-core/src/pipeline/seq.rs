//! The sequence handle and its combinator methods.
//!
//! A [`Seq`] is the unconsumed remainder of an ordered series of values.
//! Every combinator method takes the handle by value and returns a new one
//! that exclusively owns the old one, so a single source can never be pulled
//! from two places. Terminal operations live in
//! [`terminal`](crate::pipeline::terminal).

use core::fmt;
use core::iter::FusedIterator;

use crate::foundation::error::{check_size, violated, Result};
use crate::foundation::source::Source;
use crate::pipeline::bounded::{DropWhile, MapWhile, Skip, Take, TakeWhile};
use crate::pipeline::multi::{Chain, ChainAll, FlatMap, Product, Zip, ZipWith};
use crate::pipeline::stateless::{Filter, FilterMap, Intersperse, Map, Tap};
use crate::pipeline::windowed::{Chunks, Cycle, Group, Windows};

/// A lazily evaluated, single-pass sequence.
///
/// `Seq` implements [`Iterator`], so it works with `for` loops and every
/// standard consumer (`sum`, `collect`, ...). Its inherent methods shadow the
/// standard adapters of the same name with the semantics documented here.
///
/// ```rust
/// use seqext_core::prelude::*;
///
/// let groups = vec![1, 1, 2, 3, 3, 3]
///     .into_seq()
///     .group(|a, b| a == b)
///     .map(|g| g.len())
///     .to_vec();
/// assert_eq!(groups, vec![2, 1, 3]);
/// ```
#[derive(Debug, Clone)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Seq<I> {
    iter: I,
}

impl<I: Iterator> Seq<Source<I>> {
    /// Adapts any iterable into a sequence.
    pub fn new<T>(iterable: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: Source::new(iterable.into_iter()),
        }
    }
}

impl<I: Iterator> Seq<I> {
    pub(crate) const fn wrap(iter: I) -> Self {
        Self { iter }
    }

    /// Unwraps the underlying iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }

    /// Borrows the sequence for a combinator or terminal without giving it
    /// up; whatever the borrowed pipeline leaves unconsumed stays pullable.
    ///
    /// ```rust
    /// use seqext_core::prelude::*;
    ///
    /// let mut seq = range(0, 5);
    /// assert_eq!(seq.by_ref().take(2).to_vec(), vec![0, 1]);
    /// assert_eq!(seq.to_vec(), vec![2, 3, 4]);
    /// ```
    pub fn by_ref(&mut self) -> Seq<&mut I> {
        Seq::wrap(&mut self.iter)
    }

    // ------------------------------------------------------------------
    // Stateless combinators
    // ------------------------------------------------------------------

    /// Transforms each item with `f`.
    pub fn map<B, F>(self, f: F) -> Seq<Map<I, F>>
    where
        F: FnMut(I::Item) -> B,
    {
        Seq::wrap(Map::new(self.iter, f))
    }

    /// Keeps the items for which `predicate` holds.
    pub fn filter<P>(self, predicate: P) -> Seq<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Seq::wrap(Filter::new(self.iter, predicate))
    }

    /// Maps each item to an optional value and keeps the present ones.
    pub fn filter_map<B, F>(self, f: F) -> Seq<FilterMap<I, F>>
    where
        F: FnMut(I::Item) -> Option<B>,
    {
        Seq::wrap(FilterMap::new(self.iter, f))
    }

    /// Calls `f` on every item, just before the item is yielded.
    pub fn tap<F>(self, f: F) -> Seq<Tap<I, F>>
    where
        F: FnMut(&I::Item),
    {
        Seq::wrap(Tap::new(self.iter, f))
    }

    /// Emits a `trace` event labelled `label` for every item passing through.
    pub fn debug(self, label: &'static str) -> Seq<Tap<I, impl FnMut(&I::Item)>>
    where
        I::Item: fmt::Debug,
    {
        self.tap(move |item| tracing::trace!(label, ?item, "seq item"))
    }

    /// Places a clone of `separator` between every two adjacent items.
    pub fn intersperse(self, separator: I::Item) -> Seq<Intersperse<I>>
    where
        I::Item: Clone,
    {
        Seq::wrap(Intersperse::new(self.iter, separator))
    }

    // ------------------------------------------------------------------
    // Bounded combinators
    // ------------------------------------------------------------------

    /// Yields at most `n` items.
    pub fn take(self, n: usize) -> Seq<Take<I>> {
        Seq::wrap(Take::new(self.iter, n))
    }

    /// Discards the first `n` items (all of them if there are fewer).
    pub fn drop(self, n: usize) -> Seq<Skip<I>> {
        Seq::wrap(Skip::new(self.iter, n))
    }

    /// Yields items while `predicate` holds.
    ///
    /// The first item failing the predicate is consumed and discarded.
    pub fn take_while<P>(self, predicate: P) -> Seq<TakeWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Seq::wrap(TakeWhile::new(self.iter, predicate))
    }

    /// Discards items while `predicate` holds, then yields the rest,
    /// starting with the first item that failed it.
    pub fn drop_while<P>(self, predicate: P) -> Seq<DropWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Seq::wrap(DropWhile::new(self.iter, predicate))
    }

    /// Yields mapped items until `f` first returns `None`.
    ///
    /// The item that produced `None` is consumed and discarded.
    pub fn map_while<B, F>(self, f: F) -> Seq<MapWhile<I, F>>
    where
        F: FnMut(I::Item) -> Option<B>,
    {
        Seq::wrap(MapWhile::new(self.iter, f))
    }

    // ------------------------------------------------------------------
    // Windowed combinators
    // ------------------------------------------------------------------

    /// Groups items into `Vec`s of `size`; the last may be shorter.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    pub fn chunks(self, size: usize) -> Seq<Chunks<I>> {
        self.try_chunks(size).unwrap_or_else(|error| violated(error))
    }

    /// Fallible form of [`chunks`](Self::chunks).
    pub fn try_chunks(self, size: usize) -> Result<Seq<Chunks<I>>> {
        let size = check_size("chunk", size)?;
        Ok(Seq::wrap(Chunks::new(self.iter, size)))
    }

    /// Yields every run of `size` consecutive items as a fresh `Vec`.
    ///
    /// A sequence shorter than `size` yields nothing.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    pub fn windows(self, size: usize) -> Seq<Windows<I>>
    where
        I::Item: Clone,
    {
        self.try_windows(size).unwrap_or_else(|error| violated(error))
    }

    /// Fallible form of [`windows`](Self::windows).
    pub fn try_windows(self, size: usize) -> Result<Seq<Windows<I>>>
    where
        I::Item: Clone,
    {
        let size = check_size("window", size)?;
        Ok(Seq::wrap(Windows::new(self.iter, size)))
    }

    /// Groups runs of adjacent items for which `same(previous, current)`
    /// holds.
    pub fn group<F>(self, same: F) -> Seq<Group<I, F>>
    where
        F: FnMut(&I::Item, &I::Item) -> bool,
    {
        Seq::wrap(Group::new(self.iter, same))
    }

    /// Repeats the sequence forever.
    ///
    /// Items are cached during the first pass and replayed afterwards. An
    /// empty sequence stays empty.
    pub fn cycle(self) -> Seq<Cycle<I>>
    where
        I::Item: Clone,
    {
        Seq::wrap(Cycle::new(self.iter))
    }

    // ------------------------------------------------------------------
    // Multi-source combinators
    // ------------------------------------------------------------------

    /// Continues with `other` once this sequence is exhausted.
    ///
    /// `other` is not turned into an iterator until it is needed.
    pub fn chain<U>(self, other: U) -> Seq<Chain<I, U>>
    where
        U: IntoIterator<Item = I::Item>,
    {
        Seq::wrap(Chain::new(self.iter, other))
    }

    /// Continues with each of `sources` in order.
    pub fn chain_all<S>(self, sources: S) -> Seq<ChainAll<I, S::IntoIter>>
    where
        S: IntoIterator,
        S::Item: IntoIterator<Item = I::Item>,
    {
        Seq::wrap(ChainAll::new(self.iter, sources.into_iter()))
    }

    /// Pairs items with those of `other`, stopping at the shorter side.
    pub fn zip<U>(self, other: U) -> Seq<Zip<I, Source<U::IntoIter>>>
    where
        U: IntoIterator,
    {
        Seq::wrap(Zip::new(self.iter, Source::new(other.into_iter())))
    }

    /// Combines items with those of `other` through `f`, stopping at the
    /// shorter side.
    pub fn zip_with<U, F, B>(self, other: U, f: F) -> Seq<ZipWith<I, Source<U::IntoIter>, F>>
    where
        U: IntoIterator,
        F: FnMut(I::Item, U::Item) -> B,
    {
        Seq::wrap(ZipWith::new(self.iter, Source::new(other.into_iter()), f))
    }

    /// Cartesian product with `other`.
    ///
    /// `other` is collected immediately so it can be replayed for every item
    /// of this sequence; this sequence itself stays lazy.
    pub fn product<U>(self, other: U) -> Seq<Product<I, U::Item>>
    where
        U: IntoIterator,
        I::Item: Clone,
        U::Item: Clone,
    {
        Seq::wrap(Product::new(self.iter, other.into_iter().collect()))
    }

    /// Maps every item to an iterable and yields its items in turn.
    pub fn flat_map<U, F>(self, f: F) -> Seq<FlatMap<I, F, U>>
    where
        U: IntoIterator,
        F: FnMut(I::Item) -> U,
    {
        Seq::wrap(FlatMap::new(self.iter, f))
    }
}

impl<I: Iterator> Iterator for Seq<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: FusedIterator> FusedIterator for Seq<I> {}
