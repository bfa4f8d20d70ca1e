//! Uniform source adaptation.
//!
//! Whatever a sequence starts from (a slice, a `Vec`, a standard iterator,
//! another [`Seq`], a generator closure) it is normalized into a
//! [`Source`]: a forward-only cursor that stays exhausted once it has
//! reported exhaustion. Everything downstream relies on that.

use core::fmt;
use core::iter::FusedIterator;

use crate::pipeline::seq::Seq;

/// Fused pull cursor over an adapted iterator.
///
/// The upstream iterator is dropped the first time it returns `None`, so
/// later pulls never reach it again.
#[derive(Clone)]
pub struct Source<I> {
    state: Option<I>,
}

impl<I> Source<I> {
    /// Wraps `iter`.
    pub const fn new(iter: I) -> Self {
        Self { state: Some(iter) }
    }

    /// Returns `true` once the source has reported exhaustion.
    pub const fn is_exhausted(&self) -> bool {
        self.state.is_none()
    }
}

impl<I: Iterator> Iterator for Source<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.state.as_mut()?.next();
        if item.is_none() {
            self.state = None;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.state.as_ref().map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<I: Iterator> FusedIterator for Source<I> {}

impl<I> fmt::Debug for Source<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
            .field("exhausted", &self.is_exhausted())
            .finish()
    }
}

/// Largest buffer reserved up front from a size hint or a requested size.
///
/// Buffers past this grow as items actually arrive, so an oversized hint
/// or `chunks`/`windows` size never turns into an allocation failure.
const MAX_PREALLOCATION: usize = 1 << 12;

/// Clamps a speculative capacity to [`MAX_PREALLOCATION`].
pub(crate) const fn preallocation(wanted: usize) -> usize {
    if wanted < MAX_PREALLOCATION {
        wanted
    } else {
        MAX_PREALLOCATION
    }
}

/// Conversion of any iterable into a [`Seq`].
///
/// Blanket-implemented for every [`IntoIterator`]; borrowing containers
/// (`&[T]`, `&Vec<T>`) are adapted through their borrowing cursor, so no
/// backing storage is copied.
pub trait IntoSeq: IntoIterator + Sized {
    /// Adapts `self` into a sequence handle.
    fn into_seq(self) -> Seq<Source<Self::IntoIter>> {
        Seq::new(self)
    }
}

impl<T: IntoIterator> IntoSeq for T {}

/// Generator-backed iterator created by [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<F, T> Iterator for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        (self.f)()
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Adapts a generator closure into a sequence.
///
/// The closure is called once per pull. After its first `None` it is never
/// called again, even if it would have produced more values.
///
/// ```rust
/// use seqext_core::prelude::*;
///
/// let mut n = 0;
/// let powers = from_fn(move || {
///     n += 1;
///     (n <= 4).then(|| 1 << n)
/// });
/// assert_eq!(powers.to_vec(), vec![2, 4, 8, 16]);
/// ```
pub fn from_fn<T, F>(f: F) -> Seq<Source<FromFn<F>>>
where
    F: FnMut() -> Option<T>,
{
    Seq::new(FromFn { f })
}
