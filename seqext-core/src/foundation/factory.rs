//! Free factory functions and the `debug` helper.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::foundation::source::Source;
use crate::pipeline::seq::Seq;

/// Single-element iterator created by [`once`].
#[derive(Debug, Clone)]
pub struct Once<T> {
    value: Option<T>,
}

impl<T> Iterator for Once<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.value.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.value.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Once<T> {}
impl<T> FusedIterator for Once<T> {}

/// Creates a sequence holding exactly `value`.
pub fn once<T>(value: T) -> Seq<Source<Once<T>>> {
    Seq::new(Once { value: Some(value) })
}

/// Iterator that never yields, created by [`empty`].
pub struct Empty<T>(PhantomData<fn() -> T>);

impl<T> Iterator for Empty<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

impl<T> ExactSizeIterator for Empty<T> {}
impl<T> FusedIterator for Empty<T> {}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        Self(PhantomData)
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

/// Creates a sequence with no elements.
pub fn empty<T>() -> Seq<Source<Empty<T>>> {
    Seq::new(Empty(PhantomData))
}

/// Ascending integer iterator created by [`range`].
#[derive(Debug, Clone)]
pub struct Range {
    current: i64,
    end: Option<i64>,
}

impl Iterator for Range {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.end.is_some_and(|end| self.current >= end) {
            return None;
        }
        let value = self.current;
        // An unbounded range stops at i64::MAX instead of wrapping.
        match self.current.checked_add(1) {
            Some(next) => self.current = next,
            None => self.end = Some(value),
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Without an end the range still stops after i64::MAX.
        let end = self.end.map_or(i128::from(i64::MAX) + 1, i128::from);
        let remaining = (end - i128::from(self.current)).max(0);
        match usize::try_from(remaining) {
            Ok(len) => (len, Some(len)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Range {}

/// Creates the ascending sequence `start, start + 1, ...`.
///
/// With `end`, the sequence stops before `end` (empty when `end <= start`).
/// Without it the sequence is unbounded and must be limited with `take`,
/// `take_while` or an early-exit terminal before anything drains it.
///
/// ```rust
/// use seqext_core::prelude::*;
///
/// assert_eq!(range(1, 4).to_vec(), vec![1, 2, 3]);
/// assert_eq!(range(5, None).take(2).to_vec(), vec![5, 6]);
/// ```
pub fn range(start: i64, end: impl Into<Option<i64>>) -> Seq<Source<Range>> {
    Seq::new(Range {
        current: start,
        end: end.into(),
    })
}

/// Logs the `Debug` form of `value` at debug level and returns it unchanged.
///
/// Handy in the middle of an expression: `let n = debug(a + b);`.
#[inline]
pub fn debug<T: fmt::Debug>(value: T) -> T {
    tracing::debug!(?value, "debug");
    value
}
