//! Terminal operations.
//!
//! Terminals drive the pipeline by pulling until exhaustion or an early
//! exit. `find`, `find_map`, `every` and `some` stop early and only borrow
//! the handle, so whatever they leave unconsumed can still be pulled. The
//! rest drain the sequence and take it by value; use
//! [`Seq::by_ref`] to run one on a sequence you keep.
//!
//! # Infinite sequences
//!
//! `count`, `reduce`, `to_vec`, `join` and `for_each` never return on an
//! infinite sequence. Bound it first with `take` or `take_while`.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use crate::foundation::error::{Error, Found, Result};
use crate::foundation::source::preallocation;
use crate::pipeline::seq::Seq;

impl<I: Iterator> Seq<I> {
    /// Counts the remaining items.
    pub fn count(self) -> usize {
        let mut count = 0;
        for _ in self.into_inner() {
            count += 1;
        }
        count
    }

    /// Folds every item into an accumulator, starting from `initial`.
    pub fn reduce<B, F>(self, initial: B, mut f: F) -> B
    where
        F: FnMut(B, I::Item) -> B,
    {
        let mut accumulator = initial;
        for item in self.into_inner() {
            accumulator = f(accumulator, item);
        }
        accumulator
    }

    /// Returns `true` if `predicate` holds for every item.
    ///
    /// Stops at the first failure; `true` for an empty sequence.
    pub fn every<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(I::Item) -> bool,
    {
        for item in self.by_ref() {
            if !predicate(item) {
                return false;
            }
        }
        true
    }

    /// Returns `true` if `predicate` holds for some item.
    ///
    /// Stops at the first match; `false` for an empty sequence.
    pub fn some<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(I::Item) -> bool,
    {
        for item in self.by_ref() {
            if predicate(item) {
                return true;
            }
        }
        false
    }

    /// Returns the first item satisfying `predicate`.
    ///
    /// Items up to and including the match are consumed.
    ///
    /// ```rust
    /// use seqext_core::prelude::*;
    ///
    /// let mut seq = vec![1, 2, 3].into_seq();
    /// assert_eq!(seq.find(|x| *x == 2), Some(2));
    /// assert_eq!(seq.next(), Some(3));
    /// ```
    pub fn find<P>(&mut self, mut predicate: P) -> Option<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        for item in self.by_ref() {
            if predicate(&item) {
                return Some(item);
            }
        }
        None
    }

    /// Returns the first present result of `f`.
    pub fn find_map<B, F>(&mut self, mut f: F) -> Option<B>
    where
        F: FnMut(I::Item) -> Option<B>,
    {
        for item in self.by_ref() {
            if let Some(found) = f(item) {
                return Some(found);
            }
        }
        None
    }

    /// Collects the remaining items into a `Vec`.
    ///
    /// `collect` from [`Iterator`] works as well for other containers.
    pub fn to_vec(self) -> Vec<I::Item> {
        let iter = self.into_inner();
        let mut items = Vec::with_capacity(preallocation(iter.size_hint().0));
        for item in iter {
            items.push(item);
        }
        items
    }

    /// Concatenates the `Display` form of every item, separated by
    /// `separator`. An empty sequence gives an empty string.
    pub fn join(self, separator: &str) -> String
    where
        I::Item: fmt::Display,
    {
        let mut out = String::new();
        for (index, item) in self.to_vec().iter().enumerate() {
            if index > 0 {
                out.push_str(separator);
            }
            // Formatting into a String cannot fail.
            let _ = write!(out, "{item}");
        }
        out
    }

    /// Calls `f` on every item.
    pub fn for_each<F>(self, mut f: F)
    where
        F: FnMut(I::Item),
    {
        for item in self.into_inner() {
            f(item);
        }
    }

    /// Returns the only item of the sequence.
    ///
    /// Pulls at most two items.
    pub fn exact(mut self) -> Result<I::Item> {
        let only = self.next().ok_or(Error::NotExactlyOne { found: Found::Empty })?;
        match self.next() {
            None => Ok(only),
            Some(_) => Err(Error::NotExactlyOne { found: Found::Many }),
        }
    }
}
