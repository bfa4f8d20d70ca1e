//! Error handling for `seqext` Core.
//!
//! The pipeline itself has no failure channel: an exhausted sequence is
//! `None`, never an error. The variants here cover the two remaining cases,
//! malformed combinator arguments and terminals that assert a shape.

use core::fmt;

use thiserror::Error;

/// The main error type for `seqext` Core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A buffering combinator was asked for a group size of zero.
    #[error("{combinator} size must be greater than 0")]
    ZeroSize {
        /// Name of the rejecting combinator.
        combinator: &'static str,
    },

    /// `exact` found a number of elements other than one.
    #[error("expected exactly one element, found {found}")]
    NotExactlyOne {
        /// What was found instead.
        found: Found,
    },
}

/// Shape observed by a terminal that expected exactly one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    /// The sequence was empty.
    Empty,
    /// The sequence had at least two elements.
    Many,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("none"),
            Self::Many => f.write_str("more than one"),
        }
    }
}

/// A specialized Result type for `seqext` Core operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Rejects a zero group size for `combinator`.
pub(crate) const fn check_size(combinator: &'static str, size: usize) -> Result<usize> {
    if size == 0 {
        Err(Error::ZeroSize { combinator })
    } else {
        Ok(size)
    }
}

/// Surfaces a contract violation at the offending call.
#[cold]
#[track_caller]
pub(crate) fn violated(error: Error) -> ! {
    tracing::error!(%error, "combinator contract violated");
    panic!("{error}")
}
