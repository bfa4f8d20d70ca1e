//! # `seqext` Core
//!
//! Lazy, single-pass sequence adapters built as small explicit state
//! machines.
//!
//! ## Architecture
//!
//! The library is organized into two layers:
//!
//! 1. **Foundation Layer**: error handling, source adaptation and factories
//! 2. **Pipeline Layer**: the [`Seq`](pipeline::seq::Seq) handle, its
//!    combinators and its terminal operations
//!
//! Every combinator owns exactly one upstream and pulls from it only when it
//! is itself pulled. Nothing runs ahead of consumption, so infinite sources
//! are fine as long as something (`take`, `take_while`, `find`) bounds them
//! before an exhausting terminal such as `count` or `to_vec`.
//!
//! ## Example
//!
//! ```rust
//! use seqext_core::prelude::*;
//!
//! let words = range(1, None)
//!     .filter(|n| n % 3 == 0)
//!     .map(|n| n * n)
//!     .take(4)
//!     .join(", ");
//!
//! assert_eq!(words, "9, 36, 81, 144");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rustdoc::all
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

extern crate alloc;

// Foundation layer modules
pub mod foundation {
    //! Foundation layer providing errors, source adaptation and factories.

    pub mod error;
    pub mod factory;
    pub mod source;
}

// Pipeline layer modules
pub mod pipeline {
    //! Pipeline layer: the sequence handle, its combinators and terminals.

    pub mod bounded;
    pub mod multi;
    pub mod seq;
    pub mod stateless;
    pub mod terminal;
    pub mod windowed;
}

// Re-exports for convenience
pub mod prelude {
    //! Common imports for users of the library.
    pub use crate::foundation::{
        error::{Error, Found, Result},
        factory::{debug, empty, once, range, Empty, Once, Range},
        source::{from_fn, FromFn, IntoSeq, Source},
    };
    pub use crate::pipeline::seq::Seq;
}

pub use prelude::*;

/// The version of the `seqext` core library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
