//! # outcomes
//!
//! Composable `Result` and `Maybe` containers, together with their
//! asynchronous counterparts, for replacing panics, sentinel values and
//! ad-hoc `if let` ladders with type-safe pipelines.
//!
//! ## Overview
//!
//! - **[`Unit`]**: the canonical "no meaningful value" marker
//! - **`Maybe`**: zero-or-one value with laziness-preserving combinators
//! - **`Result`**: success or failure, short-circuiting on failure
//! - **`MaybeAsync` / `ResultAsync`**: the same operations over pending
//!   computations, accepting synchronous or asynchronous projections
//! - **Composition**: the [`pipe!`] macro, the [`Pipe`] trait and the
//!   free-function [`operators`]
//!
//! ## Feature Flags
//!
//! - `maybe`: `Maybe` and its operators
//! - `result`: `Result`, `Record` and aggregation (implies `maybe`)
//! - `async`: `ResultAsync`, `MaybeAsync` (implies `result`)
//! - `serde`: serialization support
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use outcomes::prelude::*;
//!
//! let doubled = Result::<i32, String>::success(5)
//!     .ensure(|number| *number > 0, "must be positive".to_string())
//!     .map(|number| number * 2);
//!
//! assert_eq!(doubled, Result::success(10));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits. Note that importing the
/// prelude brings this crate's `Result` into scope, shadowing the standard
/// library alias.
///
/// # Usage
///
/// ```rust
/// use outcomes::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Unit;
    pub use crate::compose::Pipe;
    pub use crate::error::{ContractError, Rejection};

    #[cfg(feature = "maybe")]
    pub use crate::maybe::*;

    #[cfg(feature = "result")]
    pub use crate::result::*;
}

pub mod compose;
pub mod error;
mod unit;

#[cfg(feature = "maybe")]
pub mod maybe;

#[cfg(feature = "result")]
pub mod result;

#[cfg(feature = "maybe")]
pub mod operators;

pub use compose::Pipe;
pub use error::{ContractError, Rejection};
pub use unit::Unit;

#[cfg(feature = "maybe")]
pub use maybe::Maybe;

#[cfg(feature = "result")]
pub use result::{Record, Result};

#[cfg(feature = "async")]
pub use maybe::{IntoMaybeAsync, MaybeAsync, SharedMaybeAsync};

#[cfg(feature = "async")]
pub use result::{CombineTuple, IntoResultAsync, ResultAsync, SharedResultAsync, combine_tuple};
