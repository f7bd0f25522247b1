//! Free-standing operators for [`pipe!`](crate::pipe!) and [`Pipe`](crate::Pipe).
//!
//! Every function here takes the arguments of the method it is named
//! after and returns a single-argument function applying that method to a
//! container. The submodules group operators by the container they accept:
//!
//! | Module | Accepts |
//! |--------|---------|
//! | [`maybe`] | [`Maybe`](crate::Maybe) |
//! | `result` | [`Result`](crate::Result) |
//! | `maybe_async` | [`MaybeAsync`](crate::MaybeAsync) |
//! | `result_async` | [`ResultAsync`](crate::ResultAsync) |
//!
//! # Examples
//!
//! ```
//! use outcomes::{pipe, Result};
//! use outcomes::operators::result::{compensate, map_error};
//!
//! let recovered = pipe!(
//!     Result::<i32, &str>::failure("offline"),
//!     map_error(|error: &str| error.len()),
//!     compensate(|length: usize| Result::<i32, ()>::success(length as i32)),
//! );
//! assert_eq!(recovered, Result::success(7));
//! ```

pub mod maybe;

#[cfg(feature = "result")]
pub mod result;

#[cfg(feature = "async")]
pub mod maybe_async;

#[cfg(feature = "async")]
pub mod result_async;
