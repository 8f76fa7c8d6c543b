#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # optres
//!
//! Immutable `Maybe` and `Outcome` containers for representing "value absent"
//! and "operation failed" as ordinary values.
//!
//! This crate provides:
//! - [`Maybe<T>`]: present-or-absent container with combinators
//! - [`Outcome<T, E>`]: success-or-failure container with projections into `Maybe`
//! - Typed unwrap errors, one per kind of invalid unwrap
//!
//! ## Zero Panic Guarantee
//!
//! Unwrap-style operations return `Result` instead of panicking. Failures
//! raised inside caller-supplied closures propagate unchanged.

pub mod error;
pub mod maybe;
pub mod outcome;
pub mod prelude;

// Re-export commonly used items
pub use error::{Error, Result, UnwrapErrError, UnwrapKind, UnwrapNoneError, UnwrapOkError};
pub use maybe::Maybe;
pub use outcome::Outcome;
