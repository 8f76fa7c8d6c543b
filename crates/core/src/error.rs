//! Error types raised by the unwrap-style terminal operations.
//!
//! Combinators never fail on their own. Only `unwrap`, `expect`, `unwrap_err`
//! and `expect_err` produce these errors, and they do so by returning them
//! rather than panicking.

use thiserror::Error;

const NONE_MESSAGE: &str = "Attempted to call `unwrap()` on `None` value";
const ERR_MESSAGE: &str = "Attempted to call `unwrap()` on `Err` value";
const OK_MESSAGE: &str = "Attempted to call `unwrap_err()` on `Ok` value";

/// Returned when a value is requested from an absent [`Maybe`](crate::Maybe).
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
#[error("{message}")]
pub struct UnwrapNoneError {
    message: String,
}

/// Returned when the success value is requested from a failed [`Outcome`](crate::Outcome).
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
#[error("{message}")]
pub struct UnwrapErrError {
    message: String,
}

/// Returned when the error value is requested from a successful [`Outcome`](crate::Outcome).
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
#[error("{message}")]
pub struct UnwrapOkError {
    message: String,
}

macro_rules! unwrap_error_impl {
    ($ty:ident, $default:expr) => {
        impl $ty {
            /// Create the error with a caller-supplied message.
            pub fn new(message: impl Into<String>) -> Self {
                Self {
                    message: message.into(),
                }
            }

            /// The message this error was raised with.
            #[must_use]
            pub fn message(&self) -> &str {
                &self.message
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new($default)
            }
        }
    };
}

unwrap_error_impl!(UnwrapNoneError, NONE_MESSAGE);
unwrap_error_impl!(UnwrapErrError, ERR_MESSAGE);
unwrap_error_impl!(UnwrapOkError, OK_MESSAGE);

/// Which unwrap went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnwrapKind {
    /// A value was requested from `Maybe::None`.
    None,
    /// A success value was requested from `Outcome::Err`.
    Err,
    /// An error value was requested from `Outcome::Ok`.
    Ok,
}

/// Any unwrap failure, for callers that mix both containers behind one `?`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Value requested from an absent `Maybe`.
    #[error(transparent)]
    UnwrapNone(#[from] UnwrapNoneError),

    /// Success value requested from a failed `Outcome`.
    #[error(transparent)]
    UnwrapErr(#[from] UnwrapErrError),

    /// Error value requested from a successful `Outcome`.
    #[error(transparent)]
    UnwrapOk(#[from] UnwrapOkError),
}

impl Error {
    /// The kind of unwrap that failed.
    #[must_use]
    pub const fn kind(&self) -> UnwrapKind {
        match self {
            Self::UnwrapNone(_) => UnwrapKind::None,
            Self::UnwrapErr(_) => UnwrapKind::Err,
            Self::UnwrapOk(_) => UnwrapKind::Ok,
        }
    }

    /// The message carried by the underlying error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::UnwrapNone(e) => e.message(),
            Self::UnwrapErr(e) => e.message(),
            Self::UnwrapOk(e) => e.message(),
        }
    }
}

/// Result alias for code that unwraps several containers with `?`.
pub type Result<T> = std::result::Result<T, Error>;
