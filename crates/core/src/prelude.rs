//! Prelude module - common imports for container pipelines
//!
//! Import this module to get the containers and their error types:
//! ```rust
//! use optres::prelude::*;
//!
//! let email = Maybe::Some("A@B.COM").map(str::to_lowercase);
//! assert_eq!(email.unwrap_or_else(String::new), "a@b.com");
//! ```

pub use crate::error::{UnwrapErrError, UnwrapKind, UnwrapNoneError, UnwrapOkError};
pub use crate::maybe::Maybe;
pub use crate::outcome::Outcome;
