//! `Maybe<T>`: a value that is either present or absent.
//!
//! Every combinator consumes the container and hands back a new one (or a
//! plain value). Caller-supplied closures run at most once, and only on the
//! branch they belong to: a `map` closure never sees an absent container, an
//! `unwrap_or_else` supplier never runs when a value is present.

use crate::error::UnwrapNoneError;

/// Optional container.
///
/// `Maybe::Some(v)` always holds `v`. The "no value" sentinel of Rust is
/// `std::option::Option::None`; converting it with [`Maybe::from_nullable`]
/// (or `From<Option<T>>`) yields `Maybe::None`, so an absent input and an
/// absent container are indistinguishable on that path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// No value.
    #[default]
    None,
}

impl Maybe<bool> {
    /// A present container holding the `true` marker.
    ///
    /// Stands in for "present, payload irrelevant".
    pub const fn present() -> Self {
        Self::Some(true)
    }
}

impl<T> Maybe<T> {
    /// Construct a present container.
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Construct an absent container.
    pub const fn none() -> Self {
        Self::None
    }

    /// Construct from a value that may itself be the "no value" sentinel.
    ///
    /// `Some(v)` becomes `Maybe::Some(v)`; `None` collapses to `Maybe::None`.
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Some(v),
            None => Self::None,
        }
    }

    /// Returns `true` if a value is present.
    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(v) => Maybe::Some(v),
            Self::None => Maybe::None,
        }
    }

    /// Returns the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapNoneError`] with its default message if absent.
    pub fn unwrap(self) -> Result<T, UnwrapNoneError> {
        match self {
            Self::Some(v) => Ok(v),
            Self::None => Err(absent(UnwrapNoneError::default())),
        }
    }

    /// Returns the contained value, failing with `message` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapNoneError`] carrying `message` verbatim if absent.
    pub fn expect(self, message: &str) -> Result<T, UnwrapNoneError> {
        match self {
            Self::Some(v) => Ok(v),
            Self::None => Err(absent(UnwrapNoneError::new(message))),
        }
    }

    /// Returns the contained value or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(v) => v,
            Self::None => default,
        }
    }

    /// Returns the contained value or the result of `default`.
    ///
    /// `default` is only invoked when the container is absent.
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, default: F) -> T {
        match self {
            Self::Some(v) => v,
            Self::None => default(),
        }
    }

    /// Maps `Maybe<T>` to `Maybe<U>` by applying `f` to a present value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Maybe<U> {
        match self {
            Self::Some(v) => Maybe::Some(f(v)),
            Self::None => Maybe::None,
        }
    }

    /// Like [`map`](Self::map), but an `f` that yields `None` collapses the
    /// result to an absent container.
    pub fn map_nullable<U, F: FnOnce(T) -> Option<U>>(self, f: F) -> Maybe<U> {
        match self {
            Self::Some(v) => Maybe::from_nullable(f(v)),
            Self::None => Maybe::None,
        }
    }

    /// Applies `f` to a present value, or returns `default`.
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Self::Some(v) => f(v),
            Self::None => default,
        }
    }

    /// Applies `f` to a present value, or computes a fallback with `default`.
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(v) => f(v),
            Self::None => default(),
        }
    }

    /// Returns `None` if absent, otherwise calls `f` with the value and
    /// returns its container as-is.
    pub fn and_then<U, F: FnOnce(T) -> Maybe<U>>(self, f: F) -> Maybe<U> {
        match self {
            Self::Some(v) => f(v),
            Self::None => Maybe::None,
        }
    }

    /// Returns `None` if absent, otherwise returns `other`.
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Maybe::None,
        }
    }

    /// Returns `self` if present, otherwise `other`.
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Returns `self` if present, otherwise the container produced by `f`.
    pub fn or_else<F: FnOnce() -> Self>(self, f: F) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => f(),
        }
    }

    /// Keeps a present value only if `predicate` accepts it.
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        if let Self::Some(v) = self {
            if predicate(&v) {
                return Self::Some(v);
            }
        }
        Self::None
    }

    /// Calls `f` with a reference to a present value, then returns `self`.
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Self::Some(ref v) = self {
            f(v);
        }
        self
    }

    /// Calls `f` if absent, then returns `self`.
    pub fn tap_none<F: FnOnce()>(self, f: F) -> Self {
        if self.is_none() {
            f();
        }
        self
    }

    /// Combines two containers.
    ///
    /// Both present: `Some(f(a, b))`. Exactly one present: that one.
    /// Neither: `None`.
    pub fn reduce<F: FnOnce(T, T) -> T>(self, other: Self, f: F) -> Self {
        match (self, other) {
            (Self::Some(a), Self::Some(b)) => Self::Some(f(a, b)),
            (Self::Some(a), Self::None) => Self::Some(a),
            (Self::None, other) => other,
        }
    }

    /// Converts into the standard library `Option`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(v) => Some(v),
            Self::None => None,
        }
    }
}

fn absent(err: UnwrapNoneError) -> UnwrapNoneError {
    tracing::debug!(error = %err, "unwrap on absent Maybe");
    err
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}
