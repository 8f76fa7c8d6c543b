//! `Outcome<T, E>`: a success carrying `T` or a failure carrying `E`.
//!
//! Provides the railway-oriented combinators for the success track and the
//! failure track, plus projections into [`Maybe`].

use std::fmt::Display;

use crate::error::{UnwrapErrError, UnwrapOkError};
use crate::maybe::Maybe;

/// Success-or-failure container.
///
/// Unlike [`Maybe`], a success payload may legitimately be `None`:
/// `Outcome::Ok(None::<i32>)` is still a success.
///
/// # Examples
///
/// ```
/// use optres::{Maybe, Outcome};
///
/// let parsed: Outcome<i32, String> = Outcome::Ok(5);
/// assert_eq!(parsed.map(|i| i * 2).get_ok(), Maybe::Some(10));
///
/// let failed: Outcome<i32, &str> = Outcome::Err("parse error");
/// assert_eq!(failed.map(|i| i * 2).unwrap_err(), Ok("parse error"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub enum Outcome<T, E> {
    /// Success value.
    Ok(T),
    /// Error value.
    Err(E),
}

impl<E> Outcome<bool, E> {
    /// A success holding the `true` marker.
    pub const fn success() -> Self {
        Self::Ok(true)
    }
}

impl<T, E> Outcome<T, E> {
    /// Construct a success.
    pub const fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Construct a failure.
    pub const fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// Run `f` once and route its failure through `handler`.
    pub fn try_catch<X, F, H>(f: F, handler: H) -> Self
    where
        F: FnOnce() -> Result<T, X>,
        H: FnOnce(X) -> E,
    {
        match f() {
            Ok(v) => Self::Ok(v),
            Err(x) => Self::Err(handler(x)),
        }
    }

    /// Returns `true` if this is a success.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is a failure.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// Returns the success value.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapErrError`] with its default message on failure.
    pub fn unwrap(self) -> Result<T, UnwrapErrError> {
        match self {
            Self::Ok(v) => Ok(v),
            Self::Err(_) => Err(failed(UnwrapErrError::default())),
        }
    }

    /// Returns the success value, failing with `message` on failure.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapErrError`] carrying `message` verbatim on failure.
    pub fn expect(self, message: &str) -> Result<T, UnwrapErrError> {
        match self {
            Self::Ok(v) => Ok(v),
            Self::Err(_) => Err(failed(UnwrapErrError::new(message))),
        }
    }

    /// Returns the error value.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapOkError`] with its default message on success.
    pub fn unwrap_err(self) -> Result<E, UnwrapOkError> {
        match self {
            Self::Ok(_) => Err(succeeded(UnwrapOkError::default())),
            Self::Err(e) => Ok(e),
        }
    }

    /// Returns the error value, failing with `message` on success.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapOkError`] carrying `message` verbatim on success.
    pub fn expect_err(self, message: &str) -> Result<E, UnwrapOkError> {
        match self {
            Self::Ok(_) => Err(succeeded(UnwrapOkError::new(message))),
            Self::Err(e) => Ok(e),
        }
    }

    /// Returns the success value or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    ///
    /// `f` runs only on failure and always receives the concrete error.
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, f: F) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Err(e) => f(e),
        }
    }

    /// Maps the success value, leaving a failure untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        match self {
            Self::Ok(v) => Outcome::Ok(f(v)),
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// Maps the error value, leaving a success untouched.
    pub fn map_err<F2, F: FnOnce(E) -> F2>(self, f: F) -> Outcome<T, F2> {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => Outcome::Err(f(e)),
        }
    }

    /// Applies `f` to the success value, or returns `default`.
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Self::Ok(v) => f(v),
            Self::Err(_) => default,
        }
    }

    /// Applies `f` to the success value, or `default` to the error.
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(v) => f(v),
            Self::Err(e) => default(e),
        }
    }

    /// Map both tracks in a single operation.
    pub fn bimap<U, F2, OF, EF>(self, ok_fn: OF, err_fn: EF) -> Outcome<U, F2>
    where
        OF: FnOnce(T) -> U,
        EF: FnOnce(E) -> F2,
    {
        match self {
            Self::Ok(v) => Outcome::Ok(ok_fn(v)),
            Self::Err(e) => Outcome::Err(err_fn(e)),
        }
    }

    /// Chain a fallible step on the success track.
    pub fn and_then<U, F: FnOnce(T) -> Outcome<U, E>>(self, f: F) -> Outcome<U, E> {
        match self {
            Self::Ok(v) => f(v),
            Self::Err(e) => Outcome::Err(e),
        }
    }

    /// Attempt recovery on the failure track.
    pub fn or_else<F2, F: FnOnce(E) -> Outcome<T, F2>>(self, f: F) -> Outcome<T, F2> {
        match self {
            Self::Ok(v) => Outcome::Ok(v),
            Self::Err(e) => f(e),
        }
    }

    /// Perform a side effect on the success value without consuming it.
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Self::Ok(ref v) = self {
            f(v);
        }
        self
    }

    /// Perform a side effect on the error value without consuming it.
    pub fn inspect_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Self::Err(ref e) = self {
            f(e);
        }
        self
    }

    /// `Some(value)` on success, `None` on failure.
    pub fn get_ok(self) -> Maybe<T> {
        match self {
            Self::Ok(v) => Maybe::Some(v),
            Self::Err(_) => Maybe::None,
        }
    }

    /// `Some(error)` on failure, `None` on success.
    pub fn get_err(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::None,
            Self::Err(e) => Maybe::Some(e),
        }
    }

    /// Like [`get_ok`](Self::get_ok), but logs the discarded error.
    pub fn get_ok_logged(self) -> Maybe<T>
    where
        E: Display,
    {
        self.inspect_err(|e| tracing::error!("Operation failed: {}", e))
            .get_ok()
    }

    /// Converts into the standard library `Result`.
    ///
    /// # Errors
    ///
    /// Returns the error value if this is a failure.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(v) => Ok(v),
            Self::Err(e) => Err(e),
        }
    }
}

impl<T, E> Outcome<Option<T>, E> {
    /// Like [`get_ok`](Self::get_ok), but a success holding `None` projects
    /// to an absent container.
    pub fn get_ok_nullable(self) -> Maybe<T> {
        match self {
            Self::Ok(v) => Maybe::from_nullable(v),
            Self::Err(_) => Maybe::None,
        }
    }
}

impl<T, E> Outcome<T, Option<E>> {
    /// Like [`get_err`](Self::get_err), but a failure holding `None` projects
    /// to an absent container.
    pub fn get_err_nullable(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::None,
            Self::Err(e) => Maybe::from_nullable(e),
        }
    }
}

fn failed(err: UnwrapErrError) -> UnwrapErrError {
    tracing::debug!(error = %err, "unwrap on failed Outcome");
    err
}

fn succeeded(err: UnwrapOkError) -> UnwrapOkError {
    tracing::debug!(error = %err, "unwrap_err on successful Outcome");
    err
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(v) => Self::Ok(v),
            Err(e) => Self::Err(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        value.into_result()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]

    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_is_ok_is_err() {
        let x: Outcome<i32, &str> = Outcome::Ok(-3);
        assert!(x.is_ok());
        assert!(!x.is_err());

        let y: Outcome<i32, &str> = Outcome::Err("Some error message");
        assert!(!y.is_ok());
        assert!(y.is_err());
    }

    #[test]
    fn test_construction_keeps_every_payload() {
        let ok: Outcome<Option<i32>, ()> = Outcome::ok(None);
        assert!(ok.is_ok());
        assert_eq!(ok.unwrap(), Ok(None));

        let err: Outcome<(), Option<i32>> = Outcome::err(None);
        assert!(err.is_err());
        assert_eq!(err.unwrap_err(), Ok(None));

        assert_eq!(Outcome::<bool, ()>::success().unwrap(), Ok(true));
    }

    #[test]
    fn test_unwrap() {
        assert_eq!(Outcome::<i32, &str>::Ok(2).unwrap(), Ok(2));
        assert_eq!(
            Outcome::<i32, &str>::Err("emergency failure").unwrap(),
            Err(UnwrapErrError::default())
        );
    }

    #[test]
    fn test_unwrap_err() {
        assert_eq!(
            Outcome::<i32, &str>::Err("emergency failure").unwrap_err(),
            Ok("emergency failure")
        );
        assert_eq!(
            Outcome::<i32, &str>::Ok(2).unwrap_err(),
            Err(UnwrapOkError::default())
        );
    }

    #[test]
    fn test_expect_and_expect_err() {
        assert_eq!(
            Outcome::<&str, &str>::Ok("value").expect("Testing expect"),
            Ok("value")
        );
        let err = Outcome::<&str, &str>::Err("error")
            .expect("Testing expect")
            .unwrap_err();
        assert_eq!(err.message(), "Testing expect");

        assert_eq!(
            Outcome::<&str, &str>::Err("value").expect_err("Testing expect_err"),
            Ok("value")
        );
        let err = Outcome::<&str, &str>::Ok("error")
            .expect_err("Testing expect_err")
            .unwrap_err();
        assert_eq!(err.message(), "Testing expect_err");
    }

    #[test]
    fn test_unwrap_or() {
        let default = 2;
        assert_eq!(Outcome::<i32, &str>::Ok(9).unwrap_or(default), 9);
        assert_eq!(Outcome::<i32, &str>::Err("error").unwrap_or(default), default);
    }

    #[test]
    fn test_unwrap_or_else_receives_error() {
        assert_eq!(Outcome::<usize, &str>::Ok(2).unwrap_or_else(str::len), 2);
        assert_eq!(Outcome::<usize, &str>::Err("foo").unwrap_or_else(str::len), 3);
    }

    #[test]
    fn test_unwrap_or_else_is_lazy() {
        let calls = Cell::new(0);
        let fallback = |_: &str| {
            calls.set(calls.get() + 1);
            0
        };

        let _ = Outcome::<i32, &str>::Ok(1).unwrap_or_else(fallback);
        assert_eq!(calls.get(), 0);

        let _ = Outcome::<i32, &str>::Err("x").unwrap_or_else(fallback);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_map() {
        let result = Outcome::<i32, &str>::Ok(5).map(|i| i * 2);
        assert_eq!(result, Outcome::Ok(10));

        let result =
            Outcome::<i32, &str>::Err("parse error").map(|_| -> i32 { panic!("must not run") });
        assert_eq!(result.unwrap_err(), Ok("parse error"));
    }

    #[test]
    fn test_map_err() {
        let stringify = |x: i32| format!("error code: {x}");

        let result = Outcome::<i32, i32>::Ok(2).map_err(stringify);
        assert_eq!(result, Outcome::Ok(2));

        let result = Outcome::<i32, i32>::Err(13).map_err(stringify);
        assert_eq!(result.unwrap_err(), Ok(String::from("error code: 13")));

        let untouched =
            Outcome::<i32, i32>::Ok(2).map_err(|_| -> String { panic!("must not run") });
        assert_eq!(untouched, Outcome::Ok(2));
    }

    #[test]
    fn test_map_or() {
        assert_eq!(Outcome::<&str, &str>::Ok("foo").map_or(42, str::len), 3);
        assert_eq!(Outcome::<&str, &str>::Err("bar").map_or(42, str::len), 42);

        let calls = Cell::new(0);
        let measure = |s: &str| {
            calls.set(calls.get() + 1);
            s.len()
        };
        let _ = Outcome::<&str, &str>::Err("bar").map_or(0, measure);
        assert_eq!(calls.get(), 0);
        let _ = Outcome::<&str, &str>::Ok("foo").map_or(0, measure);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_map_or_else() {
        assert_eq!(
            Outcome::<&str, &str>::Ok("foo").map_or_else(|e| e.len() * 10, str::len),
            3
        );
        assert_eq!(
            Outcome::<&str, &str>::Err("bar").map_or_else(|e| e.len() * 10, str::len),
            30
        );
    }

    #[test]
    fn test_map_or_else_runs_only_matching_branch() {
        let defaults = Cell::new(0);
        let mapped = Cell::new(0);
        let default = |_: &str| {
            defaults.set(defaults.get() + 1);
            0
        };
        let f = |s: &str| {
            mapped.set(mapped.get() + 1);
            s.len()
        };

        assert_eq!(Outcome::<&str, &str>::Ok("foo").map_or_else(default, f), 3);
        assert_eq!((defaults.get(), mapped.get()), (0, 1));

        assert_eq!(Outcome::<&str, &str>::Err("bar").map_or_else(default, f), 0);
        assert_eq!((defaults.get(), mapped.get()), (1, 1));
    }

    #[test]
    fn test_bimap() {
        let ok: Outcome<i32, &str> = Outcome::Ok(21);
        assert_eq!(ok.bimap(|v| v * 2, str::len), Outcome::Ok(42));

        let err: Outcome<i32, &str> = Outcome::Err("hello");
        assert_eq!(err.bimap(|v| v * 2, str::len), Outcome::Err(5));
    }

    #[test]
    fn test_and_then() {
        let result = Outcome::<i32, &str>::Ok(2).and_then(|x| Outcome::Ok(x * 2));
        assert_eq!(result, Outcome::Ok(4));

        let result = Outcome::<i32, &str>::Err("error").and_then(|x| Outcome::Ok(x * 2));
        assert_eq!(result, Outcome::Err("error"));

        let result =
            Outcome::<i32, &str>::Ok(2).and_then(|_| Outcome::<i32, &str>::Err("new error"));
        assert_eq!(result, Outcome::Err("new error"));
    }

    #[test]
    fn test_or_else() {
        let recovered: Outcome<i32, ()> =
            Outcome::<i32, &str>::Err("boom").or_else(|e| Outcome::Ok(e.len() as i32));
        assert_eq!(recovered, Outcome::Ok(4));

        let untouched: Outcome<i32, ()> =
            Outcome::<i32, &str>::Ok(7).or_else(|_| -> Outcome<i32, ()> { panic!("must not run") });
        assert_eq!(untouched, Outcome::Ok(7));
    }

    #[test]
    fn test_inspect_and_inspect_err() {
        let seen_ok = Cell::new(0);
        let seen_err = Cell::new(false);

        let _ = Outcome::<i32, &str>::Ok(42)
            .inspect(|v| seen_ok.set(*v))
            .inspect_err(|_| seen_err.set(true));
        assert_eq!(seen_ok.get(), 42);
        assert!(!seen_err.get());

        let _ = Outcome::<i32, &str>::Err("e")
            .inspect(|_| seen_ok.set(-1))
            .inspect_err(|_| seen_err.set(true));
        assert_eq!(seen_ok.get(), 42);
        assert!(seen_err.get());
    }

    #[test]
    fn test_get_ok_and_get_err() {
        assert_eq!(Outcome::<i32, &str>::Ok(2).get_ok(), Maybe::Some(2));
        assert!(Outcome::<i32, &str>::Err("Nothing here").get_ok().is_none());

        assert!(Outcome::<i32, &str>::Ok(2).get_err().is_none());
        assert_eq!(
            Outcome::<i32, &str>::Err("Nothing here").get_err(),
            Maybe::Some("Nothing here")
        );
    }

    #[test]
    fn test_get_ok_keeps_sentinel_payload() {
        let projected = Outcome::<Option<i32>, &str>::Ok(None).get_ok();
        assert_eq!(projected, Maybe::Some(None));
    }

    #[test]
    fn test_get_ok_nullable_collapses_sentinel() {
        assert!(Outcome::<Option<i32>, &str>::Ok(None).get_ok_nullable().is_none());
        assert_eq!(
            Outcome::<Option<i32>, &str>::Ok(Some(2)).get_ok_nullable(),
            Maybe::Some(2)
        );
        assert!(Outcome::<Option<i32>, &str>::Err("e").get_ok_nullable().is_none());
    }

    #[test]
    fn test_get_err_nullable_collapses_sentinel() {
        assert!(Outcome::<i32, Option<&str>>::Err(None).get_err_nullable().is_none());
        assert_eq!(
            Outcome::<i32, Option<&str>>::Err(Some("e")).get_err_nullable(),
            Maybe::Some("e")
        );
        assert!(Outcome::<i32, Option<&str>>::Ok(1).get_err_nullable().is_none());
        assert_eq!(Outcome::<i32, Option<&str>>::Err(None).get_err(), Maybe::Some(None));
    }

    #[test]
    fn test_get_ok_logged() {
        assert_eq!(Outcome::<i32, &str>::Ok(1).get_ok_logged(), Maybe::Some(1));
        assert!(Outcome::<i32, &str>::Err("lost").get_ok_logged().is_none());
    }

    #[test]
    fn test_try_catch() {
        let result: Outcome<&str, String> =
            Outcome::try_catch(|| Ok::<_, String>("success"), |e| format!("Error: {e}"));
        assert_eq!(result.unwrap(), Ok("success"));

        let result: Outcome<&str, String> = Outcome::try_catch(
            || Err::<&str, _>("something failed"),
            |e| format!("Error: {e}"),
        );
        assert_eq!(result.unwrap_err(), Ok(String::from("Error: something failed")));
    }

    #[test]
    fn test_std_interop() {
        let from_std: Outcome<i32, &str> = Err("bad").into();
        assert_eq!(from_std, Outcome::Err("bad"));

        let to_std: Result<i32, &str> = Outcome::Ok(3).into();
        assert_eq!(to_std, Ok(3));

        let borrowed = Outcome::<String, ()>::Ok(String::from("x"));
        assert_eq!(borrowed.as_ref().map(String::len), Outcome::Ok(1));
    }
}
