//! Entry points for building outcomes.
//!
//! These functions are the only way to create an [`Outcome`]:
//!
//! - [`success`], [`failure`], [`lazy_success`] build each variant directly.
//! - [`try_to`] and [`try_to_or_else`] run a fallible computation now and
//!   turn its `Err` into a failure.
//! - [`lazy_try_to`] and [`lazy_try_to_or_else`] do the same when forced.
//! - With the `std` feature, [`try_catch`] and [`lazy_try_catch`] also turn
//!   panics into failures.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{lazy_try_to, try_to, Outcome};
//!
//! let parsed: Outcome<u8, std::num::ParseIntError> = try_to(|| "7".parse::<u8>());
//! assert_eq!(parsed.unwrap(), 7);
//!
//! let deferred = lazy_try_to(|| "300".parse::<u8>());
//! assert!(!deferred.is_evaluated());
//! assert!(deferred.flatten().is_err());
//! ```
use crate::types::Outcome;

#[cfg(feature = "std")]
mod panic;

#[cfg(feature = "std")]
pub use panic::{lazy_try_catch, try_catch, Panic};

/// Wraps a realized value in an eager success with an empty context.
///
/// # Examples
///
/// ```
/// use outcome_rail::{success, Outcome};
///
/// let out: Outcome<&str, ()> = success("ready");
/// assert!(out.is_ok());
/// ```
#[inline]
pub fn success<'a, T, E>(value: T) -> Outcome<'a, T, E> {
    Outcome::new_success(value)
}

/// Wraps an error in a failure.
///
/// # Examples
///
/// ```
/// use outcome_rail::{failure, Outcome};
///
/// let out: Outcome<(), &str> = failure("something went wrong");
/// assert!(out.is_err());
/// ```
#[inline]
pub fn failure<'a, T, E>(error: E) -> Outcome<'a, T, E> {
    Outcome::new_failure(error)
}

/// Defers `f` until the value is first needed.
///
/// `f` runs at most once; its result is memoized. It may borrow from its
/// environment for as long as the returned outcome lives.
///
/// # Examples
///
/// ```
/// use outcome_rail::{lazy_success, Outcome};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let calls = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&calls);
/// let out: Outcome<&str, ()> = lazy_success(move || {
///     counter.set(counter.get() + 1);
///     "test"
/// });
///
/// assert_eq!(calls.get(), 0);
/// assert_eq!(out.value(), Some(&"test"));
/// assert_eq!(out.value(), Some(&"test"));
/// assert_eq!(calls.get(), 1);
/// ```
#[inline]
pub fn lazy_success<'a, T, E, F>(f: F) -> Outcome<'a, T, E>
where
    F: FnOnce() -> T + 'a,
{
    Outcome::new_lazy(f)
}

/// Runs `f` now; `Ok` becomes a success and `Err` a failure.
#[inline]
pub fn try_to<'a, T, E, F>(f: F) -> Outcome<'a, T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    match f() {
        Ok(value) => success(value),
        Err(error) => {
            emit!(debug, "try_to converted an error into a failure");
            failure(error)
        },
    }
}

/// Runs `f` now; an `Err` is handed to `on_error`, whose outcome is returned.
///
/// # Arguments
///
/// * `f` - The fallible computation
/// * `on_error` - Builds the outcome for an error, e.g. to recover or rewrap
///
/// # Examples
///
/// ```
/// use outcome_rail::{failure, try_to_or_else, Outcome};
///
/// let out: Outcome<u8, String> = try_to_or_else(
///     || "x".parse::<u8>(),
///     |err| failure(format!("bad input: {err}")),
/// );
/// assert!(out.into_error().unwrap().starts_with("bad input"));
/// ```
#[inline]
pub fn try_to_or_else<'a, T, X, E, F, H>(f: F, on_error: H) -> Outcome<'a, T, E>
where
    F: FnOnce() -> Result<T, X>,
    H: FnOnce(X) -> Outcome<'a, T, E>,
{
    match f() {
        Ok(value) => success(value),
        Err(error) => {
            emit!(debug, "try_to_or_else handing an error to its handler");
            on_error(error)
        },
    }
}

/// Deferred [`try_to`]: returns a lazy success whose value is the outcome of
/// running `f` at force time.
///
/// Use [`Outcome::flatten`] to collapse the result.
#[inline]
pub fn lazy_try_to<'a, T, E, F>(f: F) -> Outcome<'a, Outcome<'a, T, E>, E>
where
    F: FnOnce() -> Result<T, E> + 'a,
{
    lazy_success(move || try_to(f))
}

/// Deferred [`try_to_or_else`].
#[inline]
pub fn lazy_try_to_or_else<'a, T, X, E, F, H>(
    f: F,
    on_error: H,
) -> Outcome<'a, Outcome<'a, T, E>, E>
where
    F: FnOnce() -> Result<T, X> + 'a,
    H: FnOnce(X) -> Outcome<'a, T, E> + 'a,
{
    lazy_success(move || try_to_or_else(f, on_error))
}
