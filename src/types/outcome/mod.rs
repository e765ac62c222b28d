//! The [`Outcome`] container and its combinators.
//!
//! An outcome is backed by exactly one of three private variants:
//!
//! - an eager success holding a realized value,
//! - a lazy success holding a computation that runs at most once,
//! - a failure holding the domain error.
//!
//! Callers only see the methods on [`Outcome`]. Every combinator consumes the
//! outcome and returns a new one; failures pass through value-transforming
//! combinators untouched, so a chain stops doing work at the first failure.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{failure, success, Outcome};
//!
//! fn parse(input: &str) -> Outcome<'static, i32, String> {
//!     match input.parse::<i32>() {
//!         Ok(n) => success(n),
//!         Err(_) => failure(format!("Not a number: {input}")),
//!     }
//! }
//!
//! let ok = parse("42").bind(|n| success(n * 2)).map(|n| format!("Result: {n}"));
//! assert_eq!(ok.unwrap(), "Result: 84");
//!
//! let err = parse("abc").bind(|n| success(n * 2)).map(|n| format!("Result: {n}"));
//! assert_eq!(err.get_error().map(String::as_str), Some("Not a number: abc"));
//! ```
use alloc::borrow::Cow;

use crate::types::context::{Context, ContextError, FromContext};
use crate::types::unwrap_error::UnwrapError;

mod failure;
mod lazy;
mod success;
mod traits;

use failure::Failure;
use lazy::LazySuccess;
use success::Success;

/// Which variant backs an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Eagerly computed success.
    Success,
    /// Success whose value is computed on first use.
    LazySuccess,
    /// Failure carrying an error.
    Failure,
}

pub(crate) enum Repr<'a, T, E> {
    Success(Success<T>),
    Lazy(LazySuccess<'a, T>),
    Failure(Failure<E>),
}

/// Either a successful value of type `T` or a failure of type `E`.
///
/// Outcomes are built with [`success`](crate::success),
/// [`failure`](crate::failure), [`lazy_success`](crate::lazy_success) and the
/// try adapters; there is no other way to construct one. A success also
/// carries a [`Context`] of named values collected by [`use_`](Self::use_).
///
/// Lazy outcomes hold their computation in a single-owner memo cell, so
/// `Outcome` is neither `Send` nor `Sync`. Deferred computations and
/// callbacks may borrow data that lives for `'a`; outcomes that own all of
/// their data are `Outcome<'static, T, E>`, and the lifetime can be elided
/// wherever Rust infers it.
///
/// # Type Parameters
///
/// * `'a` - How long deferred computations may borrow from their environment
/// * `T` - The success value type
/// * `E` - The error type
///
/// # Examples
///
/// ```
/// use outcome_rail::{failure, success, Outcome};
///
/// let ok: Outcome<i32, &str> = success(21);
/// assert_eq!(ok.map(|x| x * 2).unwrap_or(0), 42);
///
/// let err: Outcome<i32, &str> = failure("missing");
/// assert_eq!(err.map(|x| x * 2).unwrap_or(0), 0);
///
/// let words = vec!["red", "green"];
/// let counted: Outcome<usize, ()> = success(1).map(|i| words[i].len());
/// assert_eq!(counted.unwrap(), 5);
/// ```
#[must_use]
pub struct Outcome<'a, T, E> {
    repr: Repr<'a, T, E>,
}

impl<'a, T, E> Outcome<'a, T, E> {
    #[inline]
    pub(crate) fn from_repr(repr: Repr<'a, T, E>) -> Self {
        Self { repr }
    }

    #[inline]
    pub(crate) fn new_success(value: T) -> Self {
        Self::from_repr(Repr::Success(Success::new(value)))
    }

    #[inline]
    pub(crate) fn new_lazy<F>(thunk: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        Self::from_repr(Repr::Lazy(LazySuccess::new(thunk)))
    }

    #[inline]
    pub(crate) fn new_failure(error: E) -> Self {
        Self::from_repr(Repr::Failure(Failure::new(error)))
    }

    /// Returns the variant backing this outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{lazy_success, success, Outcome, Variant};
    ///
    /// let eager: Outcome<i32, ()> = success(1);
    /// let lazy: Outcome<i32, ()> = lazy_success(|| 1);
    /// assert_eq!(eager.variant(), Variant::Success);
    /// assert_eq!(lazy.map(|x| x + 1).variant(), Variant::LazySuccess);
    /// ```
    #[inline]
    pub fn variant(&self) -> Variant {
        match self.repr {
            Repr::Success(_) => Variant::Success,
            Repr::Lazy(_) => Variant::LazySuccess,
            Repr::Failure(_) => Variant::Failure,
        }
    }

    /// Returns `true` for both eager and lazy successes.
    #[inline]
    pub fn is_ok(&self) -> bool {
        !self.is_err()
    }

    /// Returns `true` if the outcome is a failure.
    #[inline]
    pub fn is_err(&self) -> bool {
        matches!(self.repr, Repr::Failure(_))
    }

    /// Returns `true` if the outcome is a lazy success, forced or not.
    #[inline]
    pub fn is_lazy(&self) -> bool {
        matches!(self.repr, Repr::Lazy(_))
    }

    /// Returns `false` only for a lazy success whose computation has not run.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{lazy_success, Outcome};
    ///
    /// let lazy: Outcome<i32, ()> = lazy_success(|| 5);
    /// assert!(!lazy.is_evaluated());
    /// assert_eq!(lazy.value(), Some(&5));
    /// assert!(lazy.is_evaluated());
    /// ```
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        match &self.repr {
            Repr::Lazy(lazy) => lazy.evaluated().is_some(),
            _ => true,
        }
    }

    /// Borrows the success value, forcing a lazy success.
    ///
    /// The computation of a lazy success runs on the first call only; later
    /// calls return the memoized value.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match &self.repr {
            Repr::Success(success) => Some(success.value()),
            Repr::Lazy(lazy) => Some(lazy.value()),
            Repr::Failure(_) => None,
        }
    }

    /// Returns the error of a failure, or `None` for a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{failure, success, Outcome};
    ///
    /// let ok: Outcome<i32, &str> = success(1);
    /// let err: Outcome<i32, &str> = failure("bad");
    /// assert_eq!(ok.get_error(), None);
    /// assert_eq!(err.get_error(), Some(&"bad"));
    /// ```
    #[inline]
    pub fn get_error(&self) -> Option<&E> {
        match &self.repr {
            Repr::Failure(failure) => Some(failure.error()),
            _ => None,
        }
    }

    /// Consumes the outcome, returning the error of a failure.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self.repr {
            Repr::Failure(failure) => Some(failure.into_error()),
            _ => None,
        }
    }

    /// Returns the named values collected so far, or `None` for a failure.
    #[inline]
    pub fn context(&self) -> Option<&Context> {
        match &self.repr {
            Repr::Success(success) => Some(success.context()),
            Repr::Lazy(lazy) => Some(lazy.context()),
            Repr::Failure(_) => None,
        }
    }

    /// Converts into a standard `Result`, forcing a lazy success.
    ///
    /// The context is dropped.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self.repr {
            Repr::Success(success) => Ok(success.into_value()),
            Repr::Lazy(lazy) => Ok(lazy.into_value()),
            Repr::Failure(failure) => Err(failure.into_error()),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// On success, `f` receives the value (a lazy success is forced) and its
    /// outcome is returned as is, collapsing one level of nesting. On failure
    /// `f` is not called and the failure is returned unchanged.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next outcome
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{failure, success, Outcome};
    ///
    /// fn half(n: i32) -> Outcome<'static, i32, String> {
    ///     if n % 2 == 0 { success(n / 2) } else { failure(format!("{n} is odd")) }
    /// }
    ///
    /// assert_eq!(success(8).bind(half).bind(half).unwrap(), 2);
    /// assert_eq!(success(6).bind(half).bind(half).into_error().unwrap(), "3 is odd");
    /// ```
    #[inline]
    pub fn bind<'b, U, F>(self, f: F) -> Outcome<'b, U, E>
    where
        F: FnOnce(T) -> Outcome<'b, U, E>,
    {
        match self.repr {
            Repr::Success(success) => success.bind(f),
            Repr::Lazy(lazy) => lazy.bind(f),
            Repr::Failure(failure) => failure.rewrap(),
        }
    }

    /// Transforms the error of a failure.
    ///
    /// Successes keep their value and context; a lazy success stays unforced.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{failure, Outcome};
    ///
    /// let err: Outcome<(), &str> = failure("not found");
    /// let mapped = err.map_err(|e| format!("Error: {e}"));
    /// assert_eq!(mapped.into_error().unwrap(), "Error: not found");
    /// ```
    #[inline]
    pub fn map_err<F, G>(self, f: G) -> Outcome<'a, T, F>
    where
        G: FnOnce(E) -> F,
    {
        match self.repr {
            Repr::Success(success) => Outcome::from_repr(Repr::Success(success)),
            Repr::Lazy(lazy) => Outcome::from_repr(Repr::Lazy(lazy)),
            Repr::Failure(failure) => failure.map_err(f),
        }
    }

    /// Runs a named step and keeps its value in the context.
    ///
    /// `f` receives the current value and the context collected so far. If it
    /// fails, that failure is returned. Otherwise its success value is stored
    /// under `field` and the outcome keeps its **original** value. Reusing a
    /// field name overwrites the earlier entry in place.
    ///
    /// A lazy success is forced to run the step and stays lazy afterwards.
    /// Failures skip `f`.
    ///
    /// # Arguments
    ///
    /// * `field` - Name under which the step's value is stored
    /// * `f` - The step, called with the value and the context
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{failure, success, Outcome};
    ///
    /// struct Cat { name: Option<&'static str>, age: Option<u32> }
    ///
    /// let cat = Cat { name: Some("Luna"), age: Some(7) };
    /// let summary: Outcome<(String, u32), String> = success(cat)
    ///     .use_("name", |cat, _| match cat.name {
    ///         Some(name) => success(name.to_string()),
    ///         None => failure("Missing name".to_string()),
    ///     })
    ///     .use_("age", |cat, _| match cat.age {
    ///         Some(age) => success(age),
    ///         None => failure("Missing age".to_string()),
    ///     })
    ///     .map_with_args(|_, (name, age): (String, u32)| (name, age));
    ///
    /// assert_eq!(summary.unwrap(), ("Luna".to_string(), 7));
    /// ```
    pub fn use_<'b, V, F>(self, field: impl Into<Cow<'static, str>>, f: F) -> Outcome<'a, T, E>
    where
        V: 'static,
        F: FnOnce(&T, &Context) -> Outcome<'b, V, E>,
    {
        match self.repr {
            Repr::Success(success) => success.use_(field.into(), f),
            Repr::Lazy(lazy) => lazy.use_(field.into(), f),
            Repr::Failure(failure) => failure.rewrap(),
        }
    }

    /// Calls `f` with a reference to the success value and returns `self`.
    ///
    /// A lazy success is forced. Failures are returned untouched; use
    /// [`tap_err`](Self::tap_err) to observe errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{success, Outcome};
    ///
    /// let mut seen = None;
    /// let out: Outcome<i32, ()> = success(3).tap(|v| seen = Some(*v));
    /// assert_eq!(seen, Some(3));
    /// assert_eq!(out.unwrap(), 3);
    /// ```
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = self.value() {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the error and returns `self`.
    #[inline]
    pub fn tap_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Some(error) = self.get_error() {
            f(error);
        }
        self
    }

    /// Returns the success value, or `default` for a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{failure, success, Outcome};
    ///
    /// let ok: Outcome<i32, &str> = success(42);
    /// let err: Outcome<i32, &str> = failure("x");
    /// assert_eq!(ok.unwrap_or(0), 42);
    /// assert_eq!(err.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.into_result().unwrap_or(default)
    }

    /// Returns the success value, or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.into_result().unwrap_or_else(f)
    }
}

impl<T, E> Outcome<'_, T, E> {
    /// Returns the success value, or an [`UnwrapError`] for a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{failure, success, Outcome};
    ///
    /// let ok: Outcome<i32, String> = success(1);
    /// assert_eq!(ok.try_unwrap().ok(), Some(1));
    ///
    /// let err: Outcome<i32, String> = failure("boom".to_string());
    /// let fault = err.try_unwrap().unwrap_err();
    /// assert_eq!(fault.to_string(), "boom");
    /// assert_eq!(fault.into_error(), "boom");
    /// ```
    pub fn try_unwrap(self) -> Result<T, UnwrapError<E>> {
        self.into_result().map_err(|error| {
            emit!(debug, "unwrap called on a failure");
            UnwrapError::new(error)
        })
    }

    /// Returns the success value, forcing a lazy success.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure. The message is the error text when
    /// the error is a string, and [`UNWRAP_ON_FAILURE`](crate::UNWRAP_ON_FAILURE)
    /// otherwise. Use [`try_unwrap`](Self::try_unwrap) for a non-panicking
    /// variant.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use outcome_rail::{failure, Outcome};
    ///
    /// let err: Outcome<i32, &str> = failure("boom");
    /// err.unwrap(); // panics with "boom"
    /// ```
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(fault) => panic!("{}", fault.message()),
        }
    }
}

impl<'a, T: 'a, E> Outcome<'a, T, E> {
    /// Transforms the success value.
    ///
    /// Successes keep their context. On a lazy success the transformation is
    /// deferred: the result is a new lazy success that forces the original and
    /// then applies `f`. Failures skip `f`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function applied to the success value
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{success, Outcome};
    ///
    /// let out: Outcome<String, ()> = success(5).map(|x| x * 2).map(|x| format!("n={x}"));
    /// assert_eq!(out.unwrap(), "n=10");
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<'a, U, E>
    where
        F: FnOnce(T) -> U + 'a,
    {
        match self.repr {
            Repr::Success(success) => success.map(f),
            Repr::Lazy(lazy) => lazy.map(f),
            Repr::Failure(failure) => failure.rewrap(),
        }
    }

    /// Replaces the value using the value and the collected context.
    ///
    /// Works like [`map`](Self::map) but `f` also receives the [`Context`],
    /// whose entries are in the order they were stored. The context is kept.
    /// Deferred on a lazy success, skipped on a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{success, Outcome};
    ///
    /// let out: Outcome<u32, ()> = success(10u32)
    ///     .use_("multiplier", |_, _| success(2u32))
    ///     .map_with(|value, ctx| value * ctx.nth::<u32>(0).copied().unwrap_or(1));
    ///
    /// assert_eq!(out.unwrap(), 20);
    /// ```
    #[inline]
    pub fn map_with<U, F>(self, f: F) -> Outcome<'a, U, E>
    where
        F: FnOnce(T, &Context) -> U + 'a,
    {
        match self.repr {
            Repr::Success(success) => success.map_with(f),
            Repr::Lazy(lazy) => lazy.map_with(f),
            Repr::Failure(failure) => failure.rewrap(),
        }
    }

    /// Like [`map_with`](Self::map_with), with the context destructured
    /// positionally into `A`.
    ///
    /// The context is read immediately, even on a lazy success. When it does
    /// not match `A` the result is a failure built from the
    /// [`ContextError`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{success, Outcome};
    ///
    /// let out: Outcome<String, String> = success("Luna")
    ///     .use_("age", |_, _| success(7u32))
    ///     .map_with_args(|name, (age,): (u32,)| format!("{name} is {age}"));
    /// assert_eq!(out.unwrap(), "Luna is 7");
    ///
    /// let wrong: Outcome<String, String> = success("Luna")
    ///     .use_("age", |_, _| success(7u32))
    ///     .map_with_args(|name, (age,): (String,)| format!("{name} is {age}"));
    /// assert!(wrong.is_err());
    /// ```
    pub fn map_with_args<A, U, F>(self, f: F) -> Outcome<'a, U, E>
    where
        A: FromContext + 'a,
        F: FnOnce(T, A) -> U + 'a,
        E: From<ContextError>,
    {
        match self.repr {
            Repr::Success(success) => match A::from_context(success.context()) {
                Ok(args) => success.map(move |value| f(value, args)),
                Err(error) => Outcome::new_failure(E::from(error)),
            },
            Repr::Lazy(lazy) => match A::from_context(lazy.context()) {
                Ok(args) => lazy.map(move |value| f(value, args)),
                Err(error) => Outcome::new_failure(E::from(error)),
            },
            Repr::Failure(failure) => failure.rewrap(),
        }
    }
}

impl<'b, T, E> Outcome<'_, Outcome<'b, T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// A success holding an outcome becomes that inner outcome (with the inner
    /// context); a failure stays a failure. A lazy outer success is forced.
    ///
    /// Only nested outcomes have this method. Flattening an outcome whose
    /// value is not itself an `Outcome` is rejected at compile time rather
    /// than being a no-op, so there is nothing to call on `Outcome<i32, E>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{success, Outcome};
    ///
    /// let nested: Outcome<Outcome<i32, ()>, ()> = success(success(5));
    /// assert_eq!(nested.flatten().unwrap(), 5);
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<'b, T, E> {
        match self.repr {
            Repr::Success(success) => success.into_value(),
            Repr::Lazy(lazy) => lazy.into_value(),
            Repr::Failure(failure) => failure.rewrap(),
        }
    }
}
