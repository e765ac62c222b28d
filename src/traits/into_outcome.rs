//! Trait for converting fallible values into an [`Outcome`].
//!
//! # Implementations
//!
//! - `Result<T, E>` - `Ok` becomes a success, `Err` a failure
//! - `Outcome<T, E>` - Identity conversion (no-op)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::IntoOutcome;
//! use outcome_rail::Outcome;
//!
//! let ok: Outcome<i32, &str> = Ok::<i32, &str>(1).into_outcome();
//! let err: Outcome<i32, &str> = Err::<i32, &str>("bad").into_outcome();
//!
//! assert!(ok.is_ok());
//! assert_eq!(err.get_error(), Some(&"bad"));
//! ```
use crate::types::Outcome;

/// Converts a type into an [`Outcome`].
///
/// Used by the [`attempt!`](crate::attempt) macro so it accepts both plain
/// `Result`s and outcomes.
///
/// # Implementing for Custom Types
///
/// ```
/// use outcome_rail::{failure, success, traits::IntoOutcome, Outcome};
///
/// enum Lookup { Found(u32), Missing }
///
/// impl<'a> IntoOutcome<'a, u32, &'static str> for Lookup {
///     fn into_outcome(self) -> Outcome<'a, u32, &'static str> {
///         match self {
///             Lookup::Found(id) => success(id),
///             Lookup::Missing => failure("missing"),
///         }
///     }
/// }
///
/// assert_eq!(Lookup::Found(3).into_outcome().unwrap(), 3);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted into `Outcome<{T}, {E}>`",
    label = "this type does not implement `IntoOutcome`",
    note = "return a `Result` or an `Outcome`, or implement `IntoOutcome` manually"
)]
pub trait IntoOutcome<'a, T, E> {
    /// Converts `self` into an outcome.
    fn into_outcome(self) -> Outcome<'a, T, E>;
}

impl<'a, T, E> IntoOutcome<'a, T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<'a, T, E> {
        Outcome::from(self)
    }
}

impl<'a, T, E> IntoOutcome<'a, T, E> for Outcome<'a, T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<'a, T, E> {
        self
    }
}
