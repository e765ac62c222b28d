//! Ergonomic macros for building and consuming outcomes.
//!
//! - [`macro@crate::lazy`] - Wraps an expression in a lazy success without
//!   writing the `move ||` closure by hand.
//! - [`macro@crate::attempt`] - Unwraps a success or returns the failure from
//!   the enclosing function, like `?` for outcomes.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{attempt, failure, lazy, success, Outcome};
//!
//! fn parse(input: &str) -> Outcome<'static, i32, String> {
//!     match input.parse::<i32>() {
//!         Ok(n) => success(n),
//!         Err(_) => failure(format!("Not a number: {input}")),
//!     }
//! }
//!
//! fn sum(a: &str, b: &str) -> Outcome<'static, i32, String> {
//!     let a = attempt!(parse(a));
//!     let b = attempt!(parse(b));
//!     lazy!(a + b)
//! }
//!
//! assert_eq!(sum("40", "2").unwrap(), 42);
//! assert!(sum("40", "two").is_err());
//! ```

/// Defers an expression into a lazy success.
///
/// `lazy!(expr)` is shorthand for `lazy_success(move || expr)`. The
/// expression is evaluated at most once, when the outcome is first forced.
///
/// # Examples
///
/// ```
/// use outcome_rail::{lazy, Outcome};
///
/// let label = String::from("title");
/// let html: Outcome<String, ()> = lazy!(format!("<h1>{label}</h1>"));
///
/// assert!(!html.is_evaluated());
/// assert_eq!(html.unwrap(), "<h1>title</h1>");
/// ```
#[macro_export]
macro_rules! lazy {
    ($expr:expr $(,)?) => {
        $crate::lazy_success(move || $expr)
    };
}

/// Extracts a success value or returns the failure early.
///
/// Accepts anything implementing [`IntoOutcome`](crate::traits::IntoOutcome),
/// so both `Outcome`s and `Result`s work. The enclosing function must return
/// an `Outcome` with the same error type. A lazy success is forced.
///
/// # Examples
///
/// ```
/// use outcome_rail::{attempt, success, Outcome};
///
/// fn double(input: &str) -> Outcome<'static, i32, std::num::ParseIntError> {
///     let n = attempt!(input.parse::<i32>());
///     success(n * 2)
/// }
///
/// assert_eq!(double("21").unwrap(), 42);
/// assert!(double("x").is_err());
/// ```
#[macro_export]
macro_rules! attempt {
    ($expr:expr $(,)?) => {
        match $crate::traits::IntoOutcome::into_outcome($expr).into_result() {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(error) => return $crate::failure(error),
        }
    };
}

/// Emits a `tracing` event when the `tracing` feature is enabled.
///
/// Expands to nothing otherwise.
macro_rules! emit {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($arg)+);
        }
    };
}
