//! Panic-catching adapters (requires the `std` feature).
use std::any::Any;
use std::fmt::{self, Display};
use std::panic::{catch_unwind, AssertUnwindSafe};

use super::{failure, lazy_success, success};
use crate::types::Outcome;

/// A panic captured by [`try_catch`] or [`lazy_try_catch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panic {
    message: Option<String>,
}

impl Panic {
    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(text) => Some(*text),
            Err(payload) => payload.downcast_ref::<&'static str>().map(|text| String::from(*text)),
        };
        Self { message }
    }

    /// Returns the panic message when the payload was a string.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Display for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "panicked: {message}"),
            None => f.write_str("panicked with a non-string payload"),
        }
    }
}

impl std::error::Error for Panic {}

/// Runs `f` now, turning a panic into a failure.
///
/// The default panic hook still runs, so the panic is reported on stderr.
///
/// # Examples
///
/// ```
/// use outcome_rail::try_catch;
///
/// let ok = try_catch(|| 2 + 2);
/// assert_eq!(ok.unwrap(), 4);
///
/// let caught = try_catch(|| -> i32 { panic!("Im an error") });
/// assert_eq!(caught.get_error().and_then(|p| p.message()), Some("Im an error"));
/// ```
pub fn try_catch<'a, T, F>(f: F) -> Outcome<'a, T, Panic>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => success(value),
        Err(payload) => {
            let panic = Panic::from_payload(payload);
            emit!(warn, panic = %panic, "panic captured as failure");
            failure(panic)
        },
    }
}

/// Deferred [`try_catch`]: `f` runs, and may panic, only when forced.
pub fn lazy_try_catch<'a, T, F>(f: F) -> Outcome<'a, Outcome<'a, T, Panic>, Panic>
where
    F: FnOnce() -> T + 'a,
{
    lazy_success(move || try_catch(f))
}
