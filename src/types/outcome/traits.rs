use core::fmt::{self, Debug, Display};

use super::{Outcome, Repr};

/// Renders `Success(<value>)` or `Failure(<error>)`.
///
/// A lazy success is forced and rendered like an eager one.
impl<T: Display, E: Display> Display for Outcome<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Success(success) => write!(f, "Success({})", success.value()),
            Repr::Lazy(lazy) => write!(f, "Success({})", lazy.value()),
            Repr::Failure(failure) => write!(f, "Failure({})", failure.error()),
        }
    }
}

/// Never forces a lazy success; pending values print as `<pending>`.
impl<T: Debug, E: Debug> Debug for Outcome<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Success(success) => f
                .debug_struct("Success")
                .field("value", success.value())
                .field("context", success.context())
                .finish(),
            Repr::Lazy(lazy) => {
                let mut out = f.debug_struct("LazySuccess");
                match lazy.evaluated() {
                    Some(value) => out.field("value", value),
                    None => out.field("value", &format_args!("<pending>")),
                };
                out.field("context", lazy.context()).finish()
            },
            Repr::Failure(failure) => f.debug_tuple("Failure").field(failure.error()).finish(),
        }
    }
}

/// Two outcomes are equal when both succeed with equal values or both fail
/// with equal errors. Contexts are not compared; lazy successes are forced.
impl<'b, T: PartialEq, E: PartialEq> PartialEq<Outcome<'b, T, E>> for Outcome<'_, T, E> {
    fn eq(&self, other: &Outcome<'b, T, E>) -> bool {
        match (self.value(), other.value()) {
            (Some(left), Some(right)) => left == right,
            (None, None) => self.get_error() == other.get_error(),
            _ => false,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<'_, T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::new_success(value),
            Err(error) => Self::new_failure(error),
        }
    }
}

impl<T, E> From<Outcome<'_, T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<'_, T, E>) -> Self {
        outcome.into_result()
    }
}
