use super::{Outcome, Repr};

/// Failure variant holding the domain error.
///
/// Value-producing operators never look inside: they hand the same error
/// back under the new success type.
pub(crate) struct Failure<E> {
    error: E,
}

impl<E> Failure<E> {
    #[inline]
    pub(crate) fn new(error: E) -> Self {
        Self { error }
    }

    #[inline]
    pub(crate) fn error(&self) -> &E {
        &self.error
    }

    #[inline]
    pub(crate) fn into_error(self) -> E {
        self.error
    }

    /// Propagates this failure unchanged under another success type.
    #[inline]
    pub(crate) fn rewrap<'a, U>(self) -> Outcome<'a, U, E> {
        Outcome::from_repr(Repr::Failure(self))
    }

    #[inline]
    pub(crate) fn map_err<'a, T, F, G>(self, f: G) -> Outcome<'a, T, F>
    where
        G: FnOnce(E) -> F,
    {
        Outcome::from_repr(Repr::Failure(Failure { error: f(self.error) }))
    }
}
