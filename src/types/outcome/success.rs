use alloc::borrow::Cow;

use super::{Outcome, Repr};
use crate::types::context::Context;

/// Success variant holding a realized value.
pub(crate) struct Success<T> {
    value: T,
    context: Context,
}

impl<T> Success<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Self { value, context: Context::new() }
    }

    #[inline]
    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub(crate) fn context(&self) -> &Context {
        &self.context
    }

    #[inline]
    pub(crate) fn into_value(self) -> T {
        self.value
    }

    #[inline]
    fn wrap<'a, U, E>(value: U, context: Context) -> Outcome<'a, U, E> {
        Outcome::from_repr(Repr::Success(Success { value, context }))
    }

    #[inline]
    pub(crate) fn map<'a, U, E, F>(self, f: F) -> Outcome<'a, U, E>
    where
        F: FnOnce(T) -> U,
    {
        Self::wrap(f(self.value), self.context)
    }

    #[inline]
    pub(crate) fn bind<'b, U, E, F>(self, f: F) -> Outcome<'b, U, E>
    where
        F: FnOnce(T) -> Outcome<'b, U, E>,
    {
        f(self.value)
    }

    pub(crate) fn use_<'a, 'b, V, E, F>(self, field: Cow<'static, str>, f: F) -> Outcome<'a, T, E>
    where
        V: 'static,
        F: FnOnce(&T, &Context) -> Outcome<'b, V, E>,
    {
        let step = f(&self.value, &self.context);
        match step.into_result() {
            Ok(value) => Self::wrap(self.value, self.context.with_field(field, value)),
            Err(error) => {
                emit!(debug, field = %field, "context step short-circuited");
                crate::failure(error)
            },
        }
    }

    #[inline]
    pub(crate) fn map_with<'a, U, E, F>(self, f: F) -> Outcome<'a, U, E>
    where
        F: FnOnce(T, &Context) -> U,
    {
        let value = f(self.value, &self.context);
        Self::wrap(value, self.context)
    }
}
