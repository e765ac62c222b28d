//! Deferred success values with a write-once memo.
//!
//! A [`LazySuccess`] holds a zero-argument computation that has not run yet.
//! The first observation forces it and stores the result in a [`Memo`]; every
//! later observation reads the stored value, so the computation runs at most
//! once. Transformations composed on top of a lazy success (`map`,
//! `map_with`) are deferred as well: they become the thunk of a new memo that
//! owns the old one.
//!
//! Thunks may borrow anything that lives for `'a`, the lifetime carried by
//! the enclosing [`Outcome`].
use alloc::borrow::Cow;
use alloc::boxed::Box;
use core::cell::{Cell, OnceCell};

use super::{Outcome, Repr};
use crate::types::context::Context;

type Thunk<'a, T> = Box<dyn FnOnce() -> T + 'a>;

const POISONED: &str = "lazy outcome forced after its computation panicked";

/// Single-cell state machine: pending thunk, then forced value.
///
/// The thunk is taken out of its cell before it runs and dropped right after,
/// so a panicking computation leaves the memo poisoned instead of running
/// twice. Re-entrant forcing is rejected by [`OnceCell`].
pub(crate) struct Memo<'a, T> {
    thunk: Cell<Option<Thunk<'a, T>>>,
    value: OnceCell<T>,
}

impl<'a, T> Memo<'a, T> {
    pub(crate) fn new<F>(thunk: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        Self { thunk: Cell::new(Some(Box::new(thunk))), value: OnceCell::new() }
    }

    pub(crate) fn force(&self) -> &T {
        self.value.get_or_init(|| {
            emit!(trace, "forcing deferred success");
            match self.thunk.take() {
                Some(thunk) => thunk(),
                None => panic!("{}", POISONED),
            }
        })
    }

    /// Returns the memoized value without forcing.
    #[inline]
    pub(crate) fn get(&self) -> Option<&T> {
        self.value.get()
    }

    pub(crate) fn into_value(self) -> T {
        let Self { thunk, value } = self;
        if let Some(value) = value.into_inner() {
            return value;
        }

        emit!(trace, "forcing deferred success");
        match thunk.into_inner() {
            Some(thunk) => thunk(),
            None => panic!("{}", POISONED),
        }
    }
}

/// Success variant whose value is computed on first use.
pub(crate) struct LazySuccess<'a, T> {
    memo: Memo<'a, T>,
    context: Context,
}

impl<'a, T> LazySuccess<'a, T> {
    #[inline]
    pub(crate) fn new<F>(thunk: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        Self { memo: Memo::new(thunk), context: Context::new() }
    }

    #[inline]
    pub(crate) fn value(&self) -> &T {
        self.memo.force()
    }

    #[inline]
    pub(crate) fn evaluated(&self) -> Option<&T> {
        self.memo.get()
    }

    #[inline]
    pub(crate) fn context(&self) -> &Context {
        &self.context
    }

    #[inline]
    pub(crate) fn into_value(self) -> T {
        self.memo.into_value()
    }

    pub(crate) fn map<U, E, F>(self, f: F) -> Outcome<'a, U, E>
    where
        T: 'a,
        F: FnOnce(T) -> U + 'a,
    {
        let Self { memo, context } = self;
        emit!(trace, "deferring map over lazy success");
        Outcome::from_repr(Repr::Lazy(LazySuccess {
            memo: Memo::new(move || f(memo.into_value())),
            context,
        }))
    }

    #[inline]
    pub(crate) fn bind<'b, U, E, F>(self, f: F) -> Outcome<'b, U, E>
    where
        F: FnOnce(T) -> Outcome<'b, U, E>,
    {
        f(self.memo.into_value())
    }

    /// Forces the value to run the step, then stays lazy over the same memo.
    pub(crate) fn use_<'b, V, E, F>(self, field: Cow<'static, str>, f: F) -> Outcome<'a, T, E>
    where
        V: 'static,
        F: FnOnce(&T, &Context) -> Outcome<'b, V, E>,
    {
        let step = f(self.memo.force(), &self.context);
        match step.into_result() {
            Ok(value) => Outcome::from_repr(Repr::Lazy(LazySuccess {
                memo: self.memo,
                context: self.context.with_field(field, value),
            })),
            Err(error) => {
                emit!(debug, field = %field, "context step short-circuited");
                crate::failure(error)
            },
        }
    }

    /// Defers `f`, handing it the context as it is now.
    ///
    /// Later `use_` steps extend the outcome's own context, never the copy
    /// captured here.
    pub(crate) fn map_with<U, E, F>(self, f: F) -> Outcome<'a, U, E>
    where
        T: 'a,
        F: FnOnce(T, &Context) -> U + 'a,
    {
        let Self { memo, context } = self;
        let captured = context.clone();
        emit!(trace, "deferring map_with over lazy success");
        Outcome::from_repr(Repr::Lazy(LazySuccess {
            memo: Memo::new(move || f(memo.into_value(), &captured)),
            context,
        }))
    }
}
