use alloc::borrow::Cow;
use alloc::string::String;
use core::any::TypeId;
use core::fmt::{Debug, Display};
use core::marker::PhantomData;
use core::mem;

/// Diagnostic used when the failure being unwrapped carries no text.
pub const UNWRAP_ON_FAILURE: &str =
    "Failure value encountered in unwrap(). Check is_ok() before calling unwrap().";

/// Raised when a failure is unwrapped as if it were a success.
///
/// Returned by [`Outcome::try_unwrap`](crate::Outcome::try_unwrap) and used as
/// the panic message of [`Outcome::unwrap`](crate::Outcome::unwrap). The
/// message is the error itself when the error is textual (`String`, `&str`
/// or `Cow<str>`, borrowed for any lifetime), and [`UNWRAP_ON_FAILURE`]
/// otherwise. The original error is kept and can be taken back with
/// [`into_error`](Self::into_error).
///
/// # Examples
///
/// ```
/// use outcome_rail::{failure, Outcome, UNWRAP_ON_FAILURE};
///
/// let textual: Outcome<i32, &str> = failure("boom");
/// assert_eq!(textual.try_unwrap().unwrap_err().message(), "boom");
///
/// let coded: Outcome<i32, u16> = failure(503);
/// let fault = coded.try_unwrap().unwrap_err();
/// assert_eq!(fault.message(), UNWRAP_ON_FAILURE);
/// assert_eq!(fault.into_error(), 503);
/// ```
pub struct UnwrapError<E> {
    error: E,
    message: Cow<'static, str>,
}

impl<E> UnwrapError<E> {
    pub(crate) fn new(error: E) -> Self {
        let message = textual(&error)
            .map(|text| Cow::Owned(String::from(text)))
            .unwrap_or(Cow::Borrowed(UNWRAP_ON_FAILURE));
        Self { error, message }
    }

    /// Returns the diagnostic message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns a reference to the error that was unwrapped.
    #[inline]
    pub const fn error(&self) -> &E {
        &self.error
    }

    /// Consumes the fault, returning the original error.
    #[inline]
    pub fn into_error(self) -> E {
        self.error
    }
}

trait TypeKey {
    fn key(&self) -> TypeId
    where
        Self: 'static;
}

impl<T: ?Sized> TypeKey for PhantomData<T> {
    fn key(&self) -> TypeId
    where
        Self: 'static,
    {
        TypeId::of::<T>()
    }
}

/// `TypeId` of `T` with its lifetimes erased, so `&'a str` and
/// `&'static str` share a key.
fn type_key<T: ?Sized>() -> TypeId {
    let marker = PhantomData::<T>;
    // SAFETY: the marker is zero-sized and never read through; only the
    // vtable is used, and `TypeId` does not depend on lifetimes.
    let marker = unsafe { mem::transmute::<&dyn TypeKey, &'static dyn TypeKey>(&marker) };
    marker.key()
}

/// Views the error as text when it is one of the string types.
fn textual<E>(error: &E) -> Option<&str> {
    let key = type_key::<E>();
    let error: *const E = error;

    if key == TypeId::of::<String>() {
        // SAFETY: `E` is `String`.
        return Some(unsafe { &*error.cast::<String>() }.as_str());
    }
    if key == TypeId::of::<&'static str>() {
        // SAFETY: `E` is `&'x str`, and `'x` outlives the borrow of `error`.
        return Some(unsafe { *error.cast::<&str>() });
    }
    if key == TypeId::of::<Cow<'static, str>>() {
        // SAFETY: `E` is `Cow<'x, str>`, and `'x` outlives the borrow of `error`.
        return Some(unsafe { &**error.cast::<Cow<'_, str>>() });
    }
    None
}

impl<E: Debug> Debug for UnwrapError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UnwrapError")
            .field("error", &self.error)
            .field("message", &self.message)
            .finish()
    }
}

impl<E> Display for UnwrapError<E> {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl<E: Debug> core::error::Error for UnwrapError<E> {}
