//! Named intermediate values threaded through an outcome chain.
//!
//! [`Outcome::use_`](crate::Outcome::use_) stores the success value of a step
//! under a field name, and later steps read those values back through the
//! [`Context`] handed to their callbacks. Entries keep their insertion order,
//! which is also the positional order used by [`Context::nth`] and
//! [`Context::args`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{success, Outcome};
//!
//! let total: Outcome<u32, String> = success(3u32)
//!     .use_("price", |_, _| success(15u32))
//!     .map_with(|qty, ctx| qty * ctx.get::<u32>("price").copied().unwrap_or(0));
//!
//! assert_eq!(total.unwrap(), 45);
//! ```
use alloc::borrow::Cow;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use core::any::{type_name, Any};
use core::fmt::{self, Debug, Display};

use smallvec::SmallVec;

/// SmallVec-backed storage for context entries.
///
/// Four inline slots cover the usual handful of named steps in a chain
/// without touching the heap.
pub type ContextVec = SmallVec<[Entry; 4]>;

/// A single named value inside a [`Context`].
#[derive(Clone)]
pub struct Entry {
    name: Cow<'static, str>,
    value: Rc<dyn Any>,
}

impl Entry {
    /// Returns the field name of this entry.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value if it has type `V`.
    #[inline]
    pub fn downcast_ref<V: 'static>(&self) -> Option<&V> {
        self.value.downcast_ref::<V>()
    }
}

impl Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Insertion-ordered mapping from field name to a previously produced value.
///
/// Values are type-erased so one chain can carry results of different types.
/// Field names are unique: storing a name twice replaces the value and keeps
/// the position of the first insertion.
///
/// Cloning a context is cheap; values are reference counted.
///
/// # Examples
///
/// ```
/// use outcome_rail::{success, Outcome};
///
/// let pair: Outcome<(String, u32), String> = success("Luna 7")
///     .use_("name", |s, _| success(s.split(' ').next().unwrap_or("").to_string()))
///     .use_("age", |s, _| success(s.rsplit(' ').next().and_then(|a| a.parse::<u32>().ok()).unwrap_or(0)))
///     .map_with(|_, ctx| ctx.args::<(String, u32)>().unwrap());
///
/// assert_eq!(pair.unwrap(), ("Luna".to_string(), 7));
/// ```
#[derive(Clone, Default)]
pub struct Context {
    entries: ContextVec,
}

impl Context {
    /// Creates an empty context.
    #[inline]
    pub fn new() -> Self {
        Self { entries: ContextVec::new() }
    }

    /// Returns the number of stored fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no field has been stored yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if a field with this name exists.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Looks up a field by name, returning it only if it has type `V`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{success, Outcome};
    ///
    /// let out: Outcome<bool, String> = success(())
    ///     .use_("id", |_, _| success(7u64))
    ///     .map_with(|_, ctx| ctx.get::<u64>("id") == Some(&7) && ctx.get::<u32>("id").is_none());
    ///
    /// assert!(out.unwrap());
    /// ```
    #[inline]
    pub fn get<V: 'static>(&self, name: &str) -> Option<&V> {
        self.position(name)
            .and_then(|index| self.entries[index].downcast_ref::<V>())
    }

    /// Returns the value at `index` in insertion order if it has type `V`.
    #[inline]
    pub fn nth<V: 'static>(&self, index: usize) -> Option<&V> {
        self.entries.get(index).and_then(|entry| entry.downcast_ref::<V>())
    }

    /// Returns a cloned value at `index`, reporting why it is unavailable.
    ///
    /// This is the building block of [`FromContext`].
    pub fn arg<V: Clone + 'static>(&self, index: usize) -> Result<V, ContextError> {
        let entry = self.entries.get(index).ok_or(ContextError::Missing {
            index,
            len: self.entries.len(),
        })?;

        entry
            .downcast_ref::<V>()
            .cloned()
            .ok_or_else(|| ContextError::TypeMismatch {
                index,
                name: String::from(entry.name()),
                expected: type_name::<V>(),
            })
    }

    /// Destructures the context positionally into a tuple.
    ///
    /// The first tuple element receives the first stored field, and so on.
    /// Extra fields beyond the tuple arity are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{success, ContextError, Outcome};
    ///
    /// let out: Outcome<Result<(u8, &'static str), ContextError>, String> = success(())
    ///     .use_("a", |_, _| success(1u8))
    ///     .use_("b", |_, _| success("two"))
    ///     .map_with(|_, ctx| ctx.args::<(u8, &'static str)>());
    ///
    /// assert_eq!(out.unwrap(), Ok((1, "two")));
    /// ```
    #[inline]
    pub fn args<A: FromContext>(&self) -> Result<A, ContextError> {
        A::from_context(self)
    }

    /// Iterates over the stored field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(Entry::name)
    }

    /// Iterates over the stored entries in insertion order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Returns a context extended with `value` under `name`.
    ///
    /// An existing field with the same name is overwritten in place.
    pub(crate) fn with_field<V: 'static>(mut self, name: Cow<'static, str>, value: V) -> Self {
        let value: Rc<dyn Any> = Rc::new(value);
        match self.position(&name) {
            Some(index) => self.entries[index].value = value,
            None => self.entries.push(Entry { name, value }),
        }
        self
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name() == name)
    }
}

impl Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl<'a> IntoIterator for &'a Context {
    type Item = &'a Entry;
    type IntoIter = core::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Reasons a positional read from a [`Context`] can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// Fewer fields are stored than the requested position needs.
    Missing { index: usize, len: usize },
    /// The field exists but holds a value of another type.
    TypeMismatch { index: usize, name: String, expected: &'static str },
}

impl Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { index, len } => {
                write!(f, "context field #{index} requested but only {len} stored")
            },
            Self::TypeMismatch { index, name, expected } => {
                write!(f, "context field #{index} '{name}' is not a {expected}")
            },
        }
    }
}

impl core::error::Error for ContextError {}

impl From<ContextError> for String {
    #[inline]
    fn from(error: ContextError) -> Self {
        format!("{error}")
    }
}

/// Types that can be built positionally from a [`Context`].
///
/// Implemented for `()` and for tuples of up to eight `Clone + 'static`
/// elements, so callbacks can receive context values as a typed parameter
/// list.
pub trait FromContext: Sized {
    /// Reads `Self` from the leading fields of `context`.
    fn from_context(context: &Context) -> Result<Self, ContextError>;
}

impl FromContext for () {
    #[inline]
    fn from_context(_context: &Context) -> Result<Self, ContextError> {
        Ok(())
    }
}

macro_rules! impl_from_context {
    ($($index:tt => $ty:ident),+) => {
        impl<$($ty: Clone + 'static),+> FromContext for ($($ty,)+) {
            #[inline]
            fn from_context(context: &Context) -> Result<Self, ContextError> {
                Ok(($(context.arg::<$ty>($index)?,)+))
            }
        }
    };
}

impl_from_context!(0 => A);
impl_from_context!(0 => A, 1 => B);
impl_from_context!(0 => A, 1 => B, 2 => C);
impl_from_context!(0 => A, 1 => B, 2 => C, 3 => D);
impl_from_context!(0 => A, 1 => B, 2 => C, 3 => D, 4 => F);
impl_from_context!(0 => A, 1 => B, 2 => C, 3 => D, 4 => F, 5 => G);
impl_from_context!(0 => A, 1 => B, 2 => C, 3 => D, 4 => F, 5 => G, 6 => H);
impl_from_context!(0 => A, 1 => B, 2 => C, 3 => D, 4 => F, 5 => G, 6 => H, 7 => I);
