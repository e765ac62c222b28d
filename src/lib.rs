//! A success-or-failure container for chaining fallible steps without
//! branching after every call.
//!
//! [`Outcome<T, E>`](Outcome) holds either a value or an error. Successes come
//! in two flavors: eager, holding a realized value, and lazy, holding a
//! computation that runs at most once on first use. Combinators such as
//! [`map`](Outcome::map) and [`bind`](Outcome::bind) skip their callbacks once
//! a chain has failed, and [`use_`](Outcome::use_) /
//! [`map_with`](Outcome::map_with) let a chain name intermediate results and
//! read them back later.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Short-circuiting Chain
//!
//! ```
//! use outcome_rail::{failure, success, Outcome};
//!
//! fn parse(s: &str) -> Outcome<'static, i32, String> {
//!     match s.parse::<i32>() {
//!         Ok(n) => success(n),
//!         Err(_) => failure(format!("Not a number: {s}")),
//!     }
//! }
//!
//! let process = |input: &str| {
//!     parse(input)
//!         .bind(|n| success(n * 2))
//!         .bind(|n| success(format!("Result: {n}")))
//! };
//!
//! assert_eq!(process("42").unwrap(), "Result: 84");
//! assert_eq!(process("abc").into_error().unwrap(), "Not a number: abc");
//! ```
//!
//! ## Named Context
//!
//! ```
//! use outcome_rail::{success, Outcome};
//!
//! let greeting: Outcome<String, String> = success(("Luna", 7u32))
//!     .use_("name", |cat, _| success(cat.0.to_string()))
//!     .use_("age", |cat, _| success(cat.1))
//!     .map_with_args(|_, (name, age): (String, u32)| format!("{name} is {age}"));
//!
//! assert_eq!(greeting.unwrap(), "Luna is 7");
//! ```
//!
//! ## Lazy Values
//!
//! ```
//! use outcome_rail::{lazy_success, Outcome};
//!
//! let lazy: Outcome<i32, ()> = lazy_success(|| 10).map(|x| x * 2);
//! assert!(!lazy.is_evaluated());
//! assert_eq!(lazy.unwrap(), 20);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Outcome construction and consumption macros
#[macro_use]
pub mod macros;

/// Construction helpers and try adapters
pub mod construct;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Conversion traits
pub mod traits;
/// Outcome, Context and UnwrapError
pub mod types;

pub use construct::*;
pub use traits::*;
pub use types::{
    Context, ContextError, ContextVec, Entry, FromContext, Outcome, UnwrapError, Variant,
    UNWRAP_ON_FAILURE,
};
