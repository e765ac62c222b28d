//! The outcome container and the values it carries.
//!
//! - [`Outcome`]: success-or-failure container with eager and lazy successes
//! - [`Context`]: named values collected along a chain
//! - [`UnwrapError`]: raised when a failure is unwrapped
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{success, Outcome, Variant};
//!
//! let out: Outcome<u8, ()> = success(1).use_("next", |v, _| success(*v + 1));
//!
//! assert_eq!(out.variant(), Variant::Success);
//! assert_eq!(out.context().unwrap().get::<u8>("next"), Some(&2));
//! ```
pub mod context;
pub mod outcome;
pub mod unwrap_error;

pub use context::*;
pub use outcome::{Outcome, Variant};
pub use unwrap_error::*;
