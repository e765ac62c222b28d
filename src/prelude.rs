//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`lazy!`], [`attempt!`]
//! - **Constructors**: [`success`], [`failure`], [`lazy_success`], [`try_to`],
//!   [`lazy_try_to`]
//! - **Types**: [`Outcome`], [`Context`], [`UnwrapError`]
//! - **Traits**: [`IntoOutcome`], [`FromContext`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn load(raw: &str) -> Outcome<'static, u16, std::num::ParseIntError> {
//!     try_to(|| raw.trim().parse::<u16>())
//! }
//!
//! assert_eq!(load(" 8080 ").unwrap_or(80), 8080);
//! assert_eq!(load("http").unwrap_or(80), 80);
//! ```

// Macros
pub use crate::{attempt, lazy};

// Constructors
pub use crate::construct::{
    failure, lazy_success, lazy_try_to, lazy_try_to_or_else, success, try_to, try_to_or_else,
};

#[cfg(feature = "std")]
pub use crate::construct::{lazy_try_catch, try_catch, Panic};

// Core types
pub use crate::types::{Context, Outcome, UnwrapError, Variant};

// Traits
pub use crate::traits::IntoOutcome;
pub use crate::types::FromContext;
