//! Conversion traits.
//!
//! - [`IntoOutcome`]: converts `Result`s (and outcomes themselves) into an
//!   [`Outcome`](crate::Outcome)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::IntoOutcome;
//!
//! let out = "12".parse::<u8>().into_outcome().map(|n| n + 1);
//! assert_eq!(out.unwrap(), 13);
//! ```

pub mod into_outcome;

pub use into_outcome::IntoOutcome;
