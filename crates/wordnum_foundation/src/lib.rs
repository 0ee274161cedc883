//! Core types for wordnum.
//!
//! This crate provides:
//! - [`Digit`] and [`DigitString`] - Digit positions that keep placeholders
//!   distinct from known zeros until a literal is produced
//! - [`ParsedNumber`] and [`NumberType`] - The result of interpreting a numeral
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod digit;
pub mod error;
pub mod number;

pub use digit::{Digit, DigitString};
pub use error::{Error, ErrorContext, ErrorKind, RepeaterFault, Result, SequencingRule};
pub use number::{NumberType, ParsedNumber};
