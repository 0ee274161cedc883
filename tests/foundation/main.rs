//! Integration tests for the wordnum_foundation crate.

mod digits;
mod errors;
mod numbers;
