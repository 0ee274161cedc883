//! Integration tests for the wordnum_parser crate.
//!
//! Tests for the number-word pipeline:
//! - Known readings in colloquial and strict mode
//! - Error kinds and positions
//! - Properties over generated spellings and token soups
//! - Tokenization
//! - Observer events

mod error_tests;
mod observer_tests;
mod property_tests;
mod reading_tests;
mod tokenizer_tests;
