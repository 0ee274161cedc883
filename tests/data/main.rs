//! Integration tests for the wordnum_data crate.

mod locale_tests;
mod zone_tests;
