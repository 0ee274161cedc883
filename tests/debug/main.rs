//! Integration tests for the wordnum_debug crate.

mod tracer_tests;
