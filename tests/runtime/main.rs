//! Integration tests for the wordnum_runtime crate.

mod repl_tests;
mod selftest_tests;
