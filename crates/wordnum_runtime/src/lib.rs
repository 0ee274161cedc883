//! CLI, REPL, and self-test battery for wordnum.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-eval-print loop over number words
//! - [`run_self_test`] - The fixed battery of known readings
//! - The `wordnum` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod error;
pub mod highlight;
pub mod repl;
pub mod selftest;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use error::{Result, RuntimeError};
pub use repl::{Reply, Repl};
pub use selftest::{BATTERY, CaseOutcome, SelfTestCase, SelfTestReport, run_self_test};
