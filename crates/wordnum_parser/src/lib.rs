//! Interpreter for English number words.
//!
//! Turns a token sequence such as `["one", "thousand", "nine", "hundred",
//! "ten"]` or `["double", "oh", "seven"]` into a [`ParsedNumber`].
//!
//! # Architecture
//!
//! ```text
//! ["a", "hundred", "twenty", "third"]
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ NORMALIZATION   │  → ["one", "hundred", "twenty", "third"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SLOT PARSER     │  → slot(20): "1" + slot(2): "2" + slot(1): "3"
//! │ (recursive)     │     flags { ordinal }
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ FINALIZER       │  → (ordinal, 123, "123", false)
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`lexicon`] - Static word classification tables
//! - [`suffix`] - Ordinal suffix validation for numerals ("21st", "2d")
//! - [`slot`] - The recursive slot parser
//! - [`finalize`] - Top-level normalization and result finalization
//! - [`parser`] - Entry points and configuration
//! - [`observer`] - Hook for tracing parser decisions
//! - [`tokenizer`] - Convert raw text to lowercase word tokens

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finalize;
pub mod lexicon;
pub mod observer;
pub mod parser;
pub mod slot;
pub mod suffix;
pub mod tokenizer;

mod tokens;

pub use observer::{NoopObserver, ParseEvent, ParseObserver};
pub use parser::{NumberParser, ParserConfig, TOP_SLOT_WIDTH, parse};
pub use slot::SlotFlags;
pub use tokenizer::InputTokenizer;
pub use wordnum_foundation::{Error, ErrorKind, NumberType, ParsedNumber, Result};
