//! wordnum - Interpreter for English number words
//!
//! This crate re-exports all layers of the wordnum system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: wordnum_runtime    - CLI, REPL, self-test battery
//! Layer 2: wordnum_debug      - Parse tracing
//! Layer 1: wordnum_parser     - Lexicon, suffixes, slot parser, finalizer
//!          wordnum_data       - Locale and time-zone tables
//! Layer 0: wordnum_foundation - Core types (DigitString, ParsedNumber, Error)
//! ```
//!
//! # Example
//!
//! ```
//! let number = wordnum::parse(&["double", "oh", "seven"], true).unwrap();
//! assert_eq!(number.value, 7);
//! assert_eq!(number.literal, "007");
//! ```

pub use wordnum_data as data;
pub use wordnum_debug as debug;
pub use wordnum_foundation as foundation;
pub use wordnum_parser as parser;
pub use wordnum_runtime as runtime;

pub use wordnum_foundation::{Error, ErrorKind, NumberType, ParsedNumber};
pub use wordnum_parser::parse;
