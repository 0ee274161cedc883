//! Parse tracing for wordnum.
//!
//! This crate provides:
//! - [`Tracer`] - a [`ParseObserver`](wordnum_parser::ParseObserver) that
//!   records slot decisions into a ring buffer
//! - [`TraceFormatter`] - human-readable and JSON renderings of those records
//! - [`TracerConfig`] - what to record and where to echo it

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod trace;

pub use config::{TraceOutput, TracerConfig};
pub use trace::{
    HumanFormatter, JsonFormatter, TraceBuffer, TraceBufferStats, TraceFormatter, TraceRecord,
    Tracer,
};
