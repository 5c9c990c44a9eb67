//! Splitting Strategy Module
//!
//! Higher-level splitting built on the core splitter:
//! - Classes: named byte classes for predicate splitting from Elixir
//! - Lines: CR/LF/CRLF line ranges and per-line trimming
//! - Parallel: batch splitting of many buffers (for large workloads)

pub mod classes;
pub mod lines;
pub mod parallel;

pub use classes::{byte_class, ByteClass};
pub use lines::{split_lines, trim_lines, trim_lines_into, trimmed_len};
pub use parallel::{split_bytes_parallel, split_parallel};
