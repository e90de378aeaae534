//! Shared utilities.
//!
//! - `io`: file read/write primitives with consistent error handling

pub mod io;
