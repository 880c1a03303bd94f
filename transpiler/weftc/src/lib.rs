//! Weft transpiler CLI library.
//!
//! The binary in `main.rs` only parses arguments and dispatches here;
//! everything testable lives in [`commands`] and [`reporting`].

pub mod commands;
pub mod reporting;
