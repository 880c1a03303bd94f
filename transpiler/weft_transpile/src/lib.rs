//! Weft transpilation: the region stack, the driver, and the public entry
//! point.
//!
//! A Weft document is host JavaScript with embedded stylesheet expressions
//! (`<<...>>`), which may themselves re-embed host expressions (`[...]`),
//! alternating to arbitrary depth. [`transpile`] rewrites each root-level
//! stylesheet region into a `RUNTIME.evaluate(...)` call whose argument is
//! a single-quoted literal, with nested host expressions spliced in through
//! `RUNTIME.jsExpr(...)`. `RUNTIME` is resolved at execution time by the
//! generated code's environment; this crate neither defines nor validates
//! it.
//!
//! Root-level text passes through untouched, comments and strings included.
//! The whole pass is synchronous: one scanner, one region stack, no AST,
//! and no shared state between calls.

mod driver;
mod error;
mod region;

pub use driver::transpile;
pub use error::{ErrorKind, TranspileError};
