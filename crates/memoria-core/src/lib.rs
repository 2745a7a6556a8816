//! Self-referential memoization engine for Memoria.
//!
//! [`memo::Memo`] turns an integer-indexed recursive computation into a
//! cached, thread-safe function. The computation receives the engine itself
//! on every call, so its recursive sub-calls are memoized too.
//!
//! [`relations`] builds a handful of dynamic-programming relations on top of
//! the engine. This crate depends only on `memoria-types`.

pub mod counted;
pub mod memo;
pub mod relations;

pub use counted::Counted;
pub use memo::{Memo, TryMemo};
