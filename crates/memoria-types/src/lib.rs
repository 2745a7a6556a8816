//! Shared domain types for Memoria.
//!
//! This crate contains the types used across the Memoria workspace: the
//! integer `Key` of a memoized computation, the built-in `Relation` names,
//! their computation errors, and the serializable evaluation reports.
//!
//! Zero infrastructure dependencies -- only serde, thiserror.

pub mod error;
pub mod relation;
pub mod report;

/// Integer identifying one instance of a memoized computation.
///
/// Any value is a valid key. Whether a key is inside the domain of a
/// particular computation is decided by that computation, never by the cache.
pub type Key = i64;
