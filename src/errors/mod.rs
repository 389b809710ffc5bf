//! Error types for building the token registry.
//!
//! Classification itself never fails: unknown spellings are `None` and
//! unnamed kinds fall back to their ordinal. Only constructing a registry from
//! inconsistent tables produces an error.

pub mod errors;
