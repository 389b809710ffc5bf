//! Token classification for PHP source.
//!
//! This module is the naming and matching authority a scanner consults. It
//! provides:
//!
//! - The closed set of token kinds and their diagnostic display names
//! - The table of fixed spellings (keywords, punctuation, operators, casts)
//! - A longest-first ordering of those spellings for maximal munch
//! - The set of characters that can begin an operator
//!
//! It does not scan. Whitespace, strings, comments and HTML boundaries are
//! the scanner's business.

pub mod kinds;
pub mod match_order;
pub mod registry;
pub mod spellings;
