#![allow(clippy::module_inception)]

pub mod errors;
pub mod macros;
pub mod tokens;

pub use errors::errors::RegistryError;
pub use tokens::{
    kinds::TokenKind,
    registry::{can_start_operator, classify, display_name, TokenRegistry, REGISTRY},
};
