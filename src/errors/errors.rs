use thiserror::Error;

use crate::tokens::kinds::TokenKind;

/// Problems found while building a token registry from spelling tables.
///
/// Looking up an unknown spelling is not an error; that is a plain `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("empty spelling registered for {kind:?}")]
    EmptySpelling { kind: TokenKind },
    #[error("spelling {spelling:?} registered for both {first:?} and {second:?}")]
    DuplicateSpelling {
        spelling: String,
        first: TokenKind,
        second: TokenKind,
    },
}

impl RegistryError {
    pub fn get_error_name(&self) -> &str {
        match self {
            RegistryError::EmptySpelling { .. } => "EmptySpelling",
            RegistryError::DuplicateSpelling { .. } => "DuplicateSpelling",
        }
    }

    pub fn get_tip(&self) -> String {
        match self {
            RegistryError::EmptySpelling { kind } => {
                format!("Remove the empty entry for `{:?}`", kind)
            }
            RegistryError::DuplicateSpelling { spelling, first, .. } => format!(
                "`{}` is already registered for `{:?}`, a spelling may map to one kind only",
                spelling, first
            ),
        }
    }
}
