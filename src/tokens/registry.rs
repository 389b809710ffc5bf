use lazy_static::lazy_static;
use std::borrow::Cow;

use crate::errors::errors::RegistryError;

use super::{
    kinds::{DisplayNames, TokenKind, KIND_NAMES},
    match_order::{MatchOrder, OperatorLeadSet},
    spellings::{SpellingTable, SPELLINGS},
};

lazy_static! {
    /// Built-in registry shared by every scanner in the process.
    pub static ref REGISTRY: TokenRegistry = TokenRegistry::builtin();
}

/// Display names, spelling table, match order and operator lead set, built
/// together and immutable afterwards.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    names: DisplayNames,
    spellings: SpellingTable,
    order: MatchOrder,
    leads: OperatorLeadSet,
}

impl TokenRegistry {
    pub fn from_tables(
        names: &[(TokenKind, &'static str)],
        spellings: &[(&'static str, TokenKind)],
    ) -> Result<TokenRegistry, RegistryError> {
        let names = DisplayNames::from_pairs(names);
        let spellings = SpellingTable::from_pairs(spellings)?;
        let order = MatchOrder::longest_first(&spellings);
        let leads = OperatorLeadSet::from_table(&spellings);

        tracing::debug!(
            spellings = spellings.len(),
            lead_chars = leads.len(),
            unnamed_kinds = names.missing().count(),
            "built token registry"
        );

        Ok(TokenRegistry {
            names,
            spellings,
            order,
            leads,
        })
    }

    pub fn builtin() -> TokenRegistry {
        TokenRegistry::from_tables(KIND_NAMES, SPELLINGS)
            .expect("built-in spelling table has no empty or duplicate spellings")
    }

    pub fn classify(&self, spelling: &str) -> Option<TokenKind> {
        self.spellings.classify(spelling)
    }

    pub fn can_start_operator(&self, ch: char) -> bool {
        self.leads.contains(ch)
    }

    pub fn display_name(&self, kind: TokenKind) -> Cow<'static, str> {
        self.names.display_name(kind)
    }

    pub fn longest_match(&self, input: &str) -> Option<(&'static str, TokenKind)> {
        self.order.longest_match(input)
    }

    pub fn names(&self) -> &DisplayNames {
        &self.names
    }

    pub fn spellings(&self) -> &SpellingTable {
        &self.spellings
    }

    pub fn match_order(&self) -> &MatchOrder {
        &self.order
    }

    pub fn operator_leads(&self) -> &OperatorLeadSet {
        &self.leads
    }
}

pub fn classify(spelling: &str) -> Option<TokenKind> {
    REGISTRY.classify(spelling)
}

pub fn can_start_operator(ch: char) -> bool {
    REGISTRY.can_start_operator(ch)
}

pub fn display_name(kind: TokenKind) -> Cow<'static, str> {
    REGISTRY.display_name(kind)
}

pub fn longest_match(input: &str) -> Option<(&'static str, TokenKind)> {
    REGISTRY.longest_match(input)
}

pub fn match_order() -> &'static MatchOrder {
    REGISTRY.match_order()
}
