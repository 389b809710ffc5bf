use std::collections::BTreeSet;

use super::{
    kinds::TokenKind,
    spellings::{SpellingClass, SpellingTable},
};

/// Spellings in the order a scanner should try them.
///
/// The default order is longest spelling first (in chars), ties broken by
/// descending lexicographic order so the sequence is deterministic. Any
/// spelling therefore comes before every spelling that is a proper prefix of
/// it: `!==` before `!=` before `!`.
#[derive(Debug, Clone)]
pub struct MatchOrder {
    spellings: Vec<(&'static str, TokenKind)>,
}

impl MatchOrder {
    pub fn longest_first(table: &SpellingTable) -> MatchOrder {
        let mut spellings = table.iter().collect::<Vec<_>>();
        spellings.sort_unstable_by(|(a, _), (b, _)| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| b.cmp(a))
        });

        MatchOrder { spellings }
    }

    /// Plain descending string order.
    ///
    /// Only kept to check that the older ordering still agrees with
    /// [`MatchOrder::longest_first`] on the registered set.
    pub fn reverse_lexicographic(table: &SpellingTable) -> MatchOrder {
        let mut spellings = table.iter().collect::<Vec<_>>();
        spellings.sort_unstable_by(|(a, _), (b, _)| b.cmp(a));

        MatchOrder { spellings }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, TokenKind)> + '_ {
        self.spellings.iter().copied()
    }

    pub fn as_slice(&self) -> &[(&'static str, TokenKind)] {
        &self.spellings
    }

    pub fn position(&self, spelling: &str) -> Option<usize> {
        self.spellings.iter().position(|(s, _)| *s == spelling)
    }

    /// First spelling, in match order, that `input` starts with.
    ///
    /// This is raw prefix matching: `"iffy"` yields `"if"`. Callers must check
    /// the word boundary themselves before accepting a keyword.
    pub fn longest_match(&self, input: &str) -> Option<(&'static str, TokenKind)> {
        self.iter().find(|(spelling, _)| input.starts_with(*spelling))
    }

    pub fn len(&self) -> usize {
        self.spellings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spellings.is_empty()
    }
}

/// Characters that can begin a punctuation/symbol spelling.
///
/// Derived from the table on construction; word spellings never contribute.
#[derive(Debug, Clone, Default)]
pub struct OperatorLeadSet {
    chars: BTreeSet<char>,
}

impl OperatorLeadSet {
    pub fn from_table(table: &SpellingTable) -> OperatorLeadSet {
        let chars = table
            .iter()
            .filter(|(spelling, _)| SpellingClass::of(spelling) == Some(SpellingClass::Symbol))
            .filter_map(|(spelling, _)| spelling.chars().next())
            .collect();

        OperatorLeadSet { chars }
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Sorted by code point.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}
