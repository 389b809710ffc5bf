use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

use crate::errors::errors::RegistryError;

use super::kinds::TokenKind;

lazy_static! {
    static ref SYMBOL_CHAR: Regex = Regex::new(r"^[\p{P}\p{S}]$").unwrap();
}

/// Every fixed spelling the scanner can meet in source text. Kinds without a
/// literal spelling (identifiers, literals, whitespace, EOF) never appear here.
pub const SPELLINGS: &[(&str, TokenKind)] = &[
    ("class", TokenKind::Class),
    ("clone", TokenKind::UnaryOperator),
    ("const", TokenKind::Const),
    ("abstract", TokenKind::Abstract),
    ("interface", TokenKind::Interface),
    ("implements", TokenKind::Implements),
    ("extends", TokenKind::Extends),
    ("new", TokenKind::NewOperator),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("elseif", TokenKind::ElseIf),
    ("while", TokenKind::While),
    ("do", TokenKind::Do),
    ("for", TokenKind::For),
    ("foreach", TokenKind::Foreach),
    ("switch", TokenKind::Switch),
    ("endif;", TokenKind::EndIf),
    ("endif", TokenKind::EndIf),
    ("endfor;", TokenKind::EndFor),
    ("endforeach;", TokenKind::EndForeach),
    ("endforeach", TokenKind::EndForeach),
    ("endwhile;", TokenKind::EndWhile),
    ("endwhile", TokenKind::EndWhile),
    ("endswitch;", TokenKind::EndSwitch),
    ("endswitch", TokenKind::EndSwitch),
    ("case", TokenKind::Case),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
    ("default", TokenKind::Default),
    ("function", TokenKind::Function),
    ("static", TokenKind::Static),
    ("final", TokenKind::Final),
    ("self", TokenKind::SelfKeyword),
    ("parent", TokenKind::Parent),
    ("return", TokenKind::Return),
    ("{", TokenKind::BlockBegin),
    ("}", TokenKind::BlockEnd),
    (";", TokenKind::StatementEnd),
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
    (",", TokenKind::Comma),
    ("echo", TokenKind::Echo),
    ("print", TokenKind::Print),
    ("throw", TokenKind::Throw),
    ("try", TokenKind::Try),
    ("catch", TokenKind::Catch),
    ("finally", TokenKind::Finally),
    ("private", TokenKind::Private),
    ("public", TokenKind::Public),
    ("protected", TokenKind::Protected),
    ("true", TokenKind::BooleanLiteral),
    ("false", TokenKind::BooleanLiteral),
    ("instanceof", TokenKind::InstanceofOperator),
    ("global", TokenKind::Global),
    ("list", TokenKind::List),
    ("array", TokenKind::Array),
    ("exit", TokenKind::Exit),
    ("include", TokenKind::Include),
    ("include_once", TokenKind::Include),
    ("require", TokenKind::Include),
    ("require_once", TokenKind::Include),
    ("@", TokenKind::IgnoreErrorOperator),
    ("null", TokenKind::Null),
    ("NULL", TokenKind::Null),
    ("var", TokenKind::Var),
    ("use", TokenKind::Use),
    ("namespace", TokenKind::Namespace),
    // Casts
    ("(int)", TokenKind::CastOperator),
    ("(integer)", TokenKind::CastOperator),
    ("(bool)", TokenKind::CastOperator),
    ("(boolean)", TokenKind::CastOperator),
    ("(float)", TokenKind::CastOperator),
    ("(double)", TokenKind::CastOperator),
    ("(real)", TokenKind::CastOperator),
    ("(string)", TokenKind::CastOperator),
    ("(array)", TokenKind::CastOperator),
    ("(object)", TokenKind::CastOperator),
    ("(unset)", TokenKind::CastOperator),
    // Comment markers
    ("/*", TokenKind::CommentBlock),
    ("*/", TokenKind::CommentBlock),
    ("//", TokenKind::CommentLine),
    ("#", TokenKind::CommentLine),
    ("->", TokenKind::ObjectOperator),
    ("::", TokenKind::ScopeResolutionOperator),
    // Compound assignment
    ("+=", TokenKind::AssignmentOperator),
    ("-=", TokenKind::AssignmentOperator),
    ("*=", TokenKind::AssignmentOperator),
    ("/=", TokenKind::AssignmentOperator),
    (".=", TokenKind::AssignmentOperator),
    ("%=", TokenKind::AssignmentOperator),
    ("&=", TokenKind::AssignmentOperator),
    ("|=", TokenKind::AssignmentOperator),
    ("^=", TokenKind::AssignmentOperator),
    ("<<=", TokenKind::AssignmentOperator),
    (">>=", TokenKind::AssignmentOperator),
    ("=>", TokenKind::ArrayKeyOperator),
    ("===", TokenKind::StrongEqualityOperator),
    ("==", TokenKind::EqualityOperator),
    ("=", TokenKind::AssignmentOperator),
    ("!==", TokenKind::StrongNotEqualityOperator),
    ("!=", TokenKind::NotEqualityOperator),
    ("<>", TokenKind::ComparisonOperator),
    ("!", TokenKind::NegationOperator),
    ("++", TokenKind::UnaryOperator),
    ("--", TokenKind::UnaryOperator),
    ("+", TokenKind::AdditionOperator),
    ("-", TokenKind::SubtractionOperator),
    ("*", TokenKind::MultOperator),
    ("/", TokenKind::MultOperator),
    (">=", TokenKind::ComparisonOperator),
    (">", TokenKind::ComparisonOperator),
    ("<=", TokenKind::ComparisonOperator),
    ("<", TokenKind::ComparisonOperator),
    ("%", TokenKind::MultOperator),
    (".", TokenKind::ConcatenationOperator),
    ("&&", TokenKind::AndOperator),
    ("||", TokenKind::OrOperator),
    ("&", TokenKind::AmpersandOperator),
    ("^", TokenKind::BitwiseXorOperator),
    ("~", TokenKind::BitwiseNotOperator),
    ("|", TokenKind::BitwiseOrOperator),
    ("<<", TokenKind::BitwiseShiftOperator),
    (">>", TokenKind::BitwiseShiftOperator),
    ("?", TokenKind::TernaryOperator1),
    (":", TokenKind::TernaryOperator2),
    ("and", TokenKind::WrittenAndOperator),
    ("xor", TokenKind::WrittenXorOperator),
    ("or", TokenKind::WrittenOrOperator),
    ("as", TokenKind::AsOperator),
    ("[", TokenKind::ArrayLookupOperatorLeft),
    ("]", TokenKind::ArrayLookupOperatorRight),
    ("$", TokenKind::VariableOperator),
    ("declare", TokenKind::Declare),
];

/// Whether `ch` is Unicode punctuation (`P*`) or a symbol (`S*`).
pub fn is_symbol_char(ch: char) -> bool {
    let mut buf = [0u8; 4];
    SYMBOL_CHAR.is_match(ch.encode_utf8(&mut buf))
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SpellingClass {
    /// Starts with a letter, digit or other non-symbol character (`foreach`, `NULL`).
    Word,
    /// Starts with punctuation or a symbol (`!==`, `(int)`, `$`).
    Symbol,
}

impl SpellingClass {
    pub fn of(spelling: &str) -> Option<SpellingClass> {
        spelling.chars().next().map(|first| {
            if is_symbol_char(first) {
                SpellingClass::Symbol
            } else {
                SpellingClass::Word
            }
        })
    }
}

/// Exact, case-sensitive spelling → kind lookup.
#[derive(Debug, Clone)]
pub struct SpellingTable {
    lookup: HashMap<&'static str, TokenKind>,
}

impl SpellingTable {
    pub fn from_pairs(pairs: &[(&'static str, TokenKind)]) -> Result<SpellingTable, RegistryError> {
        let mut lookup = HashMap::with_capacity(pairs.len());

        for &(spelling, kind) in pairs {
            if spelling.is_empty() {
                return Err(RegistryError::EmptySpelling { kind });
            }

            if let Some(first) = lookup.insert(spelling, kind) {
                tracing::debug!(spelling, ?first, second = ?kind, "rejecting duplicate spelling");
                return Err(RegistryError::DuplicateSpelling {
                    spelling: spelling.to_string(),
                    first,
                    second: kind,
                });
            }
        }

        Ok(SpellingTable { lookup })
    }

    /// Returns `None` for anything not registered verbatim; no prefix or
    /// case-folded matching happens here.
    pub fn classify(&self, spelling: &str) -> Option<TokenKind> {
        self.lookup.get(spelling).copied()
    }

    pub fn class_of(&self, spelling: &str) -> Option<SpellingClass> {
        if self.lookup.contains_key(spelling) {
            SpellingClass::of(spelling)
        } else {
            None
        }
    }

    /// All spellings registered for `kind`, sorted.
    pub fn spellings_for(&self, kind: TokenKind) -> Vec<&'static str> {
        let mut spellings = self
            .lookup
            .iter()
            .filter(|(_, registered)| **registered == kind)
            .map(|(spelling, _)| *spelling)
            .collect::<Vec<_>>();
        spellings.sort_unstable();
        spellings
    }

    /// Unordered; use a `MatchOrder` when order matters.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, TokenKind)> + '_ {
        self.lookup.iter().map(|(spelling, kind)| (*spelling, *kind))
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}
