use lazy_static::lazy_static;
use std::{borrow::Cow, fmt::Display};

use crate::MK_TOKEN_KINDS;

MK_TOKEN_KINDS! {
    #[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
    pub enum TokenKind {
        EOF,
        HTML,
        PHPBegin,
        PHPEnd,
        PHPToken,
        Error,
        Space,
        Function,
        Static,
        SelfKeyword,
        Parent,
        Final,
        FunctionName,
        TypeHint,
        VariableOperator,
        BlockBegin,
        BlockEnd,
        Global,

        Namespace,
        Use,

        CommentLine,
        CommentBlock,

        IgnoreErrorOperator,

        Return,
        Comma,
        StatementEnd,
        Echo,
        Print,

        If,
        Else,
        ElseIf,
        For,
        Foreach,
        EndIf,
        EndFor,
        EndForeach,
        EndWhile,
        EndSwitch,
        AsOperator,
        While,
        Continue,
        Break,
        Do,
        OpenParen,
        CloseParen,
        Switch,
        Case,
        Default,

        Try,
        Catch,
        Finally,
        Throw,

        Class,
        Abstract,
        Private,
        Public,
        Protected,
        Interface,
        Implements,
        Extends,
        NewOperator,
        Const,

        Null,
        StringLiteral,
        NumberLiteral,
        BooleanLiteral,

        ShellCommand,

        Identifier,

        AssignmentOperator,
        NegationOperator,
        AdditionOperator,
        SubtractionOperator,
        MultOperator,
        ConcatenationOperator,
        UnaryOperator,
        ComparisonOperator,
        InstanceofOperator,

        AndOperator,
        OrOperator,
        WrittenAndOperator,
        WrittenXorOperator,
        WrittenOrOperator,

        ObjectOperator,
        ScopeResolutionOperator,

        CastOperator,

        Var,
        Array,
        ArrayKeyOperator,
        ArrayLookupOperatorLeft,
        ArrayLookupOperatorRight,
        List,
        BitwiseShiftOperator,
        StrongEqualityOperator,    // ===
        StrongNotEqualityOperator, // !==
        EqualityOperator,          // ==
        NotEqualityOperator,       // !=
        AmpersandOperator,
        BitwiseXorOperator,
        BitwiseOrOperator,
        BitwiseNotOperator,
        TernaryOperator1, // ?
        TernaryOperator2, // :

        Declare,

        Include,
        Exit,
    }
}

impl TokenKind {
    pub fn ordinal(self) -> u16 {
        self as u16
    }

    pub fn from_ordinal(ordinal: u16) -> Option<TokenKind> {
        TokenKind::ALL.get(ordinal as usize).copied()
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", BUILTIN_NAMES.display_name(*self))
    }
}

/// Display names used in diagnostics. These are not source spellings: several
/// kinds share one name pattern (`MultOperator` is `*/%`) and many kinds have
/// no spelling at all.
pub const KIND_NAMES: &[(TokenKind, &str)] = &[
    (TokenKind::HTML, "HTML"),
    (TokenKind::PHPBegin, "PHP Begin"),
    (TokenKind::PHPEnd, "PHP End"),
    (TokenKind::PHPToken, "PHP Token"),
    (TokenKind::EOF, "EOF"),
    (TokenKind::Error, "Error"),
    (TokenKind::Space, "(space)"),
    (TokenKind::Function, "Function"),
    (TokenKind::Static, "static"),
    (TokenKind::SelfKeyword, "self"),
    (TokenKind::Parent, "parent"),
    (TokenKind::Final, "final"),
    (TokenKind::FunctionName, "Function Name"),
    (TokenKind::TypeHint, "Function Type Hint"),
    (TokenKind::VariableOperator, "$"),
    (TokenKind::BlockBegin, "Block Begin"),
    (TokenKind::BlockEnd, "Block End"),
    (TokenKind::Global, "global"),
    (TokenKind::Return, "Return"),
    (TokenKind::Comma, "Function Argument Separator"),
    (TokenKind::StatementEnd, ";"),
    (TokenKind::Echo, "echo"),
    (TokenKind::Print, "Print"),
    (TokenKind::Namespace, "namespace"),
    (TokenKind::Use, "use"),
    (TokenKind::IgnoreErrorOperator, "@"),
    (TokenKind::If, "If"),
    (TokenKind::Else, "Else"),
    (TokenKind::ElseIf, "ElseIf"),
    (TokenKind::EndIf, "EndIf"),
    (TokenKind::EndFor, "EndFor"),
    (TokenKind::EndForeach, "EndForeach"),
    (TokenKind::EndWhile, "EndWhile"),
    (TokenKind::EndSwitch, "EndSwitch"),
    (TokenKind::Var, "var"),
    (TokenKind::For, "for"),
    (TokenKind::Foreach, "foreach"),
    (TokenKind::Switch, "switch"),
    (TokenKind::Case, "case"),
    (TokenKind::Default, "default"),
    (TokenKind::AsOperator, "as"),
    (TokenKind::While, "while"),
    (TokenKind::Do, "do"),
    (TokenKind::OpenParen, "open-paren"),
    (TokenKind::CloseParen, "close-paren"),
    (TokenKind::Continue, "continue"),
    (TokenKind::Break, "break"),
    (TokenKind::Null, "null"),
    (TokenKind::CommentBlock, "/* */"),
    (TokenKind::CommentLine, "//"),
    (TokenKind::Try, "try"),
    (TokenKind::Catch, "catch"),
    (TokenKind::Finally, "finally"),
    (TokenKind::Throw, "throw"),
    (TokenKind::Class, "Class"),
    (TokenKind::Const, "Const"),
    (TokenKind::Abstract, "abstract"),
    (TokenKind::Private, "Private"),
    (TokenKind::Protected, "Protected"),
    (TokenKind::Public, "Public"),
    (TokenKind::Interface, "Interface"),
    (TokenKind::Implements, "implements"),
    (TokenKind::Extends, "extends"),
    (TokenKind::NewOperator, "new"),
    (TokenKind::ShellCommand, "`"),
    (TokenKind::StringLiteral, "string-literal"),
    (TokenKind::NumberLiteral, "number-literal"),
    (TokenKind::BooleanLiteral, "bool-literal"),
    (TokenKind::Identifier, "identifier"),
    (TokenKind::AssignmentOperator, "="),
    (TokenKind::NegationOperator, "!"),
    (TokenKind::AdditionOperator, "+"),
    (TokenKind::SubtractionOperator, "-"),
    (TokenKind::MultOperator, "*/%"),
    (TokenKind::ConcatenationOperator, "."),
    (TokenKind::UnaryOperator, "++|--"),
    (TokenKind::ComparisonOperator, "<>"),
    (TokenKind::ObjectOperator, "->"),
    (TokenKind::ScopeResolutionOperator, "::"),
    (TokenKind::InstanceofOperator, "instanceof"),
    (TokenKind::StrongNotEqualityOperator, "!=="),
    (TokenKind::StrongEqualityOperator, "==="),
    (TokenKind::NotEqualityOperator, "!="),
    (TokenKind::EqualityOperator, "=="),
    (TokenKind::AndOperator, "&&"),
    (TokenKind::OrOperator, "||"),
    (TokenKind::WrittenAndOperator, "logical-and"),
    (TokenKind::WrittenXorOperator, "logical-xor"),
    (TokenKind::WrittenOrOperator, "logical-or"),
    (TokenKind::CastOperator, "(type)"),
    (TokenKind::List, "list"),
    (TokenKind::Array, "array"),
    (TokenKind::ArrayKeyOperator, "=>"),
    (TokenKind::ArrayLookupOperatorLeft, "["),
    (TokenKind::ArrayLookupOperatorRight, "]"),
    (TokenKind::BitwiseShiftOperator, "<<>>"),
    (TokenKind::AmpersandOperator, "&"),
    (TokenKind::BitwiseXorOperator, "^"),
    (TokenKind::BitwiseOrOperator, "|"),
    (TokenKind::BitwiseNotOperator, "~"),
    (TokenKind::TernaryOperator1, "?"),
    (TokenKind::TernaryOperator2, ":"),
    (TokenKind::Include, "include"),
    (TokenKind::Exit, "exit"),
    (TokenKind::Declare, "declare"),
];

lazy_static! {
    static ref BUILTIN_NAMES: DisplayNames = DisplayNames::from_pairs(KIND_NAMES);
}

/// Ordinal-indexed display names.
///
/// Lookup is total: a kind with no registered (or an empty) name renders as
/// its decimal ordinal, so a kind added to [`TokenKind`] but forgotten in the
/// name table degrades a diagnostic instead of failing it.
#[derive(Debug, Clone)]
pub struct DisplayNames {
    names: Vec<Option<&'static str>>,
}

impl DisplayNames {
    /// Later pairs overwrite earlier ones for the same kind.
    pub fn from_pairs(pairs: &[(TokenKind, &'static str)]) -> DisplayNames {
        let mut names = vec![None; TokenKind::COUNT];

        for (kind, name) in pairs {
            names[kind.ordinal() as usize] = Some(*name).filter(|name| !name.is_empty());
        }

        DisplayNames { names }
    }

    pub fn get(&self, kind: TokenKind) -> Option<&'static str> {
        self.names[kind.ordinal() as usize]
    }

    pub fn display_name(&self, kind: TokenKind) -> Cow<'static, str> {
        match self.get(kind) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(kind.ordinal().to_string()),
        }
    }

    /// Kinds that fall back to their ordinal.
    pub fn missing(&self) -> impl Iterator<Item = TokenKind> + '_ {
        TokenKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.get(*kind).is_none())
    }
}
