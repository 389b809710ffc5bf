//! Integration tests driving the classifier the way a scanner would.
//!
//! A small scanner lives here so the registry can be exercised end to end on
//! PHP snippets: lead-character check first, then longest match for
//! operators, whole-word classification for keywords.

use phptoken::{tokens::registry::TokenRegistry, TokenKind, REGISTRY};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn scan(registry: &TokenRegistry, source: &str) -> Vec<(TokenKind, String)> {
    let mut tokens = vec![];
    let mut rest = source;

    while let Some(ch) = rest.chars().next() {
        let len = if ch.is_whitespace() {
            ch.len_utf8()
        } else if ch == '"' || ch == '\'' {
            let end = rest[1..].find(ch).map(|i| i + 2).unwrap_or(rest.len());
            tokens.push((TokenKind::StringLiteral, rest[..end].to_string()));
            end
        } else if ch.is_ascii_digit() {
            let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
            tokens.push((TokenKind::NumberLiteral, rest[..end].to_string()));
            end
        } else if ch.is_alphabetic() || ch == '_' {
            let end = rest
                .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            let word = &rest[..end];

            // `endif;` and friends are registered with their terminator.
            let with_semicolon = rest.get(..end + 1).filter(|s| s.ends_with(';'));
            match with_semicolon.and_then(|s| registry.classify(s).map(|kind| (s, kind))) {
                Some((spelling, kind)) => {
                    tokens.push((kind, spelling.to_string()));
                    end + 1
                }
                None => {
                    let kind = registry.classify(word).unwrap_or(TokenKind::Identifier);
                    tokens.push((kind, word.to_string()));
                    end
                }
            }
        } else if registry.can_start_operator(ch) {
            match registry.longest_match(rest) {
                Some((spelling, kind)) => {
                    tokens.push((kind, spelling.to_string()));
                    spelling.len()
                }
                None => {
                    tokens.push((TokenKind::Error, ch.to_string()));
                    ch.len_utf8()
                }
            }
        } else {
            tokens.push((TokenKind::Error, ch.to_string()));
            ch.len_utf8()
        };

        rest = &rest[len..];
    }

    tokens.push((TokenKind::EOF, String::new()));
    tokens
}

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(&REGISTRY, source).into_iter().map(|(kind, _)| kind).collect()
}

#[test]
fn test_scan_strong_inequality() {
    init_tracing();

    assert_eq!(
        kinds("$a !== $b"),
        vec![
            TokenKind::VariableOperator,
            TokenKind::Identifier,
            TokenKind::StrongNotEqualityOperator,
            TokenKind::VariableOperator,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_scan_negation_family() {
    assert_eq!(
        kinds("!$a != !$b"),
        vec![
            TokenKind::NegationOperator,
            TokenKind::VariableOperator,
            TokenKind::Identifier,
            TokenKind::NotEqualityOperator,
            TokenKind::NegationOperator,
            TokenKind::VariableOperator,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_scan_function_call_statement() {
    let tokens = scan(
        &REGISTRY,
        r#"$result = mysqli_query($link, "SELECT * FROM test_fetch");"#,
    );

    let expected = vec![
        (TokenKind::VariableOperator, "$"),
        (TokenKind::Identifier, "result"),
        (TokenKind::AssignmentOperator, "="),
        (TokenKind::Identifier, "mysqli_query"),
        (TokenKind::OpenParen, "("),
        (TokenKind::VariableOperator, "$"),
        (TokenKind::Identifier, "link"),
        (TokenKind::Comma, ","),
        (TokenKind::StringLiteral, "\"SELECT * FROM test_fetch\""),
        (TokenKind::CloseParen, ")"),
        (TokenKind::StatementEnd, ";"),
        (TokenKind::EOF, ""),
    ];

    assert_eq!(
        tokens,
        expected
            .into_iter()
            .map(|(kind, value)| (kind, value.to_string()))
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_scan_alternative_syntax() {
    assert_eq!(
        kinds("if ($x): echo 1; endif;"),
        vec![
            TokenKind::If,
            TokenKind::OpenParen,
            TokenKind::VariableOperator,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::TernaryOperator2,
            TokenKind::Echo,
            TokenKind::NumberLiteral,
            TokenKind::StatementEnd,
            TokenKind::EndIf,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_scan_casts_and_shifts() {
    assert_eq!(
        kinds("$x <<= (int)$y << 2;"),
        vec![
            TokenKind::VariableOperator,
            TokenKind::Identifier,
            TokenKind::AssignmentOperator,
            TokenKind::CastOperator,
            TokenKind::VariableOperator,
            TokenKind::Identifier,
            TokenKind::BitwiseShiftOperator,
            TokenKind::NumberLiteral,
            TokenKind::StatementEnd,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_scan_keywords_need_whole_words() {
    assert_eq!(
        kinds("iffy elseif NULL Null"),
        vec![
            TokenKind::Identifier,
            TokenKind::ElseIf,
            TokenKind::Null,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_scan_unknown_character() {
    let tokens = scan(&REGISTRY, "$a ` $b");
    assert_eq!(tokens[2], (TokenKind::Error, "`".to_string()));
}

#[test]
fn test_scan_display_names() {
    let names = scan(&REGISTRY, "$a === NULL;")
        .into_iter()
        .map(|(kind, _)| REGISTRY.display_name(kind).into_owned())
        .collect::<Vec<_>>();

    assert_eq!(names, vec!["$", "identifier", "===", "null", ";", "EOF"]);
}

#[test]
fn test_scan_with_custom_registry() {
    init_tracing();

    let registry = TokenRegistry::from_tables(
        &[(TokenKind::Identifier, "identifier")],
        &[("=", TokenKind::AssignmentOperator), ("==", TokenKind::EqualityOperator)],
    )
    .unwrap();

    assert_eq!(
        scan(&registry, "a == b")
            .into_iter()
            .map(|(kind, _)| kind)
            .collect::<Vec<_>>(),
        vec![
            TokenKind::Identifier,
            TokenKind::EqualityOperator,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
    assert_eq!(
        registry.display_name(TokenKind::EqualityOperator),
        TokenKind::EqualityOperator.ordinal().to_string()
    );
}
