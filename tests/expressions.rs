use minicalc::{
    Error, eval,
    error::{LexError, RuntimeError, SyntaxError},
    lexer::{Token, TokenKind, tokenize},
    parse, render_prefix,
};

fn assert_evals_to(src: &str, expected: f64) {
    match eval(src) {
        Ok(value) => assert_eq!(value, expected, "'{src}' evaluated to {value}"),
        Err(e) => panic!("'{src}' failed to evaluate: {e}"),
    }
}

fn collect_tokens(src: &str) -> Vec<(Token, usize)> {
    tokenize(src).collect::<Result<Vec<_>, _>>()
                 .unwrap_or_else(|e| panic!("'{src}' failed to tokenize: {e}"))
}

#[test]
fn tokenizing_yields_expected_sequence() {
    let tokens: Vec<(TokenKind, String)> =
        collect_tokens("3 + 4 * 5").into_iter()
                                   .map(|(token, _)| (token.kind, token.text))
                                   .collect();

    assert_eq!(tokens,
               vec![(TokenKind::Num, "3".to_string()),
                    (TokenKind::Plus, "+".to_string()),
                    (TokenKind::Num, "4".to_string()),
                    (TokenKind::Times, "*".to_string()),
                    (TokenKind::Num, "5".to_string())]);
}

#[test]
fn whitespace_is_never_yielded() {
    let tokens = collect_tokens("  10\t/\n2  ");

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].0.kind, TokenKind::Num);
    assert_eq!(tokens[1].0.kind, TokenKind::Divide);
    assert_eq!(tokens[2].0.kind, TokenKind::Num);
}

#[test]
fn token_positions_are_byte_offsets() {
    let tokens = collect_tokens("3 + 45");

    assert_eq!(tokens[0].1, 0);
    assert_eq!(tokens[1].1, 2);
    assert_eq!(tokens[2].1, 4);
}

#[test]
fn retokenizing_is_idempotent() {
    let source = "(3 + 4) * 5 - foo";
    assert_eq!(collect_tokens(source), collect_tokens(source));
}

#[test]
fn names_are_tokenized_but_not_part_of_the_grammar() {
    let tokens = collect_tokens("rate_2 + 1");
    assert_eq!(tokens[0].0.kind, TokenKind::Name);
    assert_eq!(tokens[0].0.text, "rate_2");

    // The grammar has no production for identifiers, so parsing rejects them.
    match parse("rate_2 + 1") {
        Err(Error::Syntax(SyntaxError::UnexpectedToken { found, .. })) => {
            assert_eq!(found, "rate_2");
        },
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn unrecognized_characters_are_lex_errors() {
    match parse("1 $ 2") {
        Err(Error::Lex(LexError::UnrecognizedCharacter { character, position })) => {
            assert_eq!(character, '$');
            assert_eq!(position, 2);
        },
        other => panic!("expected a lex error, got {other:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_evals_to("3 + 4 * 5", 23.0);
    assert_evals_to("3 * 4 + 5", 17.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_evals_to("(3 + 4) * 5", 35.0);
    assert_evals_to("2 * (1 + 1)", 4.0);
}

#[test]
fn same_precedence_operators_group_left_to_right() {
    assert_evals_to("10 / 2 / 5", 1.0);
    assert_evals_to("10 - 4 - 3", 3.0);
}

#[test]
fn division_is_floating_point() {
    assert_evals_to("7 / 2", 3.5);
}

#[test]
fn division_by_zero_is_reported() {
    match eval("5 / 0") {
        Err(Error::Runtime(RuntimeError::DivisionByZero)) => {},
        other => panic!("expected division by zero, got {other:?}"),
    }
}

#[test]
fn unclosed_parenthesis_is_a_syntax_error() {
    match parse("(1 + 2") {
        Err(Error::Syntax(SyntaxError::UnexpectedEndOfInput { expected })) => {
            assert_eq!(expected, "')'");
        },
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn empty_input_is_a_syntax_error() {
    match parse("") {
        Err(Error::Syntax(SyntaxError::UnexpectedEndOfInput { expected })) => {
            assert_eq!(expected, "a number or '('");
        },
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn bare_operator_is_a_syntax_error() {
    match parse("+") {
        Err(Error::Syntax(SyntaxError::UnexpectedToken { expected, found, position })) => {
            assert_eq!(expected, "a number or '('");
            assert_eq!(found, "+");
            assert_eq!(position, 0);
        },
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn trailing_tokens_are_rejected() {
    match parse("1 + 2 3") {
        Err(Error::Syntax(SyntaxError::TrailingToken { token, position })) => {
            assert_eq!(token, "3");
            assert_eq!(position, 6);
        },
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn prefix_rendering_is_operator_first_and_fully_parenthesized() {
    assert_eq!(render_prefix("3 + 4 * 5").unwrap(), "(+ 3 (* 4 5))");
    assert_eq!(render_prefix("(3 + 4) * 5").unwrap(), "(* (+ 3 4) 5)");
    assert_eq!(render_prefix("10 / 2 / 5").unwrap(), "(/ (/ 10 2) 5)");
    assert_eq!(render_prefix("42").unwrap(), "42");
}

#[test]
fn error_messages_name_the_failure() {
    let message = parse("(1 + 2").unwrap_err().to_string();
    assert!(message.contains("')'"), "unexpected message: {message}");

    let message = eval("5 / 0").unwrap_err().to_string();
    assert!(message.contains("Division by zero"),
            "unexpected message: {message}");
}
