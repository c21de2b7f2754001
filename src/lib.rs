//! # minicalc
//!
//! minicalc is a small arithmetic expression interpreter written in Rust.
//! It tokenizes and parses expressions built from integer literals,
//! `+ - * /`, and parentheses into an abstract syntax tree, then evaluates
//! or renders the tree through a generic visitor.
//!
//! The pipeline is: source text → lexer → token stream → parser → expression
//! tree → visitor → result. All results live in the canonical `f64` numeric
//! domain, so integer and non-integer division behave uniformly.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::visitor::{Evaluator, PrefixNotation, Visitor};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the binary operator type that
/// represent an expression as an immutable tree. The tree is built by the
/// parser and traversed by visitors.
///
/// # Responsibilities
/// - Defines the closed set of expression node variants.
/// - Models exclusive parent-to-child ownership of subtrees.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while interpreting an
/// expression. It standardizes error reporting and carries detailed
/// information about failures, including byte positions in the source.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Scans source text into a stream of tokens.
///
/// This module defines the lexical categories of the language and produces
/// a lazy token sequence over an input string, skipping whitespace.
///
/// # Responsibilities
/// - Defines the `TokenKind` categories and their lexical patterns.
/// - Produces `(Token, position)` pairs in left-to-right scan order.
/// - Reports unrecognized characters with their positions.
pub mod lexer;
/// Parses a token stream into an expression tree.
///
/// This module implements one-token-lookahead recursive descent with one
/// parsing method per precedence layer, producing left-associative trees.
///
/// # Responsibilities
/// - Owns the per-parse cursor state (current and lookahead slots).
/// - Enforces the grammar and rejects trailing tokens.
/// - Provides the `parse` entry point.
pub mod parser;
/// Traverses expression trees.
///
/// This module defines the `Visitor` trait, whose dispatch is an exhaustive
/// match over the node variants, together with the concrete visitors that
/// evaluate a tree or render it in prefix notation.
///
/// # Responsibilities
/// - Decouples tree structure from the operations performed on it.
/// - Makes unhandled node variants a compile-time impossibility.
pub mod visitor;

pub use crate::{error::Error, parser::parse};

/// Evaluates an expression string to a number.
///
/// The source is parsed into a tree which is then folded by the evaluating
/// visitor. Standard precedence and left-to-right associativity apply.
///
/// # Errors
/// Returns an error if tokenization or parsing fails, or if evaluation
/// divides by zero.
///
/// # Example
/// ```
/// use minicalc::eval;
///
/// // `*` binds tighter than `+`.
/// assert_eq!(eval("3 + 4 * 5").unwrap(), 23.0);
///
/// // Parentheses override the default precedence.
/// assert_eq!(eval("(3 + 4) * 5").unwrap(), 35.0);
///
/// // Division by zero is a reported error, not an infinity.
/// assert!(eval("5 / 0").is_err());
/// ```
pub fn eval(source: &str) -> Result<f64, Error> {
    let expr = parse(source)?;
    Evaluator.visit(&expr).map_err(Error::from)
}

/// Renders an expression string in fully parenthesized prefix notation.
///
/// # Errors
/// Returns an error if tokenization or parsing fails.
///
/// # Example
/// ```
/// use minicalc::render_prefix;
///
/// assert_eq!(render_prefix("3 + 4 * 5").unwrap(), "(+ 3 (* 4 5))");
/// ```
pub fn render_prefix(source: &str) -> Result<String, Error> {
    let expr = parse(source)?;
    Ok(PrefixNotation.visit(&expr))
}
