use logos::Logos;

use crate::error::LexError;

/// The lexical category of a token.
///
/// This is the closed set of token classes shared between the lexer and the
/// parser. Each variant owns exactly one lexical pattern; at every scan
/// position the first matching pattern wins, and whitespace is matched and
/// discarded without ever being yielded as a token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// Identifier such as `x` or `rate_2`. Recognized by the lexer but not
    /// used by the grammar; reserved for future extension.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,
    /// Integer literal such as `42`; a run of ASCII digits.
    #[regex(r"[0-9]+")]
    Num,
    /// `/`
    #[token("/")]
    Divide,
    /// `*`
    #[token("*")]
    Times,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            Self::Name => "an identifier",
            Self::Num => "a number",
            Self::Divide => "'/'",
            Self::Times => "'*'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::LParen => "'('",
            Self::RParen => "')'",
        };
        write!(f, "{description}")
    }
}

/// A single lexical token: its category and the exact matched substring.
///
/// Tokens are constructed once per lexical match and consumed exactly once
/// by the parser's lookahead slot; they are never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical category of the token.
    pub kind: TokenKind,
    /// The exact substring of the source this token matched.
    pub text: String,
}

/// A lazy stream of tokens over a source string.
///
/// Yields `(Token, position)` pairs in left-to-right scan order, where
/// `position` is the byte offset of the token in the source. Whitespace
/// advances the scan position but is never yielded. The stream is finite for
/// finite input and holds no hidden state: a fresh [`tokenize`] call over the
/// same text yields an identical sequence.
pub struct Tokens<'src> {
    lexer: logos::Lexer<'src, TokenKind>,
}

impl Iterator for Tokens<'_> {
    type Item = Result<(Token, usize), LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.lexer.next()?;
        let start = self.lexer.span().start;

        match result {
            Ok(kind) => Some(Ok((Token { kind,
                                         text: self.lexer.slice().to_string(), },
                                 start))),
            Err(()) => {
                let character = self.lexer.slice().chars().next().unwrap_or('\u{fffd}');
                Some(Err(LexError::UnrecognizedCharacter { character,
                                                           position: start }))
            },
        }
    }
}

/// Tokenizes a source string into a lazy sequence of tokens.
///
/// Scanning is purely functional over the input: no side effects, no shared
/// state between calls. An input character matching no lexical pattern
/// surfaces as a [`LexError`] naming the character and its byte offset.
///
/// # Parameters
/// - `source`: The expression text to tokenize.
///
/// # Returns
/// An iterator of `Result<(Token, position), LexError>` pairs.
///
/// # Example
/// ```
/// use minicalc::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<TokenKind> = tokenize("3 + 4")
///     .map(|t| t.unwrap().0.kind)
///     .collect();
/// assert_eq!(kinds, vec![TokenKind::Num, TokenKind::Plus, TokenKind::Num]);
/// ```
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens { lexer: TokenKind::lexer(source) }
}
