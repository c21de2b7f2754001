use crate::{
    ast::{BinaryOperator, Expr},
    error::{Error, SyntaxError},
    lexer::{Token, TokenKind, Tokens, tokenize},
};

pub type ParseResult<T> = Result<T, Error>;

/// A one-token-lookahead recursive-descent parser over a token stream.
///
/// The parser owns two single-token cursor slots: `current`, the last
/// consumed token (`None` before the first advance), and `lookahead`, the
/// next unconsumed token (`None` once the stream is exhausted). Advancing
/// shifts `lookahead` into `current` and pulls a new token from the stream.
/// Each parse call owns its own cursor state, so independent parses never
/// share anything.
///
/// One parsing method exists per precedence layer of the grammar:
///
/// ```text
/// expr   := term (('+' | '-') term)*
/// term   := factor (('*' | '/') factor)*
/// factor := NUM | '(' expr ')'
/// ```
///
/// Each layer first parses the next-higher layer, then loops consuming its
/// own operators, which yields left-associative trees without backtracking.
pub struct Parser<'src> {
    tokens:    Tokens<'src>,
    current:   Option<(Token, usize)>,
    lookahead: Option<(Token, usize)>,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` with the lookahead slot primed.
    ///
    /// # Errors
    /// Returns a `LexError` if the very first token is malformed.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut parser = Self { tokens:    tokenize(source),
                                current:   None,
                                lookahead: None, };
        parser.advance()?;
        Ok(parser)
    }

    /// Promotes lookahead to current and pulls the next token.
    ///
    /// The only side effect is cursor mutation; lexing errors from the
    /// pulled token propagate.
    fn advance(&mut self) -> ParseResult<()> {
        self.current = self.lookahead.take();
        self.lookahead = self.tokens.next().transpose()?;
        Ok(())
    }

    /// Consumes the lookahead token if it has the given kind.
    ///
    /// On a match, advances and returns the now-current token with its
    /// position; otherwise leaves the cursor untouched and returns `None`.
    /// Used for optional and alternative productions.
    fn accept(&mut self, kind: TokenKind) -> ParseResult<Option<(Token, usize)>> {
        match &self.lookahead {
            Some((token, _)) if token.kind == kind => {
                self.advance()?;
                Ok(self.current.clone())
            },
            _ => Ok(None),
        }
    }

    /// Consumes the lookahead token of the given kind or fails.
    ///
    /// # Errors
    /// Returns a `SyntaxError` naming the expected kind and the actual
    /// lookahead token (or end of input). The error aborts the parse; there
    /// is no recovery and no partial result.
    fn expect(&mut self, kind: TokenKind) -> ParseResult<(Token, usize)> {
        match self.accept(kind)? {
            Some(token) => Ok(token),
            None => Err(self.unexpected(kind.to_string())),
        }
    }

    /// Builds the error for an unusable lookahead token.
    fn unexpected(&self, expected: String) -> Error {
        match &self.lookahead {
            Some((token, position)) => {
                SyntaxError::UnexpectedToken { expected,
                                               found: token.text.clone(),
                                               position: *position }.into()
            },
            None => SyntaxError::UnexpectedEndOfInput { expected }.into(),
        }
    }

    /// Parses an addition-level expression.
    ///
    /// Grammar: `expr := term (('+' | '-') term)*`
    fn expr(&mut self) -> ParseResult<Expr> {
        let mut left = self.term()?;
        loop {
            let op = if self.accept(TokenKind::Plus)?.is_some() {
                BinaryOperator::Add
            } else if self.accept(TokenKind::Minus)?.is_some() {
                BinaryOperator::Sub
            } else {
                break;
            };

            let right = self.term()?;
            left = Expr::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right) };
        }
        Ok(left)
    }

    /// Parses a multiplication-level expression.
    ///
    /// Grammar: `term := factor (('*' | '/') factor)*`
    fn term(&mut self) -> ParseResult<Expr> {
        let mut left = self.factor()?;
        loop {
            let op = if self.accept(TokenKind::Times)?.is_some() {
                BinaryOperator::Mul
            } else if self.accept(TokenKind::Divide)?.is_some() {
                BinaryOperator::Div
            } else {
                break;
            };

            let right = self.factor()?;
            left = Expr::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right) };
        }
        Ok(left)
    }

    /// Parses a numeric literal or a parenthesized subexpression.
    ///
    /// Grammar: `factor := NUM | '(' expr ')'`
    ///
    /// # Errors
    /// - `SyntaxError` naming both alternatives when the lookahead is
    ///   neither a number nor `(`.
    /// - `SyntaxError` when the closing `)` of a subexpression is missing.
    fn factor(&mut self) -> ParseResult<Expr> {
        if let Some((token, position)) = self.accept(TokenKind::Num)? {
            let value = token.text
                             .parse()
                             .map_err(|_| {
                                 SyntaxError::InvalidNumber { text: token.text.clone(),
                                                              position }
                             })?;
            return Ok(Expr::Number { value });
        }

        if self.accept(TokenKind::LParen)?.is_some() {
            let inner = self.expr()?;
            self.expect(TokenKind::RParen)?;
            return Ok(inner);
        }

        Err(self.unexpected("a number or '('".to_string()))
    }
}

/// Parses one complete expression into an abstract syntax tree.
///
/// The source is lexed and parsed in a single pass; the resulting tree can
/// be evaluated or rendered with a [`crate::visitor::Visitor`]. Tokens left
/// over after a full expression are a syntax error.
///
/// # Parameters
/// - `source`: The expression text to parse.
///
/// # Returns
/// The root node of the parsed expression tree.
///
/// # Errors
/// Returns an [`Error`] if tokenization or parsing fails. The first error
/// aborts the parse; no partial tree is returned.
///
/// # Example
/// ```
/// use minicalc::{ast::{BinaryOperator, Expr}, parse};
///
/// let tree = parse("1 + 2").unwrap();
/// assert!(matches!(tree, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
///
/// // An unclosed parenthesis aborts the parse.
/// assert!(parse("(1 + 2").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let mut parser = Parser::new(source)?;
    let expr = parser.expr()?;

    if let Some((token, position)) = parser.lookahead.take() {
        return Err(SyntaxError::TrailingToken { token: token.text,
                                                position }.into());
    }

    Ok(expr)
}
