/// Lexing errors.
///
/// Defines the error raised when no lexical pattern matches at the current
/// scan position.
pub mod lex_error;
/// Runtime errors.
///
/// Contains the error types that can be raised while evaluating an
/// expression tree, such as division by zero.
pub mod runtime_error;
/// Syntax errors.
///
/// Defines all grammar-violation errors detected by the parser: unexpected
/// tokens, unexpected end of input, trailing tokens, and invalid literals.
pub mod syntax_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// A unified error covering every phase of the pipeline.
///
/// Callers of [`crate::parse`] and [`crate::eval`] receive this type and can
/// still distinguish the failing phase by variant.
#[derive(Debug)]
pub enum Error {
    /// No lexical pattern matched during tokenization.
    Lex(LexError),
    /// The token stream violated the grammar.
    Syntax(SyntaxError),
    /// Evaluation of a well-formed tree failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<SyntaxError> for Error {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
