#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all grammar violations that can occur during parsing.
pub enum SyntaxError {
    /// Found a token other than the expected one(s).
    UnexpectedToken {
        /// Description of the expected token kind(s).
        expected: String,
        /// The text of the token actually found.
        found:    String,
        /// Byte offset of the offending token in the source.
        position: usize,
    },
    /// Reached the end of input where a token was required.
    UnexpectedEndOfInput {
        /// Description of the expected token kind(s).
        expected: String,
    },
    /// Found extra tokens after a complete expression.
    TrailingToken {
        /// The text of the first extra token.
        token:    String,
        /// Byte offset of the extra token in the source.
        position: usize,
    },
    /// A numeric literal could not be parsed into the numeric domain.
    InvalidNumber {
        /// The literal text.
        text:     String,
        /// Byte offset of the literal in the source.
        position: usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, position } => {
                write!(f,
                       "Error at position {position}: Expected {expected}, found '{found}'.")
            },

            Self::UnexpectedEndOfInput { expected } => {
                write!(f, "Expected {expected}, got end of input.")
            },

            Self::TrailingToken { token, position } => write!(f,
                                                              "Error at position {position}: Extra tokens after expression, starting with '{token}'."),

            Self::InvalidNumber { text, position } => {
                write!(f, "Error at position {position}: Invalid number '{text}'.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
