#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered, or a description of what was expected.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after a complete statement.
    UnexpectedTrailingTokens {
        /// The first leftover token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "line {line}: unexpected token: {token}")
            },
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "line {line}: unexpected end of input")
            },
            Self::UnexpectedTrailingTokens { token, line } => {
                write!(f, "line {line}: extra tokens after statement: {token}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
