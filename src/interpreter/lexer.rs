use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the
/// lexer. Number classification runs ahead of keyword and identifier
/// classification, so a buffer that is lexically a number is always a
/// [`Token::Number`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),
    /// `clear`
    #[token("clear")]
    Clear,
    /// `exit`
    #[token("exit")]
    Exit,
    /// `let`
    #[token("let")]
    Let,
    /// `ans`, the previous-result keyword.
    #[token("ans")]
    Ans,
    /// Identifier tokens; variable or function names such as `x` or `sq`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,

    /// Line separator; counted for diagnostics.
    #[token("\n", |lex| { lex.extras.line += 1; })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Tokenizes `source` into `(Token, line)` pairs.
///
/// `first_line` seeds the line counter, so a REPL can report its turn
/// number and a script its real source line.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] carrying the offending slice
/// when a character matches no lexer rule.
///
/// # Example
/// ```
/// use numera::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("12 + 34", 1).unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|(tok, _)| tok).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Number(12.0), Token::Plus, Token::Number(34.0)]);
/// ```
pub fn lex(source: &str, first_line: usize) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: first_line });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     line:  lexer.extras.line, });
        }
    }

    Ok(tokens)
}
