use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_term},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Controls how chains of same-precedence binary operators are folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatorFolding {
    /// Fold the whole chain left-associatively: `1 + 2 + 3` is
    /// `(1 + 2) + 3`.
    #[default]
    Chained,
    /// Fold only the first operator pair and stop, leaving the rest of
    /// the chain unconsumed: `1 + 2 + 3` parses as `1 + 2` and the
    /// trailing `+ 3` is dropped. Reproduces the classic calculator's
    /// folding quirk for compatibility testing.
    FirstPairOnly,
}

/// Options threaded through the recursive-descent parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// How same-precedence operator chains are folded.
    pub folding: OperatorFolding,
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, `term`, and recursively descends through
/// the precedence hierarchy.
///
/// Grammar: `expression := term`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `opts`: Parser options.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, opts: ParseOptions) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_term(tokens, opts)
}
