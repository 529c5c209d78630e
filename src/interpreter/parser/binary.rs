use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{OperatorFolding, ParseOptions, ParseResult},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles the binary operators `+` and `-`, left-associative in
/// [`OperatorFolding::Chained`] mode.
///
/// The rule is: `term := factor (("+" | "-") factor)*`
///
/// In [`OperatorFolding::FirstPairOnly`] mode the function returns
/// after combining a single operand pair; any further operators at this
/// level stay unconsumed.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `opts`: Parser options.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>, opts: ParseOptions) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_factor(tokens, opts)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = *line;
            tokens.next();
            let right = parse_factor(tokens, opts)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
            if opts.folding == OperatorFolding::FirstPairOnly {
                return Ok(left);
            }
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles `*` and `/`, one precedence level above `term`, with the
/// same folding behavior.
///
/// The rule is: `factor := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `opts`: Parser options.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>, opts: ParseOptions) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens, opts)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let line = *line;
            tokens.next();
            let right = parse_unary(tokens, opts)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
            if opts.folding == OperatorFolding::FirstPairOnly {
                return Ok(left);
            }
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not `+`, `-`, `*`, or `/`.
///
/// # Example
/// ```
/// use numera::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
