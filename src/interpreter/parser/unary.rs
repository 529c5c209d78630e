use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseOptions, ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// Negation is right-associative and recursive, so `--x` parses as
/// `-(-x)`.
///
/// The rule is: `unary := "-" unary | call`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `opts`: Parser options.
///
/// # Returns
/// The parsed expression node.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, opts: ParseOptions) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let operand = parse_unary(tokens, opts)?;
        return Ok(Expr::Unary { op: UnaryOperator::Negate,
                                expr: Box::new(operand),
                                line });
    }
    parse_call(tokens, opts)
}

/// Parses a postfix call chain.
///
/// After a primary expression, each `(` starts an argument list:
/// zero or more comma-separated expressions closed by `)`. The chain
/// loops, so `f(x)(y)` is syntactically valid; whether the callee can
/// actually be called is the evaluator's decision.
///
/// The rule is: `call := primary ("(" argument_list ")")*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `opts`: Parser options.
///
/// # Returns
/// The primary expression, wrapped in `Expr::Call` nodes for each
/// argument list found.
pub(crate) fn parse_call<'a, I>(tokens: &mut Peekable<I>, opts: ParseOptions) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut node = parse_primary(tokens, opts)?;

    while let Some((Token::LParen, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let arguments =
            parse_comma_separated(tokens, |t| parse_expression(t, opts), &Token::RParen)?;

        node = Expr::Call { callee: Box::new(node),
                            arguments,
                            line };
    }

    Ok(node)
}

/// Parses a primary expression.
///
/// The rule is:
/// `primary := number | identifier | "ans" | "(" expression ")"`
///
/// Bracketed expressions are wrapped in an [`Expr::Group`] node so the
/// brackets survive pretty printing.
///
/// # Errors
/// - `UnexpectedEndOfInput` when the stream is exhausted.
/// - `UnexpectedToken` for any token that cannot begin a primary.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>,
                                   opts: ParseOptions)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Number(value), line) => {
            let (value, line) = (*value, *line);
            tokens.next();
            Ok(Expr::Number { value, line })
        },
        (Token::Identifier(name), line) => {
            let (name, line) = (name.clone(), *line);
            tokens.next();
            Ok(Expr::Identifier { name, line })
        },
        (Token::Ans, line) => {
            let line = *line;
            tokens.next();
            Ok(Expr::Ans { line })
        },
        (Token::LParen, _) => parse_grouping(tokens, opts),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses a bracketed expression: `( expression )`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, opts: ParseOptions) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::LParen, line)) => *line,
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("expected '(', found {tok:?}"),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let inner = parse_expression(tokens, opts)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(Expr::Group { expr: Box::new(inner),
                                                     line }),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("expected ')', found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
