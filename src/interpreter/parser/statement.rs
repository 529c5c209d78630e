use std::iter::Peekable;

use crate::{
    ast::{FnDecl, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseOptions, ParseResult, parse_expression},
            utils::{parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// Dispatch is on the first token of the line:
/// - `clear` → [`Statement::Clear`]
/// - `exit` → [`Statement::Exit`]
/// - `let` → assignment or function declaration
/// - an identifier, number, `(`, or `ans` → expression statement
///
/// Anything else, including an empty token stream, is an error returned
/// to the caller; the driver decides whether the session survives it.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `opts`: Parser options.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, opts: ParseOptions)
                              -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Clear, _)) => {
            tokens.next();
            Ok(Statement::Clear)
        },
        Some((Token::Exit, _)) => {
            tokens.next();
            Ok(Statement::Exit)
        },
        Some((Token::Let, _)) => parse_let(tokens, opts),
        Some((Token::Identifier(_) | Token::Number(_) | Token::LParen | Token::Ans, line)) => {
            let line = *line;
            let expr = parse_expression(tokens, opts)?;
            Ok(Statement::Expression { expr, line })
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses the statement forms introduced by `let`.
///
/// After the keyword comes an identifier. A `(` next means a function
/// declaration:
///
/// ```text
/// let sq(n) = n * n
/// ```
///
/// with a zero-or-more, comma-separated parameter list; otherwise an
/// `=` and an initializer expression make an assignment:
///
/// ```text
/// let x = 5
/// ```
///
/// # Errors
/// Returns a `ParseError` if the identifier is missing, the `=` is
/// missing, the parameter list is malformed, or the value expression
/// fails to parse.
fn parse_let<'a, I>(tokens: &mut Peekable<I>, opts: ParseOptions) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::Let, line)) => *line,
        _ => unreachable!("caller checked for 'let'"),
    };

    let name = parse_identifier(tokens)?;

    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();

        let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;
        expect_equals(tokens, line)?;

        let body = parse_expression(tokens, opts)?;
        return Ok(Statement::Function(FnDecl { name,
                                               params,
                                               body,
                                               line }));
    }

    expect_equals(tokens, line)?;
    let value = parse_expression(tokens, opts)?;

    Ok(Statement::Assignment { name, value, line })
}

/// Consumes the next token, which must be `=`.
fn expect_equals<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Equals, _)) => Ok(()),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("expected '=', found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
