//! # numera
//!
//! numera is an interactive calculator language written in Rust.
//! Each input line is tokenized, parsed into a statement tree, and
//! evaluated against session state: the last answer (`ans`), variable
//! bindings, and user-defined single-expression functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::{Outcome, Session},
        lexer::{Token, lex},
        parser::{core::OperatorFolding, statement::parse_statement},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` types that represent
/// the syntactic structure of input lines as a tree, built by the
/// parser and walked by the evaluator. Nodes carry source lines for
/// error reporting, and `Display` impls pretty-print them back to
/// source form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Defines all errors that can be raised while lexing, parsing, or
/// evaluating a line, with line numbers attached. Parse errors and
/// runtime errors are separate enums because they recover differently:
/// runtime errors always leave the session usable, while the driver may
/// be configured to treat parse errors as fatal.
pub mod error;
/// Orchestrates the process of evaluating input.
///
/// Ties together the lexer, parser, and evaluator and exposes the
/// session state they thread from one line to the next.
pub mod interpreter;

/// Evaluates one line of input against a session.
///
/// The line is tokenized, parsed into a single statement, and
/// evaluated. A blank line is a no-op returning [`Outcome::Silent`].
/// With chained operator folding, tokens left over after the statement
/// are an error; with first-pair-only folding they are dropped, as that
/// mode's grammar demands.
///
/// `line_number` seeds error diagnostics (a REPL passes its turn
/// number, a script runner the source line).
///
/// # Errors
/// Returns an error if the line fails to lex or parse, or if evaluation
/// raises a runtime error. The session survives either kind.
///
/// # Examples
/// ```
/// use numera::{
///     eval_line,
///     interpreter::evaluator::core::{Outcome, Session},
/// };
///
/// let mut session = Session::new();
///
/// let outcome = eval_line(&mut session, "3 + 4", 1).unwrap();
/// assert_eq!(outcome, Outcome::Value(7.0));
///
/// // 'y' was never bound: the line fails, the session lives on.
/// assert!(eval_line(&mut session, "y", 2).is_err());
/// assert_eq!(eval_line(&mut session, "1 + 1", 3).unwrap(),
///            Outcome::Value(2.0));
/// ```
pub fn eval_line(session: &mut Session,
                 line: &str,
                 line_number: usize)
                 -> Result<Outcome, Box<dyn std::error::Error>> {
    let tokens = lex(line, line_number)?;
    let mut iter = tokens.iter().peekable();

    while let Some((Token::NewLine, _)) = iter.peek() {
        iter.next();
    }
    if iter.peek().is_none() {
        return Ok(Outcome::Silent);
    }

    let opts = session.parse_options();
    let statement = parse_statement(&mut iter, opts)?;

    if opts.folding == OperatorFolding::Chained
       && let Some((tok, line)) = iter.peek()
       && !matches!(tok, Token::NewLine)
    {
        return Err(Box::new(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                                   line:  *line, }));
    }

    Ok(session.eval_statement(&statement)?)
}

/// Runs a whole source text, one statement per line.
///
/// Returns the last displayed value, printing it when `auto_print` is
/// set. A `clear` statement emits the terminal reset sequence; an
/// `exit` statement stops processing without ending the process.
///
/// # Errors
/// Returns the first lexing, parsing, or evaluation error encountered.
///
/// # Examples
/// ```
/// use numera::{interpreter::evaluator::core::Session, run_source};
///
/// let mut session = Session::new();
/// let result = run_source(&mut session, "let x = 5\nx + 1", false);
///
/// assert_eq!(result.unwrap(), Some(6.0));
/// ```
pub fn run_source(session: &mut Session,
                  source: &str,
                  auto_print: bool)
                  -> Result<Option<f64>, Box<dyn std::error::Error>> {
    let tokens = lex(source, 1)?;
    let mut iter = tokens.iter().peekable();
    let opts = session.parse_options();

    let mut result = None;

    while iter.peek().is_some() {
        while let Some((Token::NewLine, _)) = iter.peek() {
            iter.next();
        }
        if iter.peek().is_none() {
            break;
        }

        let statement = parse_statement(&mut iter, opts)?;

        if opts.folding == OperatorFolding::Chained {
            if let Some((tok, line)) = iter.peek()
               && !matches!(tok, Token::NewLine)
            {
                return Err(Box::new(ParseError::UnexpectedTrailingTokens { token:
                                                                               format!("{tok:?}"),
                                                                           line:  *line, }));
            }
        } else {
            // first-pair-only folding drops the rest of the line
            while let Some((tok, _)) = iter.peek() {
                if matches!(tok, Token::NewLine) {
                    break;
                }
                iter.next();
            }
        }

        match session.eval_statement(&statement)? {
            Outcome::Value(value) => result = Some(value),
            Outcome::Silent => {},
            Outcome::ClearScreen => print!("\x1b[H\x1b[2J"),
            Outcome::Exit => break,
        }
    }

    if auto_print && let Some(value) = result {
        println!("{value}");
    }

    Ok(result)
}
