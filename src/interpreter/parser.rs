/// Core parsing entry points and options.
///
/// Declares the parse result type, the operator folding switch, and the
/// expression entry point for the precedence hierarchy.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the first token of a line and parses `clear`, `exit`,
/// `let` assignments, `let` function declarations, and expression
/// statements.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the `term` (additive) and `factor` (multiplicative)
/// precedence levels, in either folding mode.
pub mod binary;

/// Unary, call, and primary parsing.
///
/// Handles negation, postfix call chains, literals, identifiers, the
/// `ans` keyword, and bracketed groups.
pub mod unary;

/// Shared parsing utilities.
///
/// Comma-separated lists and bare identifiers, used by parameter lists
/// and call argument lists.
pub mod utils;
