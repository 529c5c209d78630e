/// Parsing errors.
///
/// Defines all error types that can occur while lexing or parsing an
/// input line: unexpected tokens, premature end of input, and tokens
/// left over after a complete statement.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such
/// as unknown identifiers, calls to undeclared functions, and argument
/// count mismatches. Runtime errors are recoverable: they fail the
/// current line and leave the session usable.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
