/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST produced by the parser, performs the
/// arithmetic, and manages session state: the last answer, variable
/// bindings, and user-defined functions.
///
/// # Responsibilities
/// - Evaluates expressions and statements over `f64`.
/// - Owns the [`Session`](evaluator::core::Session) state threaded from
///   one input line to the next.
/// - Reports runtime errors such as unknown identifiers without ending
///   the session.
pub mod evaluator;
/// The lexer module tokenizes one line (or script) of input.
///
/// The lexer reads raw text and produces a stream of tokens: numbers,
/// identifiers, keywords, operators, and delimiters. This is the first
/// stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into `(Token, line)` pairs.
/// - Classifies number literals ahead of keywords and identifiers.
/// - Reports characters that no rule accepts.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token stream by recursive descent and
/// constructs exactly one statement per input line, with nested
/// expressions parsed by precedence climbing.
///
/// # Responsibilities
/// - Converts tokens into [`Statement`](crate::ast::Statement) and
///   [`Expr`](crate::ast::Expr) nodes.
/// - Validates the grammar, reporting errors with line information.
/// - Implements both operator folding modes (see
///   [`OperatorFolding`](parser::core::OperatorFolding)).
pub mod parser;
