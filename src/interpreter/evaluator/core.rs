use std::collections::HashMap;

use crate::{
    ast::{BinaryOperator, Expr, Statement, UnaryOperator},
    error::RuntimeError,
    interpreter::parser::core::{OperatorFolding, ParseOptions},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How function call parameters are scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopeMode {
    /// Arguments are evaluated in the caller's scope and bound in a
    /// private frame consulted before the session variables; the frame
    /// is discarded when the call returns. Outer variables sharing a
    /// parameter's name are untouched.
    #[default]
    CallBindings,
    /// Parameters are written straight into the session variable table,
    /// one by one, and every parameter name is deleted when the call
    /// returns, whether or not it existed before. A caller's variable
    /// that shares a name with a callee parameter is lost. Reproduces
    /// the classic calculator's shadowing hazard.
    SharedVariables,
}

/// What evaluating an unbound name does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UndefinedNames {
    /// Unknown identifiers and functions are recoverable errors.
    #[default]
    Error,
    /// Unknown identifiers and functions silently evaluate to 0.
    Zero,
}

/// Behavior switches for a [`Session`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Operator chain folding mode for the parser.
    pub folding:   OperatorFolding,
    /// Function parameter scoping mode.
    pub scope:     ScopeMode,
    /// Unbound name handling.
    pub undefined: UndefinedNames,
}

/// Outcome of evaluating one statement.
///
/// The evaluator performs no I/O and never ends the process; side
/// effects are handed back to the driver as outcomes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The statement produced a value to display.
    Value(f64),
    /// The statement ran for its effect on the session; nothing to
    /// display.
    Silent,
    /// The driver should wipe the terminal.
    ClearScreen,
    /// The driver should end the session with status 0.
    Exit,
}

/// Holds the state of one interactive session.
///
/// A `Session` lives for the whole read-eval-print loop and threads the
/// pipeline from one input line to the next: the last computed answer,
/// whether it should be displayed, variable bindings, and user-defined
/// function declarations.
///
/// ## Usage
///
/// A `Session` is created once and fed one parsed statement at a time
/// through [`Session::eval_statement`]. One session per independent
/// REPL; sessions share nothing.
pub struct Session {
    /// The last computed numeric result.
    pub ans:       f64,
    /// Whether the most recent statement produced a value to display.
    pub show:      bool,
    /// Variable bindings, name to current value.
    pub variables: HashMap<String, f64>,
    /// Function declarations by name. Entries are overwritten on
    /// redeclaration and never removed.
    pub functions: HashMap<String, crate::ast::FnDecl>,
    options:       SessionOptions,
}

#[allow(clippy::new_without_default)]
impl Session {
    /// Creates a session with default options, no bindings, and a zero
    /// answer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(SessionOptions::default())
    }

    /// Creates a session with the given behavior switches.
    #[must_use]
    pub fn with_options(options: SessionOptions) -> Self {
        Self { ans: 0.0,
               show: false,
               variables: HashMap::new(),
               functions: HashMap::new(),
               options }
    }

    /// Returns the session's behavior switches.
    #[must_use]
    pub const fn options(&self) -> SessionOptions {
        self.options
    }

    /// Returns the parser options matching this session's configuration.
    #[must_use]
    pub const fn parse_options(&self) -> ParseOptions {
        ParseOptions { folding: self.options.folding }
    }

    /// Evaluates a single statement against the session state.
    ///
    /// - Expression statements store their result as the answer and set
    ///   the display flag.
    /// - Assignments and function declarations update their mapping and
    ///   clear the display flag.
    /// - `clear` and `exit` clear the display flag and return their
    ///   outcome for the driver to act on.
    ///
    /// When an expression statement fails, the answer is reset to 0
    /// before the error propagates; earlier bindings are untouched and
    /// the session remains usable.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::evaluator::core::{Outcome, Session};
    /// use numera::interpreter::lexer::lex;
    /// use numera::interpreter::parser::statement::parse_statement;
    ///
    /// let mut session = Session::new();
    /// let tokens = lex("3 + 4", 1).unwrap();
    /// let statement = parse_statement(&mut tokens.iter().peekable(),
    ///                                 session.parse_options()).unwrap();
    ///
    /// assert_eq!(session.eval_statement(&statement).unwrap(),
    ///            Outcome::Value(7.0));
    /// assert!(session.show);
    /// assert_eq!(session.ans, 7.0);
    /// ```
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Outcome> {
        match statement {
            Statement::Expression { expr, .. } => match self.eval(expr, None) {
                Ok(value) => {
                    self.ans = value;
                    self.show = true;
                    Ok(Outcome::Value(value))
                },
                Err(e) => {
                    self.ans = 0.0;
                    self.show = false;
                    Err(e)
                },
            },
            Statement::Clear => {
                self.show = false;
                Ok(Outcome::ClearScreen)
            },
            Statement::Exit => {
                self.show = false;
                Ok(Outcome::Exit)
            },
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value, None)?;
                self.variables.insert(name.clone(), value);
                self.show = false;
                Ok(Outcome::Silent)
            },
            Statement::Function(decl) => {
                self.functions.insert(decl.name.clone(), decl.clone());
                self.show = false;
                Ok(Outcome::Silent)
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// `bindings` carries the parameter frame of the function body
    /// currently being evaluated, if any; it is consulted before the
    /// session variables.
    ///
    /// Arithmetic follows plain IEEE `f64` semantics throughout:
    /// division by zero yields an infinity or NaN, never an error.
    pub fn eval(&mut self,
                expr: &Expr,
                bindings: Option<&HashMap<String, f64>>)
                -> EvalResult<f64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Identifier { name, line } => self.eval_identifier(name, *line, bindings),
            Expr::Ans { .. } => Ok(self.ans),
            Expr::Unary { op, expr, .. } => {
                let value = self.eval(expr, bindings)?;
                match op {
                    UnaryOperator::Negate => Ok(-value),
                }
            },
            Expr::Binary { left, op, right, .. } => {
                let x = self.eval(left, bindings)?;
                let y = self.eval(right, bindings)?;
                Ok(match op {
                    BinaryOperator::Add => x + y,
                    BinaryOperator::Sub => x - y,
                    BinaryOperator::Mul => x * y,
                    BinaryOperator::Div => x / y,
                })
            },
            Expr::Group { expr, .. } => self.eval(expr, bindings),
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line, bindings),
        }
    }

    /// Looks up an identifier.
    ///
    /// Lookup checks, in order: the current parameter bindings (when
    /// evaluating a function body), then the session variables. An
    /// unbound name is an error, or 0 under [`UndefinedNames::Zero`].
    fn eval_identifier(&self,
                       name: &str,
                       line: usize,
                       bindings: Option<&HashMap<String, f64>>)
                       -> EvalResult<f64> {
        if let Some(frame) = bindings
           && let Some(value) = frame.get(name)
        {
            return Ok(*value);
        }
        if let Some(value) = self.variables.get(name) {
            return Ok(*value);
        }
        match self.options.undefined {
            UndefinedNames::Error => Err(RuntimeError::UnknownIdentifier { name: name.to_owned(),
                                                                           line }),
            UndefinedNames::Zero => Ok(0.0),
        }
    }
}
