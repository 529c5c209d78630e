use std::fmt;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every expression form the language knows: number
/// literals, identifier references, the `ans` reference to the previous
/// result, unary negation, the four arithmetic binary operations,
/// bracketed groups, and function calls. Each variant records the source
/// line it was parsed from for error reporting.
///
/// Expressions form a strict tree: every subexpression is owned by
/// exactly one parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3.14` or `42`.
    Number {
        /// The literal value.
        value: f64,
        /// Line number in the source.
        line:  usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source.
        line: usize,
    },
    /// The `ans` keyword, referring to the previously computed result.
    Ans {
        /// Line number in the source.
        line: usize,
    },
    /// A unary operation (negation).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source.
        line: usize,
    },
    /// A binary arithmetic operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source.
        line:  usize,
    },
    /// A bracketed expression.
    ///
    /// Kept as its own variant so pretty printing can restore the
    /// brackets; evaluation looks straight through it.
    Group {
        /// The inner expression.
        expr: Box<Self>,
        /// Line number in the source.
        line: usize,
    },
    /// A function call such as `sq(6)`.
    Call {
        /// The expression being called. The grammar allows any postfix
        /// chain here; the evaluator accepts only a plain function name.
        callee:    Box<Self>,
        /// Argument expressions, in call order.
        arguments: Vec<Self>,
        /// Line number in the source.
        line:      usize,
    },
}

impl Expr {
    /// Gets the source line number from `self`.
    ///
    /// ## Example
    /// ```
    /// use numera::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Identifier { line, .. }
            | Self::Ans { line }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::Group { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// A user-defined function declaration.
///
/// Declared with `let name(params...) = body` and stored in the session
/// by name. The body is a single expression evaluated when the function
/// is called.
#[derive(Debug, Clone, PartialEq)]
pub struct FnDecl {
    /// The function name.
    pub name:   String,
    /// Parameter names, in declaration order.
    pub params: Vec<String>,
    /// The body expression.
    pub body:   Expr,
    /// Line number in the source.
    pub line:   usize,
}

/// A top-level statement.
///
/// Exactly one statement is parsed per non-empty input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression, evaluated and displayed.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source.
        line: usize,
    },
    /// The `clear` command: wipe the terminal.
    Clear,
    /// The `exit` command: end the session.
    Exit,
    /// A variable binding, `let x = ...`.
    Assignment {
        /// The name being bound.
        name:  String,
        /// The value expression.
        value: Expr,
        /// Line number in the source.
        line:  usize,
    },
    /// A function declaration, `let f(x) = ...`.
    Function(FnDecl),
}

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// A unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}

impl fmt::Display for Expr {
    /// Pretty-prints the expression in source form.
    ///
    /// Groups print with their brackets restored, so re-parsing the
    /// printed text reproduces a tree with the same evaluation result.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::Ans { .. } => write!(f, "ans"),
            Self::Unary { op, expr, .. } => write!(f, "{op}{expr}"),
            Self::Binary { left, op, right, .. } => write!(f, "{left} {op} {right}"),
            Self::Group { expr, .. } => write!(f, "({expr})"),
            Self::Call { callee, arguments, .. } => {
                write!(f, "{callee}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression { expr, .. } => write!(f, "{expr}"),
            Self::Clear => write!(f, "clear"),
            Self::Exit => write!(f, "exit"),
            Self::Assignment { name, value, .. } => write!(f, "let {name} = {value}"),
            Self::Function(decl) => {
                write!(f, "let {}(", decl.name)?;
                for (i, param) in decl.params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ") = {}", decl.body)
            },
        }
    }
}
