#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// Every variant is recoverable: the current line fails, the error is
/// reported, and the session keeps its bindings and continues.
pub enum RuntimeError {
    /// Referenced an identifier with no binding.
    UnknownIdentifier {
        /// The name of the identifier.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that has not been declared.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call supplied a different number of arguments than the
    /// declaration has parameters.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// The declared parameter count.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Tried to call something that is not a plain function name,
    /// e.g. the result of another call.
    NotCallable {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownIdentifier { name, line } => {
                write!(f, "line {line}: identifier '{name}' not found")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "line {line}: function declaration '{name}' not found")
            },
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  line, } => {
                write!(f,
                       "line {line}: function '{name}' takes {expected} argument(s), but {found} were supplied")
            },
            Self::NotCallable { line } => {
                write!(f, "line {line}: expression is not callable")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
