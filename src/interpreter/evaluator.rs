/// Core evaluation logic and session state.
///
/// Contains the [`Session`](core::Session) type, statement dispatch,
/// and expression evaluation over `f64`.
pub mod core;

/// Function call evaluation.
///
/// Handles user-defined function calls, arity checking, and the two
/// parameter scope modes.
pub mod call;
