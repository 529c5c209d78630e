use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, ScopeMode, Session, UndefinedNames},
};

impl Session {
    /// Evaluates a function call expression.
    ///
    /// The callee must be a plain function name; anything else (for
    /// example the result of another call, as in `f(x)(y)`) is a
    /// [`RuntimeError::NotCallable`]. The declaration is looked up by
    /// name, the argument count is checked against the parameter count,
    /// and the body is evaluated under the session's
    /// [`ScopeMode`].
    ///
    /// Recursion and nested calls work in both modes: each call layer
    /// binds and unbinds its own parameters.
    ///
    /// # Errors
    /// - Unknown function name (or 0 under [`UndefinedNames::Zero`]).
    /// - Argument count mismatch.
    /// - Callee is not a function name.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            arguments: &[Expr],
                            line: usize,
                            bindings: Option<&HashMap<String, f64>>)
                            -> EvalResult<f64> {
        let name = match callee {
            Expr::Identifier { name, .. } => name.clone(),
            _ => return Err(RuntimeError::NotCallable { line }),
        };

        let Some(decl) = self.functions.get(&name).cloned() else {
            return match self.options().undefined {
                UndefinedNames::Error => Err(RuntimeError::UnknownFunction { name, line }),
                UndefinedNames::Zero => Ok(0.0),
            };
        };

        if arguments.len() != decl.params.len() {
            return Err(RuntimeError::ArityMismatch { name,
                                                     expected: decl.params.len(),
                                                     found: arguments.len(),
                                                     line });
        }

        match self.options().scope {
            ScopeMode::CallBindings => self.call_with_frame(&decl, arguments, bindings),
            ScopeMode::SharedVariables => self.call_shared(&decl, arguments),
        }
    }

    /// Calls a function with a private parameter frame.
    ///
    /// Arguments are evaluated in the caller's scope (with the caller's
    /// own bindings still visible), collected into a fresh frame, and
    /// the body is evaluated with that frame as its only bindings. The
    /// frame is dropped on return, so the session variables never see
    /// the parameters at all.
    fn call_with_frame(&mut self,
                       decl: &crate::ast::FnDecl,
                       arguments: &[Expr],
                       bindings: Option<&HashMap<String, f64>>)
                       -> EvalResult<f64> {
        let mut frame = HashMap::with_capacity(decl.params.len());
        for (param, argument) in decl.params.iter().zip(arguments) {
            let value = self.eval(argument, bindings)?;
            frame.insert(param.clone(), value);
        }

        self.eval(&decl.body, Some(&frame))
    }

    /// Calls a function through the shared variable table.
    ///
    /// Parameters are inserted into the session variables one by one
    /// (so a later argument expression can already see an earlier
    /// parameter), the body is evaluated against the extended table,
    /// and every parameter name is then removed unconditionally --
    /// including names that were bound before the call. Cleanup runs
    /// even when an argument or the body fails, so no parameter binding
    /// ever outlives the call.
    fn call_shared(&mut self, decl: &crate::ast::FnDecl, arguments: &[Expr]) -> EvalResult<f64> {
        let mut result = Ok(0.0);

        for (param, argument) in decl.params.iter().zip(arguments) {
            match self.eval(argument, None) {
                Ok(value) => {
                    self.variables.insert(param.clone(), value);
                },
                Err(e) => {
                    result = Err(e);
                    break;
                },
            }
        }

        if result.is_ok() {
            result = self.eval(&decl.body, None);
        }

        for param in &decl.params {
            self.variables.remove(param);
        }

        result
    }
}
