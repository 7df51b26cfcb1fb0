//! Function application.

use std::io::Write;

use tracing::debug;

use super::{Evaluator, Interrupt};
use crate::environment::Environment;
use crate::errors::RuntimeError;
use crate::object::{Function, Object, NULL};

impl<W: Write> Evaluator<W> {
    /// Apply an evaluated callee to evaluated arguments.
    pub(super) fn apply_function(
        &mut self,
        callee: &Object,
        args: Vec<Object>,
    ) -> Result<Object, RuntimeError> {
        match callee {
            Object::Function(function) => self.call_function(function, args),
            Object::Builtin(builtin) => (builtin.func)(&args, &mut self.output),
            other => Err(RuntimeError::NotAFunction(other.type_name())),
        }
    }

    /// Run the body in a fresh child of the function's defining scope.
    ///
    /// Missing arguments are an error; extra ones are ignored.
    #[tracing::instrument(level = "debug", skip_all, fields(depth = self.depth))]
    fn call_function(
        &mut self,
        function: &Function,
        args: Vec<Object>,
    ) -> Result<Object, RuntimeError> {
        let parameters = function.parameters();
        if args.len() < parameters.len() {
            return Err(RuntimeError::wrong_argument_count(
                args.len(),
                parameters.len(),
            ));
        }
        self.check_call_depth()?;

        let env = Environment::extend(&function.env);
        for (parameter, arg) in parameters.iter().zip(args) {
            env.set(parameter.as_str(), arg);
        }

        self.depth += 1;
        let result = self.eval_block(function.body(), &env);
        self.depth -= 1;

        match result {
            Ok(value) => Ok(value.unwrap_or(NULL)),
            Err(Interrupt::Return(value)) => Ok(value),
            Err(Interrupt::Error(error)) => Err(error),
        }
    }

    #[inline]
    fn check_call_depth(&self) -> Result<(), RuntimeError> {
        if let Some(limit) = self.config.max_call_depth {
            if self.depth >= limit {
                debug!(limit, "call depth exceeded");
                return Err(RuntimeError::CallDepthExceeded(limit));
            }
        }
        Ok(())
    }
}
