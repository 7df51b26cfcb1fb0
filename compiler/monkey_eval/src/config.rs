//! Evaluator limits.

/// Tunables for one [`Evaluator`](crate::Evaluator).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Deepest allowed nesting of user-function calls. `None` means unbounded:
    /// the native stack still grows on demand, so the practical ceiling is
    /// available memory.
    pub max_call_depth: Option<usize>,
}

impl EvalConfig {
    pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

    pub const fn unlimited() -> Self {
        EvalConfig {
            max_call_depth: None,
        }
    }

    #[must_use]
    pub const fn with_max_call_depth(mut self, max_call_depth: Option<usize>) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_call_depth: Some(Self::DEFAULT_MAX_CALL_DEPTH),
        }
    }
}
