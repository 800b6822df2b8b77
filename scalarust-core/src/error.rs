use thiserror::Error;

/// Custom error type for the ScalaRust autodiff engine.
///
/// Numeric edge cases (division by zero, logarithm of a non-positive value,
/// `pow` outside its real domain) are deliberately *not* represented here:
/// they flow through IEEE-754 arithmetic as infinities or NaN and propagate
/// through the rest of the graph. Only structural faults of the backward
/// machinery surface as errors.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq/Clone for easier testing
pub enum ScalarustError {
    /// A backward op produced a different number of gradient contributions
    /// than the number of inputs it reported. The two sequences must match
    /// element for element.
    #[error("gradient arity mismatch in {operation}: {inputs} input(s) but {gradients} gradient(s)")]
    GradientArityMismatch {
        operation: String,
        inputs: usize,
        gradients: usize,
    },

    #[error("internal error: {0}")]
    InternalError(String),
}
