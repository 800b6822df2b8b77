use crate::error::ScalarustError;
use crate::variable::Variable;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable operation.
///
/// Any operation that creates a non-leaf [`Variable`] stores one of these in
/// the output node's `grad_fn` field. During [`Variable::backward`] the rule
/// receives the gradient already accumulated into the *output* node and
/// returns the chain-rule contribution for each input.
///
/// Mathematically, for an operation `out = f(in_1, ..., in_n)` this computes
/// `dL/din_i = dL/dout * df/din_i` for each input `i`.
pub trait BackwardOp: Debug {
    /// Computes the gradient contribution for each input, given the gradient
    /// flowing into the output node (`grad_output`).
    ///
    /// The returned contributions are *added* into each input's gradient by
    /// the backward driver; the rule itself never mutates the graph. The
    /// order of the returned values **must** match [`inputs`](Self::inputs).
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarustError>;

    /// The operand nodes of the forward operation, in the order matching the
    /// gradients returned by [`backward`](Self::backward).
    ///
    /// These are strong handles. The graph is built forward-only, so a
    /// parent can never reference a node derived from it and no reference
    /// cycle can form through the grad_fn chain.
    fn inputs(&self) -> Vec<Variable>;
}
