// scalarust-core/src/ops/math_elem/ln.rs

use crate::autograd::backward_op::BackwardOp;
use crate::error::ScalarustError;
use crate::ops::apply_unary_op;
use crate::variable::Variable;
use std::rc::Rc;

// --- LnBackward Definition ---

/// Backward rule for `out = ln(a)`: `d(out)/da = 1/a`. Stores the operand
/// handle since its forward value is needed to weight the gradient.
#[derive(Debug)]
struct LnBackward {
    a: Variable,
}

impl BackwardOp for LnBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarustError> {
        Ok(vec![grad_output / self.a.value()])
    }

    fn inputs(&self) -> Vec<Variable> {
        vec![self.a.clone()]
    }
}

// --- ln_op Implementation ---

/// Computes the natural logarithm (base `e`) of a variable.
///
/// # Domain Considerations
/// The natural logarithm is only defined for strictly positive numbers.
/// This implementation returns `f64::NAN` for negative inputs and `-inf`
/// for zero, and the gradient `1/a` is likewise unguarded at `a = 0`;
/// non-finite values propagate through the rest of the graph.
pub fn ln_op(a: &Variable) -> Variable {
    apply_unary_op(a, |x| x.ln(), |a, _value| Rc::new(LnBackward { a }))
}

// --- Tests ---
#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
