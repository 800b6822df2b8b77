use crate::autograd::backward_op::BackwardOp;
use crate::error::ScalarustError;
use crate::ops::apply_unary_op;
use crate::variable::Variable;
use std::rc::Rc;

// --- ExpBackward Definition ---

/// Backward rule for `out = e^a`: `d(out)/da = e^a`, i.e. the forward
/// result itself. The computed output value is stored here instead of a
/// handle to the output node, which would create a reference cycle through
/// the output's own `grad_fn`.
#[derive(Debug)]
struct ExpBackward {
    a: Variable,
    out_value: f64,
}

impl BackwardOp for ExpBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarustError> {
        Ok(vec![self.out_value * grad_output])
    }

    fn inputs(&self) -> Vec<Variable> {
        vec![self.a.clone()]
    }
}

// --- exp_op Implementation ---

/// Computes the natural exponential `e^a`, recording the graph edge for
/// autograd.
pub fn exp_op(a: &Variable) -> Variable {
    apply_unary_op(
        a,
        |x| x.exp(),
        |a, out_value| Rc::new(ExpBackward { a, out_value }),
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
