use crate::autograd::backward_op::BackwardOp;
use crate::error::ScalarustError;
use crate::ops::apply_unary_op;
use crate::variable::Variable;
use std::rc::Rc;

/// Backward rule for `out = sin(a)`: `d(out)/da = cos(a)`.
#[derive(Debug)]
struct SinBackward {
    a: Variable,
}

impl BackwardOp for SinBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarustError> {
        Ok(vec![self.a.value().cos() * grad_output])
    }

    fn inputs(&self) -> Vec<Variable> {
        vec![self.a.clone()]
    }
}

/// Computes the sine of a variable, recording the graph edge for autograd.
pub fn sin_op(a: &Variable) -> Variable {
    apply_unary_op(a, |x| x.sin(), |a, _value| Rc::new(SinBackward { a }))
}

// --- Tests ---
#[cfg(test)]
#[path = "sin_test.rs"]
mod tests;
