use crate::autograd::backward_op::BackwardOp;
use crate::error::ScalarustError;
use crate::ops::apply_unary_op;
use crate::variable::Variable;
use std::rc::Rc;

/// Backward rule for `out = cos(a)`: `d(out)/da = -sin(a)`.
#[derive(Debug)]
struct CosBackward {
    a: Variable,
}

impl BackwardOp for CosBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarustError> {
        Ok(vec![-self.a.value().sin() * grad_output])
    }

    fn inputs(&self) -> Vec<Variable> {
        vec![self.a.clone()]
    }
}

/// Computes the cosine of a variable, recording the graph edge for autograd.
pub fn cos_op(a: &Variable) -> Variable {
    apply_unary_op(a, |x| x.cos(), |a, _value| Rc::new(CosBackward { a }))
}

// --- Tests ---
#[cfg(test)]
#[path = "cos_test.rs"]
mod tests;
