use crate::autograd::backward_op::BackwardOp;
use crate::error::ScalarustError;
use crate::ops::apply_unary_op;
use crate::variable::Variable;
use std::rc::Rc;

/// Backward rule for `out = tan(a)`: `d(out)/da = 1/cos^2(a)`.
///
/// Near odd multiples of pi/2 the weight blows up along with the forward
/// value; both propagate as large / non-finite floats.
#[derive(Debug)]
struct TanBackward {
    a: Variable,
}

impl BackwardOp for TanBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarustError> {
        let cos_a = self.a.value().cos();
        Ok(vec![grad_output / (cos_a * cos_a)])
    }

    fn inputs(&self) -> Vec<Variable> {
        vec![self.a.clone()]
    }
}

/// Computes the tangent of a variable, recording the graph edge for
/// autograd.
pub fn tan_op(a: &Variable) -> Variable {
    apply_unary_op(a, |x| x.tan(), |a, _value| Rc::new(TanBackward { a }))
}

// --- Tests ---
#[cfg(test)]
#[path = "tan_test.rs"]
mod tests;
