use crate::autograd::backward_op::BackwardOp;
use crate::error::ScalarustError;
use crate::variable::Variable;
use std::rc::Rc;

// --- Backward Operation ---

/// Backward rule for `out = a^b`:
/// `d(out)/da = b * a^(b-1)`, `d(out)/db = a^b * ln(a)`.
///
/// For a non-positive base the exponent gradient involves `ln(a)` and is
/// NaN / -inf; as with the other domain edges this propagates rather than
/// erroring.
#[derive(Debug)]
struct PowBackward {
    a: Variable,
    b: Variable,
}

impl BackwardOp for PowBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarustError> {
        let a = self.a.value();
        let b = self.b.value();
        Ok(vec![
            b * a.powf(b - 1.0) * grad_output,
            a.powf(b) * a.ln() * grad_output,
        ])
    }

    fn inputs(&self) -> Vec<Variable> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Raises `a` to the power `b`, recording the graph edge for autograd.
/// Both operands participate in the graph and receive gradients.
pub fn pow_op(a: &Variable, b: &Variable) -> Variable {
    let value = a.value().powf(b.value());
    let grad_fn = PowBackward {
        a: a.clone(),
        b: b.clone(),
    };
    Variable::from_op(value, Rc::new(grad_fn))
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
