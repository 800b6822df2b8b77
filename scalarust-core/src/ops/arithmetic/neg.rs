use crate::autograd::backward_op::BackwardOp;
use crate::error::ScalarustError;
use crate::ops::apply_unary_op;
use crate::variable::Variable;
use std::ops::Neg;
use std::rc::Rc;

// --- Backward Operation ---

/// Backward rule for `out = -a`: the operand receives the negated upstream
/// gradient.
#[derive(Debug)]
struct NegBackward {
    a: Variable,
}

impl BackwardOp for NegBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarustError> {
        Ok(vec![-grad_output])
    }

    fn inputs(&self) -> Vec<Variable> {
        vec![self.a.clone()]
    }
}

// --- Forward Operation ---

/// Negates a variable, recording the graph edge for autograd.
pub fn neg_op(a: &Variable) -> Variable {
    apply_unary_op(a, |x| -x, |a, _value| Rc::new(NegBackward { a }))
}

// --- Operator impls ---

impl Neg for &Variable {
    type Output = Variable;
    fn neg(self) -> Variable {
        neg_op(self)
    }
}

impl Neg for Variable {
    type Output = Variable;
    fn neg(self) -> Variable {
        neg_op(&self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
