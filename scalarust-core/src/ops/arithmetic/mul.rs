use crate::autograd::backward_op::BackwardOp;
use crate::error::ScalarustError;
use crate::variable::Variable;
use std::ops::Mul;
use std::rc::Rc;

// --- Backward Operation ---

/// Backward rule for `out = a * b`: each operand receives the upstream
/// gradient scaled by the *other* operand's forward value.
#[derive(Debug)]
struct MulBackward {
    a: Variable,
    b: Variable,
}

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarustError> {
        // grad_a = b * grad_output, grad_b = a * grad_output
        Ok(vec![
            self.b.value() * grad_output,
            self.a.value() * grad_output,
        ])
    }

    fn inputs(&self) -> Vec<Variable> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Multiplies two variables, recording the graph edge for autograd.
pub fn mul_op(a: &Variable, b: &Variable) -> Variable {
    let value = a.value() * b.value();
    let grad_fn = MulBackward {
        a: a.clone(),
        b: b.clone(),
    };
    Variable::from_op(value, Rc::new(grad_fn))
}

// --- Operator impls ---

impl Mul<&Variable> for &Variable {
    type Output = Variable;
    fn mul(self, rhs: &Variable) -> Variable {
        mul_op(self, rhs)
    }
}

impl Mul<Variable> for Variable {
    type Output = Variable;
    fn mul(self, rhs: Variable) -> Variable {
        mul_op(&self, &rhs)
    }
}

impl Mul<&Variable> for Variable {
    type Output = Variable;
    fn mul(self, rhs: &Variable) -> Variable {
        mul_op(&self, rhs)
    }
}

impl Mul<Variable> for &Variable {
    type Output = Variable;
    fn mul(self, rhs: Variable) -> Variable {
        mul_op(self, &rhs)
    }
}

impl Mul<f64> for &Variable {
    type Output = Variable;
    fn mul(self, rhs: f64) -> Variable {
        mul_op(self, &Variable::new(rhs))
    }
}

impl Mul<f64> for Variable {
    type Output = Variable;
    fn mul(self, rhs: f64) -> Variable {
        mul_op(&self, &Variable::new(rhs))
    }
}

impl Mul<&Variable> for f64 {
    type Output = Variable;
    fn mul(self, rhs: &Variable) -> Variable {
        mul_op(&Variable::new(self), rhs)
    }
}

impl Mul<Variable> for f64 {
    type Output = Variable;
    fn mul(self, rhs: Variable) -> Variable {
        mul_op(&Variable::new(self), &rhs)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
