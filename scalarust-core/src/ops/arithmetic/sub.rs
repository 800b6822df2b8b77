use crate::autograd::backward_op::BackwardOp;
use crate::error::ScalarustError;
use crate::variable::Variable;
use std::ops::Sub;
use std::rc::Rc;

// --- Backward Operation ---

/// Backward rule for `out = a - b`: the minuend receives the upstream
/// gradient, the subtrahend receives its negation.
#[derive(Debug)]
struct SubBackward {
    a: Variable,
    b: Variable,
}

impl BackwardOp for SubBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarustError> {
        Ok(vec![grad_output, -grad_output])
    }

    fn inputs(&self) -> Vec<Variable> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Subtracts `b` from `a`, recording the graph edge for autograd.
pub fn sub_op(a: &Variable, b: &Variable) -> Variable {
    let value = a.value() - b.value();
    let grad_fn = SubBackward {
        a: a.clone(),
        b: b.clone(),
    };
    Variable::from_op(value, Rc::new(grad_fn))
}

// --- Operator impls ---

impl Sub<&Variable> for &Variable {
    type Output = Variable;
    fn sub(self, rhs: &Variable) -> Variable {
        sub_op(self, rhs)
    }
}

impl Sub<Variable> for Variable {
    type Output = Variable;
    fn sub(self, rhs: Variable) -> Variable {
        sub_op(&self, &rhs)
    }
}

impl Sub<&Variable> for Variable {
    type Output = Variable;
    fn sub(self, rhs: &Variable) -> Variable {
        sub_op(&self, rhs)
    }
}

impl Sub<Variable> for &Variable {
    type Output = Variable;
    fn sub(self, rhs: Variable) -> Variable {
        sub_op(self, &rhs)
    }
}

impl Sub<f64> for &Variable {
    type Output = Variable;
    fn sub(self, rhs: f64) -> Variable {
        sub_op(self, &Variable::new(rhs))
    }
}

impl Sub<f64> for Variable {
    type Output = Variable;
    fn sub(self, rhs: f64) -> Variable {
        sub_op(&self, &Variable::new(rhs))
    }
}

impl Sub<&Variable> for f64 {
    type Output = Variable;
    fn sub(self, rhs: &Variable) -> Variable {
        sub_op(&Variable::new(self), rhs)
    }
}

impl Sub<Variable> for f64 {
    type Output = Variable;
    fn sub(self, rhs: Variable) -> Variable {
        sub_op(&Variable::new(self), &rhs)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
