use crate::autograd::backward_op::BackwardOp;
use crate::error::ScalarustError;
use crate::variable::Variable;
use std::ops::Add;
use std::rc::Rc;

// --- Backward Operation ---

/// Backward rule for `out = a + b`: both operands receive the upstream
/// gradient unchanged.
#[derive(Debug)]
struct AddBackward {
    a: Variable,
    b: Variable,
}

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarustError> {
        Ok(vec![grad_output, grad_output])
    }

    fn inputs(&self) -> Vec<Variable> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Adds two variables, recording the graph edge for autograd.
pub fn add_op(a: &Variable, b: &Variable) -> Variable {
    let value = a.value() + b.value();
    let grad_fn = AddBackward {
        a: a.clone(),
        b: b.clone(),
    };
    Variable::from_op(value, Rc::new(grad_fn))
}

// --- Operator impls ---
// References are the canonical form; the owned and f64 variants forward to
// add_op so a scalar on either side is promoted to a leaf node.

impl Add<&Variable> for &Variable {
    type Output = Variable;
    fn add(self, rhs: &Variable) -> Variable {
        add_op(self, rhs)
    }
}

impl Add<Variable> for Variable {
    type Output = Variable;
    fn add(self, rhs: Variable) -> Variable {
        add_op(&self, &rhs)
    }
}

impl Add<&Variable> for Variable {
    type Output = Variable;
    fn add(self, rhs: &Variable) -> Variable {
        add_op(&self, rhs)
    }
}

impl Add<Variable> for &Variable {
    type Output = Variable;
    fn add(self, rhs: Variable) -> Variable {
        add_op(self, &rhs)
    }
}

impl Add<f64> for &Variable {
    type Output = Variable;
    fn add(self, rhs: f64) -> Variable {
        add_op(self, &Variable::new(rhs))
    }
}

impl Add<f64> for Variable {
    type Output = Variable;
    fn add(self, rhs: f64) -> Variable {
        add_op(&self, &Variable::new(rhs))
    }
}

impl Add<&Variable> for f64 {
    type Output = Variable;
    fn add(self, rhs: &Variable) -> Variable {
        add_op(&Variable::new(self), rhs)
    }
}

impl Add<Variable> for f64 {
    type Output = Variable;
    fn add(self, rhs: Variable) -> Variable {
        add_op(&Variable::new(self), &rhs)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
