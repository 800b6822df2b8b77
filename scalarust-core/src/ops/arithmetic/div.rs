use crate::autograd::backward_op::BackwardOp;
use crate::error::ScalarustError;
use crate::variable::Variable;
use std::ops::Div;
use std::rc::Rc;

// --- Backward Operation ---

/// Backward rule for `out = a / b`:
/// `d(out)/da = 1/b`, `d(out)/db = -a/b^2`.
///
/// A zero divisor makes both the forward value and these weights infinite
/// or NaN; that is propagated, not trapped.
#[derive(Debug)]
struct DivBackward {
    a: Variable,
    b: Variable,
}

impl BackwardOp for DivBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, ScalarustError> {
        let a = self.a.value();
        let b = self.b.value();
        Ok(vec![grad_output / b, -(a / (b * b)) * grad_output])
    }

    fn inputs(&self) -> Vec<Variable> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Divides `a` by `b`, recording the graph edge for autograd.
pub fn div_op(a: &Variable, b: &Variable) -> Variable {
    let value = a.value() / b.value();
    let grad_fn = DivBackward {
        a: a.clone(),
        b: b.clone(),
    };
    Variable::from_op(value, Rc::new(grad_fn))
}

// --- Operator impls ---

impl Div<&Variable> for &Variable {
    type Output = Variable;
    fn div(self, rhs: &Variable) -> Variable {
        div_op(self, rhs)
    }
}

impl Div<Variable> for Variable {
    type Output = Variable;
    fn div(self, rhs: Variable) -> Variable {
        div_op(&self, &rhs)
    }
}

impl Div<&Variable> for Variable {
    type Output = Variable;
    fn div(self, rhs: &Variable) -> Variable {
        div_op(&self, rhs)
    }
}

impl Div<Variable> for &Variable {
    type Output = Variable;
    fn div(self, rhs: Variable) -> Variable {
        div_op(self, &rhs)
    }
}

impl Div<f64> for &Variable {
    type Output = Variable;
    fn div(self, rhs: f64) -> Variable {
        div_op(self, &Variable::new(rhs))
    }
}

impl Div<f64> for Variable {
    type Output = Variable;
    fn div(self, rhs: f64) -> Variable {
        div_op(&self, &Variable::new(rhs))
    }
}

impl Div<&Variable> for f64 {
    type Output = Variable;
    fn div(self, rhs: &Variable) -> Variable {
        div_op(&Variable::new(self), rhs)
    }
}

impl Div<Variable> for f64 {
    type Output = Variable;
    fn div(self, rhs: Variable) -> Variable {
        div_op(&Variable::new(self), &rhs)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
