use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_neg_forward() {
    let a = Variable::new(2.5);
    let out = neg_op(&a);
    assert_relative_eq!(out.value(), -2.5, epsilon = 1e-9);
}

#[test]
fn test_neg_backward() {
    let a = Variable::new(2.0);
    let out = -&a;
    out.backward().unwrap();
    assert_relative_eq!(a.grad(), -1.0, epsilon = 1e-9);
}

#[test]
fn test_double_negation() {
    let a = Variable::new(1.5);
    let out = -(-&a);
    out.backward().unwrap();
    assert_relative_eq!(out.value(), 1.5, epsilon = 1e-9);
    assert_relative_eq!(a.grad(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_neg_grad_check() {
    check_grad(|inputs| neg_op(&inputs[0]), &[1.5], 1e-6, 1e-6).unwrap();
}
