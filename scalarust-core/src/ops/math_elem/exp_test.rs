use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_exp_forward() {
    let a = Variable::new(1.3);
    let out = exp_op(&a);
    assert_relative_eq!(out.value(), 3.6692966676192444, epsilon = 1e-9);
}

#[test]
fn test_exp_backward_reuses_forward_value() {
    // d(e^a)/da = e^a
    let a = Variable::new(1.3);
    let out = a.exp();
    out.backward().unwrap();
    assert_relative_eq!(a.grad(), out.value(), epsilon = 1e-9);
}

#[test]
fn test_exp_of_zero() {
    let a = Variable::new(0.0);
    let out = exp_op(&a);
    out.backward().unwrap();
    assert_relative_eq!(out.value(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(a.grad(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_exp_grad_check() {
    check_grad(|inputs| exp_op(&inputs[0]), &[1.3], 1e-6, 1e-6).unwrap();
}
