use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_cos_forward() {
    let a = Variable::new(0.9);
    let out = cos_op(&a);
    assert_relative_eq!(out.value(), 0.6216099682706644, epsilon = 1e-9);
}

#[test]
fn test_cos_backward() {
    // d(cos a)/da = -sin(a)
    let a = Variable::new(0.9);
    let out = a.cos();
    out.backward().unwrap();
    assert_relative_eq!(a.grad(), -0.7833269096274834, epsilon = 1e-9);
}

#[test]
fn test_cos_grad_check() {
    check_grad(|inputs| cos_op(&inputs[0]), &[0.9], 1e-6, 1e-6).unwrap();
}
