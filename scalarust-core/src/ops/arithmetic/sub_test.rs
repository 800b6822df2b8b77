use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_sub_forward() {
    let a = Variable::new(1.5);
    let b = Variable::new(-4.0);
    let out = sub_op(&a, &b);
    assert_relative_eq!(out.value(), 5.5, epsilon = 1e-9);
}

#[test]
fn test_sub_backward_attributes_operands() {
    // Operand order matters: d(a-b)/da = 1, d(a-b)/db = -1.
    let a = Variable::new(2.0);
    let b = Variable::new(3.0);
    let out = sub_op(&a, &b);
    out.backward().unwrap();
    assert_relative_eq!(a.grad(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(b.grad(), -1.0, epsilon = 1e-9);
}

#[test]
fn test_sub_same_variable_cancels() {
    let a = Variable::new(2.0);
    let out = sub_op(&a, &a);
    out.backward().unwrap();
    assert_relative_eq!(out.value(), 0.0, epsilon = 1e-9);
    assert_relative_eq!(a.grad(), 0.0, epsilon = 1e-9); // +1 and -1 cancel
}

#[test]
fn test_sub_scalar_promotion() {
    let x = Variable::new(4.0);
    let left = 10.0 - &x;
    let right = &x - 1.0;
    assert_relative_eq!(left.value(), 6.0, epsilon = 1e-9);
    assert_relative_eq!(right.value(), 3.0, epsilon = 1e-9);

    left.backward().unwrap();
    assert_relative_eq!(x.grad(), -1.0, epsilon = 1e-9);
}

#[test]
fn test_sub_grad_check() {
    check_grad(
        |inputs| sub_op(&inputs[0], &inputs[1]),
        &[1.5, -2.0],
        1e-6,
        1e-6,
    )
    .unwrap();
}
