use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_add_forward() {
    let a = Variable::new(1.5);
    let b = Variable::new(-4.0);
    let out = add_op(&a, &b);
    assert_relative_eq!(out.value(), -2.5, epsilon = 1e-9);
    assert!(!out.is_leaf());
}

#[test]
fn test_add_backward() {
    let a = Variable::new(2.0);
    let b = Variable::new(3.0);
    let out = add_op(&a, &b);
    out.backward().unwrap();
    assert_relative_eq!(a.grad(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(b.grad(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_add_same_variable_twice() {
    // out = a + a: both gradient contributions land on the same node.
    let a = Variable::new(2.0);
    let out = add_op(&a, &a);
    out.backward().unwrap();
    assert_relative_eq!(a.grad(), 2.0, epsilon = 1e-9);
}

#[test]
fn test_add_scalar_promotion() {
    let x = Variable::new(4.0);
    let left = 5.0 + &x;
    let right = &x + 5.0;
    assert_relative_eq!(left.value(), 9.0, epsilon = 1e-9);
    assert_relative_eq!(right.value(), 9.0, epsilon = 1e-9);

    left.backward().unwrap();
    assert_relative_eq!(x.grad(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_add_grad_check() {
    check_grad(
        |inputs| add_op(&inputs[0], &inputs[1]),
        &[1.5, -2.0],
        1e-6,
        1e-6,
    )
    .unwrap();
}
