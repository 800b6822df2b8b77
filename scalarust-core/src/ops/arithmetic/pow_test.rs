use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() {
    let a = Variable::new(2.0);
    let b = Variable::new(3.0);
    let out = pow_op(&a, &b);
    assert_relative_eq!(out.value(), 8.0, epsilon = 1e-9);
}

#[test]
fn test_pow_backward_both_operands() {
    // d(a^b)/da = b*a^(b-1) = 12, d(a^b)/db = a^b*ln(a) = 8*ln(2)
    let a = Variable::new(2.0);
    let b = Variable::new(3.0);
    let out = pow_op(&a, &b);
    out.backward().unwrap();
    assert_relative_eq!(a.grad(), 12.0, epsilon = 1e-9);
    assert_relative_eq!(b.grad(), 8.0 * 2.0_f64.ln(), epsilon = 1e-9);
}

#[test]
fn test_powf_constant_exponent() {
    let a = Variable::new(3.0);
    let out = a.powf(2.0);
    out.backward().unwrap();
    assert_relative_eq!(out.value(), 9.0, epsilon = 1e-9);
    assert_relative_eq!(a.grad(), 6.0, epsilon = 1e-9);
}

#[test]
fn test_pow_negative_base_fractional_exponent_is_nan() {
    // Outside the real domain; the NaN flows through value and gradients.
    let a = Variable::new(-2.0);
    let b = Variable::new(0.5);
    let out = pow_op(&a, &b);
    assert!(out.value().is_nan());

    out.backward().unwrap();
    assert!(b.grad().is_nan()); // a^b * ln(a) with ln of a negative value
}

#[test]
fn test_pow_grad_check() {
    check_grad(
        |inputs| pow_op(&inputs[0], &inputs[1]),
        &[2.0, 1.5],
        1e-6,
        1e-6,
    )
    .unwrap();
}
