use crate::variable::Variable;

/// Checks that a variable's forward value is within `tolerance` of
/// `expected`. Panics with a diagnostic message otherwise.
pub fn check_value_near(actual: &Variable, expected: f64, tolerance: f64) {
    let value = actual.value();
    let diff = (value - expected).abs();
    if diff > tolerance {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            value, expected, diff, tolerance
        );
    }
}

/// Checks that the gradient accumulated into a variable is within
/// `tolerance` of `expected`. Only meaningful after a backward pass.
pub fn check_grad_near(actual: &Variable, expected: f64, tolerance: f64) {
    let grad = actual.grad();
    let diff = (grad - expected).abs();
    if diff > tolerance {
        panic!(
            "Gradient mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            grad, expected, diff, tolerance
        );
    }
}
