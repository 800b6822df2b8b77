use crate::error::ScalarustError;
use crate::variable::Variable;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("gradient check failed for input {input_index}: analytical grad {analytical} != numerical grad {numerical} (difference: {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("numerical gradient is NaN or infinite for input {input_index}: f(x+eps)={loss_plus}, f(x-eps)={loss_minus}")]
    NumericalGradNotFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("analytical gradient is NaN or infinite for input {input_index}: {value}")]
    AnalyticalGradNotFinite { input_index: usize, value: f64 },

    #[error("backward pass execution failed during gradient check: {0}")]
    BackwardPassError(#[from] ScalarustError),
}

/// Checks analytical gradients against numerical gradients obtained by
/// central differences.
///
/// `func` must *rebuild* the expression from the leaves it is given: every
/// evaluation constructs a fresh graph, so the check never relies on
/// re-running backward over an already-consumed graph (the engine supports
/// one backward pass per graph construction).
///
/// For each input `i` the numerical gradient is
/// `(f(x_i + eps) - f(x_i - eps)) / (2 * eps)` with all other inputs held
/// fixed, and is compared to the gradient accumulated into the leaf by a
/// single backward pass.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Variable]) -> Variable,
{
    // --- Analytical gradients: one forward + backward on fresh leaves ---
    let leaves: Vec<Variable> = inputs.iter().copied().map(Variable::new).collect();
    let output = func(&leaves);
    output.backward()?;

    // --- Per-input central difference ---
    for (i, &x) in inputs.iter().enumerate() {
        let analytical = leaves[i].grad();
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNotFinite {
                input_index: i,
                value: analytical,
            });
        }

        let eval = |perturbed: f64| -> f64 {
            let fresh: Vec<Variable> = inputs
                .iter()
                .enumerate()
                .map(|(j, &v)| Variable::new(if j == i { perturbed } else { v }))
                .collect();
            func(&fresh).value()
        };
        let loss_plus = eval(x + epsilon);
        let loss_minus = eval(x - epsilon);
        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNotFinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        // Relative comparison with an absolute floor so gradients near zero
        // do not trip the relative criterion on rounding noise.
        if !relative_eq!(
            analytical,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical,
                numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_grad_accepts_correct_rule() {
        // f(a, b) = a * b + a
        let result = check_grad(
            |inputs| &(&inputs[0] * &inputs[1]) + &inputs[0],
            &[1.5, -2.5],
            1e-6,
            1e-6,
        );
        assert!(result.is_ok(), "unexpected failure: {:?}", result);
    }

    #[test]
    fn test_check_grad_rejects_wrong_gradient() {
        // The analytical gradient of a*a is 2a; a function that detaches one
        // factor (rebuilds it as a constant leaf) reports only a, which the
        // checker must flag.
        let result = check_grad(
            |inputs| &inputs[0] * &Variable::new(inputs[0].value()),
            &[3.0],
            1e-6,
            1e-6,
        );
        assert!(matches!(
            result,
            Err(GradCheckError::GradientMismatch { input_index: 0, .. })
        ));
    }

    #[test]
    fn test_check_grad_reports_non_finite_numerical_grad() {
        // ln is undefined left of zero, so the central difference at 0
        // evaluates ln(-eps) = NaN.
        let result = check_grad(|inputs| inputs[0].ln(), &[0.0], 1e-6, 1e-6);
        assert!(matches!(
            result,
            Err(GradCheckError::AnalyticalGradNotFinite { .. })
                | Err(GradCheckError::NumericalGradNotFinite { .. })
        ));
    }
}
