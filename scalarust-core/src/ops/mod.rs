//! # Scalar Operations Module (`ops`)
//!
//! Central hub for the differentiable primitive operations. Operations are
//! grouped into submodules by functionality:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow — plus the `std::ops`
//!   operator impls for `Variable`, `&Variable` and `f64` operands.
//! - [`math_elem`]: element-wise math functions (exp, ln).
//! - [`trig`]: trigonometric functions (sin, cos, tan).
//!
//! Each operation has a core `xxx_op` function performing the forward
//! computation and wiring the autograd linkage, and a `XxxBackward` struct
//! implementing [`BackwardOp`](crate::autograd::BackwardOp) that stores the
//! operand handles needed to run the local derivative rule during the
//! backward pass. Operand order in `inputs()` matches the gradient order
//! returned by `backward()`, which is how contributions are attributed to
//! the correct operand.

use crate::autograd::backward_op::BackwardOp;
use crate::variable::Variable;
use std::rc::Rc;

pub mod arithmetic;
pub mod math_elem;
pub mod trig;

/// Applies a unary differentiable operation to a variable.
///
/// Handles the shared plumbing: evaluate the forward function on the
/// operand's value, build the backward op via `backward_builder` (which
/// receives a handle to the operand and the computed output value, for
/// rules like `exp` that reuse it), and allocate the derived node.
pub(crate) fn apply_unary_op<F, B>(a: &Variable, forward: F, backward_builder: B) -> Variable
where
    F: Fn(f64) -> f64,
    B: FnOnce(Variable, f64) -> Rc<dyn BackwardOp>,
{
    let value = forward(a.value());
    let grad_fn = backward_builder(a.clone(), value);
    Variable::from_op(value, grad_fn)
}
