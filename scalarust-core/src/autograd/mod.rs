//! Autograd machinery: the [`BackwardOp`] trait implemented by every
//! differentiable operation, the topological sort driving the backward
//! pass, and the finite-difference gradient checker used by the op tests.

pub mod backward_op;
pub mod grad_check;
pub(crate) mod graph;

pub use backward_op::BackwardOp;
