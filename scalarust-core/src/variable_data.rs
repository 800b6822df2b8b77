// scalarust-core/src/variable_data.rs
use crate::autograd::backward_op::BackwardOp;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::rc::Rc;

/// Holds the actual state for one vertex of the computation graph.
///
/// Wrapped in `Rc<RefCell<...>>` by [`Variable`](crate::variable::Variable)
/// for shared ownership and the interior mutability the backward pass needs.
pub(crate) struct VariableData {
    /// Result of the operation that produced this node (or the leaf's
    /// initial value). Never mutated after creation.
    pub(crate) value: f64,
    /// Gradient accumulator. Starts at 0.0 and is only written by a
    /// backward pass: the root is seeded to 1.0, every other node receives
    /// additive contributions from its consumers.
    pub(crate) grad: f64,
    /// Local backward rule of the producing operation. `None` for leaves.
    /// Holds strong handles to the operand nodes, so the whole subgraph
    /// below a node stays alive as long as the node does.
    pub(crate) grad_fn: Option<Rc<dyn BackwardOp>>,
}

impl VariableData {
    /// Leaf state: no producing operation.
    pub(crate) fn new(value: f64) -> Self {
        VariableData {
            value,
            grad: 0.0,
            grad_fn: None,
        }
    }

    /// Derived state: the result of `grad_fn`'s forward operation.
    pub(crate) fn from_op(value: f64, grad_fn: Rc<dyn BackwardOp>) -> Self {
        VariableData {
            value,
            grad: 0.0,
            grad_fn: Some(grad_fn),
        }
    }
}

// Manual implementation: the dyn BackwardOp field is only reported as
// present/absent, its internals are the op's own Debug concern.
impl Debug for VariableData {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("VariableData")
            .field("value", &self.value)
            .field("grad", &self.grad)
            .field("grad_fn_defined", &self.grad_fn.is_some())
            .finish()
    }
}
