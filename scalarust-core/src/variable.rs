// scalarust-core/src/variable.rs
use crate::autograd::backward_op::BackwardOp;
use crate::autograd::graph::{build_topo, NodeId};
use crate::error::ScalarustError;
use crate::ops;
use crate::variable_data::VariableData;
use std::cell::{Ref, RefCell};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// The public, user-facing expression handle.
///
/// Wraps the internal [`VariableData`] in an `Rc<RefCell<...>>`: cloning a
/// `Variable` shares the underlying node rather than copying it, and every
/// derived node holds strong handles to its operands. A node therefore
/// lives as long as any handle or any consumer references it, and the
/// computation graph is freed as a whole when the last handle drops.
///
/// Building an expression with the arithmetic operators or the math methods
/// *is* the forward pass; there is no separate build step. Calling
/// [`backward`](Variable::backward) on the final handle then accumulates
/// `d(final)/d(node)` into every node that participated.
pub struct Variable(pub(crate) Rc<RefCell<VariableData>>);

impl Variable {
    /// Creates a leaf node from a scalar value. Its gradient starts at 0.0
    /// and stays 0.0 until a backward pass touches it.
    pub fn new(value: f64) -> Self {
        Variable(Rc::new(RefCell::new(VariableData::new(value))))
    }

    /// Creates a derived node: the result of `grad_fn`'s forward operation.
    pub(crate) fn from_op(value: f64, grad_fn: Rc<dyn BackwardOp>) -> Self {
        Variable(Rc::new(RefCell::new(VariableData::from_op(value, grad_fn))))
    }

    // --- Accessors ---

    /// The scalar value computed for this node during the forward pass.
    /// Reading it never changes graph state.
    pub fn value(&self) -> f64 {
        self.0.borrow().value
    }

    /// The gradient accumulated into this node. Meaningful only after a
    /// backward pass on an expression this node participates in.
    pub fn grad(&self) -> f64 {
        self.0.borrow().grad
    }

    /// True for nodes created directly from a scalar (no producing op).
    pub fn is_leaf(&self) -> bool {
        self.0.borrow().grad_fn.is_none()
    }

    /// Temporary immutable access to the internal node state.
    /// The `Ref` acts like a read lock; ensure it's dropped promptly.
    pub(crate) fn borrow_data(&self) -> Ref<VariableData> {
        self.0.borrow()
    }

    /// Stable identity of the underlying allocation, used as a graph key.
    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.0)
    }

    // --- Autograd ---

    /// Runs the backward pass from this node, treated as the root of the
    /// expression.
    ///
    /// Seeds `d(self)/d(self) = 1.0`, then walks every node reachable
    /// through the operand links in reverse topological order, running each
    /// node's local backward rule exactly once. On return, every reachable
    /// node's [`grad`](Variable::grad) holds the fully accumulated partial
    /// derivative of this node's value with respect to that node.
    ///
    /// The engine supports one backward pass per graph construction: calling
    /// this again on the same graph accumulates on top of the existing
    /// gradients instead of replacing them.
    pub fn backward(&self) -> Result<(), ScalarustError> {
        // --- Topological sort ---
        let mut visited = HashSet::<NodeId>::new();
        let mut sorted = Vec::new();
        build_topo(self, &mut visited, &mut sorted);

        // --- Seed the root ---
        self.0.borrow_mut().grad = 1.0;

        // --- Propagate, consumers before producers ---
        log::debug!(
            "backward: processing {} node(s) in reverse topological order",
            sorted.len()
        );
        for node in sorted.iter().rev() {
            let node_data = node.0.borrow();
            let grad_output = node_data.grad;
            let grad_fn = node_data.grad_fn.clone();
            // Release the borrow before the rule borrows its operands.
            drop(node_data);

            if let Some(grad_fn) = grad_fn {
                let inputs = grad_fn.inputs();
                let grads = grad_fn.backward(grad_output)?;
                if grads.len() != inputs.len() {
                    return Err(ScalarustError::GradientArityMismatch {
                        operation: format!("{:?}", grad_fn),
                        inputs: inputs.len(),
                        gradients: grads.len(),
                    });
                }
                for (input, grad) in inputs.iter().zip(grads) {
                    input.0.borrow_mut().grad += grad;
                }
            }
            // else: leaf node, nothing to push further down.
        }
        Ok(())
    }

    // --- Math methods (graph-building) ---

    /// Sine of this variable.
    pub fn sin(&self) -> Variable {
        ops::trig::sin_op(self)
    }

    /// Cosine of this variable.
    pub fn cos(&self) -> Variable {
        ops::trig::cos_op(self)
    }

    /// Tangent of this variable.
    pub fn tan(&self) -> Variable {
        ops::trig::tan_op(self)
    }

    /// Natural exponential `e^self`.
    pub fn exp(&self) -> Variable {
        ops::math_elem::exp_op(self)
    }

    /// Natural logarithm. Non-positive values produce NaN / -inf which
    /// propagate through the rest of the graph.
    pub fn ln(&self) -> Variable {
        ops::math_elem::ln_op(self)
    }

    /// `self` raised to a variable exponent; both operands receive
    /// gradients.
    pub fn pow(&self, exponent: &Variable) -> Variable {
        ops::arithmetic::pow_op(self, exponent)
    }

    /// `self` raised to a constant exponent. The exponent is promoted to a
    /// leaf node, so it participates in the graph like any other operand.
    pub fn powf(&self, exponent: f64) -> Variable {
        ops::arithmetic::pow_op(self, &Variable::new(exponent))
    }
}

// --- Trait implementations for the handle ---

impl Clone for Variable {
    /// Clones the handle (bumps the `Rc` count); the node is shared.
    fn clone(&self) -> Self {
        Variable(Rc::clone(&self.0))
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("Variable")
            .field("value", &data.value)
            .field("grad", &data.grad)
            .field("is_leaf", &data.grad_fn.is_none())
            .finish()
    }
}

/// Equality is allocation identity, consistent with `Hash`. Two handles are
/// equal only if they share the same node.
impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).hash(state);
    }
}
