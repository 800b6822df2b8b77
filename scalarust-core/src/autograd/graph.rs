use crate::variable::Variable;
use crate::variable_data::VariableData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Stable identity of a graph node: the address of its shared allocation.
/// Every `Variable` clone of the same node maps to the same id, consistent
/// with `Variable`'s pointer-based `Hash`/`Eq`.
pub(crate) type NodeId = *const RefCell<VariableData>;

/// Recursively builds a topological sort of the computation graph.
///
/// Depth-first post-order: a node is appended only after every operand
/// reachable below it has been appended. `backward()` walks the list in
/// reverse, which guarantees a node's local rule runs only after all of its
/// consumers have pushed their contributions into it. A plain stack-based
/// visit does not give that guarantee once a node feeds more than one
/// consumer (diamond dependency), so the ordering here is load-bearing.
pub(crate) fn build_topo(
    node: &Variable,
    visited: &mut HashSet<NodeId>,
    sorted: &mut Vec<Variable>,
) {
    if visited.insert(node.node_id()) {
        // Clone the grad_fn Rc so no RefCell borrow is held across the
        // recursive calls.
        let grad_fn = node.borrow_data().grad_fn.clone();
        if let Some(grad_fn) = grad_fn {
            for input in grad_fn.inputs() {
                build_topo(&input, visited, sorted);
            }
        }
        log::trace!("build_topo: scheduling node {:?}", node.node_id());
        sorted.push(node.clone());
    }
}
