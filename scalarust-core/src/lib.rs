//! # ScalaRust Core
//!
//! A minimal reverse-mode automatic differentiation engine for scalars.
//!
//! Expressions are built from [`Variable`] leaves with the usual arithmetic
//! operators and math methods; building the expression *is* the forward
//! pass, each operation allocating one graph node. Calling
//! [`Variable::backward`] on the final handle walks the graph in reverse
//! topological order and accumulates the partial derivative of the result
//! with respect to every participating node.
//!
//! ```
//! use scalarust_core::Variable;
//!
//! let x = Variable::new(3.0);
//! let y = &(&x * &x) + &(&x * &x * &x); // x^2 + x^3
//! y.backward().unwrap();
//! assert_eq!(y.value(), 36.0);
//! assert_eq!(x.grad(), 33.0); // 2x + 3x^2
//! ```

// Declare the main modules of the crate.
pub mod autograd;
pub mod error;
pub mod ops;
pub mod utils;
pub mod variable;
pub(crate) mod variable_data;

// Re-export the user-facing types at the crate root.
pub use error::ScalarustError;
pub use variable::Variable;
