// Trigonometric functions.
pub mod cos;
pub mod sin;
pub mod tan;

pub use cos::cos_op;
pub use sin::sin_op;
pub use tan::tan_op;
