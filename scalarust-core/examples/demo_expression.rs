//! Demonstration program: builds a mixed expression over three inputs,
//! runs the backward pass, and prints the value and the gradients.
//!
//! Run with: `cargo run --example demo_expression`

use scalarust_core::Variable;

fn main() {
    let x = Variable::new(2.0);
    let y = Variable::new(3.0);
    let z = Variable::new(5.0);

    // f = x/y - tan(x)*cos(y) + e^x + sin(z)*sin(x) + e^z/(sin(x) + x*y*z)
    let f = &x / &y - x.tan() * y.cos() + x.exp() + z.sin() * x.sin()
        + z.exp() / (x.sin() + &x * &y * &z);

    f.backward().expect("backward pass failed");

    println!("The value of f(x, y, z): {}", f.value());
    println!("The value of gradient with respect to x: {}", x.grad());
    println!("The value of gradient with respect to y: {}", y.grad());
    println!("The value of gradient with respect to z: {}", z.grad());
}
