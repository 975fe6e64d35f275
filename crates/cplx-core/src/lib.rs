//! Complex-number arithmetic on a rectangular `(real, imaginary)` pair.
//!
//! Layers, each built only from the ones above it:
//! - [`arithmetic`]: add, subtract, multiply, divide, abs
//! - [`transcendental`]: exp, ln, pow, sqrt
//! - [`trig`]: sin, cos, tan, cot and their inverses
//!
//! Every function is pure. The only failures are an exactly-zero divisor and
//! the logarithm of exactly zero, reported as [`ComplexError`].

pub mod arithmetic;
pub mod error;
pub mod function;
pub mod number;
pub mod transcendental;
pub mod trig;

pub use arithmetic::{abs, add, divide, multiply, subtract};
pub use error::{ComplexError, ComplexResult};
pub use function::{BinaryFn, Evaluation, Function, UnaryFn};
pub use number::{ComplexNumber, MINUS_I, ONE, PLUS_I, TWO, ZERO};
pub use transcendental::{exp, ln, pow, sqrt};
pub use trig::{arccos, arccot, arcsin, arctan, cos, cot, sin, tan};
