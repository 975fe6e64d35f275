//! Closed algebra over [`ComplexNumber`]: add, subtract, multiply, divide,
//! plus the real-valued modulus.

use crate::error::{ComplexError, ComplexResult};
use crate::number::ComplexNumber;

pub fn add(a: ComplexNumber, b: ComplexNumber) -> ComplexNumber {
    ComplexNumber::new(a.real + b.real, a.imaginary + b.imaginary)
}

pub fn subtract(a: ComplexNumber, b: ComplexNumber) -> ComplexNumber {
    ComplexNumber::new(a.real - b.real, a.imaginary - b.imaginary)
}

pub fn multiply(a: ComplexNumber, b: ComplexNumber) -> ComplexNumber {
    ComplexNumber::new(
        a.real * b.real - a.imaginary * b.imaginary,
        a.real * b.imaginary + a.imaginary * b.real,
    )
}

/// Divides `a` by `b`.
///
/// Only an exactly-zero divisor is rejected. A divisor arbitrarily close to
/// zero yields large or infinite components, as plain `f64` division would.
pub fn divide(a: ComplexNumber, b: ComplexNumber) -> ComplexResult<ComplexNumber> {
    if norm_sqr(b) == 0.0 {
        return Err(ComplexError::DivisionByZero);
    }
    Ok(quotient(a, b))
}

/// Modulus `sqrt(real² + imaginary²)`.
pub fn abs(a: ComplexNumber) -> f64 {
    norm_sqr(a).sqrt()
}

fn norm_sqr(a: ComplexNumber) -> f64 {
    a.real * a.real + a.imaginary * a.imaginary
}

/// Division without the zero check. Callers must guarantee `b` is nonzero,
/// which holds for the constant divisors used by the trig layer.
pub(crate) fn quotient(a: ComplexNumber, b: ComplexNumber) -> ComplexNumber {
    let d = norm_sqr(b);
    ComplexNumber::new(
        (a.real * b.real + a.imaginary * b.imaginary) / d,
        (a.imaginary * b.real - a.real * b.imaginary) / d,
    )
}
