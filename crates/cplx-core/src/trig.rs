//! Trigonometric functions and their inverses, each expressed through
//! `exp`/`ln` via Euler's identities.
//!
//! The compositions are kept literal so rounding and branch selection follow
//! the exp/ln layer exactly.

use crate::arithmetic::{add, divide, multiply, quotient, subtract};
use crate::error::ComplexResult;
use crate::number::{ComplexNumber, MINUS_I, ONE, PLUS_I, TWO};
use crate::transcendental::{exp, ln, sqrt};

/// `(e^(ia) - e^(-ia)) / 2i`
pub fn sin(a: ComplexNumber) -> ComplexNumber {
    let exp1 = exp(multiply(a, PLUS_I));
    let exp2 = exp(multiply(a, MINUS_I));
    quotient(subtract(exp1, exp2), multiply(TWO, PLUS_I))
}

/// `(e^(ia) + e^(-ia)) / 2`
pub fn cos(a: ComplexNumber) -> ComplexNumber {
    let exp1 = exp(multiply(a, PLUS_I));
    let exp2 = exp(multiply(a, MINUS_I));
    quotient(add(exp1, exp2), TWO)
}

/// Fails only when `cos(a)` evaluates to exactly zero.
pub fn tan(a: ComplexNumber) -> ComplexResult<ComplexNumber> {
    divide(sin(a), cos(a))
}

/// Fails when `sin(a)` evaluates to exactly zero, e.g. at the origin.
pub fn cot(a: ComplexNumber) -> ComplexResult<ComplexNumber> {
    divide(cos(a), sin(a))
}

/// `-i * ln(ia + sqrt(1 - a²))`
pub fn arcsin(a: ComplexNumber) -> ComplexResult<ComplexNumber> {
    let root = sqrt(subtract(ONE, multiply(a, a)));
    Ok(multiply(MINUS_I, ln(add(multiply(PLUS_I, a), root))?))
}

/// `-i * ln(a + i * sqrt(1 - a²))`
pub fn arccos(a: ComplexNumber) -> ComplexResult<ComplexNumber> {
    let root = sqrt(subtract(ONE, multiply(a, a)));
    Ok(multiply(MINUS_I, ln(add(a, multiply(root, PLUS_I)))?))
}

/// `(-i/2) * ln((i - a) / (i + a))`
///
/// Undefined at `-i` (zero denominator) and at `i` (logarithm of zero).
pub fn arctan(a: ComplexNumber) -> ComplexResult<ComplexNumber> {
    let ratio = divide(subtract(PLUS_I, a), add(PLUS_I, a))?;
    Ok(multiply(quotient(MINUS_I, TWO), ln(ratio)?))
}

/// `(-i/2) * ln((a + i) / (a - i))`
///
/// Undefined at `i` (zero denominator) and at `-i` (logarithm of zero).
pub fn arccot(a: ComplexNumber) -> ComplexResult<ComplexNumber> {
    let ratio = divide(add(a, PLUS_I), subtract(a, PLUS_I))?;
    Ok(multiply(quotient(MINUS_I, TWO), ln(ratio)?))
}
