//! Exponential, logarithm and powers. All results lie on the principal
//! branch: the argument of `ln` is in `(-π, π]`.

use crate::arithmetic::{abs, multiply};
use crate::error::{ComplexError, ComplexResult};
use crate::number::{ComplexNumber, ONE, ZERO};

const HALF: ComplexNumber = ComplexNumber::new(0.5, 0.0);

pub fn exp(a: ComplexNumber) -> ComplexNumber {
    let coefficient = a.real.exp();
    ComplexNumber::new(
        coefficient * a.imaginary.cos(),
        coefficient * a.imaginary.sin(),
    )
}

/// Principal natural logarithm. Fails only for an exactly-zero argument.
pub fn ln(a: ComplexNumber) -> ComplexResult<ComplexNumber> {
    if a == ZERO {
        return Err(ComplexError::LogarithmOfZero);
    }
    Ok(ln_nonzero(a))
}

/// `base ^ exponent` through `exp(ln(base) * exponent)`.
///
/// A zero base never reaches `ln`: `0^0` is `ONE` and `0^z` is `ZERO` for
/// every other `z`.
pub fn pow(base: ComplexNumber, exponent: ComplexNumber) -> ComplexNumber {
    if base == ZERO {
        return if exponent == ZERO { ONE } else { ZERO };
    }
    exp(multiply(ln_nonzero(base), exponent))
}

/// Principal square root.
pub fn sqrt(a: ComplexNumber) -> ComplexNumber {
    pow(a, HALF)
}

fn ln_nonzero(a: ComplexNumber) -> ComplexNumber {
    ComplexNumber::new(abs(a).ln(), a.imaginary.atan2(a.real))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::{MINUS_I, PLUS_I};
    use std::f64::consts::{E, FRAC_PI_2, PI};

    fn assert_close(a: ComplexNumber, b: ComplexNumber) {
        assert!(
            (a.real - b.real).abs() < 1e-9 && (a.imaginary - b.imaginary).abs() < 1e-9,
            "{a} != {b}"
        );
    }

    #[test]
    fn test_exp() {
        assert_eq!(exp(ZERO), ONE);
        assert_close(exp(ONE), ComplexNumber::new(E, 0.0));
        // Euler: e^(iπ) = -1
        assert_close(
            exp(ComplexNumber::new(0.0, PI)),
            ComplexNumber::new(-1.0, 0.0),
        );
    }

    #[test]
    fn test_ln() {
        assert_eq!(ln(ONE).unwrap(), ZERO);
        assert_close(ln(PLUS_I).unwrap(), ComplexNumber::new(0.0, FRAC_PI_2));
        assert_close(ln(MINUS_I).unwrap(), ComplexNumber::new(0.0, -FRAC_PI_2));
    }

    #[test]
    fn test_ln_principal_branch_on_negative_axis() {
        let l = ln(ComplexNumber::new(-1.0, 0.0)).unwrap();
        assert_eq!(l.imaginary, PI);
    }

    #[test]
    fn test_ln_of_zero() {
        assert_eq!(ln(ZERO), Err(ComplexError::LogarithmOfZero));
        assert_eq!(
            ln(ComplexNumber::new(-0.0, 0.0)),
            Err(ComplexError::LogarithmOfZero)
        );
    }

    #[test]
    fn test_ln_near_zero_does_not_fail() {
        let l = ln(ComplexNumber::new(1e-300, 0.0)).unwrap();
        assert!(l.real < -690.0);
    }

    #[test]
    fn test_exp_ln_roundtrip() {
        let values = [
            ComplexNumber::new(1.0, 2.0),
            ComplexNumber::new(-3.0, 0.5),
            ComplexNumber::new(0.0, -4.0),
            ComplexNumber::new(-2.0, -2.0),
        ];
        for a in values {
            assert_close(exp(ln(a).unwrap()), a);
        }
    }

    #[test]
    fn test_pow_zero_base() {
        assert_eq!(pow(ZERO, ZERO), ONE);
        assert_eq!(pow(ZERO, ONE), ZERO);
        assert_eq!(pow(ZERO, ComplexNumber::new(-1.0, 3.0)), ZERO);
        assert_eq!(pow(ZERO, PLUS_I), ZERO);
    }

    #[test]
    fn test_pow() {
        let two = ComplexNumber::new(2.0, 0.0);
        let ten = ComplexNumber::new(10.0, 0.0);
        assert!((pow(two, ten).real - 1024.0).abs() < 1e-9);
        // i^i = e^(-π/2)
        assert_close(
            pow(PLUS_I, PLUS_I),
            ComplexNumber::new((-FRAC_PI_2).exp(), 0.0),
        );
        assert_close(pow(PLUS_I, two), ComplexNumber::new(-1.0, 0.0));
    }

    #[test]
    fn test_sqrt() {
        assert_close(
            sqrt(ComplexNumber::new(4.0, 0.0)),
            ComplexNumber::new(2.0, 0.0),
        );
        assert_close(
            sqrt(ComplexNumber::new(-4.0, 0.0)),
            ComplexNumber::new(0.0, 2.0),
        );
        assert_close(
            sqrt(ComplexNumber::new(3.0, 4.0)),
            ComplexNumber::new(2.0, 1.0),
        );
        assert_eq!(sqrt(ZERO), ZERO);
    }
}
