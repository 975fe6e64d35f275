use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::arithmetic;

/// A complex number in rectangular form.
///
/// Equality is exact component-wise `f64` equality. Callers that want an
/// approximate comparison have to do it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexNumber {
    #[serde(with = "float_repr")]
    pub real: f64,
    #[serde(with = "float_repr")]
    pub imaginary: f64,
}

impl ComplexNumber {
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }
}

pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);
pub const ONE: ComplexNumber = ComplexNumber::new(1.0, 0.0);
pub const TWO: ComplexNumber = ComplexNumber::new(2.0, 0.0);
pub const PLUS_I: ComplexNumber = ComplexNumber::new(0.0, 1.0);
pub const MINUS_I: ComplexNumber = ComplexNumber::new(0.0, -1.0);

impl From<f64> for ComplexNumber {
    fn from(real: f64) -> Self {
        Self::new(real, 0.0)
    }
}

impl From<(f64, f64)> for ComplexNumber {
    fn from((real, imaginary): (f64, f64)) -> Self {
        Self::new(real, imaginary)
    }
}

/// Renders `"<real> + <imag>i"`, or `"<real> - <|imag|>i"` for a negative
/// imaginary part. A precision (`{:.3}`) applies to both parts.
impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sign, imaginary) = if self.imaginary < 0.0 {
            ('-', self.imaginary.abs())
        } else {
            ('+', self.imaginary)
        };
        match f.precision() {
            Some(p) => write!(f, "{:.p$} {sign} {:.p$}i", self.real, imaginary),
            None => write!(f, "{:?} {sign} {:?}i", self.real, imaginary),
        }
    }
}

/// JSON has no infinity or NaN, so non-finite components travel as the
/// strings `"inf"`, `"-inf"` and `"NaN"`. Finite values stay plain numbers.
pub(crate) mod float_repr {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(x: &f64, s: S) -> Result<S::Ok, S::Error> {
        if x.is_finite() {
            s.serialize_f64(*x)
        } else if x.is_nan() {
            s.serialize_str("NaN")
        } else if x.is_sign_positive() {
            s.serialize_str("inf")
        } else {
            s.serialize_str("-inf")
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        match Repr::deserialize(d)? {
            Repr::Number(x) => Ok(x),
            Repr::Text(t) => match t.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                "NaN" => Ok(f64::NAN),
                other => Err(D::Error::custom(format!("invalid number: {other}"))),
            },
        }
    }
}

// -- Operator sugar over the arithmetic core --

impl Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        arithmetic::add(self, rhs)
    }
}

impl Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        arithmetic::subtract(self, rhs)
    }
}

impl Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        arithmetic::multiply(self, rhs)
    }
}

impl Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.real, -self.imaginary)
    }
}
