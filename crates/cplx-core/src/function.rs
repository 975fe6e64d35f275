//! Named access to every operation, for callers that pick the function at
//! runtime (command line, JSON batches).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::arithmetic;
use crate::error::ComplexResult;
use crate::number::ComplexNumber;
use crate::transcendental;
use crate::trig;

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Result of applying a [`Function`]: `abs` is real-valued, everything else
/// is complex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Evaluation {
    Complex(ComplexNumber),
    Real(#[serde(with = "crate::number::float_repr")] f64),
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, f.precision()) {
            (Self::Complex(z), Some(p)) => write!(f, "{z:.p$}"),
            (Self::Complex(z), None) => write!(f, "{z}"),
            (Self::Real(x), Some(p)) => write!(f, "{x:.p$}"),
            (Self::Real(x), None) => write!(f, "{x:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// UnaryFn
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFn {
    Abs,
    Exp,
    Ln,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Cot,
    Arcsin,
    Arccos,
    Arctan,
    Arccot,
}

impl UnaryFn {
    pub const ALL: [UnaryFn; 12] = [
        Self::Abs,
        Self::Exp,
        Self::Ln,
        Self::Sqrt,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Cot,
        Self::Arcsin,
        Self::Arccos,
        Self::Arctan,
        Self::Arccot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Abs => "abs",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Cot => "cot",
            Self::Arcsin => "arcsin",
            Self::Arccos => "arccos",
            Self::Arctan => "arctan",
            Self::Arccot => "arccot",
        }
    }

    pub fn apply(self, a: ComplexNumber) -> ComplexResult<Evaluation> {
        let z = match self {
            Self::Abs => return Ok(Evaluation::Real(arithmetic::abs(a))),
            Self::Exp => transcendental::exp(a),
            Self::Ln => transcendental::ln(a)?,
            Self::Sqrt => transcendental::sqrt(a),
            Self::Sin => trig::sin(a),
            Self::Cos => trig::cos(a),
            Self::Tan => trig::tan(a)?,
            Self::Cot => trig::cot(a)?,
            Self::Arcsin => trig::arcsin(a)?,
            Self::Arccos => trig::arccos(a)?,
            Self::Arctan => trig::arctan(a)?,
            Self::Arccot => trig::arccot(a)?,
        };
        Ok(Evaluation::Complex(z))
    }
}

impl fmt::Display for UnaryFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for UnaryFn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == lower)
            .ok_or_else(|| format!("unknown function: {s}"))
    }
}

// ---------------------------------------------------------------------------
// BinaryFn
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryFn {
    Add,
    Subtract,
    Multiply,
    Divide,
    Pow,
}

impl BinaryFn {
    pub const ALL: [BinaryFn; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Pow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Pow => "pow",
        }
    }

    pub fn apply(self, a: ComplexNumber, b: ComplexNumber) -> ComplexResult<ComplexNumber> {
        Ok(match self {
            Self::Add => arithmetic::add(a, b),
            Self::Subtract => arithmetic::subtract(a, b),
            Self::Multiply => arithmetic::multiply(a, b),
            Self::Divide => arithmetic::divide(a, b)?,
            Self::Pow => transcendental::pow(a, b),
        })
    }
}

impl fmt::Display for BinaryFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for BinaryFn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == lower)
            .ok_or_else(|| format!("unknown function: {s}"))
    }
}

// ---------------------------------------------------------------------------
// Function
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Unary(UnaryFn),
    Binary(BinaryFn),
}

impl Function {
    /// Every function, binary ones first.
    pub fn all() -> impl Iterator<Item = Function> {
        BinaryFn::ALL
            .into_iter()
            .map(Self::Binary)
            .chain(UnaryFn::ALL.into_iter().map(Self::Unary))
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Unary(f) => f.name(),
            Self::Binary(f) => f.name(),
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }

    /// Applies the function to `args`. Returns `None` when the number of
    /// arguments does not match [`Function::arity`].
    pub fn apply(self, args: &[ComplexNumber]) -> Option<ComplexResult<Evaluation>> {
        match (self, args) {
            (Self::Unary(f), [a]) => Some(f.apply(*a)),
            (Self::Binary(f), [a, b]) => Some(f.apply(*a, *b).map(Evaluation::Complex)),
            _ => None,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Function {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<UnaryFn>()
            .map(Self::Unary)
            .or_else(|_| s.parse::<BinaryFn>().map(Self::Binary))
    }
}
