//! Generic arithmetic over the numeric tower.
//!
//! The dispatcher unifies its operands through the precedence order,
//! classifies the common kind into one of the five families, and applies
//! that family's operator semantics. Two surfaces exist for the guarded
//! cases: [`Coercer::try_arithmetic`] reports every violated guard as a
//! typed error, and [`Coercer::arithmetic`] is the compatibility surface
//! that collapses those errors into the silent nil sentinel.

use num_bigint::BigInt;
use num_rational::BigRational;
use serde::{Deserialize, Serialize};

use rill_types::Family;

use crate::convert::Coercer;
use crate::value::Value;

/// The four generic operators.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ArithOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Why a guarded arithmetic case produced no value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
    /// The unified kind lies outside the five arithmetic families.
    #[error("no arithmetic family for kind {0}")]
    NoFamily(&'static str),

    /// A division guard rejected the operands (zero or negative where the
    /// family requires strictly positive).
    #[error("{0} division requires strictly positive operands")]
    DivisionGuard(&'static str),
}

impl Coercer<'_> {
    /// Apply `op` to two numerals, producing the nil sentinel for every
    /// guarded case that does not hold.
    ///
    /// Expression evaluation wants a total operation; [`Coercer::try_arithmetic`]
    /// is the strict variant for callers that need to know which guard fired.
    pub fn arithmetic(&self, a: &Value, b: &Value, op: ArithOp) -> Value {
        self.try_arithmetic(a, b, op).unwrap_or(Value::Nil)
    }

    /// Apply `op` to two numerals, reporting violated guards as errors.
    ///
    /// Results take the representative kind of the unified family: Uint64,
    /// Int64, Float64, Rational or Complex128.
    pub fn try_arithmetic(&self, a: &Value, b: &Value, op: ArithOp) -> Result<Value, ArithError> {
        let (a, b) = self.precedence(a.clone(), b.clone());
        if a.kind() != b.kind() {
            // A lossy unification degraded one operand to nil.
            return Err(ArithError::NoFamily(rill_types::Kind::Nil.name()));
        }
        let kind = a.kind();
        let family = Family::of(kind).ok_or(ArithError::NoFamily(kind.name()))?;
        match family {
            Family::Natural => natural_op(&a, &b, op),
            Family::Integer => integer_op(&a, &b, op),
            Family::Real => real_op(&a, &b, op),
            Family::Rational => Ok(rational_op(&a, &b, op)),
            Family::Imaginary => imaginary_op(&a, &b, op),
        }
    }
}

/// Unsigned semantics, with two promotions: subtraction that would wrap
/// re-classifies the operands as integers, and division produces an exact
/// rational instead of a truncated quotient.
fn natural_op(a: &Value, b: &Value, op: ArithOp) -> Result<Value, ArithError> {
    let (x, y) = (a.natural_magnitude(), b.natural_magnitude());
    match op {
        ArithOp::Add => Ok(Value::Uint64(x.wrapping_add(y))),
        ArithOp::Subtract => {
            if x < y {
                let diff = a.integer_magnitude().wrapping_sub(b.integer_magnitude());
                Ok(Value::Int64(diff))
            } else {
                Ok(Value::Uint64(x - y))
            }
        }
        ArithOp::Multiply => Ok(Value::Uint64(x.wrapping_mul(y))),
        ArithOp::Divide => {
            if x > 0 && y > 0 {
                Ok(Value::Rational(BigRational::new(
                    BigInt::from(x),
                    BigInt::from(y),
                )))
            } else {
                Err(ArithError::DivisionGuard(Family::Natural.name()))
            }
        }
    }
}

fn integer_op(a: &Value, b: &Value, op: ArithOp) -> Result<Value, ArithError> {
    let (x, y) = (a.integer_magnitude(), b.integer_magnitude());
    match op {
        ArithOp::Add => Ok(Value::Int64(x.wrapping_add(y))),
        ArithOp::Subtract => Ok(Value::Int64(x.wrapping_sub(y))),
        ArithOp::Multiply => Ok(Value::Int64(x.wrapping_mul(y))),
        ArithOp::Divide => {
            if x > 0 && y > 0 {
                Ok(Value::Rational(BigRational::new(
                    BigInt::from(x),
                    BigInt::from(y),
                )))
            } else {
                Err(ArithError::DivisionGuard(Family::Integer.name()))
            }
        }
    }
}

/// Float semantics. The division guard requires both operands strictly
/// positive, like the integer families, even though negative float
/// division would otherwise be well defined.
fn real_op(a: &Value, b: &Value, op: ArithOp) -> Result<Value, ArithError> {
    let (x, y) = (a.real_magnitude(), b.real_magnitude());
    match op {
        ArithOp::Add => Ok(Value::Float64(x + y)),
        ArithOp::Subtract => Ok(Value::Float64(x - y)),
        ArithOp::Multiply => Ok(Value::Float64(x * y)),
        ArithOp::Divide => {
            if x > 0.0 && y > 0.0 {
                Ok(Value::Float64(x / y))
            } else {
                Err(ArithError::DivisionGuard(Family::Real.name()))
            }
        }
    }
}

/// Exact fraction semantics. Division carries no guard; a zero divisor is a
/// caller error and panics in `BigRational`.
fn rational_op(a: &Value, b: &Value, op: ArithOp) -> Value {
    let (x, y) = (a.rational_magnitude(), b.rational_magnitude());
    let result = match op {
        ArithOp::Add => x + y,
        ArithOp::Subtract => x - y,
        ArithOp::Multiply => x * y,
        ArithOp::Divide => x / y,
    };
    Value::Rational(result)
}

/// Elementwise complex semantics; division requires both magnitudes
/// strictly positive.
fn imaginary_op(a: &Value, b: &Value, op: ArithOp) -> Result<Value, ArithError> {
    let (x, y) = (a.imaginary_magnitude(), b.imaginary_magnitude());
    match op {
        ArithOp::Add => Ok(Value::Complex128(x + y)),
        ArithOp::Subtract => Ok(Value::Complex128(x - y)),
        ArithOp::Multiply => Ok(Value::Complex128(x * y)),
        ArithOp::Divide => {
            if x.norm() > 0.0 && y.norm() > 0.0 {
                Ok(Value::Complex128(x / y))
            } else {
                Err(ArithError::DivisionGuard(Family::Imaginary.name()))
            }
        }
    }
}
