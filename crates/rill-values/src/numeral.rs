//! The numeral facade: five uniform views over every numeric value.
//!
//! Any value whose kind is a member of the `NUMERAL` class can be viewed as
//! a natural, integer, real, rational, or imaginary number regardless of its
//! storage representation. Views are computed on demand and never cached.
//! Calling a view on a non-numeral is a programmer error and panics;
//! callers gate on [`Value::is_numeral`] first.

use num_bigint::{BigInt, Sign};
use num_complex::Complex;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use rill_types::class;

use crate::value::Value;

/// Low 64 bits of a big integer, two's-complement wrapped for negatives.
pub(crate) fn big_wrapping_u64(n: &BigInt) -> u64 {
    let (sign, digits) = n.to_u64_digits();
    let low = digits.first().copied().unwrap_or(0);
    if sign == Sign::Minus { low.wrapping_neg() } else { low }
}

/// Float to unsigned 64-bit, truncating toward zero; negative inputs wrap
/// through the signed intermediate.
pub(crate) fn float_wrapping_u64(f: f64) -> u64 {
    if f.is_sign_negative() {
        (f as i64) as u64
    } else {
        f as u64
    }
}

impl Value {
    /// Whether this value's kind belongs to the numeral class.
    pub fn is_numeral(&self) -> bool {
        self.tag().is_member(class::NUMERAL)
    }

    fn ensure_numeral(&self) {
        if !self.is_numeral() {
            panic!("numeral view on non-numeral kind {}", self.type_name());
        }
    }

    /// Unsigned 64-bit magnitude of a numeral.
    pub fn natural_magnitude(&self) -> u64 {
        self.ensure_numeral();
        match self {
            Value::Byte(b) => *b as u64,
            Value::Int8(n) => *n as u64,
            Value::Int16(n) => *n as u64,
            Value::Int32(n) => *n as u64,
            Value::Int64(n) => *n as u64,
            Value::Uint8(n) => *n as u64,
            Value::Uint16(n) => *n as u64,
            Value::Uint32(n) => *n as u64,
            Value::Uint64(n) => *n,
            Value::BigInt(n) => big_wrapping_u64(n),
            Value::Rational(r) | Value::BigFloat(r) => big_wrapping_u64(&r.to_integer()),
            Value::Float32(n) => float_wrapping_u64(*n as f64),
            Value::Float64(n) => float_wrapping_u64(*n),
            Value::Complex64(c) => float_wrapping_u64(c.re as f64),
            Value::Complex128(c) => float_wrapping_u64(c.re),
            _ => unreachable!("non-numeral passed ensure_numeral"),
        }
    }

    /// Signed 64-bit magnitude of a numeral.
    pub fn integer_magnitude(&self) -> i64 {
        self.ensure_numeral();
        match self {
            Value::Byte(b) => *b as i64,
            Value::Int8(n) => *n as i64,
            Value::Int16(n) => *n as i64,
            Value::Int32(n) => *n as i64,
            Value::Int64(n) => *n,
            Value::Uint8(n) => *n as i64,
            Value::Uint16(n) => *n as i64,
            Value::Uint32(n) => *n as i64,
            Value::Uint64(n) => *n as i64,
            Value::BigInt(n) => big_wrapping_u64(n) as i64,
            Value::Rational(r) | Value::BigFloat(r) => big_wrapping_u64(&r.to_integer()) as i64,
            Value::Float32(n) => *n as i64,
            Value::Float64(n) => *n as i64,
            Value::Complex64(c) => c.re as i64,
            Value::Complex128(c) => c.re as i64,
            _ => unreachable!("non-numeral passed ensure_numeral"),
        }
    }

    /// Floating approximation of a numeral.
    pub fn real_magnitude(&self) -> f64 {
        self.ensure_numeral();
        match self {
            Value::Byte(b) => *b as f64,
            Value::Int8(n) => *n as f64,
            Value::Int16(n) => *n as f64,
            Value::Int32(n) => *n as f64,
            Value::Int64(n) => *n as f64,
            Value::Uint8(n) => *n as f64,
            Value::Uint16(n) => *n as f64,
            Value::Uint32(n) => *n as f64,
            Value::Uint64(n) => *n as f64,
            Value::BigInt(n) => n.to_f64().unwrap_or(f64::INFINITY),
            Value::Rational(r) | Value::BigFloat(r) => r.to_f64().unwrap_or(f64::INFINITY),
            Value::Float32(n) => *n as f64,
            Value::Float64(n) => *n,
            Value::Complex64(c) => c.re as f64,
            Value::Complex128(c) => c.re,
            _ => unreachable!("non-numeral passed ensure_numeral"),
        }
    }

    /// Exact arbitrary-precision fraction view of a numeral.
    ///
    /// Non-finite floats have no exact fraction and view as zero.
    pub fn rational_magnitude(&self) -> BigRational {
        self.ensure_numeral();
        match self {
            Value::Byte(b) => BigRational::from_integer(BigInt::from(*b)),
            Value::Int8(n) => BigRational::from_integer(BigInt::from(*n)),
            Value::Int16(n) => BigRational::from_integer(BigInt::from(*n)),
            Value::Int32(n) => BigRational::from_integer(BigInt::from(*n)),
            Value::Int64(n) => BigRational::from_integer(BigInt::from(*n)),
            Value::Uint8(n) => BigRational::from_integer(BigInt::from(*n)),
            Value::Uint16(n) => BigRational::from_integer(BigInt::from(*n)),
            Value::Uint32(n) => BigRational::from_integer(BigInt::from(*n)),
            Value::Uint64(n) => BigRational::from_integer(BigInt::from(*n)),
            Value::BigInt(n) => BigRational::from_integer(n.clone()),
            Value::Rational(r) | Value::BigFloat(r) => r.clone(),
            Value::Float32(n) => {
                BigRational::from_float(*n as f64).unwrap_or_else(BigRational::zero)
            }
            Value::Float64(n) => BigRational::from_float(*n).unwrap_or_else(BigRational::zero),
            Value::Complex64(c) => {
                BigRational::from_float(c.re as f64).unwrap_or_else(BigRational::zero)
            }
            Value::Complex128(c) => {
                BigRational::from_float(c.re).unwrap_or_else(BigRational::zero)
            }
            _ => unreachable!("non-numeral passed ensure_numeral"),
        }
    }

    /// Complex view of a numeral; zero imaginary part unless the source is
    /// itself complex.
    pub fn imaginary_magnitude(&self) -> Complex<f64> {
        self.ensure_numeral();
        match self {
            Value::Complex64(c) => Complex::new(c.re as f64, c.im as f64),
            Value::Complex128(c) => *c,
            _ => Complex::new(self.real_magnitude(), 0.0),
        }
    }

    /// View as the representative natural value (unsigned 64-bit).
    pub fn as_natural(&self) -> Value {
        Value::Uint64(self.natural_magnitude())
    }

    /// View as the representative integer value (signed 64-bit).
    pub fn as_integer(&self) -> Value {
        Value::Int64(self.integer_magnitude())
    }

    /// View as the representative real value (64-bit float).
    pub fn as_real(&self) -> Value {
        Value::Float64(self.real_magnitude())
    }

    /// View as the exact rational value.
    pub fn as_rational(&self) -> Value {
        Value::Rational(self.rational_magnitude())
    }

    /// View as the representative complex value (two f64 components).
    pub fn as_imaginary(&self) -> Value {
        Value::Complex128(self.imaginary_magnitude())
    }
}
