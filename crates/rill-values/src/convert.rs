//! The conversion matrix and the precedence order over it.
//!
//! [`Coercer::convert`] is total over every ordered pair of ground kinds:
//! lossy cells follow a documented truncation or widening rule rather than
//! failing, and the only non-value outcome is the nil sentinel produced by
//! unparsable text. [`Coercer::precedence`] resolves which of two values
//! converts when their kinds differ: the one whose kind was declared
//! earlier widens into the other's kind.
//!
//! The matrix is expressed as one exhaustive match per target kind over a
//! handful of source views, so adding a kind fails to compile until every
//! affected cell is decided.

use std::borrow::Cow;
use std::time::{Duration, UNIX_EPOCH};

use num_bigint::BigInt;
use num_complex::Complex;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use rill_types::Kind;

use crate::clock::{Clock, SystemClock};
use crate::numeral::float_wrapping_u64;
use crate::value::{Value, unix_nanos};

/// Conversion, precedence and arithmetic over dynamic values.
///
/// Stateless apart from the injected [`Clock`], which only the two impure
/// timestamp cells read; a `Coercer` is cheap to construct and safe to
/// share between threads.
pub struct Coercer<'a> {
    pub(crate) clock: &'a dyn Clock,
}

impl<'a> Coercer<'a> {
    pub fn new(clock: &'a dyn Clock) -> Self {
        Coercer { clock }
    }

    /// A coercer reading the real system clock.
    pub fn system() -> Coercer<'static> {
        Coercer { clock: &SystemClock }
    }

    /// Convert `v` to `target`, total over ground kinds.
    ///
    /// Self-conversion is exact identity. Unparsable text (and byte/error
    /// payloads read as text) converting to a numeric or temporal kind
    /// yields [`Value::Nil`]. Panics if either kind is not ground; that is
    /// a representation mismatch the caller must rule out via
    /// [`Value::kind`].
    pub fn convert(&self, v: &Value, target: Kind) -> Value {
        let source = v.kind();
        if !source.is_ground() || !target.is_ground() {
            panic!(
                "convert: non-ground kind ({} -> {})",
                source.name(),
                target.name()
            );
        }
        if source == target {
            return v.clone();
        }
        if let Value::Nil = v {
            return zero_value(target);
        }
        match target {
            Kind::Nil => Value::Nil,
            Kind::Bool => self.to_bool(v),
            Kind::Byte => or_nil(unsigned_view(v), |n| Value::Byte(n as u8)),
            Kind::Rune => to_rune(v),
            Kind::Int8 => or_nil(signed_view(v), |n| Value::Int8(n as i8)),
            Kind::Int16 => or_nil(signed_view(v), |n| Value::Int16(n as i16)),
            Kind::Int32 => or_nil(signed_view(v), |n| Value::Int32(n as i32)),
            Kind::Int64 => or_nil(signed_view(v), Value::Int64),
            Kind::Uint8 => or_nil(unsigned_view(v), |n| Value::Uint8(n as u8)),
            Kind::Uint16 => or_nil(unsigned_view(v), |n| Value::Uint16(n as u16)),
            Kind::Uint32 => or_nil(unsigned_view(v), |n| Value::Uint32(n as u32)),
            Kind::Uint64 => or_nil(unsigned_view(v), Value::Uint64),
            Kind::BigInt => or_nil(big_view(v), Value::BigInt),
            Kind::Rational => or_nil(ratio_view(v), Value::Rational),
            Kind::Float32 => or_nil(float_view(v), |n| Value::Float32(n as f32)),
            Kind::Float64 => or_nil(float_view(v), Value::Float64),
            Kind::BigFloat => or_nil(ratio_view(v), Value::BigFloat),
            Kind::Complex64 => or_nil(complex_view(v), |c| {
                Value::Complex64(Complex::new(c.re as f32, c.im as f32))
            }),
            Kind::Complex128 => or_nil(complex_view(v), Value::Complex128),
            Kind::Bytes => to_bytes(v),
            Kind::Text => Value::Text(v.to_string()),
            Kind::Timestamp => to_timestamp(v),
            Kind::Duration => self.to_duration(v),
            Kind::Error => to_error(v),
            _ => unreachable!("ground kinds matched exhaustively"),
        }
    }

    /// Unify two values to one kind by declaration precedence.
    ///
    /// Same-kind pairs pass through untouched. Otherwise the value whose
    /// kind has the lower declaration index is converted into the other's
    /// kind; left/right positions are preserved. Never fails, though a
    /// lossy cell may degrade one side to nil.
    pub fn precedence(&self, a: Value, b: Value) -> (Value, Value) {
        let (ka, kb) = (a.kind(), b.kind());
        if ka == kb {
            (a, b)
        } else if ka.index() < kb.index() {
            let widened = self.convert(&a, kb);
            (widened, b)
        } else {
            let widened = self.convert(&b, ka);
            (a, widened)
        }
    }

    /// Positivity rule: strictly positive numerics are true, everything
    /// else false. Timestamps are the impure cell: true iff before now.
    fn to_bool(&self, v: &Value) -> Value {
        match v {
            Value::Nil => Value::Bool(false),
            Value::BigInt(n) => Value::Bool(n.is_positive()),
            Value::Rational(r) | Value::BigFloat(r) => Value::Bool(r.is_positive()),
            Value::Timestamp(t) => Value::Bool(*t < self.clock.now()),
            Value::Duration(d) => Value::Bool(!d.is_zero()),
            Value::Text(_) | Value::Bytes(_) | Value::Error(_) => {
                let lexeme = lexeme(v).unwrap_or_default();
                match lexeme.trim() {
                    "true" => Value::Bool(true),
                    "false" => Value::Bool(false),
                    other => or_nil(parse_f64(other), |n| Value::Bool(n > 0.0)),
                }
            }
            _ => or_nil(float_view(v), |n| Value::Bool(n > 0.0)),
        }
    }

    /// Timestamp → the absolute distance from now; numerics → nanoseconds.
    fn to_duration(&self, v: &Value) -> Value {
        match v {
            Value::Timestamp(t) => {
                let now = self.clock.now();
                let delta = now
                    .duration_since(*t)
                    .unwrap_or_else(|earlier| earlier.duration());
                Value::Duration(delta)
            }
            _ => or_nil(unsigned_view(v), |n| Value::Duration(Duration::from_nanos(n))),
        }
    }
}

impl Default for Coercer<'static> {
    fn default() -> Self {
        Coercer::system()
    }
}

fn or_nil<T>(view: Option<T>, build: impl FnOnce(T) -> Value) -> Value {
    view.map(build).unwrap_or(Value::Nil)
}

/// Zero/empty value of a ground kind; this is the entire "from nil" row.
///
/// Nil converted to error stays nil, the no-error sentinel.
fn zero_value(target: Kind) -> Value {
    match target {
        Kind::Nil | Kind::Error => Value::Nil,
        Kind::Bool => Value::Bool(false),
        Kind::Byte => Value::Byte(0),
        Kind::Rune => Value::Rune('\0'),
        Kind::Int8 => Value::Int8(0),
        Kind::Int16 => Value::Int16(0),
        Kind::Int32 => Value::Int32(0),
        Kind::Int64 => Value::Int64(0),
        Kind::Uint8 => Value::Uint8(0),
        Kind::Uint16 => Value::Uint16(0),
        Kind::Uint32 => Value::Uint32(0),
        Kind::Uint64 => Value::Uint64(0),
        Kind::BigInt => Value::BigInt(BigInt::zero()),
        Kind::Rational => Value::Rational(BigRational::zero()),
        Kind::Float32 => Value::Float32(0.0),
        Kind::Float64 => Value::Float64(0.0),
        Kind::BigFloat => Value::BigFloat(BigRational::zero()),
        Kind::Complex64 => Value::Complex64(Complex::new(0.0, 0.0)),
        Kind::Complex128 => Value::Complex128(Complex::new(0.0, 0.0)),
        Kind::Bytes => Value::Bytes(Vec::new()),
        Kind::Text => Value::Text(String::new()),
        Kind::Timestamp => Value::Timestamp(UNIX_EPOCH),
        Kind::Duration => Value::Duration(Duration::ZERO),
        _ => unreachable!("ground kinds matched exhaustively"),
    }
}

/// Textual payload of text-like kinds; `None` for everything else.
fn lexeme(v: &Value) -> Option<Cow<'_, str>> {
    match v {
        Value::Text(s) => Some(Cow::Borrowed(s)),
        Value::Error(msg) => Some(Cow::Borrowed(msg)),
        Value::Bytes(b) => Some(String::from_utf8_lossy(b)),
        _ => None,
    }
}

fn parse_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

fn parse_u64(s: &str) -> Option<u64> {
    let t = s.trim();
    t.parse::<u64>()
        .ok()
        .or_else(|| t.parse::<i64>().ok().map(|n| n as u64))
        .or_else(|| parse_f64(t).map(float_wrapping_u64))
}

fn parse_i64(s: &str) -> Option<i64> {
    let t = s.trim();
    t.parse::<i64>()
        .ok()
        .or_else(|| t.parse::<u64>().ok().map(|n| n as i64))
        .or_else(|| parse_f64(t).map(|n| n as i64))
}

fn parse_big(s: &str) -> Option<BigInt> {
    let t = s.trim();
    t.parse::<BigInt>()
        .ok()
        .or_else(|| parse_f64(t).and_then(BigRational::from_float).map(|r| r.to_integer()))
}

fn parse_ratio(s: &str) -> Option<BigRational> {
    let t = s.trim();
    t.parse::<BigRational>()
        .ok()
        .or_else(|| parse_f64(t).and_then(BigRational::from_float))
}

/// Unsigned 64-bit source view; `None` only for unparsable text.
fn unsigned_view(v: &Value) -> Option<u64> {
    match v {
        Value::Nil => Some(0),
        Value::Bool(b) => Some(*b as u64),
        Value::Rune(c) => Some(*c as u64),
        Value::Text(_) | Value::Bytes(_) | Value::Error(_) => parse_u64(&lexeme(v)?),
        Value::Timestamp(t) => Some(unix_nanos(*t) as u64),
        Value::Duration(d) => Some(d.as_nanos() as u64),
        _ => Some(v.natural_magnitude()),
    }
}

/// Signed 64-bit source view; `None` only for unparsable text.
fn signed_view(v: &Value) -> Option<i64> {
    match v {
        Value::Nil => Some(0),
        Value::Bool(b) => Some(*b as i64),
        Value::Rune(c) => Some(*c as i64),
        Value::Text(_) | Value::Bytes(_) | Value::Error(_) => parse_i64(&lexeme(v)?),
        Value::Timestamp(t) => Some(unix_nanos(*t) as i64),
        Value::Duration(d) => Some(d.as_nanos() as i64),
        _ => Some(v.integer_magnitude()),
    }
}

/// f64 source view; `None` only for unparsable text.
fn float_view(v: &Value) -> Option<f64> {
    match v {
        Value::Nil => Some(0.0),
        Value::Bool(b) => Some(*b as u8 as f64),
        Value::Rune(c) => Some(*c as u32 as f64),
        Value::Text(_) | Value::Bytes(_) | Value::Error(_) => parse_f64(&lexeme(v)?),
        Value::Timestamp(t) => Some(unix_nanos(*t) as f64),
        Value::Duration(d) => Some(d.as_nanos() as f64),
        _ => Some(v.real_magnitude()),
    }
}

/// Arbitrary-precision integer view, truncating toward zero.
fn big_view(v: &Value) -> Option<BigInt> {
    match v {
        Value::Nil => Some(BigInt::zero()),
        Value::Bool(b) => Some(BigInt::from(*b as u8)),
        Value::Rune(c) => Some(BigInt::from(*c as u32)),
        Value::Text(_) | Value::Bytes(_) | Value::Error(_) => parse_big(&lexeme(v)?),
        Value::Timestamp(t) => Some(BigInt::from(unix_nanos(*t))),
        Value::Duration(d) => Some(BigInt::from(d.as_nanos())),
        _ => Some(v.rational_magnitude().to_integer()),
    }
}

/// Exact fraction view.
fn ratio_view(v: &Value) -> Option<BigRational> {
    match v {
        Value::Nil => Some(BigRational::zero()),
        Value::Bool(b) => Some(BigRational::from_integer(BigInt::from(*b as u8))),
        Value::Rune(c) => Some(BigRational::from_integer(BigInt::from(*c as u32))),
        Value::Text(_) | Value::Bytes(_) | Value::Error(_) => parse_ratio(&lexeme(v)?),
        Value::Timestamp(t) => Some(BigRational::from_integer(BigInt::from(unix_nanos(*t)))),
        Value::Duration(d) => Some(BigRational::from_integer(BigInt::from(d.as_nanos()))),
        _ => Some(v.rational_magnitude()),
    }
}

/// Complex view; non-complex sources carry a zero imaginary part.
fn complex_view(v: &Value) -> Option<Complex<f64>> {
    match v {
        Value::Complex64(_) | Value::Complex128(_) => Some(v.imaginary_magnitude()),
        _ => float_view(v).map(|re| Complex::new(re, 0.0)),
    }
}

/// Text-like sources keep their first character; numerics convert by code
/// point, with invalid scalar values mapped to U+FFFD.
fn to_rune(v: &Value) -> Value {
    match v {
        Value::Text(_) | Value::Bytes(_) | Value::Error(_) => {
            let lexeme = lexeme(v).unwrap_or_default();
            match lexeme.chars().next() {
                Some(c) => Value::Rune(c),
                None => Value::Nil,
            }
        }
        _ => or_nil(unsigned_view(v), |n| {
            Value::Rune(char::from_u32(n as u32).unwrap_or(char::REPLACEMENT_CHARACTER))
        }),
    }
}

/// Kinds with a raw representation encode directly; everything else encodes
/// its text rendering as UTF-8.
fn to_bytes(v: &Value) -> Value {
    match v {
        Value::Byte(b) => Value::Bytes(vec![*b]),
        Value::Rune(c) => Value::Bytes(c.to_string().into_bytes()),
        Value::Text(s) => Value::Bytes(s.clone().into_bytes()),
        _ => Value::Bytes(v.to_string().into_bytes()),
    }
}

/// Durations land that far after the epoch; numerics are nanoseconds since
/// the epoch.
fn to_timestamp(v: &Value) -> Value {
    match v {
        Value::Duration(d) => Value::Timestamp(UNIX_EPOCH + *d),
        _ => or_nil(signed_view(v), |nanos| {
            let t = if nanos >= 0 {
                UNIX_EPOCH + Duration::from_nanos(nanos as u64)
            } else {
                UNIX_EPOCH - Duration::from_nanos(nanos.unsigned_abs())
            };
            Value::Timestamp(t)
        }),
    }
}

/// The asymmetric boolean rule is preserved as-is: false is the no-error
/// sentinel, true manufactures a diagnostic. Everything else wraps its text
/// rendering as the message.
fn to_error(v: &Value) -> Value {
    match v {
        Value::Nil | Value::Bool(false) => Value::Nil,
        Value::Bool(true) => Value::Error("boolean true".to_string()),
        _ => Value::Error(v.to_string()),
    }
}
