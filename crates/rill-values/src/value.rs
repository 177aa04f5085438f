//! Dynamic values: one immutable payload per ground kind.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use num_bigint::BigInt;
use num_complex::Complex;
use num_rational::BigRational;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use rill_types::{Kind, TypeTag};

/// A dynamic value of exactly one ground kind (plus the reserved `Flag`
/// kind, whose payload is a type tag).
///
/// Values are immutable: conversion and arithmetic always construct new
/// values. `BigFloat` is backed by an exact rational (every finite binary
/// float is representable as one); it differs from `Rational` only in kind
/// identity and therefore in how precedence and family dispatch treat it.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    Byte(u8),
    Rune(char),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    BigInt(BigInt),
    Rational(BigRational),
    Float32(f32),
    Float64(f64),
    BigFloat(BigRational),
    Complex64(Complex<f32>),
    Complex128(Complex<f64>),
    Bytes(Vec<u8>),
    Text(String),
    Timestamp(SystemTime),
    Duration(Duration),
    Error(String),
    Flag(TypeTag),
}

impl Value {
    /// The value's kind.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Bool(_) => Kind::Bool,
            Value::Byte(_) => Kind::Byte,
            Value::Rune(_) => Kind::Rune,
            Value::Int8(_) => Kind::Int8,
            Value::Int16(_) => Kind::Int16,
            Value::Int32(_) => Kind::Int32,
            Value::Int64(_) => Kind::Int64,
            Value::Uint8(_) => Kind::Uint8,
            Value::Uint16(_) => Kind::Uint16,
            Value::Uint32(_) => Kind::Uint32,
            Value::Uint64(_) => Kind::Uint64,
            Value::BigInt(_) => Kind::BigInt,
            Value::Rational(_) => Kind::Rational,
            Value::Float32(_) => Kind::Float32,
            Value::Float64(_) => Kind::Float64,
            Value::BigFloat(_) => Kind::BigFloat,
            Value::Complex64(_) => Kind::Complex64,
            Value::Complex128(_) => Kind::Complex128,
            Value::Bytes(_) => Kind::Bytes,
            Value::Text(_) => Kind::Text,
            Value::Timestamp(_) => Kind::Timestamp,
            Value::Duration(_) => Kind::Duration,
            Value::Error(_) => Kind::Error,
            Value::Flag(_) => Kind::Flag,
        }
    }

    /// The value's kind flag.
    pub fn tag(&self) -> TypeTag {
        self.kind().flag()
    }

    /// Human-readable kind name.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Construct the representative natural (unsigned 64-bit) value.
    pub fn natural(n: u64) -> Value {
        Value::Uint64(n)
    }

    /// Construct the representative integer (signed 64-bit) value.
    pub fn integer(n: i64) -> Value {
        Value::Int64(n)
    }

    /// Construct the representative real (64-bit float) value.
    pub fn real(n: f64) -> Value {
        Value::Float64(n)
    }

    /// Construct an exact rational from a numerator/denominator pair.
    ///
    /// Panics if `denom` is zero, matching `BigRational::new`.
    pub fn rational(numer: i64, denom: i64) -> Value {
        Value::Rational(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
    }

    /// Construct the representative complex (two f64 components) value.
    pub fn imaginary(re: f64, im: f64) -> Value {
        Value::Complex128(Complex::new(re, im))
    }

    /// Construct a text value.
    pub fn text(s: impl Into<String>) -> Value {
        Value::Text(s.into())
    }

    /// Construct an error value carrying a message.
    pub fn error(message: impl Into<String>) -> Value {
        Value::Error(message.into())
    }

    /// Whether this is the nil sentinel.
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

/// Signed nanoseconds between a timestamp and the Unix epoch.
pub(crate) fn unix_nanos(t: SystemTime) -> i128 {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_nanos() as i128,
        Err(e) => -(e.duration().as_nanos() as i128),
    }
}

/// Canonical human-readable rendering; this is what the "→ text" row of the
/// conversion matrix produces.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Byte(b) => write!(f, "{b}"),
            Value::Rune(c) => write!(f, "{c}"),
            Value::Int8(n) => write!(f, "{n}"),
            Value::Int16(n) => write!(f, "{n}"),
            Value::Int32(n) => write!(f, "{n}"),
            Value::Int64(n) => write!(f, "{n}"),
            Value::Uint8(n) => write!(f, "{n}"),
            Value::Uint16(n) => write!(f, "{n}"),
            Value::Uint32(n) => write!(f, "{n}"),
            Value::Uint64(n) => write!(f, "{n}"),
            Value::BigInt(n) => write!(f, "{n}"),
            // Exact fraction form for both arbitrary-precision kinds.
            Value::Rational(r) | Value::BigFloat(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            Value::Float32(n) => write!(f, "{n}"),
            Value::Float64(n) => write!(f, "{n}"),
            Value::Complex64(c) => write_complex(f, c.re as f64, c.im as f64),
            Value::Complex128(c) => write_complex(f, c.re, c.im),
            Value::Bytes(b) => f.write_str(&String::from_utf8_lossy(b)),
            Value::Text(s) => f.write_str(s),
            Value::Timestamp(t) => write!(f, "{}", unix_nanos(*t)),
            Value::Duration(d) => write!(f, "{}", d.as_nanos()),
            Value::Error(msg) => f.write_str(msg),
            Value::Flag(tag) => write!(f, "{tag}"),
        }
    }
}

fn write_complex(f: &mut fmt::Formatter<'_>, re: f64, im: f64) -> fmt::Result {
    if im.is_sign_negative() {
        write!(f, "({re}{im}i)")
    } else {
        write!(f, "({re}+{im}i)")
    }
}

/// Embedding-oriented serialization: scalars map to their native serde
/// forms, arbitrary-precision and temporal payloads to canonical strings or
/// integers, and error values to a `{"$error": …}` map so they cannot be
/// mistaken for text.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Nil => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Byte(b) => serializer.serialize_u8(*b),
            Value::Rune(c) => serializer.serialize_char(*c),
            Value::Int8(n) => serializer.serialize_i8(*n),
            Value::Int16(n) => serializer.serialize_i16(*n),
            Value::Int32(n) => serializer.serialize_i32(*n),
            Value::Int64(n) => serializer.serialize_i64(*n),
            Value::Uint8(n) => serializer.serialize_u8(*n),
            Value::Uint16(n) => serializer.serialize_u16(*n),
            Value::Uint32(n) => serializer.serialize_u32(*n),
            Value::Uint64(n) => serializer.serialize_u64(*n),
            Value::BigInt(n) => serializer.serialize_str(&n.to_string()),
            Value::Rational(_) | Value::BigFloat(_) => {
                serializer.serialize_str(&self.to_string())
            }
            Value::Float32(n) => serializer.serialize_f32(*n),
            Value::Float64(n) => serializer.serialize_f64(*n),
            Value::Complex64(c) => [c.re as f64, c.im as f64].serialize(serializer),
            Value::Complex128(c) => [c.re, c.im].serialize(serializer),
            Value::Bytes(b) => serializer.serialize_bytes(b),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Timestamp(t) => serializer.serialize_i128(unix_nanos(*t)),
            Value::Duration(d) => serializer.serialize_u128(d.as_nanos()),
            Value::Error(msg) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$error", msg)?;
                map.end()
            }
            Value::Flag(tag) => serializer.serialize_str(&tag.to_string()),
        }
    }
}
