//! Canonical primitive kind definitions.
//!
//! `Kind` is the closed enumeration of every primitive value identity in the
//! language. The discriminant serves double duty: it is the **declaration
//! index** that fixes the precedence order (a lower kind is converted into a
//! higher one when two kinds meet), and it is the **bit position** of the
//! kind's flag inside a [`TypeTag`](crate::TypeTag).

use serde::{Deserialize, Serialize};

use crate::tag::TypeTag;

/// Primitive value kinds, in declaration (precedence) order.
///
/// Ground kinds come first, arranged so that automatic widening always moves
/// toward the more general representation: fixed-width signed integers below
/// unsigned ones, integers below rationals, rationals below floats, floats
/// below complex kinds, and `Error` above every other ground kind. The
/// higher-order kinds (collections, callables) follow; they occupy tag bits
/// for the class algebra but carry no payload in this core. `Flag` is the
/// reserved marker for values that are themselves type tags.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum Kind {
    /// The absent value; also the no-value sentinel of guarded operations.
    Nil = 0,
    Bool = 1,
    /// Octet with Natural arithmetic behavior and a raw byte encoding.
    Byte = 2,
    /// Unicode scalar value.
    Rune = 3,
    Int8 = 4,
    Int16 = 5,
    Int32 = 6,
    Int64 = 7,
    Uint8 = 8,
    Uint16 = 9,
    Uint32 = 10,
    Uint64 = 11,
    /// Arbitrary-precision signed integer.
    BigInt = 12,
    /// Exact arbitrary-precision fraction.
    Rational = 13,
    Float32 = 14,
    Float64 = 15,
    /// Arbitrary-precision floating point.
    BigFloat = 16,
    /// Complex number with f32 components.
    Complex64 = 17,
    /// Complex number with f64 components.
    Complex128 = 18,
    /// Raw byte string.
    Bytes = 19,
    /// UTF-8 text.
    Text = 20,
    /// Wall-clock instant.
    Timestamp = 21,
    /// Elapsed time, counted in nanoseconds.
    Duration = 22,
    /// First-class diagnostic value carrying a message.
    Error = 23,
    Pair = 24,
    Tuple = 25,
    Record = 26,
    Vector = 27,
    List = 28,
    Set = 29,
    Function = 30,
    Argument = 31,
    Parameter = 32,
    Definition = 33,
    /// Marks a value as being a type tag itself.
    Flag = 34,
}

/// Number of declared kinds; tag bits at or above this index are unused.
pub const KIND_COUNT: u8 = 35;

impl Kind {
    /// Declaration index, which is also the kind's precedence rank and the
    /// bit position of its flag.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Convert from a declaration index.
    pub fn from_index(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Nil),
            1 => Some(Self::Bool),
            2 => Some(Self::Byte),
            3 => Some(Self::Rune),
            4 => Some(Self::Int8),
            5 => Some(Self::Int16),
            6 => Some(Self::Int32),
            7 => Some(Self::Int64),
            8 => Some(Self::Uint8),
            9 => Some(Self::Uint16),
            10 => Some(Self::Uint32),
            11 => Some(Self::Uint64),
            12 => Some(Self::BigInt),
            13 => Some(Self::Rational),
            14 => Some(Self::Float32),
            15 => Some(Self::Float64),
            16 => Some(Self::BigFloat),
            17 => Some(Self::Complex64),
            18 => Some(Self::Complex128),
            19 => Some(Self::Bytes),
            20 => Some(Self::Text),
            21 => Some(Self::Timestamp),
            22 => Some(Self::Duration),
            23 => Some(Self::Error),
            24 => Some(Self::Pair),
            25 => Some(Self::Tuple),
            26 => Some(Self::Record),
            27 => Some(Self::Vector),
            28 => Some(Self::List),
            29 => Some(Self::Set),
            30 => Some(Self::Function),
            31 => Some(Self::Argument),
            32 => Some(Self::Parameter),
            33 => Some(Self::Definition),
            34 => Some(Self::Flag),
            _ => None,
        }
    }

    /// The kind's single-bit flag.
    pub const fn flag(self) -> TypeTag {
        TypeTag::bit(self.index())
    }

    /// Human-readable kind name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::Rune => "rune",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::BigInt => "bigint",
            Self::Rational => "rational",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::BigFloat => "bigfloat",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::Bytes => "bytes",
            Self::Text => "text",
            Self::Timestamp => "timestamp",
            Self::Duration => "duration",
            Self::Error => "error",
            Self::Pair => "pair",
            Self::Tuple => "tuple",
            Self::Record => "record",
            Self::Vector => "vector",
            Self::List => "list",
            Self::Set => "set",
            Self::Function => "function",
            Self::Argument => "argument",
            Self::Parameter => "parameter",
            Self::Definition => "definition",
            Self::Flag => "flag",
        }
    }

    /// Look up a kind by its human-readable name.
    pub fn from_name(name: &str) -> Option<Self> {
        (0..KIND_COUNT)
            .filter_map(Self::from_index)
            .find(|k| k.name() == name)
    }

    /// Whether this is a ground kind (one that carries a value payload and
    /// participates in the conversion matrix).
    ///
    /// Higher-order kinds and `Flag` are tag-only in this core.
    pub fn is_ground(self) -> bool {
        self.index() <= Self::Error.index()
    }

    /// Iterate all declared kinds in declaration order.
    pub fn all() -> impl Iterator<Item = Kind> {
        (0..KIND_COUNT).filter_map(Self::from_index)
    }

    /// Iterate the ground kinds in declaration order.
    pub fn ground() -> impl Iterator<Item = Kind> {
        Self::all().filter(|k| k.is_ground())
    }
}
