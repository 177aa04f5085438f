//! Named type classes and the arithmetic family classification.
//!
//! A type class is a [`TypeTag`] with the flags of every member kind set.
//! Classes overlap freely (a byte is both `NATURAL` and `INTEGER`); the
//! arithmetic dispatcher resolves the overlap with [`Family`], which assigns
//! every kind to at most one family by a fixed priority.

use crate::kind::Kind;
use crate::tag::TypeTag;

const fn union(kinds: &[Kind]) -> TypeTag {
    let mut bits = 0u64;
    let mut i = 0;
    while i < kinds.len() {
        bits |= kinds[i].flag().0;
        i += 1;
    }
    TypeTag(bits)
}

/// Unsigned fixed-width kinds, including `byte`.
pub const NATURAL: TypeTag = union(&[
    Kind::Byte,
    Kind::Uint8,
    Kind::Uint16,
    Kind::Uint32,
    Kind::Uint64,
]);

/// Signed integer kinds, including the arbitrary-precision integer.
pub const SIGNED: TypeTag = union(&[
    Kind::Int8,
    Kind::Int16,
    Kind::Int32,
    Kind::Int64,
    Kind::BigInt,
]);

/// All integer kinds, signed and unsigned.
pub const INTEGER: TypeTag = TypeTag(NATURAL.0 | SIGNED.0);

/// Floating-point kinds.
pub const REAL: TypeTag = union(&[Kind::Float32, Kind::Float64, Kind::BigFloat]);

/// The exact fraction kind.
pub const RATIONAL: TypeTag = union(&[Kind::Rational]);

/// Complex kinds.
pub const IMAGINARY: TypeTag = union(&[Kind::Complex64, Kind::Complex128]);

/// Time-valued kinds.
pub const TEMPORAL: TypeTag = union(&[Kind::Timestamp, Kind::Duration]);

/// Every kind with numeric behavior under conversion.
pub const NUMERIC: TypeTag =
    TypeTag(INTEGER.0 | RATIONAL.0 | REAL.0 | IMAGINARY.0 | TEMPORAL.0);

/// Kinds that expose the five numeral views.
///
/// Temporal kinds convert to and from numbers but do not carry the facade.
pub const NUMERAL: TypeTag = TypeTag(INTEGER.0 | RATIONAL.0 | REAL.0 | IMAGINARY.0);

/// Character and string kinds.
pub const TEXTUAL: TypeTag = union(&[Kind::Byte, Kind::Rune, Kind::Bytes, Kind::Text]);

/// Higher-order container kinds.
pub const COLLECTION: TypeTag = union(&[
    Kind::Pair,
    Kind::Tuple,
    Kind::Record,
    Kind::Vector,
    Kind::List,
    Kind::Set,
]);

/// Kinds that can be applied to arguments.
pub const CALLABLE: TypeTag = union(&[Kind::Function, Kind::Definition]);

/// The five arithmetic families of the numeric tower.
///
/// Dispatch classification is disjoint even though the class lattice
/// overlaps: membership is tested in the order the variants are declared,
/// so `byte`/`uint*` classify as `Natural` before the wider `INTEGER` class
/// can claim them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Family {
    /// Unsigned magnitudes.
    Natural,
    /// Signed magnitudes.
    Integer,
    /// Floating-point approximations.
    Real,
    /// Exact arbitrary-precision fractions.
    Rational,
    /// Complex pairs.
    Imaginary,
}

impl Family {
    /// Classify a kind into its arithmetic family.
    ///
    /// Returns `None` for kinds outside the numeric tower (nil, bool,
    /// textual, temporal, error, higher-order kinds).
    pub fn of(kind: Kind) -> Option<Family> {
        let flag = kind.flag();
        if flag.is_member(NATURAL) {
            Some(Family::Natural)
        } else if flag.is_member(SIGNED) {
            Some(Family::Integer)
        } else if flag.is_member(REAL) {
            Some(Family::Real)
        } else if flag.is_member(RATIONAL) {
            Some(Family::Rational)
        } else if flag.is_member(IMAGINARY) {
            Some(Family::Imaginary)
        } else {
            None
        }
    }

    /// Lowercase family name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Family::Natural => "natural",
            Family::Integer => "integer",
            Family::Real => "real",
            Family::Rational => "rational",
            Family::Imaginary => "imaginary",
        }
    }

    /// The representative kind arithmetic results take in this family.
    pub fn representative(self) -> Kind {
        match self {
            Family::Natural => Kind::Uint64,
            Family::Integer => Kind::Int64,
            Family::Real => Kind::Float64,
            Family::Rational => Kind::Rational,
            Family::Imaginary => Kind::Complex128,
        }
    }
}
