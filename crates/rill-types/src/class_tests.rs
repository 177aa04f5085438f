use crate::class::{
    CALLABLE, COLLECTION, IMAGINARY, INTEGER, NATURAL, NUMERAL, NUMERIC, RATIONAL, REAL, SIGNED,
    TEMPORAL, TEXTUAL,
};
use crate::{Family, Kind};

#[test]
fn integer_members() {
    for kind in [
        Kind::Byte,
        Kind::Uint8,
        Kind::Uint16,
        Kind::Uint32,
        Kind::Uint64,
        Kind::Int8,
        Kind::Int16,
        Kind::Int32,
        Kind::Int64,
        Kind::BigInt,
    ] {
        assert!(kind.flag().is_member(INTEGER), "{}", kind.name());
        // Integer kinds are not float kinds.
        assert!(!kind.flag().is_member(REAL), "{}", kind.name());
    }
    assert!(!Kind::Float32.flag().is_member(INTEGER));
    assert!(!Kind::Rational.flag().is_member(INTEGER));
}

#[test]
fn classes_partition_as_declared() {
    assert_eq!(NATURAL | SIGNED, INTEGER);
    assert_eq!(
        INTEGER | RATIONAL | REAL | IMAGINARY | TEMPORAL,
        NUMERIC
    );
    assert_eq!(INTEGER | RATIONAL | REAL | IMAGINARY, NUMERAL);
    // Temporal kinds are numeric but not numerals.
    assert!(TEMPORAL.is_member(NUMERIC));
    assert!(!Kind::Timestamp.flag().is_member(NUMERAL));
}

#[test]
fn overlap_is_allowed() {
    // A byte is simultaneously natural, integer, and textual.
    let byte = Kind::Byte.flag();
    assert!(byte.is_member(NATURAL));
    assert!(byte.is_member(INTEGER));
    assert!(byte.is_member(TEXTUAL));
}

#[test]
fn non_numeric_kinds() {
    for kind in [Kind::Nil, Kind::Bool, Kind::Text, Kind::Error, Kind::Flag] {
        assert!(!kind.flag().is_member(NUMERIC), "{}", kind.name());
    }
    assert!(Kind::List.flag().is_member(COLLECTION));
    assert!(Kind::Function.flag().is_member(CALLABLE));
}

#[test]
fn family_priority() {
    // Natural wins over Integer for the unsigned kinds.
    assert_eq!(Family::of(Kind::Byte), Some(Family::Natural));
    assert_eq!(Family::of(Kind::Uint64), Some(Family::Natural));
    assert_eq!(Family::of(Kind::Int64), Some(Family::Integer));
    assert_eq!(Family::of(Kind::BigInt), Some(Family::Integer));
    assert_eq!(Family::of(Kind::Float32), Some(Family::Real));
    assert_eq!(Family::of(Kind::BigFloat), Some(Family::Real));
    assert_eq!(Family::of(Kind::Rational), Some(Family::Rational));
    assert_eq!(Family::of(Kind::Complex64), Some(Family::Imaginary));
    assert_eq!(Family::of(Kind::Complex128), Some(Family::Imaginary));
}

#[test]
fn family_excludes_non_tower_kinds() {
    for kind in [
        Kind::Nil,
        Kind::Bool,
        Kind::Rune,
        Kind::Bytes,
        Kind::Text,
        Kind::Timestamp,
        Kind::Duration,
        Kind::Error,
        Kind::Vector,
        Kind::Flag,
    ] {
        assert_eq!(Family::of(kind), None, "{}", kind.name());
    }
}

#[test]
fn representatives() {
    assert_eq!(Family::Natural.representative(), Kind::Uint64);
    assert_eq!(Family::Integer.representative(), Kind::Int64);
    assert_eq!(Family::Real.representative(), Kind::Float64);
    assert_eq!(Family::Rational.representative(), Kind::Rational);
    assert_eq!(Family::Imaginary.representative(), Kind::Complex128);
}
