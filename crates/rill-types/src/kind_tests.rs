use crate::{KIND_COUNT, Kind, TypeTag};

#[test]
fn index_roundtrip() {
    for kind in Kind::all() {
        assert_eq!(Kind::from_index(kind.index()), Some(kind));
    }
}

#[test]
fn from_index_invalid() {
    assert_eq!(Kind::from_index(KIND_COUNT), None);
    assert_eq!(Kind::from_index(255), None);
}

#[test]
fn name_roundtrip() {
    for kind in Kind::all() {
        assert_eq!(Kind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(Kind::from_name("no-such-kind"), None);
}

#[test]
fn names_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for kind in Kind::all() {
        assert!(seen.insert(kind.name()), "duplicate name {}", kind.name());
    }
}

#[test]
fn flags_are_distinct_powers_of_two() {
    let mut combined = TypeTag::NONE;
    for kind in Kind::all() {
        let flag = kind.flag();
        assert_eq!(flag.pop_count(), 1);
        assert_eq!(combined & flag, TypeTag::NONE);
        combined = combined | flag;
    }
}

#[test]
fn declaration_order_pins() {
    // Widening direction: nil lowest, error highest among ground kinds.
    assert_eq!(Kind::Nil.index(), 0);
    for kind in Kind::ground() {
        assert!(kind.index() <= Kind::Error.index());
    }
    // Floats above every integer kind, so int ⊕ float unifies as float.
    assert!(Kind::Float64.index() > Kind::Int64.index());
    assert!(Kind::Float64.index() > Kind::Uint64.index());
    // Unsigned above signed, so int ⊕ uint unifies as Natural.
    assert!(Kind::Uint64.index() > Kind::Int64.index());
    // Tower steps: rational below the floats, complex above them.
    assert!(Kind::Rational.index() < Kind::Float32.index());
    assert!(Kind::Complex128.index() > Kind::BigFloat.index());
}

#[test]
fn ground_kinds() {
    assert!(Kind::Nil.is_ground());
    assert!(Kind::Error.is_ground());
    assert!(!Kind::Pair.is_ground());
    assert!(!Kind::Flag.is_ground());
    assert_eq!(Kind::ground().count(), 24);
    assert_eq!(Kind::all().count(), KIND_COUNT as usize);
}
