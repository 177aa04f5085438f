use crate::{Kind, TypeTag};

#[test]
fn membership() {
    let class = Kind::Int8.flag() | Kind::Int16.flag();
    assert!(Kind::Int8.flag().is_member(class));
    assert!(Kind::Int16.flag().is_member(class));
    assert!(!Kind::Int32.flag().is_member(class));
    // A class is a member of itself, and the empty tag of everything.
    assert!(class.is_member(class));
    assert!(TypeTag::NONE.is_member(class));
    // A compound tag is only a member if every bit is covered.
    assert!(!(class | Kind::Bool.flag()).is_member(class));
}

#[test]
fn bit_queries() {
    let tag = Kind::Bool.flag() | Kind::Text.flag();
    assert_eq!(tag.pop_count(), 2);
    assert_eq!(tag.least_significant(), Some(Kind::Bool.index()));
    assert_eq!(tag.most_significant(), Some(Kind::Text.index()));
    assert_eq!(TypeTag::NONE.least_significant(), None);
    assert_eq!(TypeTag::NONE.most_significant(), None);
}

#[test]
fn decompose_single() {
    let tag = Kind::Rational.flag();
    assert_eq!(tag.decompose(), vec![tag]);
}

#[test]
fn decompose_matches_pop_count() {
    let samples = [
        TypeTag::NONE,
        Kind::Nil.flag(),
        Kind::Bool.flag() | Kind::Error.flag(),
        crate::class::NUMERIC,
        TypeTag::ALL,
        TypeTag::MASK,
        TypeTag(0b1011_0110),
    ];
    for tag in samples {
        let parts = tag.decompose();
        assert_eq!(parts.len(), tag.pop_count() as usize);
        // Ascending single bits that reassemble the original tag.
        let mut rebuilt = TypeTag::NONE;
        let mut last = -1i32;
        for part in parts {
            assert!(part.is_single());
            let pos = part.least_significant().unwrap() as i32;
            assert!(pos > last);
            last = pos;
            rebuilt = rebuilt | part;
        }
        assert_eq!(rebuilt, tag);
    }
}

#[test]
fn sentinels() {
    assert_eq!(TypeTag::ALL.pop_count(), 63);
    assert_eq!(TypeTag::MASK, TypeTag::ALL ^ Kind::Flag.flag());
    assert!(!Kind::Flag.flag().is_member(TypeTag::MASK));
    assert!(Kind::Error.flag().is_member(TypeTag::MASK));
    // Masking strips the flag marker from a mixed tag.
    let marked = Kind::Int64.flag() | Kind::Flag.flag();
    assert_eq!(marked & TypeTag::MASK, Kind::Int64.flag());
}

#[test]
fn kind_lookup() {
    assert_eq!(Kind::Duration.flag().kind(), Some(Kind::Duration));
    assert_eq!((Kind::Nil.flag() | Kind::Bool.flag()).kind(), None);
    assert_eq!(TypeTag::NONE.kind(), None);
    // A single set bit above the declared range has no kind.
    assert_eq!(TypeTag::bit(60).kind(), None);
}

#[test]
fn display_single() {
    assert_eq!(Kind::Int32.flag().to_string(), "int32");
    assert_eq!(Kind::Nil.flag().to_string(), "nil");
}

#[test]
fn display_compound_joins_decomposition() {
    let tag = Kind::Bool.flag() | Kind::Int8.flag() | Kind::Text.flag();
    assert_eq!(tag.to_string(), "bool int8 text");

    // The compound rendering is exactly the space-join of the decomposed
    // kinds' names, in ascending bit order.
    for tag in [crate::class::NATURAL, crate::class::TEMPORAL] {
        let joined: Vec<_> = tag
            .decompose()
            .into_iter()
            .map(|bit| bit.kind().unwrap().name())
            .collect();
        assert_eq!(tag.to_string(), joined.join(" "));
    }
}

#[test]
fn display_empty_and_undeclared() {
    assert_eq!(TypeTag::NONE.to_string(), "none");
    assert_eq!(TypeTag::bit(60).to_string(), "?");
}
