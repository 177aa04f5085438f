//! Bit-flag type identity.
//!
//! A [`TypeTag`] is a word of kind flags. A single-bit tag identifies one
//! primitive kind; a multi-bit tag is a type class (a union of kinds). The
//! whole algebra is plain bit arithmetic, so membership and decomposition
//! are O(1)/O(bits) with no allocation beyond the decomposed list.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use serde::{Deserialize, Serialize};

use crate::kind::Kind;

/// A bitmask over primitive kinds.
///
/// Tags occupy the low 63 bits of a `u64`; bit 63 is never set by any
/// declared kind, which keeps [`TypeTag::ALL`] representable as a positive
/// signed word for embedders that need one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct TypeTag(pub u64);

impl TypeTag {
    /// The empty tag (matches no kind).
    pub const NONE: TypeTag = TypeTag(0);

    /// All usable tag bits set.
    pub const ALL: TypeTag = TypeTag(u64::MAX >> 1);

    /// All usable bits except the `Flag` marker.
    ///
    /// AND-ing with `MASK` strips the "this value is itself a type tag"
    /// marker, leaving a plain value tag.
    pub const MASK: TypeTag = TypeTag(Self::ALL.0 ^ (1 << Kind::Flag as u8));

    /// Tag with the single given bit position set.
    pub const fn bit(position: u8) -> TypeTag {
        TypeTag(1 << position)
    }

    /// Whether this tag lies entirely inside `class`.
    ///
    /// True iff every bit of `self` is also set in `class`; the empty tag is
    /// a member of every class.
    pub fn is_member(self, class: TypeTag) -> bool {
        self.0 & !class.0 == 0
    }

    /// Number of set bits.
    pub fn pop_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Position of the lowest set bit, or `None` for the empty tag.
    pub fn least_significant(self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        Some(self.0.trailing_zeros() as u8)
    }

    /// Position of the highest set bit, or `None` for the empty tag.
    pub fn most_significant(self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        Some(63 - self.0.leading_zeros() as u8)
    }

    /// Whether exactly one bit is set.
    pub fn is_single(self) -> bool {
        self.pop_count() == 1
    }

    /// Split a tag into its constituent single-bit tags, ascending.
    ///
    /// A single-bit tag decomposes to itself. The scan covers bit positions
    /// 0..=62; `decompose(t).len() == t.pop_count()` for every tag.
    pub fn decompose(self) -> Vec<TypeTag> {
        if self.is_single() {
            return vec![self];
        }
        (0u8..63)
            .map(TypeTag::bit)
            .filter(|bit| self.0 & bit.0 != 0)
            .collect()
    }

    /// The kind this tag identifies, if it is a single declared bit.
    pub fn kind(self) -> Option<Kind> {
        if !self.is_single() {
            return None;
        }
        Kind::from_index(self.0.trailing_zeros() as u8)
    }
}

impl From<Kind> for TypeTag {
    fn from(kind: Kind) -> Self {
        kind.flag()
    }
}

impl BitOr for TypeTag {
    type Output = TypeTag;
    fn bitor(self, rhs: TypeTag) -> TypeTag {
        TypeTag(self.0 | rhs.0)
    }
}

impl BitAnd for TypeTag {
    type Output = TypeTag;
    fn bitand(self, rhs: TypeTag) -> TypeTag {
        TypeTag(self.0 & rhs.0)
    }
}

impl BitXor for TypeTag {
    type Output = TypeTag;
    fn bitxor(self, rhs: TypeTag) -> TypeTag {
        TypeTag(self.0 ^ rhs.0)
    }
}

impl Not for TypeTag {
    type Output = TypeTag;
    fn not(self) -> TypeTag {
        TypeTag(!self.0)
    }
}

/// Single bit → kind name; compound tag → space-joined names of the
/// decomposition in ascending bit order. Undeclared bits render as `?`.
impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("none");
        }
        for (i, bit) in self.decompose().into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match bit.kind() {
                Some(kind) => f.write_str(kind.name())?,
                None => f.write_str("?")?,
            }
        }
        Ok(())
    }
}
