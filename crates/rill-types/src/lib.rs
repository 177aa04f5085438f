//! Type identity for the Rill value core.
//!
//! Three layers, leaves first:
//! - [`Kind`]: the closed, declaration-ordered enumeration of primitive
//!   kinds; the declaration index doubles as precedence rank and tag bit.
//! - [`TypeTag`]: the bit-flag algebra over kinds (membership, population
//!   count, decomposition, stringification).
//! - [`class`]: named kind unions (Natural, Integer, Numeric, …) and the
//!   disjoint [`Family`] classification the arithmetic dispatcher uses.
//!
//! Everything here is a compile-time constant or a pure function over one;
//! there is no runtime registration and no mutable state.

pub mod class;
mod kind;
mod tag;

#[cfg(test)]
mod class_tests;
#[cfg(test)]
mod kind_tests;
#[cfg(test)]
mod tag_tests;

pub use class::Family;
pub use kind::{KIND_COUNT, Kind};
pub use tag::TypeTag;
