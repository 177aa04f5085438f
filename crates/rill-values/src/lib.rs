//! Dynamic values for the Rill runtime core.
//!
//! Three layers on top of `rill-types`:
//! - [`Value`]: an immutable tagged payload per ground kind, with the
//!   numeral facade (natural/integer/real/rational/imaginary views).
//! - [`Coercer`]: the exhaustive conversion matrix, the precedence
//!   operation that unifies mixed-kind pairs, and the arithmetic
//!   dispatcher over the five numeric families.
//! - [`Clock`]: the injected wall-clock capability for the two impure
//!   timestamp conversion cells.
//!
//! Everything except those two cells is a pure function over immutable
//! data, so a `Coercer` can be shared across threads freely.

mod arith;
mod clock;
mod convert;
mod numeral;
mod value;

#[cfg(test)]
mod numeral_tests;

pub use arith::{ArithError, ArithOp};
pub use clock::{Clock, FixedClock, SystemClock};
pub use convert::Coercer;
pub use value::Value;

// The type vocabulary travels with the values.
pub use rill_types::{Family, Kind, TypeTag, class};
