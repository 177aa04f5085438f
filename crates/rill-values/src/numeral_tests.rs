use num_bigint::BigInt;
use num_complex::Complex;
use num_rational::BigRational;

use crate::Value;

#[test]
fn numeral_membership() {
    assert!(Value::Byte(1).is_numeral());
    assert!(Value::integer(1).is_numeral());
    assert!(Value::rational(1, 2).is_numeral());
    assert!(Value::real(1.0).is_numeral());
    assert!(Value::imaginary(1.0, 0.0).is_numeral());
    assert!(!Value::Nil.is_numeral());
    assert!(!Value::Bool(true).is_numeral());
    assert!(!Value::Rune('x').is_numeral());
    assert!(!Value::text("1").is_numeral());
    assert!(!Value::Duration(std::time::Duration::ZERO).is_numeral());
}

#[test]
fn views_take_representative_kinds() {
    let v = Value::Byte(7);
    assert_eq!(v.as_natural(), Value::Uint64(7));
    assert_eq!(v.as_integer(), Value::Int64(7));
    assert_eq!(v.as_real(), Value::Float64(7.0));
    assert_eq!(v.as_rational(), Value::rational(7, 1));
    assert_eq!(v.as_imaginary(), Value::imaginary(7.0, 0.0));
}

#[test]
fn signed_views_wrap_through_two_complement() {
    let v = Value::integer(-3);
    assert_eq!(v.integer_magnitude(), -3);
    assert_eq!(v.natural_magnitude(), (-3i64) as u64);

    let big = Value::BigInt(BigInt::from(-3));
    assert_eq!(big.integer_magnitude(), -3);
    assert_eq!(big.natural_magnitude(), (-3i64) as u64);

    // Oversized big integers keep their low 64 bits.
    let huge = Value::BigInt((BigInt::from(1) << 64usize) + 5);
    assert_eq!(huge.natural_magnitude(), 5);
}

#[test]
fn fraction_views_truncate_toward_zero() {
    assert_eq!(Value::rational(7, 2).integer_magnitude(), 3);
    assert_eq!(Value::rational(-7, 2).integer_magnitude(), -3);
    assert_eq!(Value::rational(1, 2).real_magnitude(), 0.5);
}

#[test]
fn float_views_are_exact_fractions() {
    let r = Value::real(0.25).rational_magnitude();
    assert_eq!(r, BigRational::new(BigInt::from(1), BigInt::from(4)));
    // Non-finite floats have no fraction and view as zero.
    assert_eq!(
        Value::real(f64::NAN).rational_magnitude(),
        BigRational::from_integer(BigInt::from(0))
    );
}

#[test]
fn complex_views() {
    let c = Value::Complex64(Complex::new(2.5f32, -1.0f32));
    assert_eq!(c.imaginary_magnitude(), Complex::new(2.5f64, -1.0f64));
    // The real component is what every scalar view sees.
    assert_eq!(c.integer_magnitude(), 2);
    assert_eq!(c.real_magnitude(), 2.5);
    // Non-complex numerals view with a zero imaginary part.
    assert_eq!(
        Value::integer(2).imaginary_magnitude(),
        Complex::new(2.0, 0.0)
    );
}

#[test]
fn views_repeat_the_conversion() {
    // No caching: two calls build two equal, independent values.
    let v = Value::rational(42, 23);
    assert_eq!(v.as_real(), v.as_real());
    assert_eq!(v.real_magnitude(), 42.0 / 23.0);
}

#[test]
#[should_panic(expected = "numeral view on non-numeral kind text")]
fn view_on_non_numeral_panics() {
    let _ = Value::text("42").as_natural();
}
