//! Numeric helpers shared by the value model and the VM.
//!
//! Integer division and modulo round toward negative infinity, never
//! toward zero. Integer arithmetic wraps on overflow.

use num_integer::Integer;

use crate::error::ArithError;

/// Floor division of two integers: `floor(a / b)` over the reals.
///
/// `i64::MIN // -1` wraps to `i64::MIN`.
///
/// # Examples
///
/// ```
/// use core_types::number::ifloor_div;
///
/// assert_eq!(ifloor_div(10, -4), Ok(-3));
/// assert_eq!(ifloor_div(-10, 4), Ok(-3));
/// assert_eq!(ifloor_div(10, 4), Ok(2));
/// ```
pub fn ifloor_div(a: i64, b: i64) -> Result<i64, ArithError> {
    match b {
        0 => Err(ArithError::DivideByZero),
        -1 => Ok(a.wrapping_neg()),
        _ => Ok(a.div_floor(&b)),
    }
}

/// Floor division of two floats: `floor(a / b)`.
///
/// ```
/// use core_types::number::ffloor_div;
///
/// assert_eq!(ffloor_div(10.0, -4.0), -3.0);
/// ```
pub fn ffloor_div(a: f64, b: f64) -> f64 {
    (a / b).floor()
}

/// Integer modulo whose result takes the sign of the divisor.
pub fn imod(a: i64, b: i64) -> Result<i64, ArithError> {
    match b {
        0 => Err(ArithError::ModuloByZero),
        -1 => Ok(0),
        _ => Ok(a.mod_floor(&b)),
    }
}

/// Float modulo whose result takes the sign of the divisor.
pub fn fmod(a: f64, b: f64) -> f64 {
    let m = a % b;
    let adjust = if m > 0.0 { b < 0.0 } else { m < 0.0 && b != m };
    if adjust {
        m + b
    } else {
        m
    }
}

/// Logical left shift; a negative count shifts right.
///
/// Shifting by 64 or more positions in either direction yields zero.
pub fn shift_left(a: i64, n: i64) -> i64 {
    if n <= -64 || n >= 64 {
        0
    } else if n >= 0 {
        ((a as u64) << n) as i64
    } else {
        ((a as u64) >> -n) as i64
    }
}

/// Logical right shift; a negative count shifts left.
pub fn shift_right(a: i64, n: i64) -> i64 {
    shift_left(a, n.saturating_neg())
}

/// Converts a float with an exact integral value to an integer.
///
/// Returns `None` for fractional values, NaN, infinities and anything
/// outside the `i64` range.
pub fn float_to_integer(f: f64) -> Option<i64> {
    // 2^63 is exactly representable; i64::MAX is not.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if f.fract() == 0.0 && f >= -LIMIT && f < LIMIT {
        Some(f as i64)
    } else {
        None
    }
}

/// Shortest decimal rendering of a float that parses back to the same bits.
///
/// Integral floats keep a trailing `.0` so they stay distinguishable from
/// integers.
pub fn float_to_string(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f.is_infinite() {
        if f.is_sign_positive() {
            "inf".to_string()
        } else {
            "-inf".to_string()
        }
    } else {
        let mut buffer = ryu::Buffer::new();
        buffer.format_finite(f).to_string()
    }
}
