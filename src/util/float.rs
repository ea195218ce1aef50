//! floating point utilities

/// Larger of two floats. If they are unordered, `b` wins.
pub(crate) fn f64_max2(a: f64, b: f64) -> f64 {
    if a >= b {
        a
    } else {
        b
    }
}

pub(crate) fn f64_max3(a: f64, b: f64, c: f64) -> f64 {
    f64_max2(f64_max2(a, b), c)
}

/// `1.0` with the sign of `x`, treating `-0.0` as negative.
pub(crate) fn f64_sign(x: f64) -> f64 {
    1.0_f64.copysign(x)
}

/// Bump zeros and subnormals to the smallest normal number with the same sign.
pub(crate) fn f64_make_nonzero(x: f64) -> f64 {
    if x.abs() < f64::MIN_POSITIVE {
        f64::MIN_POSITIVE.copysign(x)
    } else {
        x
    }
}
