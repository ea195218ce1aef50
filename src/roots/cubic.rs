//! Dominant root of the depressed cubic `x^3 + b x + c`.
//!
//! With `Q = -b/3` and `R = c/2` the cubic has three real roots when
//! `R^2 < Q^3`, which are found with the trigonometric formula, otherwise the
//! real root follows from Cardano's formula. Complex coefficients always use
//! Cardano and pick the largest of the three roots.
//!
//! Cubing `Q` and squaring `R` overflows long before the root does, so for
//! large coefficients an equivalent formulation working with `Q/R` or `R/Q`
//! is used instead.

use std::f64::consts::{FRAC_PI_2, TAU};

use num::{complex::Complex64, Zero};

use crate::{
    scalar::{CUBIC_Q_LIMIT, CUBIC_R_LIMIT},
    util::{
        complex::{c_div, c_is_real, c_max_norm, c_max_norm3},
        float::f64_sign,
    },
};

const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

/// Dominant root of `x^3 + b x + c` with real coefficients.
///
/// When all three roots are real this is the one of largest magnitude,
/// otherwise it is the only real root.
#[must_use]
pub fn depressed_cubic_dominant_root_real(b: f64, c: f64) -> f64 {
    let q = -b / 3.0;
    let r = 0.5 * c;
    if q.abs() > CUBIC_Q_LIMIT || r.abs() > CUBIC_R_LIMIT {
        log::trace!(
            "cubic coefficients too large, switching to overflow-safe formula {{q: {q}, r: {r}}}"
        );
        return depressed_cubic_dominant_root_real_overflow_safe(b, c);
    }
    real_cardano(q, r)
}

/// Same as [`depressed_cubic_dominant_root_real`], but never forms `Q^3` or
/// `R^2`, so it can be used with coefficients close to `f64::MAX`.
#[must_use]
pub fn depressed_cubic_dominant_root_real_overflow_safe(b: f64, c: f64) -> f64 {
    let q = -b / 3.0;
    let r = 0.5 * c;
    if r == 0.0 {
        return if b <= 0.0 { (-b).sqrt() } else { 0.0 };
    }
    real_cardano_overflow_safe(q, r)
}

/// Dominant root of `x^3 + b x + c`, i.e. the root of largest modulus.
///
/// Real inputs are delegated to [`depressed_cubic_dominant_root_real`].
///
/// # Examples
/// ```
/// # use quartic_roots::roots::depressed_cubic_dominant_root;
/// use num::complex::Complex64;
///
/// // (x - 3i)(x + i)(x + 2i) = x^3 + 7x + 6i
/// let root = depressed_cubic_dominant_root(Complex64::new(7.0, 0.0), Complex64::new(0.0, 6.0));
/// assert!((root - Complex64::new(0.0, 3.0)).norm() < 1E-12);
/// ```
#[must_use]
pub fn depressed_cubic_dominant_root(b: Complex64, c: Complex64) -> Complex64 {
    let q = -b / 3.0;
    let r = c * 0.5;
    if q.norm() > CUBIC_Q_LIMIT || r.norm() > CUBIC_R_LIMIT {
        log::trace!(
            "cubic coefficients too large, switching to overflow-safe formula {{q: {q}, r: {r}}}"
        );
        return depressed_cubic_dominant_root_overflow_safe(b, c);
    }
    if c_is_real(q) && c_is_real(r) {
        return Complex64::new(real_cardano(q.re, r.re), 0.0);
    }
    let k = (r * r - q * q * q).sqrt();
    let a = larger_cube_root(r + k, r - k);
    largest_of_three(a, q)
}

/// Same as [`depressed_cubic_dominant_root`], but never forms `Q^3` or `R^2`.
#[must_use]
pub fn depressed_cubic_dominant_root_overflow_safe(b: Complex64, c: Complex64) -> Complex64 {
    let q = -b / 3.0;
    let r = c * 0.5;
    if r.is_zero() {
        return (-b).sqrt();
    }
    if c_is_real(q) && c_is_real(r) {
        return Complex64::new(real_cardano_overflow_safe(q.re, r.re), 0.0);
    }
    let one = Complex64::new(1.0, 0.0);
    let a = if q.norm() < r.norm() {
        let qr = c_div(q, r);
        let sqrt_k = (one - q * qr * qr).sqrt();
        larger_cube_root(r * (one + sqrt_k), r * (one - sqrt_k))
    } else {
        let rq = c_div(r, q);
        let sqrt_k = ((c_div(rq * rq, q) - one) * q * q * q).sqrt();
        larger_cube_root(r + sqrt_k, r - sqrt_k)
    };
    largest_of_three(a, q)
}

fn real_cardano(q: f64, r: f64) -> f64 {
    let q3 = q * q * q;
    let r2 = r * r;
    if r2 < q3 {
        trigonometric(q.sqrt(), r / q3.sqrt())
    } else {
        let a = -f64_sign(r) * (r.abs() + (r2 - q3).sqrt()).cbrt();
        a + if a == 0.0 { 0.0 } else { q / a }
    }
}

fn real_cardano_overflow_safe(q: f64, r: f64) -> f64 {
    debug_assert!(r != 0.0);
    let q_is_smaller = q.abs() < r.abs();
    // K = 1 - Q^3/R^2, scaled so that nothing overflows
    let k = if q_is_smaller {
        let qr = q / r;
        1.0 - q * qr * qr
    } else {
        let rq = r / q;
        f64_sign(q) * (rq * rq / q - 1.0)
    };
    if k < 0.0 {
        let sqrt_q = q.sqrt();
        return trigonometric(sqrt_q, (r / q.abs()) / sqrt_q);
    }
    let a = if q_is_smaller {
        -f64_sign(r) * (r.abs() * (1.0 + k.sqrt())).cbrt()
    } else {
        -f64_sign(r) * (r.abs() + q.abs().sqrt() * q.abs() * k.sqrt()).cbrt()
    };
    a + if a == 0.0 { 0.0 } else { q / a }
}

/// Largest of the three real roots `-2 sqrt(Q) cos((θ + 2πk)/3)`.
fn trigonometric(sqrt_q: f64, cos_theta: f64) -> f64 {
    let theta = cos_theta.acos();
    if theta < FRAC_PI_2 {
        -2.0 * sqrt_q * (theta / 3.0).cos()
    } else {
        -2.0 * sqrt_q * ((theta + TAU) / 3.0).cos()
    }
}

/// Negated principal cube roots of both radicands, keeping the larger one.
fn larger_cube_root(plus: Complex64, minus: Complex64) -> Complex64 {
    c_max_norm(-plus.powf(1.0 / 3.0), -minus.powf(1.0 / 3.0))
}

/// Given Cardano's `A`, the largest of `A + B` and `-(A + B)/2 ± i √3/2 (A - B)`
/// where `B = Q/A`.
fn largest_of_three(a: Complex64, q: Complex64) -> Complex64 {
    let b = if a.is_zero() { Complex64::zero() } else { c_div(q, a) };
    let sum = a + b;
    let rotated = Complex64::i() * (a - b) * HALF_SQRT_3;
    c_max_norm3(sum, -sum * 0.5 + rotated, -sum * 0.5 - rotated)
}
