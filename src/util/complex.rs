//! Helpers for comparing and printing complex numbers.

use num::complex::Complex64;

/// The larger of two numbers by modulus. Ties go to `b`.
pub(crate) fn c_max_norm(a: Complex64, b: Complex64) -> Complex64 {
    if a.norm() > b.norm() {
        a
    } else {
        b
    }
}

/// The largest of three numbers by modulus. Ties go to the earliest.
pub(crate) fn c_max_norm3(a: Complex64, b: Complex64, c: Complex64) -> Complex64 {
    let mut best = a;
    if best.norm() < b.norm() {
        best = b;
    }
    if best.norm() < c.norm() {
        best = c;
    }
    best
}

/// `num / den` without forming `|den|^2`, so that the quotient of two numbers
/// beyond `1e154` or below `1e-154` in modulus stays finite (Smith's algorithm).
pub(crate) fn c_div(num: Complex64, den: Complex64) -> Complex64 {
    if den.re.abs() >= den.im.abs() {
        let ratio = den.im / den.re;
        let scale = den.re + den.im * ratio;
        Complex64::new(
            (num.re + num.im * ratio) / scale,
            (num.im - num.re * ratio) / scale,
        )
    } else {
        let ratio = den.re / den.im;
        let scale = den.im + den.re * ratio;
        Complex64::new(
            (num.re * ratio + num.im) / scale,
            (num.im * ratio - num.re) / scale,
        )
    }
}

/// A complex number whose imaginary part is exactly zero.
pub(crate) fn c_is_real(z: Complex64) -> bool {
    z.im == 0.0
}

/// Compact formatting for log messages, real numbers print without `+i0`.
pub(crate) fn complex_fmt(c: &Complex64) -> String {
    let r = c.re;
    let i = c.im;
    if i == 0.0 {
        format!("{r}")
    } else if i == 1.0 {
        format!("({r}+i)")
    } else {
        format!("({r}+i{i})")
    }
}
