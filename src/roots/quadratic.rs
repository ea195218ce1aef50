use num::{complex::Complex64, Zero};

use crate::util::complex::{c_div, c_max_norm};

/// Roots of the real quadratic `x^2 + a x + b`.
///
/// For real roots the one of larger magnitude comes first. It is computed
/// directly with the sign that avoids cancellation, the other one follows from
/// Vieta's formula `z1 z2 = b`. Complex roots come as `[-a/2 + i w, -a/2 - i w]`.
///
/// # Examples
/// ```
/// # use quartic_roots::roots::quadratic;
/// let [z1, z2] = quadratic(-3.0, 2.0);
/// assert_eq!(z1.re, 2.0);
/// assert_eq!(z2.re, 1.0);
/// ```
#[must_use]
pub fn quadratic(a: f64, b: f64) -> [Complex64; 2] {
    let discriminant = a * a - 4.0 * b;
    if discriminant >= 0.0 {
        let div = if a >= 0.0 {
            -a - discriminant.sqrt()
        } else {
            -a + discriminant.sqrt()
        };
        let zmax = div / 2.0;
        let zmin = if zmax == 0.0 { 0.0 } else { b / zmax };
        [Complex64::new(zmax, 0.0), Complex64::new(zmin, 0.0)]
    } else {
        let w = (-discriminant).sqrt() / 2.0;
        [Complex64::new(-a / 2.0, w), Complex64::new(-a / 2.0, -w)]
    }
}

/// Roots of the complex quadratic `x^2 + a x + b`.
///
/// The root of larger modulus comes first, the smaller one is recovered via
/// Vieta's formula to avoid cancellation.
#[must_use]
pub fn quadratic_complex(a: Complex64, b: Complex64) -> [Complex64; 2] {
    let delta = (a * a - b * 4.0).sqrt();
    let zmax = c_max_norm(-(a + delta) * 0.5, -(a - delta) * 0.5);
    let zmin = if zmax.is_zero() {
        Complex64::zero()
    } else {
        c_div(b, zmax)
    };
    [zmax, zmin]
}

/// Roots of `x^2 + alpha x + beta` together with the roots of its complex
/// conjugate, ordered `[z1, conj(z1), z2, conj(z2)]`.
///
/// Used when a real quartic factors into a conjugate pair of quadratics, so
/// that the returned roots are exact conjugates of each other.
pub(crate) fn conjugate_pair(alpha: Complex64, beta: Complex64) -> [Complex64; 4] {
    let half = alpha * 0.5;
    let delta = (half * half - beta).sqrt();
    let zmax = c_max_norm(-half + delta, -half - delta);
    let zmin = if zmax.is_zero() {
        Complex64::zero()
    } else {
        c_div(beta, zmax)
    };
    [zmin, zmin.conj(), zmax, zmax.conj()]
}
