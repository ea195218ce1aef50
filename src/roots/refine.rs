//! Newton-Raphson refinement of a quadratic factorization.
//!
//! The unknowns `x = (alpha1, beta1, alpha2, beta2)` must satisfy
//!
//! ```text
//! beta1 beta2                     = d
//! beta1 alpha2 + alpha1 beta2     = c
//! beta1 + alpha1 alpha2 + beta2   = b
//! alpha1 + alpha2                 = a
//! ```
//!
//! The Jacobian of this system has a closed-form inverse, its determinant is
//! the resultant of the two quadratics, so a step is singular exactly when the
//! factors share a root.

use super::{
    factors::{Factors, Monic},
    newton,
};
use crate::scalar::QuarticScalar;

/// Refine `start` so that its product matches `target` as closely as possible.
///
/// Works for real and complex coefficients alike.
pub(crate) fn factors<T: QuarticScalar>(target: &Monic<T>, start: Factors<T>) -> Factors<T> {
    newton::polish(start, |f| error(target, f), |f| step(target, f))
}

/// Left-hand sides minus right-hand sides, ordered `d, c, b, a`.
fn residual_vector<T: QuarticScalar>(target: &Monic<T>, f: &Factors<T>) -> [T; 4] {
    [
        f.beta1 * f.beta2 - target.d,
        f.beta1 * f.alpha2 + f.alpha1 * f.beta2 - target.c,
        f.beta1 + f.alpha1 * f.alpha2 + f.beta2 - target.b,
        f.alpha1 + f.alpha2 - target.a,
    ]
}

fn error<T: QuarticScalar>(target: &Monic<T>, f: &Factors<T>) -> f64 {
    let scales = [target.d, target.c, target.b, target.a];
    residual_vector(target, f)
        .into_iter()
        .zip(scales)
        .map(|(r, s)| {
            if s.is_zero() {
                r.magnitude()
            } else {
                r.quotient(s).magnitude()
            }
        })
        .sum()
}

#[allow(clippy::many_single_char_names)]
fn step<T: QuarticScalar>(target: &Monic<T>, f: &Factors<T>) -> Option<Factors<T>> {
    let [x0, x1, x2, x3] = [f.alpha1, f.beta1, f.alpha2, f.beta2];
    let x02 = x0 - x2;
    let det = x1 * x1 + x1 * (-x2 * x02 - x3.mul_real(2.0)) + x3 * (x0 * x02 + x3);
    if det.is_zero() {
        return None;
    }

    // adjugate of the Jacobian, the inverse is this divided by `det`
    let j00 = x02;
    let j01 = x3 - x1;
    let j02 = x1 * x2 - x0 * x3;
    let j03 = -x1 * j01 - x0 * j02;
    let jinv = [
        [j00, j01, j02, j03],
        [x0 * j00 + j01, -x1 * j00, -x1 * j01, -x1 * j02],
        [-j00, -j01, -j02, j02 * x2 + j01 * x3],
        [-x2 * j00 - j01, j00 * x3, x3 * j01, x3 * j02],
    ];

    let fvec = residual_vector(target, f);
    let dx = jinv.map(|row| {
        row.into_iter()
            .zip(fvec)
            .fold(T::zero(), |acc, (j, r)| acc + j * r)
    });

    Some(Factors {
        alpha1: x0 - dx[0].quotient(det),
        beta1: x1 - dx[1].quotient(det),
        alpha2: x2 - dx[2].quotient(det),
        beta2: x3 - dx[3].quotient(det),
    })
}
