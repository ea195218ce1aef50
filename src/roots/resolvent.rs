//! The resolvent cubic of a monic quartic and its dominant root `phi0`.
//!
//! The quartic is first shifted by `s` so that its resolvent becomes a
//! depressed cubic `x^3 + g x + h`, whose dominant root is then polished with
//! Newton-Raphson.

use num::complex::Complex64;

use super::{factors::Monic, newton};
use crate::{
    scalar::{QuarticScalar, CUBIC_RESCALE_FACTOR, MACHEPS},
    util::{
        complex::{c_div, c_max_norm},
        float::f64_max3,
    },
};

/// Shift for real `a, b`, choosing the denominator that avoids cancellation.
pub(crate) fn real_shift(a: f64, b: f64) -> f64 {
    let discriminant = 9.0 * a * a - 24.0 * b;
    if discriminant > 0.0 {
        let sqrt_d = discriminant.sqrt();
        if a > 0.0 {
            -2.0 * b / (3.0 * a + sqrt_d)
        } else {
            -2.0 * b / (3.0 * a - sqrt_d)
        }
    } else {
        -a / 4.0
    }
}

/// Shift for complex `a, b`, dividing by the larger of the two denominators.
pub(crate) fn complex_shift(a: Complex64, b: Complex64) -> Complex64 {
    let sqrt_d = (a * a * 9.0 - b * 24.0).sqrt();
    let den = c_max_norm(-a * 3.0 + sqrt_d, -a * 3.0 - sqrt_d);
    c_div(b * 2.0, den)
}

/// Coefficients `g, h` of the depressed resolvent cubic `x^3 + g x + h`.
#[derive(Clone, Copy, Debug)]
struct Resolvent<T> {
    g: T,
    h: T,
}

impl<T: QuarticScalar> Resolvent<T> {
    fn dominant_root(self) -> T {
        let root = T::dominant_cubic_root(self.g, self.h);
        if root.is_finite() {
            return root;
        }
        log::trace!(
            "resolvent root is not finite, retrying overflow-safe {{g: {}, h: {}}}",
            self.g,
            self.h
        );
        T::dominant_cubic_root_overflow_safe(self.g, self.h)
    }

    fn eval(self, x: T) -> T {
        x * (x * x + self.g) + self.h
    }

    /// Newton-Raphson, unless `x` already solves the cubic to machine precision.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn polish(self, x: T) -> T {
        let scale = f64_max3(
            (x * x * x).magnitude(),
            (self.g * x).magnitude(),
            self.h.magnitude(),
        );
        if !(self.eval(x).magnitude() > MACHEPS * scale) {
            return x;
        }
        newton::polish(
            x,
            |x| self.eval(*x).magnitude(),
            |x| {
                let df = (*x * *x).mul_real(3.0) + self.g;
                if df.is_zero() {
                    None
                } else {
                    Some(*x - self.eval(*x).quotient(df))
                }
            },
        )
    }
}

/// Dominant root of the resolvent cubic of `target`.
///
/// If the resolvent overflows even with the overflow-safe cubic formula and
/// `rescaled` is set, the cubic itself is rescaled before solving. The result
/// may still be non-finite, in which case the caller should rescale the
/// quartic and try again.
pub(crate) fn phi0<T: QuarticScalar>(target: &Monic<T>, rescaled: bool) -> T {
    let Monic { a, b, c, d } = *target;
    let s = T::resolvent_shift(a, b);

    // coefficients of the quartic shifted by s
    let aq = a + s.mul_real(4.0);
    let bq = b + s.mul_real(3.0) * (a + s.mul_real(2.0));
    let cq = c + s * (b.mul_real(2.0) + s * (a.mul_real(3.0) + s.mul_real(4.0)));
    let dq = d + s * (c + s * (b + s * (a + s)));

    let gg = (bq * bq).div_real(9.0);
    let hh = aq * cq;
    let resolvent = Resolvent {
        g: hh - dq.mul_real(4.0) - gg.mul_real(3.0),
        h: ((dq.mul_real(8.0) + hh - gg.mul_real(2.0)) * bq).div_real(3.0)
            - cq * cq
            - dq * aq * aq,
    };

    let root = resolvent.dominant_root();
    if root.is_finite() || !rescaled {
        return resolvent.polish(root);
    }

    log::trace!("resolvent cubic overflows, rescaling it {{factor: {CUBIC_RESCALE_FACTOR}}}");
    let r = CUBIC_RESCALE_FACTOR;
    let aqs = aq.div_real(r);
    let bqs = bq.div_real(r);
    let cqs = cq.div_real(r);
    let dqss = dq.div_real(r * r);
    let ggss = (bqs * bqs).div_real(9.0);
    let hhss = aqs * cqs;
    let scaled = Resolvent {
        g: hhss - dqss.mul_real(4.0) - ggss.mul_real(3.0),
        h: ((dqss.mul_real(8.0) + hhss - ggss.mul_real(2.0)) * bqs).div_real(3.0)
            - cqs * cqs.div_real(r)
            - dq.div_real(r) * aqs * aqs,
    };
    // polish in the scaled variable, where the cubic is representable
    scaled.polish(scaled.dominant_root()).mul_real(r)
}
