use itertools::Itertools;
use num::{complex::Complex64, Zero};

use super::{
    factors::{Factors, Monic},
    quadratic::{conjugate_pair, quadratic, quadratic_complex},
    refine, residual, resolvent,
    select::{checked_div, Candidates},
};
use crate::{
    scalar::{QuarticScalar, MACHEPS, QUARTIC_RESCALE_FACTOR},
    util::{
        complex::complex_fmt,
        doc_macros::{coeffs_ascending, errors_invalid_input},
        float::f64_max3,
    },
    Error, Result,
};

/// All four roots of a quartic with complex coefficients.
///
#[doc = coeffs_ascending!()]
///
/// Roots `0` and `1` belong to the first quadratic factor, roots `2` and `3`
/// to the second. Coefficients close to the overflow threshold are handled by
/// rescaling, and all divisions are scaled so that extreme magnitudes do not
/// overflow in the intermediate steps.
///
/// # Errors
#[doc = errors_invalid_input!()]
///
/// # Examples
/// ```
/// # use quartic_roots::roots::quartic;
/// use num::complex::Complex64;
///
/// // x^4 - 1
/// let coeffs = [-1.0, 0.0, 0.0, 0.0, 1.0].map(|re| Complex64::new(re, 0.0));
/// let roots = quartic(&coeffs).unwrap();
/// for z in roots {
///     assert!((z.powi(4) - 1.0).norm() < 1E-14);
/// }
/// ```
pub fn quartic(coeffs: &[Complex64; 5]) -> Result<[Complex64; 4]> {
    let ldlt = Decomposition::new(Monic::from_coeffs(coeffs)?);
    let monic = ldlt.monic;

    let gamma = (-ldlt.d2).sqrt();
    let mut factors = free_coefficient(&monic, ldlt.split(gamma));
    if ldlt.is_degenerate() {
        let alternative = ldlt.alternative((-ldlt.d3()).sqrt());
        let primary = (!ldlt.d2.is_zero()).then_some(factors);
        factors = prefer_degenerate(primary, alternative, |f| residual::abcd(&monic, f));
    }
    log::debug!("factored quartic {{factors: {factors}}}");

    let roots = if let Some(real) = factors.to_real() {
        let f = refine::factors(&monic.re(), real);
        concat(quadratic(f.alpha1, f.beta1), quadratic(f.alpha2, f.beta2))
    } else {
        let f = refine::factors(&monic, factors);
        concat(
            quadratic_complex(f.alpha1, f.beta1),
            quadratic_complex(f.alpha2, f.beta2),
        )
    };
    finite(ldlt.unscale(roots))
}

/// All four roots of a quartic with real coefficients.
///
#[doc = coeffs_ascending!()]
///
/// Arithmetic stays real as long as the quartic splits into real quadratic
/// factors. Otherwise it splits into a pair of complex conjugate factors and
/// the roots are returned as `[z1, conj(z1), z2, conj(z2)]`, so non-real roots
/// always come in exact conjugate pairs.
///
/// # Errors
#[doc = errors_invalid_input!()]
///
/// # Examples
/// ```
/// # use quartic_roots::roots::quartic_real;
/// // (x - 1)(x - 2)(x - 3)(x - 4)
/// let mut roots = quartic_real(&[24.0, -50.0, 35.0, -10.0, 1.0])
///     .unwrap()
///     .map(|z| z.re);
/// roots.sort_by(f64::total_cmp);
/// for (z, expected) in roots.into_iter().zip([1.0, 2.0, 3.0, 4.0]) {
///     assert!((z - expected).abs() < 1E-12);
/// }
/// ```
pub fn quartic_real(coeffs: &[f64; 5]) -> Result<[Complex64; 4]> {
    let ldlt = Decomposition::new(Monic::from_coeffs(coeffs)?);
    let monic = ldlt.monic;

    let primary = if ldlt.d2 < 0.0 {
        let factors = free_coefficient(&monic, ldlt.split((-ldlt.d2).sqrt()));
        Some(Split::Real(factors))
    } else if ldlt.d2 > 0.0 {
        let gamma = ldlt.d2.sqrt();
        let alpha1 = Complex64::new(ldlt.l1, gamma);
        let beta1 = Complex64::new(ldlt.l3, gamma * ldlt.l2);
        Some(Split::Conjugate(Factors {
            alpha1,
            beta1,
            alpha2: alpha1.conj(),
            beta2: beta1.conj(),
        }))
    } else {
        log::trace!("no primary factorization {{d2: {}}}", ldlt.d2);
        None
    };

    let split = match primary {
        Some(split) if !ldlt.is_degenerate() => split,
        primary => {
            let d3 = ldlt.d3();
            let alternative = if d3 <= 0.0 {
                Split::Real(ldlt.alternative((-d3).sqrt()))
            } else {
                let alpha = Complex64::new(ldlt.l1, 0.0);
                let beta = Complex64::new(ldlt.l3, d3.sqrt());
                Split::Conjugate(Factors {
                    alpha1: alpha,
                    beta1: beta,
                    alpha2: alpha,
                    beta2: beta.conj(),
                })
            };
            prefer_degenerate(primary, alternative, |split| split.residual(&monic))
        }
    };

    let roots = match split {
        Split::Real(factors) => {
            log::debug!("factored quartic {{factors: {factors}}}");
            let f = refine::factors(&monic, factors);
            concat(quadratic(f.alpha1, f.beta1), quadratic(f.alpha2, f.beta2))
        }
        Split::Conjugate(factors) => {
            log::debug!("factored quartic into conjugates {{factors: {factors}}}");
            conjugate_pair(factors.alpha1, factors.beta1)
        }
    };
    finite(ldlt.unscale(roots))
}

/// The quartic written as `(x^2 + l1 x + l3)^2 - (d2 (x + l2)^2 + ...)`, with
/// `l3` derived from the resolvent root `phi0`.
#[derive(Clone, Copy, Debug)]
struct Decomposition<T> {
    monic: Monic<T>,
    /// Factor the coefficients were rescaled by, if the resolvent overflowed.
    scale: Option<f64>,
    phi0: T,
    l1: T,
    l2: T,
    l3: T,
    d2: T,
}

impl<T: QuarticScalar> Decomposition<T> {
    fn new(monic: Monic<T>) -> Self {
        let (monic, phi0, scale) = resolve(monic);
        let Monic { a, b, c, d } = monic;

        let l1 = a.div_real(2.0);
        let l3 = b.div_real(6.0) + phi0.div_real(2.0);
        let del2 = c - a * l3;
        let bl311 = b.mul_real(2.0).div_real(3.0) - phi0 - l1 * l1;
        let dml3l3 = d - l3 * l3;

        // three equivalent ways to compute (d2, l2), keep the most accurate
        let score = |&(d2, l2): &(T, T)| residual::ldlt(&monic, d2, l1, l2, l3);
        let l2_from_d = checked_div(dml3l3.mul_real(2.0), del2);
        let mut candidates = Candidates::new();
        candidates.offer_with(
            checked_div(del2, bl311.mul_real(2.0)).map(|l2| (bl311, l2)),
            score,
        );
        candidates.offer_with(
            l2_from_d.and_then(|l2| checked_div(del2, l2.mul_real(2.0)).map(|d2| (d2, l2))),
            score,
        );
        candidates.offer_with(l2_from_d.map(|l2| (bl311, l2)), score);
        let (d2, l2) = candidates.best().unwrap_or_else(|| {
            log::trace!("no candidate for d2 and l2, using zero {{bl311: {bl311}, del2: {del2}}}");
            (T::zero(), T::zero())
        });

        Self {
            monic,
            scale,
            phi0,
            l1,
            l2,
            l3,
            d2,
        }
    }

    /// `d2` vanishes to machine precision, so the split along `gamma = sqrt(-d2)`
    /// is unreliable.
    fn is_degenerate(&self) -> bool {
        let scale = f64_max3(
            self.monic.b.mul_real(2.0).div_real(3.0).magnitude(),
            self.phi0.magnitude(),
            (self.l1 * self.l1).magnitude(),
        );
        self.d2.magnitude() <= MACHEPS * scale
    }

    fn d3(&self) -> T {
        self.monic.d - self.l3 * self.l3
    }

    /// Factorization along `gamma = sqrt(-d2)`.
    fn split(&self, gamma: T) -> Factors<T> {
        Factors {
            alpha1: self.l1 + gamma,
            beta1: self.l3 + gamma * self.l2,
            alpha2: self.l1 - gamma,
            beta2: self.l3 - gamma * self.l2,
        }
        .balanced(self.monic.d)
    }

    /// Factorization for `d2 = 0`, where `root = sqrt(-d3)`.
    fn alternative(&self, root: T) -> Factors<T> {
        Factors {
            alpha1: self.l1,
            beta1: self.l3 + root,
            alpha2: self.l1,
            beta2: self.l3 - root,
        }
        .balanced(self.monic.d)
    }

    fn unscale(&self, roots: [Complex64; 4]) -> [Complex64; 4] {
        let roots = self.scale.map_or(roots, |r| roots.map(|z| z * r));
        log::debug!(
            "quartic roots {{roots: [{}]}}",
            roots.iter().map(complex_fmt).join(", ")
        );
        roots
    }
}

/// Monic coefficients the resolvent root was computed for, the root itself,
/// and the factor the coefficients were rescaled by, if any.
fn resolve<T: QuarticScalar>(monic: Monic<T>) -> (Monic<T>, T, Option<f64>) {
    let phi0 = resolvent::phi0(&monic, false);
    if phi0.is_finite() {
        return (monic, phi0, None);
    }
    log::trace!("rescaling quartic {{phi0: {phi0}, factor: {QUARTIC_RESCALE_FACTOR}}}");
    let rescaled = monic.rescaled(QUARTIC_RESCALE_FACTOR);
    let phi0 = resolvent::phi0(&rescaled, true);
    (rescaled, phi0, Some(QUARTIC_RESCALE_FACTOR))
}

/// Recompute the linear coefficient of the factor whose `alpha` is smaller,
/// it is the one most affected by cancellation.
fn free_coefficient<T: QuarticScalar>(monic: &Monic<T>, f: Factors<T>) -> Factors<T> {
    let score = |f: &Factors<T>| residual::abc(monic, f);
    let mut candidates = Candidates::new();
    if f.alpha1.magnitude() < f.alpha2.magnitude() {
        let with = |alpha1| Factors { alpha1, ..f };
        candidates.offer_with(checked_div(monic.c - f.beta1 * f.alpha2, f.beta2).map(with), score);
        candidates.offer_with(checked_div(monic.b - f.beta2 - f.beta1, f.alpha2).map(with), score);
        candidates.offer_with(Some(with(monic.a - f.alpha2)), score);
    } else {
        let with = |alpha2| Factors { alpha2, ..f };
        candidates.offer_with(checked_div(monic.c - f.alpha1 * f.beta2, f.beta1).map(with), score);
        candidates.offer_with(checked_div(monic.b - f.beta1 - f.beta2, f.alpha1).map(with), score);
        candidates.offer_with(Some(with(monic.a - f.alpha1)), score);
    }
    candidates.best().unwrap_or(f)
}

/// Pick the `d2 = 0` factorization if there is no primary one or if it has a
/// strictly smaller residual.
fn prefer_degenerate<S: Copy>(
    primary: Option<S>,
    alternative: S,
    residual: impl Fn(&S) -> f64,
) -> S {
    let mut candidates = Candidates::new();
    candidates.offer_with(primary, &residual);
    candidates.offer(alternative, residual(&alternative));
    match candidates.best_with_residual() {
        Some((best, r)) => {
            log::trace!("degenerate quartic {{residual: {r}, primary: {}}}", primary.is_some());
            best
        }
        None => alternative,
    }
}

/// Quadratic factors of a real quartic.
#[derive(Clone, Copy, Debug)]
enum Split {
    Real(Factors<f64>),
    /// `alpha2, beta2` are the conjugates of `alpha1, beta1`.
    Conjugate(Factors<Complex64>),
}

impl Split {
    fn residual(&self, monic: &Monic<f64>) -> f64 {
        match self {
            Self::Real(f) => residual::abcd(monic, f),
            Self::Conjugate(f) => residual::abcd(&monic.to_complex(), f),
        }
    }
}

fn finite(roots: [Complex64; 4]) -> Result<[Complex64; 4]> {
    if roots.iter().all(|z| z.is_finite()) {
        Ok(roots)
    } else {
        log::debug!("roots overflowed even after rescaling");
        Err(Error::Overflow)
    }
}

fn concat(first: [Complex64; 2], second: [Complex64; 2]) -> [Complex64; 4] {
    let [z0, z1] = first;
    let [z2, z3] = second;
    [z0, z1, z2, z3]
}
