use num::complex::Complex64;

/// Criteria for treating a numerically computed root as real.
///
/// Roots of a real polynomial that should be real often come out with a tiny
/// imaginary part. Far from the origin that part is compared against `atol`,
/// close to it against `rtol` times the real part.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RealTolerance {
    /// Magnitude of the real part above which `atol` is used instead of `rtol`.
    pub abs_or_rel_cutoff: f64,
    pub rtol: f64,
    pub atol: f64,
}

impl Default for RealTolerance {
    fn default() -> Self {
        Self {
            abs_or_rel_cutoff: 1E-3,
            rtol: 1E-3,
            atol: 1E-9,
        }
    }
}

impl RealTolerance {
    /// `z` is close enough to the real axis. A root with zero real part only
    /// counts if its imaginary part is exactly zero as well.
    #[must_use]
    pub fn is_real(&self, z: Complex64) -> bool {
        let re = z.re.abs();
        let im = z.im.abs();
        if re > self.abs_or_rel_cutoff {
            im < self.atol
        } else if re > 0.0 {
            im / re < self.rtol
        } else {
            im == 0.0
        }
    }
}

/// Smallest real part among the roots that are real according to `tol` and
/// not negative, or [`None`] if there is no such root.
///
/// # Examples
/// ```
/// # use quartic_roots::roots::{quartic_real, smallest_positive_real_root, RealTolerance};
/// // (x + 1)(x - 2)(x - 3)(x - 5)
/// let roots = quartic_real(&[-30.0, 1.0, 21.0, -9.0, 1.0]).unwrap();
/// let t = smallest_positive_real_root(&roots, RealTolerance::default()).unwrap();
/// assert!((t - 2.0).abs() < 1E-12);
/// ```
#[must_use]
pub fn smallest_positive_real_root(roots: &[Complex64], tol: RealTolerance) -> Option<f64> {
    roots
        .iter()
        .filter(|z| z.re >= 0.0 && tol.is_real(**z))
        .map(|z| z.re)
        .min_by(f64::total_cmp)
}
