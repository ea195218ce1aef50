use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

use num::{complex::Complex64, Zero};

use crate::{
    roots::{cubic, resolvent},
    util::complex::c_div,
};

/// Machine epsilon of `f64`.
pub const MACHEPS: f64 = f64::EPSILON;

/// `f64::MAX.cbrt() / φ`, used to rescale the resolvent cubic when the quartic
/// has already been rescaled and the cubic still overflows.
pub const CUBIC_RESCALE_FACTOR: f64 = 3.488_062_113_727_083E102;

/// `f64::MAX.powf(0.25) / φ`, used to rescale the monic quartic when the
/// resolvent cubic overflows.
pub const QUARTIC_RESCALE_FACTOR: f64 = 7.156_344_627_944_542E76;

/// Upper bound on Newton-Raphson iterations for every polishing step.
pub const MAX_NEWTON_ITER: usize = 8;

/// Beyond this magnitude of `Q = -b/3` cubing overflows.
pub(crate) const CUBIC_Q_LIMIT: f64 = 1E102;

/// Beyond this magnitude of `R = c/2` squaring overflows.
pub(crate) const CUBIC_R_LIMIT: f64 = 1E154;

/// Coefficient types the quartic solver can work on: `f64` and [`Complex64`].
///
/// Everything that is identical for real and complex coefficients (residuals,
/// factor refinement, the resolvent calculator) is written once against this
/// trait. The few places where real arithmetic takes a different, cheaper
/// route are the associated functions.
///
/// Division is only available as [`QuarticScalar::quotient`], which does not
/// overflow in the intermediate steps for complex numbers.
pub(crate) trait QuarticScalar:
    Copy
    + Debug
    + Display
    + PartialEq
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Absolute value or complex modulus.
    fn magnitude(self) -> f64;

    /// `self / den`, finite whenever the exact quotient is representable.
    fn quotient(self, den: Self) -> Self;

    fn is_finite(self) -> bool;

    fn mul_real(self, k: f64) -> Self;

    fn div_real(self, k: f64) -> Self;

    /// Dominant root of `x^3 + b x + c`, see [`cubic`].
    fn dominant_cubic_root(b: Self, c: Self) -> Self;

    /// Same as [`QuarticScalar::dominant_cubic_root`], but restructured so that
    /// no intermediate overflows.
    fn dominant_cubic_root_overflow_safe(b: Self, c: Self) -> Self;

    /// Shift that depresses the resolvent of `x^4 + a x^3 + b x^2 + ...`.
    fn resolvent_shift(a: Self, b: Self) -> Self;
}

impl QuarticScalar for f64 {
    fn magnitude(self) -> f64 {
        self.abs()
    }

    fn quotient(self, den: Self) -> Self {
        self / den
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn mul_real(self, k: f64) -> Self {
        self * k
    }

    fn div_real(self, k: f64) -> Self {
        self / k
    }

    fn dominant_cubic_root(b: Self, c: Self) -> Self {
        cubic::depressed_cubic_dominant_root_real(b, c)
    }

    fn dominant_cubic_root_overflow_safe(b: Self, c: Self) -> Self {
        cubic::depressed_cubic_dominant_root_real_overflow_safe(b, c)
    }

    fn resolvent_shift(a: Self, b: Self) -> Self {
        resolvent::real_shift(a, b)
    }
}

impl QuarticScalar for Complex64 {
    fn magnitude(self) -> f64 {
        self.norm()
    }

    fn quotient(self, den: Self) -> Self {
        c_div(self, den)
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn mul_real(self, k: f64) -> Self {
        self * k
    }

    fn div_real(self, k: f64) -> Self {
        self / k
    }

    fn dominant_cubic_root(b: Self, c: Self) -> Self {
        cubic::depressed_cubic_dominant_root(b, c)
    }

    fn dominant_cubic_root_overflow_safe(b: Self, c: Self) -> Self {
        cubic::depressed_cubic_dominant_root_overflow_safe(b, c)
    }

    fn resolvent_shift(a: Self, b: Self) -> Self {
        if a.im.is_zero() && b.im.is_zero() {
            return Self::new(resolvent::real_shift(a.re, b.re), 0.0);
        }
        resolvent::complex_shift(a, b)
    }
}
