use std::fmt;

use num::complex::Complex64;

use crate::{scalar::QuarticScalar, util::complex::c_is_real, Error, Result};

/// Monic quartic `x^4 + a x^3 + b x^2 + c x + d`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Monic<T> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
}

impl<T: QuarticScalar> Monic<T> {
    /// Divide by the leading coefficient, `coeffs` in ascending degree.
    pub fn from_coeffs(coeffs: &[T; 5]) -> Result<Self> {
        if let Some(degree) = coeffs.iter().position(|z| !z.is_finite()) {
            return Err(Error::NonFinite { degree });
        }
        let [c0, c1, c2, c3, c4] = *coeffs;
        if c4.is_zero() {
            return Err(Error::NotQuartic);
        }
        let monic = Self {
            a: c3.quotient(c4),
            b: c2.quotient(c4),
            c: c1.quotient(c4),
            d: c0.quotient(c4),
        };
        if [monic.a, monic.b, monic.c, monic.d].iter().all(|z| z.is_finite()) {
            Ok(monic)
        } else {
            Err(Error::Overflow)
        }
    }

    /// Coefficients of the quartic with roots divided by `factor`.
    pub fn rescaled(self, factor: f64) -> Self {
        let factor_sq = factor * factor;
        Self {
            a: self.a.div_real(factor),
            b: self.b.div_real(factor_sq),
            c: self.c.div_real(factor_sq * factor),
            d: self.d.div_real(factor_sq * factor_sq),
        }
    }
}

impl Monic<f64> {
    pub fn to_complex(self) -> Monic<Complex64> {
        Monic {
            a: Complex64::new(self.a, 0.0),
            b: Complex64::new(self.b, 0.0),
            c: Complex64::new(self.c, 0.0),
            d: Complex64::new(self.d, 0.0),
        }
    }
}

impl Monic<Complex64> {
    /// Real parts only.
    pub fn re(self) -> Monic<f64> {
        Monic {
            a: self.a.re,
            b: self.b.re,
            c: self.c.re,
            d: self.d.re,
        }
    }
}

/// Factorization `(x^2 + alpha1 x + beta1)(x^2 + alpha2 x + beta2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Factors<T> {
    pub alpha1: T,
    pub beta1: T,
    pub alpha2: T,
    pub beta2: T,
}

impl<T: QuarticScalar> Factors<T> {
    /// Replace the smaller of the two constant terms using `beta1 beta2 = d`,
    /// it is the one that suffered from cancellation.
    pub fn balanced(self, d: T) -> Self {
        let m1 = self.beta1.magnitude();
        let m2 = self.beta2.magnitude();
        if m2 < m1 {
            Self {
                beta2: d.quotient(self.beta1),
                ..self
            }
        } else if m2 > m1 {
            Self {
                beta1: d.quotient(self.beta2),
                ..self
            }
        } else {
            self
        }
    }
}

impl Factors<Complex64> {
    /// The factorization with real parts, if all imaginary parts are zero.
    pub fn to_real(self) -> Option<Factors<f64>> {
        [self.alpha1, self.beta1, self.alpha2, self.beta2]
            .into_iter()
            .all(c_is_real)
            .then(|| Factors {
                alpha1: self.alpha1.re,
                beta1: self.beta1.re,
                alpha2: self.alpha2.re,
                beta2: self.beta2.re,
            })
    }
}

impl<T: QuarticScalar> fmt::Display for Factors<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x^2 + {} x + {})(x^2 + {} x + {})",
            self.alpha1, self.beta1, self.alpha2, self.beta2
        )
    }
}
