//! Residuals used to rank redundant formulas for the same quantity.
//!
//! Each one is a sum of relative errors between target coefficients and the
//! coefficients reconstructed from a candidate, falling back to the absolute
//! error when the target is exactly zero.

use super::factors::{Factors, Monic};
use crate::scalar::QuarticScalar;

fn relative_error<T: QuarticScalar>(reconstructed: T, target: T) -> f64 {
    if target.is_zero() {
        reconstructed.magnitude()
    } else {
        (reconstructed - target).quotient(target).magnitude()
    }
}

/// Error of the LDLT-style decomposition `(d2, l1, l2, l3)` against `b, c, d`.
pub(crate) fn ldlt<T: QuarticScalar>(target: &Monic<T>, d2: T, l1: T, l2: T, l3: T) -> f64 {
    relative_error(d2 + l1 * l1 + l3.mul_real(2.0), target.b)
        + relative_error((d2 * l2 + l1 * l3).mul_real(2.0), target.c)
        + relative_error(d2 * l2 * l2 + l3 * l3, target.d)
}

/// Error of a factorization against `a, b, c`, ignoring the constant term.
pub(crate) fn abc<T: QuarticScalar>(target: &Monic<T>, f: &Factors<T>) -> f64 {
    relative_error(f.beta1 * f.alpha2 + f.alpha1 * f.beta2, target.c)
        + relative_error(f.beta1 + f.alpha1 * f.alpha2 + f.beta2, target.b)
        + relative_error(f.alpha1 + f.alpha2, target.a)
}

/// Error of a factorization against all four coefficients.
pub(crate) fn abcd<T: QuarticScalar>(target: &Monic<T>, f: &Factors<T>) -> f64 {
    relative_error(f.beta1 * f.beta2, target.d) + abc(target, f)
}

#[cfg(test)]
mod test {
    use num::complex::Complex64;

    use super::*;

    // (x^2 - 3x + 2)(x^2 - 7x + 12) = (x - 1)(x - 2)(x - 3)(x - 4)
    const TARGET: Monic<f64> = Monic {
        a: -10.0,
        b: 35.0,
        c: -50.0,
        d: 24.0,
    };
    const EXACT: Factors<f64> = Factors {
        alpha1: -3.0,
        beta1: 2.0,
        alpha2: -7.0,
        beta2: 12.0,
    };

    #[test]
    fn exact_factorization_has_no_error() {
        assert_eq!(abc(&TARGET, &EXACT), 0.0);
        assert_eq!(abcd(&TARGET, &EXACT), 0.0);
    }

    #[test]
    fn errors_are_relative() {
        let f = Factors {
            alpha1: -3.5,
            ..EXACT
        };
        // a is off by 0.5, b by 3.5, c by 6
        let expected = 0.5 / 10.0 + 3.5 / 35.0 + 6.0 / 50.0;
        assert!((abc(&TARGET, &f) - expected).abs() < 1E-15);
        assert!((abcd(&TARGET, &f) - expected).abs() < 1E-15);
    }

    #[test]
    fn zero_target_is_absolute() {
        let target = Monic { d: 0.0, ..TARGET };
        let f = Factors { beta2: 0.5, ..EXACT };
        // the constant term is 1.0 instead of 0.0
        assert!(abcd(&target, &f) >= 1.0);
        let f = Factors { beta2: 0.0, ..EXACT };
        assert!((abcd(&target, &f) - abc(&target, &f)).abs() == 0.0);
    }

    #[test]
    fn ldlt_of_exact_decomposition() {
        // (x^2 + l1 x + l3)^2 + d2 (x + l2)^2 with l1 = 1, l3 = 2, d2 = 3, l2 = 4
        let target = Monic {
            a: 2.0,
            b: 1.0 + 4.0 + 3.0,
            c: 2.0 * 3.0 * 4.0 + 2.0 * 1.0 * 2.0,
            d: 3.0 * 16.0 + 4.0,
        };
        assert_eq!(ldlt(&target, 3.0, 1.0, 4.0, 2.0), 0.0);
    }

    #[test]
    fn complex_coefficients() {
        let target = Monic {
            a: Complex64::new(0.0, 1.0),
            b: Complex64::new(0.0, 0.0),
            c: Complex64::new(2.0, 0.0),
            d: Complex64::new(1.0, 1.0),
        };
        let f = Factors {
            alpha1: Complex64::new(0.0, 1.0),
            beta1: Complex64::new(1.0, 1.0),
            alpha2: Complex64::new(0.0, 0.0),
            beta2: Complex64::new(1.0, 0.0),
        };
        // c reconstructs to i, b to 2 + i against a zero target
        let expected =
            (Complex64::new(0.0, 1.0) - 2.0).norm() / 2.0 + Complex64::new(2.0, 1.0).norm();
        assert!((abcd(&target, &f) - expected).abs() < 1E-15);
    }

    #[test]
    fn tiny_complex_targets_stay_relative() {
        let target = Monic {
            a: complex!(1E-300),
            b: complex!(1E-300),
            c: complex!(1E-300),
            d: complex!(1E-300),
        };
        let f = Factors {
            alpha1: complex!(1E-300),
            beta1: complex!(-1.0),
            alpha2: complex!(0.0),
            beta2: complex!(1.0),
        };
        // a and c are exact, b reconstructs to zero
        assert_eq!(abc(&target, &f), 1.0);
    }
}
