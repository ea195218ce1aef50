//! Roots of quartic polynomials with real or complex coefficients.
//!
//! The solvers factor the quartic into two quadratics, using the dominant root
//! of a resolvent cubic as a starting point and refining the factors with
//! Newton-Raphson. They stay accurate for clustered and multiple roots and for
//! coefficients spanning the whole range of `f64`.
//!
//! ```
//! use quartic_roots::{quartic, quartic_real};
//! use num::complex::Complex64;
//!
//! // (x - 1)(x - 2)(x^2 + 1)
//! let coeffs = [2.0, -3.0, 3.0, -3.0, 1.0];
//! let roots = quartic_real(&coeffs).unwrap();
//! for z in roots {
//!     let p = coeffs.iter().rev().fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z + c);
//!     assert!(p.norm() < 1E-12);
//! }
//!
//! let roots = quartic(&coeffs.map(|c| Complex64::new(c, 0.0))).unwrap();
//! assert!(roots.iter().all(|z| z.is_finite()));
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Shorthand for building a [`num::complex::Complex64`].
///
/// ```
/// # use quartic_roots::complex;
/// use num::complex::Complex64;
///
/// assert_eq!(complex!(1.0), Complex64::new(1.0, 0.0));
/// assert_eq!(complex!(1.0, -2.0), Complex64::new(1.0, -2.0));
/// ```
#[macro_export]
macro_rules! complex {
    ($re:expr) => {
        $crate::num::complex::Complex64::new($re, 0.0)
    };
    ($re:expr, $im:expr) => {
        $crate::num::complex::Complex64::new($re, $im)
    };
}

pub use num;

mod error;
pub use error::{Error, Result};

mod scalar;
pub use scalar::{CUBIC_RESCALE_FACTOR, MACHEPS, MAX_NEWTON_ITER, QUARTIC_RESCALE_FACTOR};

pub mod roots;
pub use roots::{quartic, quartic_real};

mod util;

#[doc(hidden)]
pub use util::__testing;
