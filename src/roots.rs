//! Closed-form root finders for polynomials of degree 2, 3 and 4.
//!
//! The quartic solvers factor the polynomial into two monic quadratics. The
//! factor coefficients are first estimated from the dominant root of a
//! resolvent cubic, choosing among redundant algebraic formulas the one with
//! the smallest residual, and then polished with a few Newton-Raphson steps.

pub(crate) mod cubic;
pub use cubic::{
    depressed_cubic_dominant_root, depressed_cubic_dominant_root_overflow_safe,
    depressed_cubic_dominant_root_real, depressed_cubic_dominant_root_real_overflow_safe,
};
mod factors;
mod filter;
pub use filter::{smallest_positive_real_root, RealTolerance};
mod newton;
mod quadratic;
pub use quadratic::{quadratic, quadratic_complex};
mod quartic;
pub use quartic::{quartic, quartic_real};
mod refine;
pub(crate) mod resolvent;
mod residual;
mod select;
