use thiserror::Error;

/// The top-level error type for this crate.
///
/// Invalid input is reported up front. Overflow inside the solver is recovered
/// from by rescaling, [`Error::Overflow`] is only returned when that is not
/// enough.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The coefficient of `x^4` is zero, so the polynomial is not a quartic.
    #[error("leading coefficient is zero, this is not a quartic")]
    NotQuartic,

    /// A coefficient is NaN or infinite.
    #[error("coefficient of x^{degree} is not finite")]
    NonFinite { degree: usize },

    /// The coefficients span too many orders of magnitude, either normalizing
    /// by the leading coefficient or computing the roots overflowed.
    #[error("roots are out of the representable range")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, Error>;
