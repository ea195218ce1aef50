//! Macros for reducing doc comment boilerplate.

/// Default explanation for [`crate::Error`] variants returned by the quartic
/// solvers.
macro_rules! errors_invalid_input {
    () => {
        r"- [`Error::NotQuartic`](crate::Error::NotQuartic): the coefficient of `x^4` is zero.
- [`Error::NonFinite`](crate::Error::NonFinite): a coefficient is NaN or infinite.
- [`Error::Overflow`](crate::Error::Overflow): the coefficients divided by the leading one, or the
  roots themselves, are not representable as finite numbers.
"
    };
}
pub(crate) use errors_invalid_input;

/// Documents the coefficient layout shared by the public solvers.
macro_rules! coeffs_ascending {
    () => {
        r"Coefficients are given in ascending degree, `coeffs[k]` multiplies `x^k`.
"
    };
}
pub(crate) use coeffs_ascending;
