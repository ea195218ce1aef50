//! Picking the most accurate of several algebraically equivalent formulas.

use crate::scalar::QuarticScalar;

/// Keeps the candidate with the smallest residual offered so far.
///
/// The first candidate is always accepted, later ones only replace it if their
/// residual is strictly smaller, so ties favour earlier candidates.
#[derive(Debug)]
pub(crate) struct Candidates<T> {
    best: Option<(T, f64)>,
}

impl<T> Candidates<T> {
    pub const fn new() -> Self {
        Self { best: None }
    }

    pub fn offer(&mut self, candidate: T, residual: f64) {
        match &self.best {
            Some((_, best_residual)) if residual >= *best_residual => {}
            Some(_) if residual.is_nan() => {}
            _ => self.best = Some((candidate, residual)),
        }
    }

    /// Offer a candidate that may not exist, scoring it only if it does.
    pub fn offer_with(&mut self, candidate: Option<T>, residual: impl FnOnce(&T) -> f64) {
        if let Some(candidate) = candidate {
            let r = residual(&candidate);
            self.offer(candidate, r);
        }
    }

    pub fn best(self) -> Option<T> {
        self.best.map(|(candidate, _)| candidate)
    }

}

impl<T: Copy> Candidates<T> {
    pub fn best_with_residual(&self) -> Option<(T, f64)> {
        self.best
    }
}

/// `num / den`, or [`None`] if `den` is exactly zero.
pub(crate) fn checked_div<T: QuarticScalar>(num: T, den: T) -> Option<T> {
    if den.is_zero() {
        None
    } else {
        Some(num.quotient(den))
    }
}

#[cfg(test)]
mod test {
    use super::{checked_div, Candidates};

    #[test]
    fn keeps_minimum() {
        let mut c = Candidates::new();
        c.offer("a", 3.0);
        c.offer("b", 1.0);
        c.offer("c", 2.0);
        assert_eq!(c.best_with_residual(), Some(("b", 1.0)));
    }

    #[test]
    fn ties_favour_first() {
        let mut c = Candidates::new();
        c.offer("a", 1.0);
        c.offer("b", 1.0);
        assert_eq!(c.best(), Some("a"));
    }

    #[test]
    fn empty() {
        let c = Candidates::<f64>::new();
        assert_eq!(c.best(), None);
    }

    #[test]
    fn nan_never_wins_over_a_number() {
        let mut c = Candidates::new();
        c.offer("a", 1.0);
        c.offer("b", f64::NAN);
        assert_eq!(c.best(), Some("a"));

        let mut c = Candidates::new();
        c.offer("a", f64::NAN);
        c.offer("b", 1.0);
        assert_eq!(c.best(), Some("b"));
    }

    #[test]
    fn skips_missing_candidates() {
        let mut c = Candidates::new();
        c.offer_with(checked_div(1.0, 0.0), |x| *x);
        assert_eq!(c.best_with_residual(), None);
        c.offer_with(checked_div(1.0, 4.0), |x| *x);
        assert_eq!(c.best_with_residual(), Some((0.25, 0.25)));
    }

    #[test]
    fn extreme_complex_quotients() {
        let big = complex!(1E200, -1E200);
        assert_eq!(checked_div(big, big), Some(complex!(1.0)));
        let tiny = complex!(1E-200, 1E-200);
        assert_eq!(checked_div(tiny, tiny), Some(complex!(1.0)));
    }
}
