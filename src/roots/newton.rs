//! Bounded Newton-Raphson polishing shared by the resolvent calculator and the
//! factor refiners.

use crate::scalar::MAX_NEWTON_ITER;

/// Polish `start` with at most [`MAX_NEWTON_ITER`] steps.
///
/// `error` measures how far a state is from the solution, `step` performs one
/// Newton update or returns [`None`] when the derivative (or Jacobian) is
/// singular. Iteration stops when
/// - the error is exactly zero, the latest state is kept;
/// - the derivative is singular, the latest state is kept;
/// - the error did not decrease, the previous state is restored.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub(crate) fn polish<S: Copy>(
    start: S,
    error: impl Fn(&S) -> f64,
    step: impl Fn(&S) -> Option<S>,
) -> S {
    let mut state = start;
    let mut err = error(&state);
    if err == 0.0 {
        return state;
    }

    for i in 0..MAX_NEWTON_ITER {
        let Some(next) = step(&state) else {
            log::trace!("stopping because derivative is singular {{iteration: {i}, error: {err}}}");
            break;
        };
        let next_err = error(&next);
        if next_err == 0.0 {
            log::trace!("stopping because error vanished {{iteration: {i}}}");
            return next;
        }
        // also catches NaN, which must never replace a finite state
        if !(next_err < err) {
            log::trace!(
                "error did not improve {{iteration: {i}, error: {err}, next_error: {next_err}}}"
            );
            break;
        }
        state = next;
        err = next_err;
    }
    state
}
