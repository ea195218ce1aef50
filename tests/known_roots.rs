//! Quartics whose roots are known in closed form.

use num::complex::Complex64;
use quartic_roots::{
    __testing::check_roots,
    complex, quartic, quartic_real,
    roots::{smallest_positive_real_root, RealTolerance},
    Error,
};

fn sorted_re(roots: [Complex64; 4]) -> [f64; 4] {
    let mut re = roots.map(|z| z.re);
    re.sort_by(f64::total_cmp);
    re
}

fn assert_rel(actual: f64, expected: f64, rtol: f64) {
    assert!(
        (actual - expected).abs() <= rtol * expected.abs(),
        "{actual} != {expected}"
    );
}

#[test]
fn distinct_real_roots() {
    let _ = simple_logger::init_with_level(log::Level::Debug);
    let coeffs = [24.0, -50.0, 35.0, -10.0, 1.0];
    for roots in [
        quartic_real(&coeffs).unwrap(),
        quartic(&coeffs.map(|c| complex!(c))).unwrap(),
    ] {
        assert!(roots.iter().all(|z| z.im == 0.0), "{roots:?}");
        for (z, expected) in sorted_re(roots).into_iter().zip([1.0, 2.0, 3.0, 4.0]) {
            assert_rel(z, expected, 1E-10);
        }
    }
}

#[test]
fn double_root() {
    let _ = simple_logger::init_with_level(log::Level::Debug);
    // (x - 1)^2 (x - 2)(x - 3)
    let coeffs = [6.0, -17.0, 17.0, -7.0, 1.0];
    let expected = vec![complex!(1.0), complex!(1.0), complex!(2.0), complex!(3.0)];
    for roots in [
        quartic_real(&coeffs).unwrap(),
        quartic(&coeffs.map(|c| complex!(c))).unwrap(),
    ] {
        assert!(roots.iter().all(|z| z.is_finite()), "{roots:?}");
        assert!(check_roots(roots.to_vec(), expected.clone(), 1E-6), "{roots:?}");
    }
}

#[test]
fn scaling_coefficients() {
    let coeffs = [24.0, -50.0, 35.0, -10.0, 1.0];
    let reference = sorted_re(quartic_real(&coeffs).unwrap());
    for k in [1E-3, -7.5, 1E5] {
        let roots = quartic_real(&coeffs.map(|c| c * k)).unwrap();
        for (z, expected) in sorted_re(roots).into_iter().zip(reference) {
            assert_rel(z, expected, 1E-10);
        }
    }
}

#[test]
fn huge_roots_need_rescaling() {
    let _ = simple_logger::init_with_level(log::Level::Trace);
    // roots 1e70, 2e70, 3e70 and 4e70, the resolvent cubic overflows
    let s = 1E70;
    let coeffs = [24.0 * s * s * s * s, -50.0 * s * s * s, 35.0 * s * s, -10.0 * s, 1.0];
    for roots in [
        quartic_real(&coeffs).unwrap(),
        quartic(&coeffs.map(|c| complex!(c))).unwrap(),
    ] {
        for (z, expected) in sorted_re(roots).into_iter().zip([1E70, 2E70, 3E70, 4E70]) {
            assert_rel(z, expected, 1E-10);
        }
    }
}

#[test]
fn coefficients_spanning_150_orders() {
    // (x + 1e150)(x - 1)(x - 2)(x - 3)
    let coeffs = [-6E150, 11E150, -6E150, 1E150, 1.0];
    let roots = sorted_re(quartic_real(&coeffs).unwrap());
    assert!(roots.iter().all(|z| z.is_finite()), "{roots:?}");
    assert_rel(roots[0], -1E150, 1E-10);
    for (z, expected) in roots[1..].iter().zip([1.0, 2.0, 3.0]) {
        assert_rel(*z, expected, 1E-9);
    }
}

/// Checks both solvers on real coefficients, `expected` matched greedily.
fn assert_both_solvers(coeffs: [f64; 5], expected: &[Complex64], tol: f64) {
    for roots in [
        quartic_real(&coeffs).unwrap(),
        quartic(&coeffs.map(|c| complex!(c))).unwrap(),
    ] {
        assert!(
            check_roots(roots.to_vec(), expected.to_vec(), tol),
            "{coeffs:?}: {roots:?}"
        );
    }
}

#[test]
fn extreme_cubic_coefficient() {
    let _ = simple_logger::init_with_level(log::Level::Debug);
    // x^4 + 1e150 x^3 + x^2 + x + 1, one root near -1e150, the others near
    // the cube roots of -1e-150
    let coeffs = [1.0, 1.0, 1.0, 1E150, 1.0];
    for roots in [
        quartic_real(&coeffs).unwrap(),
        quartic(&coeffs.map(|c| complex!(c))).unwrap(),
    ] {
        assert!(roots.iter().all(|z| z.is_finite()), "{roots:?}");
        let big = roots.iter().filter(|z| z.norm() > 1.0).collect::<Vec<_>>();
        assert_eq!(big.len(), 1, "{roots:?}");
        assert_rel(big[0].re, -1E150, 1E-12);
        for z in roots.iter().filter(|z| z.norm() <= 1.0) {
            assert_rel(z.norm(), 1E-50, 1E-10);
        }
    }
}

#[test]
fn huge_equal_coefficients() {
    // 1e307 (x^4 + x^3 + x^2 + x + 1), roots are the fifth roots of unity
    let expected = (1..5)
        .map(|k| Complex64::from_polar(1.0, f64::from(k) * std::f64::consts::TAU / 5.0))
        .collect::<Vec<_>>();
    assert_both_solvers([1E307; 5], &expected, 1E-12);
}

#[test]
fn tiny_coefficients() {
    // x^4 + 1e-300 (x^3 + x^2 + x + 1), roots close to the fourth roots of -1e-300
    let coeffs = [1E-300, 1E-300, 1E-300, 1E-300, 1.0];
    let r = 1E-75;
    let expected = [1.0, 3.0, 5.0, 7.0]
        .map(|k| Complex64::from_polar(r, k * std::f64::consts::FRAC_PI_4))
        .to_vec();
    assert_both_solvers(coeffs, &expected, 1E-9 * r);
}

#[test]
fn resolvent_needs_second_rescaling() {
    let _ = simple_logger::init_with_level(log::Level::Trace);
    // x^4 + x^3 + 1e300 x^2 + x + 1, the dominant factor is close to
    // x^2 + x + 1e300 and its roots -0.5 ± 1e150 i
    let coeffs = [1.0, 1.0, 1E300, 1.0, 1.0];
    for roots in [
        quartic_real(&coeffs).unwrap(),
        quartic(&coeffs.map(|c| complex!(c))).unwrap(),
    ] {
        assert!(roots.iter().all(|z| z.is_finite()), "{roots:?}");
        let mut big = roots.iter().filter(|z| z.norm() > 1.0).collect::<Vec<_>>();
        big.sort_by(|z, w| z.im.total_cmp(&w.im));
        assert_eq!(big.len(), 2, "{roots:?}");
        assert_eq!(*big[0], big[1].conj(), "{roots:?}");
        assert!((big[1].re + 0.5).abs() < 1E-6, "{roots:?}");
        assert_rel(big[1].im, 1E150, 1E-12);
    }
}

#[test]
fn unrepresentable_roots() {
    // normalizing overflows
    let coeffs = [1.0, 0.0, 0.0, 0.0, 1E-310];
    assert_eq!(quartic_real(&coeffs), Err(Error::Overflow));
    assert_eq!(quartic(&coeffs.map(|c| complex!(c))), Err(Error::Overflow));
}

#[test]
fn zero_constant_term() {
    let coeffs = [
        0.0,
        -13.968_966_072_700_297,
        131.143_006_719_181_7,
        -22.342_459_712_735_774,
        0.960_400_000_000_000_1,
    ];
    let roots = quartic_real(&coeffs).unwrap();
    assert!(roots.contains(&complex!(0.0)), "{roots:?}");
}

#[test]
fn smallest_positive_time() {
    let coeffs = [
        0.372_155_033_079_383_14,
        -13.968_966_072_700_297,
        131.143_006_719_181_7,
        -22.342_459_712_735_774,
        0.960_400_000_000_000_1,
    ];
    let roots = quartic_real(&coeffs).unwrap();
    let t = smallest_positive_real_root(&roots, RealTolerance::default()).unwrap();
    assert_rel(t, 0.048_943_195_217_641_386, 1E-4);
}

#[test]
fn not_a_quartic() {
    assert_eq!(quartic_real(&[1.0, 2.0, 3.0, 4.0, 0.0]), Err(Error::NotQuartic));
    assert_eq!(
        quartic(&[complex!(1.0), complex!(2.0), complex!(3.0), complex!(4.0), complex!(0.0)]),
        Err(Error::NotQuartic)
    );
    assert_eq!(
        quartic_real(&[1.0, 2.0, f64::INFINITY, 4.0, 1.0]),
        Err(Error::NonFinite { degree: 2 })
    );
}
