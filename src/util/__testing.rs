//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::Itertools;
use num::complex::Complex64;

use super::float::f64_make_nonzero;

struct RandStreamF64 {
    state: Rng,
}

impl RandStreamF64 {
    fn new(seed: u64) -> Self {
        Self {
            state: Rng::with_seed(seed),
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(f64_make_nonzero(self.state.f64()))
    }
}

/// Uniformly distributed real numbers in `[min, max)`, as complex numbers.
pub struct RandStreamR64 {
    real_stream: RandStreamF64,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        Self {
            real_stream: RandStreamF64::new(seed),
            min,
            max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = (self.real_stream.next()?).mul_add(self.max - self.min, self.min);
        Some(Complex64::new(re, 0.0))
    }
}

/// Complex numbers uniformly distributed in a rectangle.
pub struct RandStreamC64Cartesian {
    real_stream: RandStreamF64,
    min_re: f64,
    max_re: f64,
    min_im: f64,
    max_im: f64,
}

impl RandStreamC64Cartesian {
    #[must_use]
    pub fn new(seed: u64, min_re: f64, max_re: f64, min_im: f64, max_im: f64) -> Self {
        assert!(
            min_re <= max_re && min_im <= max_im,
            "minimum should be smaller or equal to maximum"
        );
        Self {
            real_stream: RandStreamF64::new(seed),
            min_re,
            max_re,
            min_im,
            max_im,
        }
    }
}

impl Iterator for RandStreamC64Cartesian {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = (self.real_stream.next()?).mul_add(self.max_re - self.min_re, self.min_re);
        let im = (self.real_stream.next()?).mul_add(self.max_im - self.min_im, self.min_im);
        Some(Complex64::new(re, im))
    }
}

/// Pairs each number of the upstream with its complex conjugate.
pub struct RandStreamConjugate64<I: Iterator<Item = Complex64>> {
    upstream: I,
}

impl<I: Iterator<Item = Complex64>> RandStreamConjugate64<I> {
    pub const fn new(upstream: I) -> Self {
        Self { upstream }
    }
}

impl<I: Iterator<Item = Complex64>> Iterator for RandStreamConjugate64<I> {
    type Item = (Complex64, Complex64);

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.upstream.next()?;
        Some((c, c.conj()))
    }
}

/// Coefficient vectors with components uniformly distributed in `[min, max)`.
pub fn random_coeffs(seed: u64, min: f64, max: f64) -> impl Iterator<Item = [f64; 5]> {
    let mut rng = Rng::with_seed(seed);
    std::iter::repeat_with(move || [(); 5].map(|()| rng.f64().mul_add(max - min, min)))
}

/// Coefficients of `(x - r0)(x - r1)(x - r2)(x - r3)` in ascending degree.
#[must_use]
pub fn poly_from_roots(roots: &[Complex64; 4]) -> [Complex64; 5] {
    let mut coeffs = [Complex64::new(0.0, 0.0); 5];
    coeffs[0] = Complex64::new(1.0, 0.0);
    for (n, r) in roots.iter().enumerate() {
        // multiply the degree n polynomial by (x - r)
        for k in (1..=n + 1).rev() {
            coeffs[k] = coeffs[k - 1] - r * coeffs[k];
        }
        coeffs[0] = -r * coeffs[0];
    }
    coeffs
}

/// Generate one test case where the roots are known and can be compared
pub fn test_case_roots(
    roots_stream: impl Iterator<Item = Complex64>,
    mut scale_stream: impl Iterator<Item = Complex64>,
) -> ([Complex64; 5], Vec<Complex64>) {
    let roots = roots_stream.take(4).collect_vec();
    let scale = scale_stream.next().expect("rng stream should be infinite");
    let coeffs = poly_from_roots(&[roots[0], roots[1], roots[2], roots[3]]).map(|c| c * scale);
    (coeffs, roots)
}

/// Generate one test case with real coefficients, the roots are two pairs of
/// complex conjugates.
pub fn test_case_conj_roots(
    roots_stream: impl Iterator<Item = Complex64>,
    mut scale_stream: impl Iterator<Item = Complex64>,
) -> ([f64; 5], Vec<Complex64>) {
    let roots = RandStreamConjugate64::new(roots_stream)
        .take(2)
        .flat_map(|(r1, r2)| [r1, r2])
        .collect_vec();
    let scale = scale_stream.next().expect("rng stream should be infinite").re;
    let coeffs = poly_from_roots(&[roots[0], roots[1], roots[2], roots[3]]).map(|c| c.re * scale);
    (coeffs, roots)
}

/// Generate one test case where the first root is repeated `multiplicity`
/// more times.
pub fn test_case_multiple_roots(
    roots_stream: impl Iterator<Item = Complex64>,
    mut scale_stream: impl Iterator<Item = Complex64>,
    multiplicity: usize,
) -> ([Complex64; 5], Vec<Complex64>) {
    let mut roots = roots_stream.take(4 - multiplicity).collect_vec();
    let first_root = roots[0];
    for _ in 0..multiplicity {
        roots.push(first_root);
    }
    let scale = scale_stream.next().expect("rng stream should be infinite");
    let coeffs = poly_from_roots(&[roots[0], roots[1], roots[2], roots[3]]).map(|c| c * scale);
    (coeffs, roots)
}

/// Check that all roots have been found
#[must_use]
pub fn check_roots(roots1: Vec<Complex64>, mut roots2: Vec<Complex64>, tol: f64) -> bool {
    if roots1.len() != roots2.len() {
        return false;
    }

    for r1 in roots1 {
        let mut best_idx = 0;
        let mut best_d = f64::MAX;
        for (i, r2) in roots2.iter().enumerate() {
            let d = (r1 - r2).norm();
            if d < best_d {
                best_idx = i;
                best_d = d;
            }
        }
        if best_d > tol {
            return false;
        }
        roots2.remove(best_idx);
    }
    true
}
