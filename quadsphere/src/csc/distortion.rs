//! Curvilinear face distortion between the tangential and CSC planes.
//!
//! Both directions are the polynomial approximations published in FITS WCS
//! Paper II (Calabretta & Greisen 2002, section 5.6.2), which is also what
//! the COBE data analysis software evaluates. They are not exact inverses:
//! the round-trip closure error over a whole face averages about 4e-5 and
//! peaks just below 2.4e-4 near the face centre and corners.
//!
//! Each function computes one axis. Evaluate again with the arguments swapped
//! for the other.

const GAMMA_STAR: f64 = 1.37484847732;
const M: f64 = 0.004869491981;
const GAMMA: f64 = -0.13161671474;
const OMEGA1: f64 = -0.159596235474;
const C00: f64 = 0.141189631152;
const C10: f64 = 0.0809701286525;
const C01: f64 = -0.281528535557;
const C20: f64 = -0.178251207466;
const C11: f64 = 0.15384112876;
const C02: f64 = 0.106959469314;
const D0: f64 = 0.0759196200467;
const D1: f64 = -0.0217762490699;

// P[i][j] multiplies X^(2i) Y^(2j); rows shrink so that i + j <= 6.
const P: [&[f64]; 7] = [
    &[
        -0.27292696,
        -0.02819452,
        0.27058160,
        -0.60441560,
        0.93412077,
        -0.63915306,
        0.14381585,
    ],
    &[
        -0.07629969,
        -0.01471565,
        -0.56800938,
        1.50880086,
        -1.41601920,
        0.52032238,
    ],
    &[
        -0.22797056,
        0.48051509,
        0.30803317,
        -0.93678576,
        0.33887446,
    ],
    &[0.54852384, -1.74114454, 0.98938102, 0.08693841],
    &[-0.62930065, 1.71547508, -0.83180469],
    &[0.25795794, -0.53022337],
    &[0.02584375],
];

/// Tangential (χ, ψ) to the CSC `x` coordinate.
///
/// `forward_distort(±1, ψ)` is exactly ±1 and `forward_distort(0, ψ)` is 0,
/// so face edges and centre lines are preserved.
pub fn forward_distort(chi: f64, psi: f64) -> f64 {
    let chi2 = chi * chi;
    let psi2 = psi * psi;
    // Both vanish on the face edges.
    let chi_rem = 1.0 - chi2;
    let psi_rem = 1.0 - psi2;

    let omega = C00 + chi2 * (C10 + C20 * chi2) + psi2 * (C01 + C11 * chi2 + C02 * psi2);
    let along_edge = GAMMA_STAR + (1.0 - GAMMA_STAR) * chi2;
    let across = psi2 * (GAMMA + (M - GAMMA) * chi2 + psi_rem * omega)
        + chi2 * (OMEGA1 - chi_rem * (D0 + D1 * chi2));

    chi * (along_edge + chi_rem * across)
}

/// CSC (x, y) back to the tangential `χ` coordinate.
///
/// Evaluates `x + x(1 - x²) Σ P[i][j] x^(2i) y^(2j)` over `i + j <= 6`,
/// Horner in y² within each row and in x² across rows.
pub fn inverse_distort(x: f64, y: f64) -> f64 {
    let x2 = x * x;
    let y2 = y * y;

    let sum = P.iter().rev().fold(0.0, |acc, row| {
        let row_value = row.iter().rev().fold(0.0, |h, p| h * y2 + p);
        acc * x2 + row_value
    });

    x + x * (1.0 - x2) * sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficient_table_is_triangular() {
        for (i, row) in P.iter().enumerate() {
            assert_eq!(row.len(), 7 - i, "row {}", i);
        }
    }

    #[test]
    fn test_forward_distort_fixes_edges_and_centre() {
        for psi in [-1.0, -0.6, 0.0, 0.3, 1.0] {
            assert_eq!(forward_distort(1.0, psi), 1.0);
            assert_eq!(forward_distort(-1.0, psi), -1.0);
            assert_eq!(forward_distort(0.0, psi), 0.0);
        }
    }

    #[test]
    fn test_inverse_distort_fixes_edges_and_centre() {
        for y in [-1.0, -0.6, 0.0, 0.3, 1.0] {
            assert_eq!(inverse_distort(1.0, y), 1.0);
            assert_eq!(inverse_distort(-1.0, y), -1.0);
            assert_eq!(inverse_distort(0.0, y), 0.0);
        }
    }

    #[test]
    fn test_distortion_is_odd_in_first_argument() {
        for &(a, b) in &[(0.2, 0.7), (0.55, -0.1), (0.9, 0.9)] {
            assert_eq!(forward_distort(-a, b), -forward_distort(a, b));
            assert_eq!(inverse_distort(-a, b), -inverse_distort(a, b));
            assert_eq!(forward_distort(a, -b), forward_distort(a, b));
        }
    }

    #[test]
    fn test_forward_distort_is_monotonic_on_axis() {
        let mut prev = forward_distort(-1.0, 0.0);
        for k in 1..=200 {
            let chi = -1.0 + k as f64 / 100.0;
            let x = forward_distort(chi, 0.0);
            assert!(x > prev, "not increasing at chi={}", chi);
            prev = x;
        }
    }

    #[test]
    fn test_distortion_closure() {
        let expected_error = 2.4e-4;

        for row in 0..=198 {
            for col in 0..=198 {
                let chi = -0.99 + col as f64 * 0.01;
                let psi = -0.99 + row as f64 * 0.01;

                let x = forward_distort(chi, psi);
                let y = forward_distort(psi, chi);
                let chi1 = inverse_distort(x, y);
                let psi1 = inverse_distort(y, x);

                assert!(
                    (chi1 - chi).abs() <= expected_error,
                    "chi closure {} at ({}, {})",
                    chi1 - chi,
                    chi,
                    psi
                );
                let error = ((chi1 - chi).powi(2) + (psi1 - psi).powi(2)).sqrt();
                assert!(
                    error <= expected_error,
                    "closure {} at ({}, {})",
                    error,
                    chi,
                    psi
                );
            }
        }
    }
}
