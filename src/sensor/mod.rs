//! ISFET sensor potential model.
//!
//! The measured voltage between the reference electrode and the ISFET source is
//! compared against a baseline `k0TP`:
//!
//! - `k0T = k0 + k2 * t` is the temperature-adjusted reference potential
//! - `pcorr` is the lab-derived pressure response, a polynomial in pressure (dbar)
//! - `k0TP = k0T + pcorr`
//!
//! Pressure coefficients are supplied highest degree first. Before evaluation a
//! zero constant term is appended, so the correction is exactly `0.0` at the
//! surface whatever the calibration says.

use crate::chemistry::{FARADAY, GAS_CONSTANT, LN_10};

/// Build the descending-power pressure polynomial from calibration coefficients.
///
/// The returned vector has one more element than `coeffs`; the last one (the
/// constant term) is always `0.0`.
pub fn pressure_polynomial(coeffs: &[f64]) -> Vec<f64> {
    let mut pc = Vec::with_capacity(coeffs.len() + 1);
    pc.extend_from_slice(coeffs);
    pc.push(0.0);
    pc
}

/// Evaluate a descending-power polynomial at `x` using Horner's method.
///
/// An empty coefficient slice evaluates to `0.0`.
pub fn horner(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Pressure correction (V) for a sensor at `p_dbar`.
pub fn pressure_correction(coeffs: &[f64], p_dbar: f64) -> f64 {
    horner(&pressure_polynomial(coeffs), p_dbar)
}

/// Temperature-adjusted reference potential `k0 + k2 * t` (V).
pub fn reference_potential(k0: f64, k2: f64, t: f64) -> f64 {
    k0 + k2 * t
}

/// Nernst slope `R * Tk / F * ln 10` (V per pH unit).
pub fn nernst_slope(tk: f64) -> f64 {
    GAS_CONSTANT * tk / FARADAY * LN_10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appended_polynomial_has_zero_constant() {
        assert_eq!(pressure_polynomial(&[]), vec![0.0]);
        assert_eq!(pressure_polynomial(&[1.5, -2.0]), vec![1.5, -2.0, 0.0]);
    }

    #[test]
    fn horner_descending_powers() {
        // 2x^2 - 3x + 1 at x = 4
        assert_eq!(horner(&[2.0, -3.0, 1.0], 4.0), 21.0);
        assert_eq!(horner(&[], 4.0), 0.0);
    }

    #[test]
    fn correction_is_zero_at_surface() {
        for coeffs in [&[][..], &[0.0, 0.0], &[3.2e-9, -1.1e-5, 4.0e-3], &[1e6]] {
            assert_eq!(pressure_correction(coeffs, 0.0), 0.0);
        }
    }

    #[test]
    fn correction_at_depth() {
        // a*p^2 + b*p with a = 1e-8, b = 2e-5 at 1000 dbar
        let v = pressure_correction(&[1e-8, 2e-5], 1000.0);
        assert!((v - 0.03).abs() < 1e-12);
    }

    #[test]
    fn nernst_slope_near_59_mv_at_25c() {
        let s = nernst_slope(298.15);
        assert!((s - 0.059_16).abs() < 1e-4, "{s}");
    }
}
