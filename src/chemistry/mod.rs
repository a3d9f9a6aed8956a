//! Chemistry module: physical constants and thermodynamic stage functions for seawater pH.
//!
//! This module provides:
//! - Fundamental constants (gas constant, Faraday constant, Celsius/Kelvin offset)
//! - Major-ion composition of seawater as a function of practical salinity
//!   (ionic strength, total sulfate, total chloride)
//! - The bisulfate dissociation constant KHSO4 at reference pressure and its
//!   pressure correction
//! - The mean activity coefficient of HCl (extended Debye–Hückel form) and its
//!   pressure correction
//!
//! Units conventions:
//! - Temperature `t` is in-situ °C, `tk` is Kelvin (`t + KELVIN_OFFSET`)
//! - Pressure `p_dbar` is decibars; it is converted to bars (`/ 10`) where the
//!   partial molar volume terms need it
//! - Ionic strength and total chloride are mol/kg-H2O
//! - Total sulfate and KHSO4 are mol/kg-seawater
//!
//! Sources:
//! - Dickson, Sabine & Christian (2007), Guide to best practices for ocean CO2
//!   measurements, Chap. 5 (Table 2, Eq. 33, Eq. 34)
//! - Millero (1983), Chemical Oceanography vol. 8 (partial molar volumes and
//!   compressibilities of HSO4- and HCl)
//! - Khoo et al. (1977) doi:10.1021/ac50009a016 and Martz et al. (2010)
//!   doi:10.4319/lom.2010.8.172, p175 (Debye–Hückel slope). The printed second
//!   coefficient in Martz et al. is a typo; it is 6.7524e-4, not e-6.
//!
//! Design notes:
//! - Every function is a scalar, closed-form expression; the calculator maps them
//!   elementwise over the observation arrays
//! - Nothing here clamps or guards its inputs: validation happens once, before the
//!   pipeline runs (see `ph::calculator`)
//!
//! # Examples
//! ```rust
//! use isfet_ph_rs::chemistry::{ionic_strength, total_sulfate, KELVIN_OFFSET, khso4};
//!
//! let s = 35.0;
//! let ion_s = ionic_strength(s);
//! assert!(ion_s > 0.7 && ion_s < 0.73);
//! assert!(total_sulfate(s) > 0.028);
//! let k = khso4(25.0 + KELVIN_OFFSET, ion_s, s);
//! assert!(k > 0.0);
//! ```
//!
//! # Panics
//! None of the functions panic. Non-physical inputs produce NaN or infinities.
#![allow(clippy::excessive_precision)]

/// Universal gas constant R in J/(mol·K) (NIST CODATA).
pub const GAS_CONSTANT: f64 = 8.31446;
/// Faraday constant F in C/mol.
pub const FARADAY: f64 = 96485.0;
/// Offset between Celsius and Kelvin.
pub const KELVIN_OFFSET: f64 = 273.15;
/// Natural logarithm of 10, used to move between `ln` and `log10`.
pub const LN_10: f64 = std::f64::consts::LN_10;
/// Decibars per bar.
pub const DBAR_PER_BAR: f64 = 10.0;

// Dickson et al. 2007, Chap 5, Table 2 and Eq. 34
/// Ionic strength numerator factor (mol/kg-H2O per unit salinity).
pub const IONIC_STRENGTH_FACTOR: f64 = 19.924;
/// Ionic strength denominator salinity coefficient.
pub const IONIC_STRENGTH_SALINITY_COEFF: f64 = 1.005;
/// Mass fraction of dissolved salts per unit salinity (g/kg-seawater to kg/kg).
pub const SALT_MASS_FRACTION_PER_PSS: f64 = 0.001005;
/// Chlorinity to salinity ratio (S = 1.80655 Cl).
pub const SALINITY_PER_CHLORINITY: f64 = 1.80655;
/// Sulfate to chlorinity mass ratio.
pub const SULFATE_PER_CHLORINITY: f64 = 0.14;
/// Molar mass of SO4^2- (g/mol).
pub const M_SO4: f64 = 96.062;
/// Chloride to chlorinity mass ratio.
pub const CHLORIDE_PER_CHLORINITY: f64 = 0.99889;
/// Molar mass of Cl- (g/mol).
pub const M_CL: f64 = 35.453;

// Dickson et al. 2007, Chap 5, Eq. 33: ln KHSO4 coefficients.
pub const KHSO4_A0_INV_T: f64 = -4276.1;
pub const KHSO4_A0: f64 = 141.328;
pub const KHSO4_A0_LN_T: f64 = -23.093;
pub const KHSO4_A1_INV_T: f64 = -13856.0;
pub const KHSO4_A1: f64 = 324.57;
pub const KHSO4_A1_LN_T: f64 = -47.986;
pub const KHSO4_A2_INV_T: f64 = 35474.0;
pub const KHSO4_A2: f64 = -771.54;
pub const KHSO4_A2_LN_T: f64 = 114.723;
pub const KHSO4_A3_INV_T: f64 = -2698.0;
pub const KHSO4_A4_INV_T: f64 = 1776.0;

// Millero 1983: partial molar volume (cm3/mol) and compressibility of HSO4-.
pub const DELTA_V_HSO4: [f64; 3] = [-18.03, 0.0466, 0.000316];
pub const KAPPA_HSO4: [f64; 2] = [-4.53, 0.09];

// Khoo et al. 1977 fit, Martz et al. 2010: Debye–Hückel slope ADH(t).
pub const ADH: [f64; 3] = [0.49172143, 6.7524e-4, 3.4286e-6];
/// Ion-size term in the extended Debye–Hückel denominator.
pub const DEBYE_HUCKEL_B: f64 = 1.394;
/// Linear ionic-strength coefficient of log10 gamma HCl, `[c0, c1]` for `c0 + c1*t`.
pub const HCL_LINEAR_TERM: [f64; 2] = [0.08885, -0.000111];

// Millero 1983: partial molar volume of HCl in seawater (cm3/mol).
pub const DELTA_V_HCL: [f64; 3] = [17.85, 0.1044, -0.001316];

/// Ascending-power polynomial `c[0] + c[1]*t + c[2]*t^2 + ...`.
fn poly_ascending(c: &[f64], t: f64) -> f64 {
    c.iter().rev().fold(0.0, |acc, &k| acc * t + k)
}

/// Convert in-situ temperature (°C) to Kelvin.
pub fn kelvin(t: f64) -> f64 {
    KELVIN_OFFSET + t
}

/// Ionic strength of seawater (mol/kg-H2O), Dickson et al. 2007 Eq. 34.
///
/// Undefined at `s = 1000 / 1.005`; the calculator rejects salinities near that pole.
pub fn ionic_strength(s: f64) -> f64 {
    IONIC_STRENGTH_FACTOR * s / (1000.0 - IONIC_STRENGTH_SALINITY_COEFF * s)
}

/// Mass fraction of water in seawater, `1 - 0.001005 S` (kg-H2O per kg-seawater).
pub fn h2o_mass_fraction(s: f64) -> f64 {
    1.0 - SALT_MASS_FRACTION_PER_PSS * s
}

/// Mean total sulfate (mol/kg-seawater). Kept on the seawater scale because KHSO4 is.
pub fn total_sulfate(s: f64) -> f64 {
    (SULFATE_PER_CHLORINITY / M_SO4) * (s / SALINITY_PER_CHLORINITY)
}

/// Mean total chloride (mol/kg-H2O), the scale the HCl activity is expressed on.
pub fn total_chloride(s: f64) -> f64 {
    let per_kg_seawater = CHLORIDE_PER_CHLORINITY / M_CL * s / SALINITY_PER_CHLORINITY;
    per_kg_seawater / h2o_mass_fraction(s)
}

/// Bisulfate dissociation constant at T, S and reference pressure (mol/kg-seawater).
///
/// Dickson et al. 2007, Chap 5, Eq. 33. The trailing `ln(1 - 0.001005 S)` term
/// converts from mol/kg-H2O to mol/kg-seawater.
pub fn khso4(tk: f64, ion_s: f64, s: f64) -> f64 {
    let ln_tk = tk.ln();
    let sqrt_i = ion_s.sqrt();
    (KHSO4_A0_INV_T / tk + KHSO4_A0 + KHSO4_A0_LN_T * ln_tk
        + (KHSO4_A1_INV_T / tk + KHSO4_A1 + KHSO4_A1_LN_T * ln_tk) * sqrt_i
        + (KHSO4_A2_INV_T / tk + KHSO4_A2 + KHSO4_A2_LN_T * ln_tk) * ion_s
        + KHSO4_A3_INV_T / tk * ion_s.powf(1.5)
        + KHSO4_A4_INV_T / tk * ion_s.powi(2)
        + h2o_mass_fraction(s).ln())
    .exp()
}

/// Partial molar volume change of HSO4- dissociation (cm3/mol).
pub fn delta_v_hso4(t: f64) -> f64 {
    poly_ascending(&DELTA_V_HSO4, t)
}

/// Compressibility change of HSO4- dissociation (cm3/(mol·bar)).
pub fn kappa_hso4(t: f64) -> f64 {
    poly_ascending(&KAPPA_HSO4, t) / 1000.0
}

/// Natural-log pressure correction factor for KHSO4.
///
/// `p_dbar` is converted to bars here. The extra factor 10 in the denominator
/// takes cm3·bar to J.
pub fn ln_khso4_pressure_factor(t: f64, tk: f64, p_dbar: f64) -> f64 {
    let p_bar = p_dbar / DBAR_PER_BAR;
    (-delta_v_hso4(t) + 0.5 * kappa_hso4(t) * p_bar) * p_bar / (GAS_CONSTANT * 10.0 * tk)
}

/// KHSO4 corrected to in-situ pressure (mol/kg-seawater).
pub fn khso4_tps(khso4_ref: f64, t: f64, tk: f64, p_dbar: f64) -> f64 {
    khso4_ref * ln_khso4_pressure_factor(t, tk, p_dbar).exp()
}

/// Debye–Hückel slope as a quadratic in temperature (°C).
pub fn adh(t: f64) -> f64 {
    poly_ascending(&ADH, t)
}

/// log10 of the mean HCl activity coefficient at T, S and reference pressure.
pub fn log10_gamma_hcl(t: f64, ion_s: f64) -> f64 {
    let sqrt_i = ion_s.sqrt();
    -adh(t) * sqrt_i / (1.0 + DEBYE_HUCKEL_B * sqrt_i) + poly_ascending(&HCL_LINEAR_TERM, t) * ion_s
}

/// Partial molar volume of HCl in seawater (cm3/mol).
pub fn delta_v_hcl(t: f64) -> f64 {
    poly_ascending(&DELTA_V_HCL, t)
}

/// log10 gamma HCl corrected to in-situ pressure.
///
/// Halved because gamma is a mean activity coefficient; the final `/ 10`
/// converts cm3·bar to J.
pub fn log10_gamma_hcl_tp(t: f64, tk: f64, ion_s: f64, p_dbar: f64) -> f64 {
    let p_bar = p_dbar / DBAR_PER_BAR;
    log10_gamma_hcl(t, ion_s) + delta_v_hcl(t) * p_bar / (GAS_CONSTANT * tk * LN_10) / 2.0 / 10.0
}
