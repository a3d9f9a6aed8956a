use crate::chemistry::*;
use crate::error::PhError;
use crate::models::{Calibration, Observations, PhPoint, PhResult, Sample};
use crate::sensor::{horner, nernst_slope, pressure_polynomial, reference_potential};
use serde::Serialize;
use tracing::{debug, trace, warn};

/// Salinity at which the ionic strength denominator and the H2O mass fraction
/// reach zero. Salinities at or above it are rejected.
pub const SALINITY_POLE: f64 = 1000.0 / IONIC_STRENGTH_SALINITY_COEFF;

/// Every intermediate quantity of the pipeline for one row.
///
/// - `ionic_strength`, `total_chloride`: mol/kg-H2O
/// - `total_sulfate`, `khso4`, `khso4_tps`: mol/kg-seawater
/// - `pressure_correction`, `k0tp`: volts
/// - `ph_free`, `ph_total`: mol/kg-seawater scale
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct DetailedRow {
    pub ionic_strength: f64,
    pub total_sulfate: f64,
    pub total_chloride: f64,
    pub khso4: f64,
    pub khso4_tps: f64,
    pub log10_gamma_hcl: f64,
    pub log10_gamma_hcl_tp: f64,
    pub pressure_correction: f64,
    pub k0tp: f64,
    pub ph_free: f64,
    pub ph_total: f64,
}

impl DetailedRow {
    pub fn point(&self) -> PhPoint {
        PhPoint {
            ph_free: self.ph_free,
            ph_total: self.ph_total,
        }
    }

    fn is_finite(&self) -> bool {
        self.ph_free.is_finite() && self.ph_total.is_finite()
    }
}

/// Run the full pipeline for one row. `pc` is the already zero-extended
/// pressure polynomial (see `sensor::pressure_polynomial`).
fn evaluate(sample: &Sample, k0: f64, k2: f64, pc: &[f64]) -> DetailedRow {
    let Sample {
        voltage,
        pressure,
        temperature: t,
        salinity: s,
    } = *sample;
    let tk = kelvin(t);

    // Stage 1: major-ion composition
    let ion_s = ionic_strength(s);
    let s_total = total_sulfate(s);
    let cl_total = total_chloride(s);

    // Stage 2: bisulfate
    let k_hso4 = khso4(tk, ion_s, s);
    let k_hso4_tps = khso4_tps(k_hso4, t, tk, pressure);

    // Stage 3: HCl activity
    let gamma = log10_gamma_hcl(t, ion_s);
    let gamma_tp = log10_gamma_hcl_tp(t, tk, ion_s, pressure);

    // Stage 4: sensor baseline
    let pcorr = horner(pc, pressure);
    let k0tp = reference_potential(k0, k2, t) + pcorr;

    // Stage 5: mol/kg-H2O free scale, then mol/kg-seawater, then total scale
    let ph_free_h2o =
        (voltage - k0tp) / nernst_slope(tk) + cl_total.ln() / LN_10 + 2.0 * gamma_tp;
    let ph_free = ph_free_h2o - h2o_mass_fraction(s).log10();
    let ph_total = ph_free - (1.0 + s_total / k_hso4_tps).log10();

    DetailedRow {
        ionic_strength: ion_s,
        total_sulfate: s_total,
        total_chloride: cl_total,
        khso4: k_hso4,
        khso4_tps: k_hso4_tps,
        log10_gamma_hcl: gamma,
        log10_gamma_hcl_tp: gamma_tp,
        pressure_correction: pcorr,
        k0tp,
        ph_free,
        ph_total,
    }
}

/// Check lengths and physical bounds of the four input series and the
/// pressure coefficients. Runs to completion before anything is computed.
pub fn validate(
    voltage: &[f64],
    pressure: &[f64],
    temperature: &[f64],
    salinity: &[f64],
    pressure_coeffs: &[f64],
) -> Result<(), PhError> {
    let n = voltage.len();
    if pressure.len() != n || temperature.len() != n || salinity.len() != n {
        return Err(PhError::ShapeMismatch {
            voltage: n,
            pressure: pressure.len(),
            temperature: temperature.len(),
            salinity: salinity.len(),
        });
    }

    if let Some(index) = voltage.iter().position(|v| !v.is_finite()) {
        return Err(PhError::NonFiniteInput {
            field: "voltage",
            index,
        });
    }
    if let Some(index) = pressure.iter().position(|p| !p.is_finite()) {
        return Err(PhError::NonFiniteInput {
            field: "pressure",
            index,
        });
    }
    if let Some((index, &value)) = temperature
        .iter()
        .enumerate()
        .find(|(_, t)| !t.is_finite() || **t <= -KELVIN_OFFSET)
    {
        return Err(PhError::InvalidTemperature { index, value });
    }
    if let Some((index, &value)) = salinity
        .iter()
        .enumerate()
        .find(|(_, s)| !s.is_finite() || **s <= 0.0 || **s >= SALINITY_POLE)
    {
        return Err(PhError::InvalidSalinity { index, value });
    }
    if let Some(index) = pressure_coeffs.iter().position(|c| !c.is_finite()) {
        return Err(PhError::NonFiniteCoefficient { index });
    }
    Ok(())
}

/// Validate, then evaluate every row. Shared by all batch entry points.
fn compute_rows(
    voltage: &[f64],
    pressure: &[f64],
    temperature: &[f64],
    salinity: &[f64],
    k0: f64,
    k2: f64,
    pressure_coeffs: &[f64],
) -> Result<Vec<DetailedRow>, PhError> {
    validate(voltage, pressure, temperature, salinity, pressure_coeffs)
        .inspect_err(|e| warn!(error = %e, "rejecting ISFET input"))?;

    debug!(
        rows = voltage.len(),
        pressure_coeffs = pressure_coeffs.len(),
        "computing ISFET pH"
    );

    let pc = pressure_polynomial(pressure_coeffs);
    let rows: Vec<DetailedRow> = voltage
        .iter()
        .zip(pressure)
        .zip(temperature)
        .zip(salinity)
        .map(|(((&voltage, &pressure), &temperature), &salinity)| {
            let sample = Sample {
                voltage,
                pressure,
                temperature,
                salinity,
            };
            let row = evaluate(&sample, k0, k2, &pc);
            trace!(?sample, ph_free = row.ph_free, ph_total = row.ph_total, "row");
            row
        })
        .collect();

    if let Some(index) = rows.iter().position(|r| !r.is_finite()) {
        warn!(index, "non-finite pH");
        return Err(PhError::NonFiniteResult { index });
    }
    Ok(rows)
}

/// Compute pH on the free and total scales for index-aligned series.
///
/// Parameters:
/// - `voltage`: reference electrode to ISFET source potential [V]
/// - `pressure`: [dbar]
/// - `temperature`: in-situ [°C]
/// - `salinity`: practical salinity [PSS]
/// - `k0`: sensor reference potential at 0 °C [V]
/// - `k2`: linear temperature coefficient of the reference potential [V/°C]
/// - `pressure_coeffs`: pressure response polynomial, highest degree first,
///   without constant term (a zero constant is appended)
///
/// Returns `(ph_free, ph_total)`, both on the mol/kg-seawater scale and of the
/// same length as the inputs. Empty inputs give empty outputs.
///
/// Errors:
/// - `ShapeMismatch` when the four series differ in length
/// - `InvalidTemperature`, `InvalidSalinity`, `NonFiniteInput`,
///   `NonFiniteCoefficient` for out-of-domain values
/// - `NonFiniteResult` if a row still evaluates to NaN or infinity
pub fn calculate(
    voltage: &[f64],
    pressure: &[f64],
    temperature: &[f64],
    salinity: &[f64],
    k0: f64,
    k2: f64,
    pressure_coeffs: &[f64],
) -> Result<(Vec<f64>, Vec<f64>), PhError> {
    let result = calculate_rows(voltage, pressure, temperature, salinity, k0, k2, pressure_coeffs)?;
    Ok((result.ph_free, result.ph_total))
}

fn calculate_rows(
    voltage: &[f64],
    pressure: &[f64],
    temperature: &[f64],
    salinity: &[f64],
    k0: f64,
    k2: f64,
    pressure_coeffs: &[f64],
) -> Result<PhResult, PhError> {
    let rows = compute_rows(voltage, pressure, temperature, salinity, k0, k2, pressure_coeffs)?;
    Ok(rows.iter().map(DetailedRow::point).collect())
}

/// `calculate` over the serde model types.
pub fn calculate_observations(obs: &Observations, cal: &Calibration) -> Result<PhResult, PhError> {
    calculate_rows(
        &obs.voltage,
        &obs.pressure,
        &obs.temperature,
        &obs.salinity,
        cal.k0,
        cal.k2,
        &cal.pressure_coeffs,
    )
}

/// Like `calculate_observations`, but keeps every intermediate quantity per row.
pub fn calculate_detailed(
    obs: &Observations,
    cal: &Calibration,
) -> Result<Vec<DetailedRow>, PhError> {
    compute_rows(
        &obs.voltage,
        &obs.pressure,
        &obs.temperature,
        &obs.salinity,
        cal.k0,
        cal.k2,
        &cal.pressure_coeffs,
    )
}

/// Compute a single row without validation. Out-of-domain input yields NaN
/// or infinities instead of an error.
pub fn ph_point(sample: &Sample, cal: &Calibration) -> PhPoint {
    evaluate(sample, cal.k0, cal.k2, &pressure_polynomial(&cal.pressure_coeffs)).point()
}
