use serde::{Deserialize, Serialize};

/// Sensor calibration computed upstream: reference potential, its temperature
/// slope and the pressure-response polynomial (highest degree first).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub k0: f64,
    pub k2: f64,
    #[serde(default)]
    pub pressure_coeffs: Vec<f64>,
}

impl Calibration {
    pub fn new(k0: f64, k2: f64, pressure_coeffs: Vec<f64>) -> Self {
        Self {
            k0,
            k2,
            pressure_coeffs,
        }
    }
}

/// Index-aligned sensor and CTD readings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Observations {
    /// Reference electrode to ISFET source potential [V]
    pub voltage: Vec<f64>,
    /// Pressure [dbar]
    pub pressure: Vec<f64>,
    /// In-situ temperature [°C]
    pub temperature: Vec<f64>,
    /// Practical salinity [PSS]
    pub salinity: Vec<f64>,
}

impl Observations {
    /// Length of the voltage series. Only meaningful once the four series
    /// have been checked to agree.
    pub fn len(&self) -> usize {
        self.voltage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voltage.is_empty()
    }

    /// Iterate rows as `Sample`s. Stops at the shortest series.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.voltage
            .iter()
            .zip(&self.pressure)
            .zip(&self.temperature)
            .zip(&self.salinity)
            .map(|(((&voltage, &pressure), &temperature), &salinity)| Sample {
                voltage,
                pressure,
                temperature,
                salinity,
            })
    }
}

/// One row of observations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub voltage: f64,
    pub pressure: f64,
    pub temperature: f64,
    pub salinity: f64,
}

/// pH of one row on both scales (mol/kg-seawater).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhPoint {
    pub ph_free: f64,
    pub ph_total: f64,
}

/// pH series aligned index-for-index with the `Observations` they came from.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PhResult {
    pub ph_free: Vec<f64>,
    pub ph_total: Vec<f64>,
}

impl PhResult {
    pub fn len(&self) -> usize {
        self.ph_free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ph_free.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = PhPoint> + '_ {
        self.ph_free
            .iter()
            .zip(&self.ph_total)
            .map(|(&ph_free, &ph_total)| PhPoint { ph_free, ph_total })
    }
}

impl FromIterator<PhPoint> for PhResult {
    fn from_iter<I: IntoIterator<Item = PhPoint>>(iter: I) -> Self {
        let (ph_free, ph_total) = iter.into_iter().map(|p| (p.ph_free, p.ph_total)).unzip();
        Self { ph_free, ph_total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_follow_row_order() {
        let obs = Observations {
            voltage: vec![-0.94, -0.95],
            pressure: vec![0.0, 10.0],
            temperature: vec![21.0, 20.0],
            salinity: vec![30.0, 30.5],
        };
        let rows: Vec<Sample> = obs.samples().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            Sample {
                voltage: -0.95,
                pressure: 10.0,
                temperature: 20.0,
                salinity: 30.5
            }
        );
    }

    #[test]
    fn result_collects_points_in_order() {
        let points = [
            PhPoint {
                ph_free: 7.9,
                ph_total: 7.8,
            },
            PhPoint {
                ph_free: 8.0,
                ph_total: 7.9,
            },
        ];
        let result: PhResult = points.into_iter().collect();
        assert_eq!(result.ph_free, vec![7.9, 8.0]);
        assert_eq!(result.ph_total, vec![7.8, 7.9]);
        assert_eq!(result.rows().collect::<Vec<_>>(), points);
    }
}
