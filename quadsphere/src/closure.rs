//! Closure-error statistics for the CSC distortion polynomials.
//!
//! [`forward_distort`] and [`inverse_distort`] are independent polynomial
//! fits, so mapping a tangential point (χ, ψ) forward and back lands a little
//! off the start. This module measures that drift over a regular lattice on
//! the face plane.

use std::fmt;
use std::time::Instant;

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::csc::{forward_distort, inverse_distort};
use crate::error::{ProjectionError, ProjectionResult};

/// Distance between (χ, ψ) and its image after a forward then inverse
/// distortion of both axes.
pub fn closure_error(chi: f64, psi: f64) -> f64 {
    let x = forward_distort(chi, psi);
    let y = forward_distort(psi, chi);
    let chi1 = inverse_distort(x, y);
    let psi1 = inverse_distort(y, x);
    ((chi1 - chi).powi(2) + (psi1 - psi).powi(2)).sqrt()
}

/// Lattice used by [`sweep`].
///
/// The lattice has `grid` × `grid` points spread evenly over
/// [-extent, extent]², both ends included.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosureConfig {
    pub grid: usize,
    pub extent: f64,
}

impl Default for ClosureConfig {
    fn default() -> Self {
        Self {
            grid: 200,
            extent: 1.0,
        }
    }
}

impl ClosureConfig {
    pub fn new(grid: usize, extent: f64) -> Self {
        Self { grid, extent }
    }

    pub fn validate(&self) -> ProjectionResult<()> {
        if self.grid < 2 {
            return Err(ProjectionError::invalid_parameter(format!(
                "grid must be at least 2, got {}",
                self.grid
            )));
        }
        if !(self.extent > 0.0 && self.extent <= 1.0) {
            return Err(ProjectionError::invalid_parameter(format!(
                "extent must lie in (0, 1], got {}",
                self.extent
            )));
        }
        Ok(())
    }

    #[inline]
    fn spacing(&self) -> f64 {
        2.0 * self.extent / (self.grid - 1) as f64
    }

    #[inline]
    fn coordinate(&self, index: usize) -> f64 {
        index as f64 * self.spacing() - self.extent
    }
}

/// Summary of a closure sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosureStats {
    pub samples: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std_dev: f64,
}

impl ClosureStats {
    fn from_errors(errors: &[f64]) -> Self {
        let samples = errors.len();
        let n = samples as f64;

        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &e in errors {
            sum += e;
            min = min.min(e);
            max = max.max(e);
        }
        let mean = sum / n;

        let std_dev = if samples > 1 {
            let ss: f64 = errors.iter().map(|e| (e - mean).powi(2)).sum();
            (ss / (n - 1.0)).sqrt()
        } else {
            0.0
        };

        Self {
            samples,
            mean,
            min,
            max,
            std_dev,
        }
    }
}

impl fmt::Display for ClosureStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "samples: {} mean: {:.6e} min: {:.6e} max: {:.6e} std_dev: {:.6e}",
            self.samples, self.mean, self.min, self.max, self.std_dev
        )
    }
}

/// Measures [`closure_error`] at every lattice point of `config`.
pub fn sweep(config: &ClosureConfig) -> ProjectionResult<ClosureStats> {
    config.validate()?;

    let start = Instant::now();
    let rows = sweep_rows(config);
    let errors: Vec<f64> = rows.into_iter().flatten().collect();
    let stats = ClosureStats::from_errors(&errors);

    debug!(
        "closure sweep grid={} extent={}: {} in {:.3?}",
        config.grid,
        config.extent,
        stats,
        start.elapsed()
    );

    Ok(stats)
}

fn sweep_row(config: &ClosureConfig, row: usize) -> Vec<f64> {
    let psi = config.coordinate(row);
    (0..config.grid)
        .map(|col| closure_error(config.coordinate(col), psi))
        .collect()
}

#[cfg(feature = "parallel")]
fn sweep_rows(config: &ClosureConfig) -> Vec<Vec<f64>> {
    (0..config.grid)
        .into_par_iter()
        .map(|row| sweep_row(config, row))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn sweep_rows(config: &ClosureConfig) -> Vec<Vec<f64>> {
    (0..config.grid).map(|row| sweep_row(config, row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_error_vanishes_on_edges_and_centre() {
        assert_eq!(closure_error(0.0, 0.0), 0.0);
        assert_eq!(closure_error(1.0, 1.0), 0.0);
        assert_eq!(closure_error(-1.0, 1.0), 0.0);
        assert_eq!(closure_error(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_closure_error_is_small_inside() {
        for &(chi, psi) in &[(0.1, 0.2), (0.5, -0.5), (-0.8, 0.3), (0.95, 0.05)] {
            let e = closure_error(chi, psi);
            assert!(e > 0.0 && e < 2.4e-4, "error {} at ({}, {})", e, chi, psi);
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = ClosureConfig::default();
        assert_eq!(config.grid, 200);
        assert_eq!(config.extent, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lattice_includes_both_ends() {
        let config = ClosureConfig::new(5, 0.5);
        assert_eq!(config.coordinate(0), -0.5);
        assert_eq!(config.coordinate(2), 0.0);
        assert_eq!(config.coordinate(4), 0.5);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        for config in [
            ClosureConfig::new(1, 1.0),
            ClosureConfig::new(0, 1.0),
            ClosureConfig::new(10, 0.0),
            ClosureConfig::new(10, 1.5),
            ClosureConfig::new(10, f64::NAN),
        ] {
            assert!(
                matches!(
                    sweep(&config),
                    Err(ProjectionError::InvalidParameter { .. })
                ),
                "{:?} accepted",
                config
            );
        }
    }

    #[test]
    fn test_stats_from_errors() {
        let stats = ClosureStats::from_errors(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stats.samples, 4);
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        assert!((stats.std_dev - (5.0_f64 / 3.0).sqrt()).abs() < 1e-15);
    }

    #[test]
    fn test_small_sweep() {
        let stats = sweep(&ClosureConfig::new(2, 1.0)).unwrap();
        assert_eq!(stats.samples, 4);
        assert_eq!(stats.max, 0.0);
    }

    #[test]
    fn test_display() {
        let stats = ClosureStats::from_errors(&[0.5, 1.5]);
        let text = stats.to_string();
        assert!(text.starts_with("samples: 2 mean: 1.000000e0"), "{}", text);
        assert!(text.contains("std_dev: "));
    }
}
