//! # Planar orbital elements
//!
//! This module defines [`OrbitalElements`], the reduced classical element set
//! `(a, e, θ)` from which the force models derive an initial state:
//!
//! 1. **a** – Semi-major axis (normalized length units)
//! 2. **e** – Eccentricity (unitless)
//! 3. **θ** – True anomaly (radians)
//!
//! Inclination, node and argument of periapsis are not carried: the orbit lives in the
//! reference plane with periapsis along `+x`, and callers needing another orientation
//! rotate the resulting state themselves.
//!
//! ## Validation
//!
//! [`OrbitalElements::new`] stores its arguments untouched, matching the force models which
//! never check their inputs. [`OrbitalElements::try_new`] enforces the bound-orbit domain
//! `a > 0`, `0 ≤ e < 1`, finite `θ` and reports a [`ModelError`] otherwise.
//!
//! ## Example
//!
//! ```rust
//! use twobody::orbital_elements::OrbitalElements;
//!
//! let elem = OrbitalElements::try_new(1.0, 0.5, 0.0).unwrap();
//! assert_eq!(elem.periapsis_distance(), 0.5);
//! assert_eq!(elem.apoapsis_distance(), 1.5);
//!
//! assert!(OrbitalElements::try_new(1.0, 1.0, 0.0).is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    constants::{Radian, RADEG},
    model_errors::ModelError,
};

/// Planar two-body orbital elements.
///
/// Units
/// -----
/// * `semi_major_axis`: normalized length (or AU when paired with a Gaussian `μ`).
/// * `eccentricity`: unitless.
/// * `true_anomaly`: radians, any real value (interpreted modulo 2π).
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub true_anomaly: Radian,
}

impl OrbitalElements {
    /// Build an element set without any domain check.
    pub fn new(semi_major_axis: f64, eccentricity: f64, true_anomaly: Radian) -> Self {
        OrbitalElements {
            semi_major_axis,
            eccentricity,
            true_anomaly,
        }
    }

    /// Build an element set describing a bound (elliptic or circular) orbit.
    ///
    /// Arguments
    /// ---------
    /// * `semi_major_axis` – `a`, strictly positive and finite.
    /// * `eccentricity` – `e`, in `[0, 1)`.
    /// * `true_anomaly` – `θ` in radians, finite.
    ///
    /// Return
    /// ------
    /// * The validated [`OrbitalElements`], or the first [`ModelError`] encountered.
    pub fn try_new(
        semi_major_axis: f64,
        eccentricity: f64,
        true_anomaly: Radian,
    ) -> Result<Self, ModelError> {
        if !(semi_major_axis.is_finite() && semi_major_axis > 0.0) {
            debug!(semi_major_axis, "rejecting orbital elements");
            return Err(ModelError::NonPositiveSemiMajorAxis(semi_major_axis));
        }
        if !(0.0..1.0).contains(&eccentricity) {
            debug!(eccentricity, "rejecting orbital elements");
            return Err(ModelError::UnboundEccentricity(eccentricity));
        }
        if !true_anomaly.is_finite() {
            debug!(true_anomaly, "rejecting orbital elements");
            return Err(ModelError::NonFiniteAnomaly(true_anomaly));
        }

        Ok(Self::new(semi_major_axis, eccentricity, true_anomaly))
    }

    /// Circular orbit of radius `a` at zero anomaly.
    pub fn circular(semi_major_axis: f64) -> Self {
        Self::new(semi_major_axis, 0.0, 0.0)
    }

    /// Semi-latus rectum `p = a(1 − e²)`.
    pub fn semi_latus_rectum(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity.powi(2))
    }

    /// Periapsis distance `a(1 − e)`.
    pub fn periapsis_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Apoapsis distance `a(1 + e)`.
    pub fn apoapsis_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Radial distance at the true anomaly, from the polar orbit equation
    /// `r = a(1 − e²) / (1 + e·cos θ)`.
    pub fn radius(&self) -> f64 {
        self.semi_latus_rectum() / (1.0 + self.eccentricity * self.true_anomaly.cos())
    }
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Orbital Elements (planar)")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.6}",
            self.semi_major_axis
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  θ   (true anomaly)          = {:.6} rad ({:.6}°)",
            self.true_anomaly,
            self.true_anomaly / RADEG
        )
    }
}
