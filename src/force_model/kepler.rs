//! # Kepler two-body model
//!
//! Point-mass gravity of a central body fixed at the origin. By default the model works in
//! **normalized units** where the gravitational parameter `μ = G·M` equals
//! [`NORMALIZED_MU`] (1): a unit circular orbit then has unit speed and period `2π`.
//! [`KeplerModel::with_mu`] lifts this to any consistent unit system, e.g.
//! [`GAUSS_GRAV_SQUARED`](crate::constants::GAUSS_GRAV_SQUARED) for AU and days.
//!
//! ## Formulas
//!
//! ```text
//! acceleration      a(r) = −μ · r / |r|³
//! initial position  x    = a(1 − e²) / (1 + e·cos θ),  y = z = 0
//! initial velocity  vy   = √(μ/a) · √((1 + e)/(1 − e)), x = z = 0
//! ```
//!
//! The acceleration scales the unnormalized position by `1/r³`, which is the inverse-square
//! law `−μ r̂ / r²` without an explicit normalization step.
//!
//! ## Domain
//!
//! The unchecked trait methods follow plain IEEE-754 arithmetic:
//!
//! - `r = 0` gives `0 · (−∞)` = NaN components, never a finite zero vector.
//! - `e = 1` divides by zero in the velocity; `a = 0` gives an infinite speed.
//!
//! [`KeplerModel::try_acceleration`] and [`KeplerModel::try_with_mu`] report those cases
//! as [`ModelError`] instead.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    constants::{Radian, DPI, NORMALIZED_MU},
    force_model::ForceModel,
    model_errors::ModelError,
    orbital_elements::OrbitalElements,
    vector::Vector,
};

/// Two-body Kepler force model with gravitational parameter `μ`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeplerModel {
    mu: f64,
}

impl Default for KeplerModel {
    fn default() -> Self {
        KeplerModel { mu: NORMALIZED_MU }
    }
}

impl KeplerModel {
    /// Kepler model in normalized units (`μ = 1`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Kepler model with an explicit gravitational parameter, without validation.
    pub fn with_mu(mu: f64) -> Self {
        KeplerModel { mu }
    }

    /// Kepler model with an explicit gravitational parameter.
    ///
    /// Return
    /// ------
    /// * [`ModelError::NonPositiveGravitationalParameter`] if `mu` is not strictly positive
    ///   and finite.
    pub fn try_with_mu(mu: f64) -> Result<Self, ModelError> {
        if mu.is_finite() && mu > 0.0 {
            Ok(Self::with_mu(mu))
        } else {
            debug!(mu, "rejecting gravitational parameter");
            Err(ModelError::NonPositiveGravitationalParameter(mu))
        }
    }

    /// Gravitational parameter `μ = G·M` of the central body.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Acceleration at `position`, refusing the singular and non-finite cases.
    ///
    /// Return
    /// ------
    /// * The same vector as [`ForceModel::calc_acceleration`] when that vector is finite.
    /// * [`ModelError::SingularPosition`] when `position` is non-finite, at the origin, or so
    ///   close to it that `r³` underflows.
    pub fn try_acceleration(&self, position: Vector) -> Result<Vector, ModelError> {
        let acceleration = self.calc_acceleration(position);
        if !position.is_finite() || !acceleration.is_finite() {
            debug!(%position, "acceleration requested at a singular position");
            return Err(ModelError::SingularPosition);
        }
        Ok(acceleration)
    }

    /// Orbital period `2π √(a³/μ)` of a bound orbit with semi-major axis `a`.
    pub fn orbital_period(&self, a: f64) -> f64 {
        DPI * (a.powi(3) / self.mu).sqrt()
    }
}

impl ForceModel for KeplerModel {
    fn calc_acceleration(&self, position: Vector) -> Vector {
        let r2 = position.dot(position);
        let r = r2.sqrt();
        let r3 = r2 * r;

        position.scale(-self.mu / r3)
    }

    fn initial_position(&self, a: f64, e: f64, theta: Radian) -> Vector {
        Vector::new(OrbitalElements::new(a, e, theta).radius(), 0.0, 0.0)
    }

    fn initial_velocity(&self, a: f64, e: f64, _theta: Radian) -> Vector {
        let vy = (self.mu / a).sqrt() * ((1.0 + e) / (1.0 - e)).sqrt();
        Vector::new(0.0, vy, 0.0)
    }
}
