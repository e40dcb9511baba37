//! # Force models
//!
//! A force model answers the two questions an orbit integrator asks about the physics:
//!
//! 1. *Where does the body start?* – [`ForceModel::initial_position`] and
//!    [`ForceModel::initial_velocity`] map the planar elements `(a, e, θ)` to a Cartesian
//!    state, with periapsis along `+x` and the orbit in the `xy` plane.
//! 2. *How is it pulled?* – [`ForceModel::calc_acceleration`] returns the acceleration
//!    acting on the point mass at a given position, the central body sitting at the origin.
//!
//! Available models:
//!
//! - [`NullModel`] – no force at all; every method returns the zero vector. Useful to
//!   exercise an integrator in isolation, never to simulate an orbit.
//! - [`KeplerModel`] – point-mass gravity of the central body (two-body problem).
//!
//! Models carry no mutable state, so every method is a pure function of its arguments and
//! may be called from any number of threads. In particular, repeated calls with the same
//! position return bit-identical accelerations, which multi-stage schemes such as RK4 rely
//! on when they evaluate speculative positions.
//!
//! ## Choosing a model at runtime
//!
//! [`ModelKind`] parses short descriptors (`"null"`, `"kepler"`, `"kepler:gauss"`,
//! `"kepler:mu=<value>"`) and builds the matching boxed model.
//!
//! ```rust
//! use twobody::force_model::{ForceModel, ModelKind};
//! use twobody::vector::Vector;
//!
//! let model = "kepler".parse::<ModelKind>().unwrap().build();
//! let acc = model.calc_acceleration(Vector::new(1.0, 0.0, 0.0));
//! assert_eq!(acc, Vector::new(-1.0, 0.0, 0.0));
//! ```
//!
//! ## Integrator usage
//!
//! Integrators should be written against the trait, never against a concrete model:
//!
//! ```rust
//! use twobody::force_model::{ForceModel, KeplerModel};
//! use twobody::orbital_elements::OrbitalElements;
//!
//! fn leapfrog<M: ForceModel>(model: &M, elem: &OrbitalElements, dt: f64, steps: usize) -> f64 {
//!     let state = model.initial_state(elem);
//!     let (mut r, mut v) = (state.position, state.velocity);
//!     for _ in 0..steps {
//!         let v_half = v + model.calc_acceleration(r) * (0.5 * dt);
//!         r = r + v_half * dt;
//!         v = v_half + model.calc_acceleration(r) * (0.5 * dt);
//!     }
//!     r.norm()
//! }
//!
//! let radius = leapfrog(&KeplerModel::new(), &OrbitalElements::circular(1.0), 1e-3, 1000);
//! assert!((radius - 1.0).abs() < 1e-4);
//! ```

mod kepler;
mod kind;
mod null;

#[cfg(test)]
mod proptest_kepler;

pub use kepler::KeplerModel;
pub use kind::ModelKind;
pub use null::NullModel;

use crate::{
    constants::Radian, orbital_elements::OrbitalElements, state::StateVector, vector::Vector,
};

/// Acceleration field and initial-state mapping of a two-body physical model.
///
/// Contract
/// --------
/// * `calc_acceleration` must be a pure function of `position`: no hidden time dependence
///   and no internal mutation.
/// * `initial_position` / `initial_velocity` express the state in the orbital plane, with
///   the periapsis direction along `+x`.
/// * No method validates its inputs. Out-of-domain arguments surface as NaN or infinite
///   components produced by the floating-point arithmetic, never as a panic.
pub trait ForceModel {
    /// Acceleration acting on the orbiting body at `position` (central body at the origin).
    fn calc_acceleration(&self, position: Vector) -> Vector;

    /// Starting position for the elements `(a, e, θ)`.
    fn initial_position(&self, a: f64, e: f64, theta: Radian) -> Vector;

    /// Starting velocity consistent with [`ForceModel::initial_position`].
    fn initial_velocity(&self, a: f64, e: f64, theta: Radian) -> Vector;

    /// Initial position and velocity for an [`OrbitalElements`] set.
    fn initial_state(&self, elements: &OrbitalElements) -> StateVector {
        let OrbitalElements {
            semi_major_axis,
            eccentricity,
            true_anomaly,
        } = *elements;

        StateVector::new(
            self.initial_position(semi_major_axis, eccentricity, true_anomaly),
            self.initial_velocity(semi_major_axis, eccentricity, true_anomaly),
        )
    }
}

impl<M: ForceModel + ?Sized> ForceModel for &M {
    fn calc_acceleration(&self, position: Vector) -> Vector {
        (**self).calc_acceleration(position)
    }

    fn initial_position(&self, a: f64, e: f64, theta: Radian) -> Vector {
        (**self).initial_position(a, e, theta)
    }

    fn initial_velocity(&self, a: f64, e: f64, theta: Radian) -> Vector {
        (**self).initial_velocity(a, e, theta)
    }
}

impl<M: ForceModel + ?Sized> ForceModel for Box<M> {
    fn calc_acceleration(&self, position: Vector) -> Vector {
        (**self).calc_acceleration(position)
    }

    fn initial_position(&self, a: f64, e: f64, theta: Radian) -> Vector {
        (**self).initial_position(a, e, theta)
    }

    fn initial_velocity(&self, a: f64, e: f64, theta: Radian) -> Vector {
        (**self).initial_velocity(a, e, theta)
    }
}
