//! # twobody
//!
//! Physics core of a two-body orbit simulation. The crate answers the questions an
//! external numerical integrator asks while advancing an orbit:
//!
//! - the gravitational acceleration felt by a point mass at a given position
//!   ([`ForceModel::calc_acceleration`](crate::force_model::ForceModel::calc_acceleration)),
//! - the initial position and velocity matching the planar elements `(a, e, θ)`
//!   ([`ForceModel::initial_state`](crate::force_model::ForceModel::initial_state)).
//!
//! Time stepping, result files and plotting are left to the caller.
//!
//! ## Modules
//!
//! - [`vector`] – 3D value type with the minimal algebra used by the models.
//! - [`orbital_elements`] – the `(a, e, θ)` element set and its derived geometry.
//! - [`state`] – position/velocity pair.
//! - [`force_model`] – the [`ForceModel`](crate::force_model::ForceModel) trait, the
//!   [`NullModel`](crate::force_model::NullModel) placeholder, the
//!   [`KeplerModel`](crate::force_model::KeplerModel) and runtime model selection.
//! - [`constants`] – unit conventions (`μ = 1` normalized units) and physical constants.
//! - [`model_errors`] – errors of the checked (`try_*`) API.
//!
//! ## Example
//!
//! ```rust
//! use twobody::force_model::{ForceModel, KeplerModel};
//! use twobody::orbital_elements::OrbitalElements;
//! use twobody::vector::Vector;
//!
//! let model = KeplerModel::new();
//! let elem = OrbitalElements::try_new(1.0, 0.0, 0.0).unwrap();
//! let state = model.initial_state(&elem);
//!
//! assert_eq!(state.position, Vector::new(1.0, 0.0, 0.0));
//! assert_eq!(state.velocity, Vector::new(0.0, 1.0, 0.0));
//! assert_eq!(model.calc_acceleration(state.position), Vector::new(-1.0, 0.0, 0.0));
//! ```

pub mod constants;
pub mod force_model;
pub mod model_errors;
pub mod orbital_elements;
pub mod state;
pub mod vector;
