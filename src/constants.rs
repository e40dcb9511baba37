//! # Constants and type definitions for twobody
//!
//! This module centralizes the **physical constants** and **unit conventions** shared by
//! the force models and the orbital-element helpers.
//!
//! ## Unit convention
//!
//! Unless a model is built with an explicit gravitational parameter, every quantity in this
//! crate is expressed in **normalized units**: lengths and times are scaled so that
//! `G·M_central = 1` (see [`NORMALIZED_MU`]). In these units a circular orbit of radius 1
//! has speed 1 and period `2π`.
//!
//! For heliocentric work in AU and days, use [`GAUSS_GRAV_SQUARED`] as `μ`.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Numerical epsilon used for floating-point comparisons
pub const EPS: f64 = 1e-6;

/// Gravitational parameter μ = G·M of the central body in normalized units
pub const NORMALIZED_MU: f64 = 1.0;

/// Gaussian gravitational constant k (AU^(3/2) / day / M_sun^(1/2))
pub const GAUSS_GRAV: f64 = 0.01720209895;

/// k², the solar μ in AU³/day²
pub const GAUSS_GRAV_SQUARED: f64 = GAUSS_GRAV * GAUSS_GRAV;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
