//! # Three-dimensional real vectors
//!
//! [`Vector`] is the small value type carried through every force-model call: positions,
//! velocities and accelerations are all `Vector`s. It wraps a [`nalgebra::Vector3<f64>`]
//! so that callers already working in `nalgebra` can convert in both directions for free,
//! while the force models only rely on the minimal algebra below:
//!
//! - [`Vector::add`] – componentwise sum,
//! - [`Vector::scale`] – multiplication by a scalar (negative allowed),
//! - [`Vector::dot`] – inner product, used for squared magnitudes.
//!
//! All operations are total, side-effect free, and return a new value; a `Vector` is never
//! mutated in place.
//!
//! ## Example
//!
//! ```rust
//! use twobody::vector::Vector;
//!
//! let r = Vector::new(3.0, 4.0, 0.0);
//! assert_eq!(r.dot(r), 25.0);
//! assert_eq!(r.scale(-1.0), Vector::new(-3.0, -4.0, 0.0));
//! assert_eq!(Vector::default(), Vector::zeros());
//! ```

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A point or direction in ℝ³ with `f64` components.
///
/// The default value is the zero vector `(0, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector(Vector3<f64>);

impl Vector {
    /// Build a vector from its three components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector(Vector3::new(x, y, z))
    }

    /// The zero vector `(0, 0, 0)`.
    pub fn zeros() -> Self {
        Vector(Vector3::zeros())
    }

    /// The `x` component.
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// The `y` component.
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// The `z` component.
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Componentwise sum `self + other`.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Vector) -> Vector {
        Vector(self.0 + other.0)
    }

    /// Componentwise difference `self - other`.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(self, other: Vector) -> Vector {
        Vector(self.0 - other.0)
    }

    /// Multiply every component by `k`.
    pub fn scale(self, k: f64) -> Vector {
        Vector(self.0 * k)
    }

    /// Inner product `x₁x₂ + y₁y₂ + z₁z₂`.
    pub fn dot(self, other: Vector) -> f64 {
        self.0.dot(&other.0)
    }

    /// Cross product `self × other`.
    pub fn cross(self, other: Vector) -> Vector {
        Vector(self.0.cross(&other.0))
    }

    /// Squared Euclidean length, `self · self`.
    pub fn norm_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn norm(self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// `true` when no component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    /// Borrow the underlying `nalgebra` column vector.
    pub fn as_vector3(&self) -> &Vector3<f64> {
        &self.0
    }
}

impl Default for Vector {
    fn default() -> Self {
        Vector::zeros()
    }
}

impl From<Vector3<f64>> for Vector {
    fn from(v: Vector3<f64>) -> Self {
        Vector(v)
    }
}

impl From<Vector> for Vector3<f64> {
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl From<[f64; 3]> for Vector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector::new(x, y, z)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector(self.0 - rhs.0)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector(-self.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, k: f64) -> Vector {
        Vector(self.0 * k)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, v: Vector) -> Vector {
        Vector(v.0 * self)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}
