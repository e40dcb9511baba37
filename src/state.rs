use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vector::Vector;

/// Cartesian position/velocity pair of the orbiting point mass.
///
/// Produced by [`ForceModel::initial_state`](crate::force_model::ForceModel::initial_state)
/// to seed an integrator; the crate never advances it in time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StateVector {
    pub position: Vector,
    pub velocity: Vector,
}

impl StateVector {
    pub fn new(position: Vector, velocity: Vector) -> Self {
        StateVector { position, velocity }
    }

    /// Specific angular momentum `h = r × v`.
    pub fn angular_momentum(&self) -> Vector {
        self.position.cross(self.velocity)
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r = {}, v = {}", self.position, self.velocity)
    }
}
