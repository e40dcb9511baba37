use serde::{Deserialize, Serialize};

use crate::{constants::Radian, force_model::ForceModel, vector::Vector};

/// Force-free placeholder model.
///
/// Every method returns the zero vector whatever its input, including negative `a` or
/// `e ≥ 1`. Use it to test an integrator without any physics in the loop; it does not
/// describe an orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NullModel;

impl ForceModel for NullModel {
    fn calc_acceleration(&self, _position: Vector) -> Vector {
        Vector::zeros()
    }

    fn initial_position(&self, _a: f64, _e: f64, _theta: Radian) -> Vector {
        Vector::zeros()
    }

    fn initial_velocity(&self, _a: f64, _e: f64, _theta: Radian) -> Vector {
        Vector::zeros()
    }
}
