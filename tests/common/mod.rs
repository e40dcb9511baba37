#![allow(dead_code)]

use approx::assert_relative_eq;
use twobody::force_model::ForceModel;
use twobody::state::StateVector;
use twobody::vector::Vector;

pub fn assert_vector_close(actual: Vector, expected: Vector, epsilon: f64) {
    assert_relative_eq!(actual.x(), expected.x(), epsilon = epsilon);
    assert_relative_eq!(actual.y(), expected.y(), epsilon = epsilon);
    assert_relative_eq!(actual.z(), expected.z(), epsilon = epsilon);
}

pub fn assert_state_close(actual: &StateVector, expected: &StateVector, epsilon: f64) {
    assert_vector_close(actual.position, expected.position, epsilon);
    assert_vector_close(actual.velocity, expected.velocity, epsilon);
}

/// Classical fourth-order Runge-Kutta step on `(r, v)` driven by `model`.
///
/// Each step queries the acceleration at four speculative positions.
pub fn rk4_step<M: ForceModel + ?Sized>(model: &M, state: StateVector, dt: f64) -> StateVector {
    let StateVector {
        position: r,
        velocity: v,
    } = state;

    let k1_r = v;
    let k1_v = model.calc_acceleration(r);

    let k2_r = v + k1_v * (0.5 * dt);
    let k2_v = model.calc_acceleration(r + k1_r * (0.5 * dt));

    let k3_r = v + k2_v * (0.5 * dt);
    let k3_v = model.calc_acceleration(r + k2_r * (0.5 * dt));

    let k4_r = v + k3_v * dt;
    let k4_v = model.calc_acceleration(r + k3_r * dt);

    let sixth = dt / 6.0;
    StateVector::new(
        r + (k1_r + k2_r * 2.0 + k3_r * 2.0 + k4_r) * sixth,
        v + (k1_v + k2_v * 2.0 + k3_v * 2.0 + k4_v) * sixth,
    )
}

/// Propagate `state` over `duration` with `steps` RK4 steps.
pub fn propagate<M: ForceModel + ?Sized>(
    model: &M,
    state: StateVector,
    duration: f64,
    steps: usize,
) -> StateVector {
    let dt = duration / steps as f64;
    (0..steps).fold(state, |s, _| rk4_step(model, s, dt))
}
