//! Property-based tests for the force models using proptest.
//!
//! These tests check the physical invariants of the Kepler field and of the
//! element-to-state mapping across a wide range of inputs.

use proptest::prelude::*;

use crate::force_model::{ForceModel, KeplerModel, NullModel};
use crate::vector::Vector;

fn position_away_from_origin() -> impl Strategy<Value = Vector> {
    (-50.0f64..50.0, -50.0f64..50.0, -50.0f64..50.0)
        .prop_map(|(x, y, z)| Vector::new(x, y, z))
        .prop_filter("position too close to the central body", |p| {
            p.norm() > 1e-3
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The Kepler acceleration points toward the origin with magnitude 1/r².
    #[test]
    fn prop_inverse_square_antiparallel(p in position_away_from_origin()) {
        let acc = KeplerModel::new().calc_acceleration(p);
        let r2 = p.dot(p);

        prop_assert!(acc.dot(p) < 0.0);

        let rel = (acc.norm() - 1.0 / r2).abs() * r2;
        prop_assert!(rel < 1e-12, "relative magnitude error {rel:e} at {p}");

        // Antiparallel: the cross product vanishes relative to |a||p|.
        let sin = acc.cross(p).norm() / (acc.norm() * p.norm());
        prop_assert!(sin < 1e-12, "direction error {sin:e} at {p}");
    }

    /// Scaling μ scales the acceleration linearly.
    #[test]
    fn prop_acceleration_linear_in_mu(
        p in position_away_from_origin(),
        mu in 1e-6f64..1e6,
    ) {
        let unit = KeplerModel::new().calc_acceleration(p);
        let scaled = KeplerModel::with_mu(mu).calc_acceleration(p);
        let diff = (scaled - unit.scale(mu)).norm();
        prop_assert!(diff <= 1e-12 * scaled.norm());
    }

    /// Repeated evaluation at the same position is bit-identical.
    #[test]
    fn prop_acceleration_is_pure(p in position_away_from_origin()) {
        let model = KeplerModel::new();
        let a = model.calc_acceleration(p);
        let b = model.calc_acceleration(p);
        prop_assert_eq!(a.x().to_bits(), b.x().to_bits());
        prop_assert_eq!(a.y().to_bits(), b.y().to_bits());
        prop_assert_eq!(a.z().to_bits(), b.z().to_bits());
    }

    /// The initial position lies on +x at the polar-equation radius.
    #[test]
    fn prop_initial_position_on_x_axis(
        a in 0.01f64..100.0,
        e in 0.0f64..0.99,
        theta in -20.0f64..20.0,
    ) {
        let r = KeplerModel::new().initial_position(a, e, theta);
        prop_assert_eq!(r.y(), 0.0);
        prop_assert_eq!(r.z(), 0.0);

        let expected = a * (1.0 - e * e) / (1.0 + e * theta.cos());
        prop_assert!((r.x() - expected).abs() <= 1e-12 * expected);
        prop_assert!(r.x() >= a * (1.0 - e) * (1.0 - 1e-12));
        prop_assert!(r.x() <= a * (1.0 + e) * (1.0 + 1e-12));
    }

    /// The initial velocity is along +y and does not depend on θ.
    #[test]
    fn prop_initial_velocity_independent_of_anomaly(
        a in 0.01f64..100.0,
        e in 0.0f64..0.99,
        theta in -20.0f64..20.0,
    ) {
        let model = KeplerModel::new();
        let v = model.initial_velocity(a, e, theta);
        prop_assert_eq!(v, model.initial_velocity(a, e, 0.0));
        prop_assert_eq!(v, model.initial_velocity(a, e, std::f64::consts::PI));
        prop_assert_eq!(v.x(), 0.0);
        prop_assert_eq!(v.z(), 0.0);
        prop_assert!(v.y() > 0.0);
    }

    /// The null model ignores its inputs entirely.
    #[test]
    fn prop_null_model_is_zero(
        a in -100.0f64..100.0,
        e in -2.0f64..5.0,
        theta in -20.0f64..20.0,
        p in position_away_from_origin(),
    ) {
        let model = NullModel;
        prop_assert_eq!(model.calc_acceleration(p), Vector::zeros());
        prop_assert_eq!(model.initial_position(a, e, theta), Vector::zeros());
        prop_assert_eq!(model.initial_velocity(a, e, theta), Vector::zeros());
    }
}
