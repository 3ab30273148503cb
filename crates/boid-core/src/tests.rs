//! Unit tests for boid-core primitives.

#[cfg(test)]
mod vec3 {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use crate::Vec3;

    #[test]
    fn length_and_squared_length_agree() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn unit_of_zero_is_none() {
        assert!(Vec3::ZERO.unit().is_none());
        assert!(Vec3::ZERO.with_length(3.0).is_none());
    }

    #[test]
    fn with_length_rescales() {
        let v = Vec3::new(0.0, 2.0, 0.0).with_length(7.0).unwrap();
        assert_relative_eq!(v.y, 7.0);
        assert_eq!(v.x, 0.0);
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        let z = Vec3::UNIT_X.cross(Vec3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(z.z, 1.0);
    }

    #[test]
    fn angle_between_orthogonal_vectors() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 5.0, 0.0);
        assert_relative_eq!(a.angle_to(b).unwrap(), FRAC_PI_2);
    }

    #[test]
    fn angle_to_zero_vector_is_undefined() {
        assert!(Vec3::UNIT_X.angle_to(Vec3::ZERO).is_none());
        assert!(Vec3::ZERO.angle_to(Vec3::UNIT_X).is_none());
    }

    #[test]
    fn antiparallel_angle_is_pi() {
        let a = Vec3::new(2.0, 0.0, 0.0);
        assert_relative_eq!(a.angle_to(-a).unwrap(), PI);
    }

    #[test]
    fn rotation_quarter_turn_about_z() {
        let axis = Vec3::new(0.0, 0.0, 3.0); // non-unit axis is fine
        let v = Vec3::UNIT_X.rotated_about(axis, FRAC_PI_2);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let r = v.rotated_about(Vec3::new(-1.0, 4.0, 0.5), 1.234);
        assert_relative_eq!(r.length(), v.length(), epsilon = 1e-12);
    }

    #[test]
    fn rotation_about_degenerate_axis_is_noop() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.rotated_about(Vec3::ZERO, 1.0), v);
    }
}

#[cfg(test)]
mod domain {
    use crate::Domain;

    #[test]
    fn contains_sq_is_inclusive() {
        let d = Domain::new(1.0, 2.0);
        assert!(d.contains_sq(1.0)); // == min²
        assert!(d.contains_sq(4.0)); // == max²
        assert!(!d.contains_sq(0.99));
        assert!(!d.contains_sq(4.01));
    }

    #[test]
    fn zero_max_means_unbounded_above() {
        let d = Domain::new(1.0, 0.0);
        assert!(d.is_unbounded());
        assert!(d.contains_sq(1e12));
        assert!(!d.contains_sq(0.5)); // min bound still applies
    }

    #[test]
    fn negative_max_is_also_unbounded() {
        assert!(Domain::new(0.0, -1.0).is_unbounded());
    }

    #[test]
    fn inverted_domain_is_empty() {
        let d = Domain::new(5.0, 2.0);
        assert!(!d.contains_sq(9.0)); // 3 is between max and min, still out
        assert!(!d.contains_sq(1.0));
    }

    #[test]
    fn lerp_spans_the_interval() {
        let d = Domain::new(2.0, 6.0);
        assert_eq!(d.lerp(0.0), 2.0);
        assert_eq!(d.lerp(0.5), 4.0);
        assert_eq!(d.lerp(1.0), 6.0);
    }
}

#[cfg(test)]
mod rng {
    use crate::SteerRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SteerRng::double_seeded(42);
        let mut b = SteerRng::double_seeded(42);
        for _ in 0..100 {
            assert_eq!(a.unit(), b.unit());
        }
    }

    #[test]
    fn double_seeding_diverges_from_single() {
        let mut single = SteerRng::seeded(42);
        let mut double = SteerRng::double_seeded(42);
        assert_ne!(single.unit(), double.unit());
    }

    #[test]
    fn vector_components_within_bounds() {
        let mut rng = SteerRng::seeded(7);
        for _ in 0..1000 {
            let v = rng.vector();
            assert!(v.x.abs() < 1.0 && v.y.abs() < 1.0 && v.z.abs() < 1.0);
            let h = rng.half_vector();
            assert!(h.x.abs() < 0.5 && h.y.abs() < 0.5 && h.z.abs() < 0.5);
        }
    }

    #[test]
    fn in_range_stays_in_range() {
        let mut rng = SteerRng::seeded(0);
        for _ in 0..1000 {
            let x = rng.in_range(-2.0, 3.0);
            assert!((-2.0..3.0).contains(&x));
        }
    }

    #[test]
    fn derived_seeds_differ() {
        let mut rng = SteerRng::seeded(1);
        assert_ne!(rng.next_seed(), rng.next_seed());
    }
}

#[cfg(test)]
mod params {
    use crate::{clamp_index, clamped};

    #[test]
    fn in_range_indices_pass_through() {
        let list = [10, 20, 30];
        assert_eq!(clamped(&list, 0), 10);
        assert_eq!(clamped(&list, 2), 30);
    }

    #[test]
    fn out_of_range_broadcasts_last_element() {
        let list = [10, 20, 30];
        assert_eq!(clamped(&list, 3), 30);
        assert_eq!(clamped(&list, 1000), 30);
    }

    #[test]
    fn single_element_broadcasts_everywhere() {
        assert_eq!(clamped(&[0.25], 99), 0.25);
        assert_eq!(clamp_index(1, 99), 0);
    }
}
