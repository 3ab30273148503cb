//! Unit tests for boid-geometry.

use boid_core::Vec3;

use crate::Plane;

fn xy_plane() -> Plane {
    Plane::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)).unwrap()
}

#[cfg(test)]
mod plane {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn constructor_unitizes_normal() {
        let p = Plane::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0)).unwrap();
        assert_relative_eq!(p.normal().length(), 1.0);
    }

    #[test]
    fn degenerate_normal_is_rejected() {
        assert!(Plane::new(Vec3::ZERO, Vec3::ZERO).is_none());
        // parallel span directions
        let x = Vec3::new(1.0, 0.0, 0.0);
        assert!(Plane::from_span(Vec3::ZERO, x, x * 2.0).is_none());
    }

    #[test]
    fn signed_distance_and_closest_point() {
        let p = xy_plane();
        let q = Vec3::new(3.0, -1.0, 4.0);
        assert_relative_eq!(p.signed_distance(q), 4.0);
        assert_eq!(p.closest_point(q), Vec3::new(3.0, -1.0, 0.0));
    }

    #[test]
    fn project_direction_strips_normal_component() {
        let p = xy_plane();
        assert_eq!(p.project_direction(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 2.0, 0.0));
        // parallel to the normal → zero
        assert!(p.project_direction(Vec3::new(0.0, 0.0, 7.0)).is_zero());
    }

    #[test]
    fn mirror_point_reflects_across_plane() {
        let p = xy_plane();
        assert_eq!(p.mirror_point(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn segment_intersection_inside_and_outside() {
        let p = xy_plane();
        let hit = p
            .intersect_segment(Vec3::new(0.0, 0.0, 1.0), Vec3::new(2.0, 0.0, -1.0))
            .unwrap();
        assert_eq!(hit, Vec3::new(1.0, 0.0, 0.0));

        // segment stops short of the plane
        assert!(
            p.intersect_segment(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, 1.0))
                .is_none()
        );
        // segment parallel to the plane
        assert!(
            p.intersect_segment(Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 1.0))
                .is_none()
        );
    }

    #[test]
    fn rotation_about_normal_spins_in_plane() {
        let p = xy_plane();
        let r = p.rotate_about_normal(Vec3::new(1.0, 0.0, 0.0), FRAC_PI_2);
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.y, 1.0, epsilon = 1e-12);
    }
}

#[cfg(test)]
mod fit {
    use approx::assert_relative_eq;

    use crate::{GeometryError, fit_plane};

    use super::*;

    #[test]
    fn planar_points_recover_their_plane() {
        let points = [
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(1.0, 0.0, 2.0),
            Vec3::new(0.0, 1.0, 2.0),
            Vec3::new(4.0, -3.0, 2.0),
        ];
        let plane = fit_plane(&points).unwrap();
        assert_relative_eq!(plane.normal().z.abs(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(plane.origin().z, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn noisy_points_fit_between_layers() {
        // Two layers at z = ±1: the least-squares plane sits at z = 0.
        let points = [
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(2.0, 0.5, 1.0),
            Vec3::new(-1.0, 0.5, -1.0),
        ];
        let plane = fit_plane(&points).unwrap();
        assert!(plane.signed_distance(Vec3::new(0.5, 0.5, 0.0)).abs() < 0.75);
    }

    #[test]
    fn too_few_points() {
        let points = [Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)];
        assert_eq!(fit_plane(&points), Err(GeometryError::NotEnoughPoints(2)));
    }

    #[test]
    fn collinear_points_are_degenerate() {
        let points = [
            Vec3::ZERO,
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(2.0, 2.0, 2.0),
            Vec3::new(3.0, 3.0, 3.0),
        ];
        assert_eq!(fit_plane(&points), Err(GeometryError::DegeneratePointSet));
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let p = Vec3::new(5.0, 5.0, 5.0);
        assert_eq!(fit_plane(&[p, p, p]), Err(GeometryError::DegeneratePointSet));
    }
}
