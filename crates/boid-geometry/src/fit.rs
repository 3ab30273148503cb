//! Least-squares plane fit to a point set.

use boid_core::Vec3;
use nalgebra::{Matrix3, Vector3};

use crate::{GeometryError, GeometryResult, Plane};

/// Eigenvalue ratio below which the point set is treated as collinear.
const DEGENERACY_RATIO: f64 = 1e-12;

/// Fit the least-squares plane through `points`.
///
/// The plane passes through the centroid with its normal along the smallest
/// principal axis of the covariance matrix.  Fails for fewer than 3 points
/// or a coincident/collinear set, where no unique plane exists.
pub fn fit_plane(points: &[Vec3]) -> GeometryResult<Plane> {
    if points.len() < 3 {
        return Err(GeometryError::NotEnoughPoints(points.len()));
    }

    let centroid = points.iter().fold(Vec3::ZERO, |acc, &p| acc + p) / points.len() as f64;

    let mut covariance = Matrix3::zeros();
    for &p in points {
        let d = p - centroid;
        let d = Vector3::new(d.x, d.y, d.z);
        covariance += d * d.transpose();
    }

    let eigen = covariance.symmetric_eigen();
    let mut order = [0usize, 1, 2];
    order.sort_by(|&a, &b| eigen.eigenvalues[a].total_cmp(&eigen.eigenvalues[b]));
    let [smallest, middle, largest] = order;

    // A unique plane needs spread along two principal axes.
    let spread = eigen.eigenvalues[largest];
    if spread <= 0.0 || eigen.eigenvalues[middle] <= spread * DEGENERACY_RATIO {
        return Err(GeometryError::DegeneratePointSet);
    }

    let n = eigen.eigenvectors.column(smallest);
    Plane::new(centroid, Vec3::new(n[0], n[1], n[2])).ok_or(GeometryError::DegeneratePointSet)
}
