//! Paint order for transparent, overlapping cascade volumes.
//!
//! This is a painter's-algorithm heuristic, not a depth sort. It assumes the
//! cascade's frustums are nested monotonically along the cascade's view axis,
//! which holds for any cascade produced by [`build_cascade`]. Cascades
//! rendered with oblique projections, or whose volumes are not ordered along
//! the view axis, may blend incorrectly.
//!
//! [`build_cascade`]: crate::cascade::build_cascade

use glam::Vec3;

use crate::cascade::FrustumsCascade;

/// Depth of `eye` along the cascade's view axis, positive in front of the
/// cascade's camera.
#[must_use]
pub fn eye_depth(cascade: &FrustumsCascade, eye_position: Vec3) -> f32 {
    let view = cascade.frustums()[0].view();
    -view.transform_point3(eye_position).z
}

/// Index of the frustum whose depth range contains `depth`.
///
/// Depths before the first plane map to the first frustum, depths past the
/// last plane to the last frustum. A NaN depth maps to the first frustum.
#[must_use]
pub fn containing_frustum(cascade: &FrustumsCascade, depth: f32) -> usize {
    let planes = cascade.planes();
    let last = cascade.n_frustums() - 1;

    if depth <= planes[0] {
        0
    } else if depth >= planes[last + 1] {
        last
    } else {
        planes
            .windows(2)
            .position(|pair| depth >= pair[0] && depth <= pair[1])
            .unwrap_or(0)
    }
}

/// Order in which to paint the frustums of `cascade` as seen from
/// `eye_position`.
///
/// Frustums before the one containing the eye come first in ascending order,
/// then those after it in descending order, and the containing frustum last
/// so it stays on top of the blend. The result is always a permutation of
/// `0..cascade.n_frustums()`.
#[must_use]
pub fn resolve_draw_order(cascade: &FrustumsCascade, eye_position: Vec3) -> Vec<usize> {
    let n = cascade.n_frustums();
    let nearest = containing_frustum(cascade, eye_depth(cascade, eye_position));

    (0..nearest)
        .chain((nearest + 1..n).rev())
        .chain(std::iter::once(nearest))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::cascade::build_cascade;

    /// Camera at the origin looking down -Z, so eye depth is `-eye.z`.
    fn cascade(planes: &[f32]) -> FrustumsCascade {
        let camera = Camera::orthographic(Vec3::ZERO, Vec3::NEG_Z, 2.0);
        build_cascade(&camera, 1.0, planes).unwrap()
    }

    fn eye_at_depth(depth: f32) -> Vec3 {
        Vec3::new(0.3, -0.2, -depth)
    }

    #[test]
    fn test_eye_depth() {
        let cascade = cascade(&[0.0, 2.0, 4.0, 16.0]);
        assert!((eye_depth(&cascade, eye_at_depth(1.0)) - 1.0).abs() < 1e-6);
        assert!((eye_depth(&cascade, eye_at_depth(-5.0)) + 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_containing_frustum_clamps() {
        let cascade = cascade(&[0.0, 2.0, 4.0, 16.0]);
        assert_eq!(containing_frustum(&cascade, -5.0), 0);
        assert_eq!(containing_frustum(&cascade, 0.0), 0);
        assert_eq!(containing_frustum(&cascade, 1.0), 0);
        assert_eq!(containing_frustum(&cascade, 3.0), 1);
        assert_eq!(containing_frustum(&cascade, 10.0), 2);
        assert_eq!(containing_frustum(&cascade, 16.0), 2);
        assert_eq!(containing_frustum(&cascade, 100.0), 2);
        assert_eq!(containing_frustum(&cascade, f32::NAN), 0);
    }

    #[test]
    fn test_boundary_depth_picks_nearer_frustum() {
        let cascade = cascade(&[0.0, 2.0, 4.0, 16.0]);
        assert_eq!(containing_frustum(&cascade, 2.0), 0);
        assert_eq!(containing_frustum(&cascade, 4.0), 1);
    }

    #[test]
    fn test_draw_order_eye_inside_first() {
        let cascade = cascade(&[0.0, 2.0, 4.0, 16.0]);
        let order = resolve_draw_order(&cascade, eye_at_depth(1.0));
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn test_draw_order_eye_inside_last() {
        let cascade = cascade(&[0.0, 2.0, 4.0, 16.0]);
        let order = resolve_draw_order(&cascade, eye_at_depth(10.0));
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_draw_order_eye_before_cascade() {
        let cascade = cascade(&[0.0, 2.0, 4.0, 16.0]);
        let order = resolve_draw_order(&cascade, eye_at_depth(-5.0));
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn test_draw_order_eye_in_middle() {
        let cascade = cascade(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(
            resolve_draw_order(&cascade, eye_at_depth(3.5)),
            vec![0, 1, 4, 3, 2]
        );
    }

    #[test]
    fn test_draw_order_single_frustum() {
        let cascade = cascade(&[1.0, 2.0]);
        assert_eq!(resolve_draw_order(&cascade, eye_at_depth(50.0)), vec![0]);
    }
}
