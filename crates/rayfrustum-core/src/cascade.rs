//! Partitioning a camera's depth range into a cascade of frustums.

use crate::camera::Camera;
use crate::error::{FrustumError, Result};
use crate::frustum::{build_frustum, Frustum};

/// Maximum number of frustums a cascade can hold.
pub const MAX_N_FRUSTUMS_IN_CASCADE: usize = 9;

/// Minimum number of split planes (one frustum).
pub const MIN_N_PLANES_IN_CASCADE: usize = 2;

/// Maximum number of split planes.
pub const MAX_N_PLANES_IN_CASCADE: usize = MAX_N_FRUSTUMS_IN_CASCADE + 1;

/// An ordered sequence of frustums covering consecutive depth ranges.
///
/// `frustums()[i]` spans `[planes()[i], planes()[i + 1]]`. A cascade always
/// holds between 1 and [`MAX_N_FRUSTUMS_IN_CASCADE`] frustums and its planes
/// are strictly ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct FrustumsCascade {
    frustums: Vec<Frustum>,
    planes: Vec<f32>,
}

impl FrustumsCascade {
    /// The frustums, nearest first.
    #[must_use]
    pub fn frustums(&self) -> &[Frustum] {
        &self.frustums
    }

    /// The split planes, one more than the number of frustums.
    #[must_use]
    pub fn planes(&self) -> &[f32] {
        &self.planes
    }

    /// Number of frustums in the cascade.
    #[must_use]
    pub fn n_frustums(&self) -> usize {
        self.frustums.len()
    }

    /// Depth range `(near, far)` of frustum `index`.
    #[must_use]
    pub fn depth_range(&self, index: usize) -> Option<(f32, f32)> {
        let near = *self.planes.get(index)?;
        let far = *self.planes.get(index + 1)?;
        Some((near, far))
    }

    /// Builds a cascade sharing `planes` with `self` from a new set of frustums.
    pub(crate) fn with_frustums(&self, frustums: Vec<Frustum>) -> Self {
        debug_assert_eq!(frustums.len(), self.frustums.len());
        Self {
            frustums,
            planes: self.planes.clone(),
        }
    }
}

/// Checks that `planes` can describe a cascade: between
/// [`MIN_N_PLANES_IN_CASCADE`] and [`MAX_N_PLANES_IN_CASCADE`] entries,
/// strictly ascending.
pub fn validate_planes(planes: &[f32]) -> Result<()> {
    if !(MIN_N_PLANES_IN_CASCADE..=MAX_N_PLANES_IN_CASCADE).contains(&planes.len()) {
        return Err(FrustumError::PlaneCount {
            count: planes.len(),
            min: MIN_N_PLANES_IN_CASCADE,
            max: MAX_N_PLANES_IN_CASCADE,
        });
    }

    for (index, pair) in planes.windows(2).enumerate() {
        let (near, far) = (pair[0], pair[1]);
        if near.is_nan() || far.is_nan() || far <= near {
            return Err(FrustumError::PlanesNotAscending { index, near, far });
        }
    }

    Ok(())
}

/// Splits the view volume of `camera` at `planes` into a cascade.
///
/// Frustum `i` spans `[planes[i], planes[i + 1]]`; all frustums share the
/// camera's view matrix and aspect ratio.
///
/// # Errors
///
/// Returns [`FrustumError::PlaneCount`] if fewer than two or more than
/// [`MAX_N_PLANES_IN_CASCADE`] planes are given, and
/// [`FrustumError::PlanesNotAscending`] if the planes are not strictly
/// ascending.
pub fn build_cascade(
    camera: &Camera,
    aspect_ratio: f32,
    planes: &[f32],
) -> Result<FrustumsCascade> {
    validate_planes(planes)?;

    let frustums = planes
        .windows(2)
        .map(|pair| build_frustum(camera, aspect_ratio, pair[0], pair[1]))
        .collect::<Vec<_>>();

    log::debug!(
        "built camera cascade: {} frustums over [{}, {}]",
        frustums.len(),
        planes[0],
        planes[planes.len() - 1]
    );

    Ok(FrustumsCascade {
        frustums,
        planes: planes.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn observed_camera() -> Camera {
        let position = Vec3::new(0.0, 3.0, -5.0);
        Camera::perspective(position, position + Vec3::new(0.0, -1.0, 1.0), 40.0)
    }

    #[test]
    fn test_cascade_partition() {
        let camera = observed_camera();
        let planes = [0.01, 2.0, 4.0, 16.0];
        let cascade = build_cascade(&camera, 4.0 / 3.0, &planes).unwrap();

        assert_eq!(cascade.n_frustums(), 3);
        assert_eq!(cascade.planes(), &planes);
        assert_eq!(cascade.depth_range(0), Some((0.01, 2.0)));
        assert_eq!(cascade.depth_range(1), Some((2.0, 4.0)));
        assert_eq!(cascade.depth_range(2), Some((4.0, 16.0)));
        assert_eq!(cascade.depth_range(3), None);

        for (i, frustum) in cascade.frustums().iter().enumerate() {
            let (near, far) = cascade.depth_range(i).unwrap();
            assert_eq!(*frustum, build_frustum(&camera, 4.0 / 3.0, near, far));
        }
    }

    #[test]
    fn test_adjacent_frustums_share_a_face() {
        let camera = observed_camera();
        let cascade = build_cascade(&camera, 1.0, &[0.5, 2.0, 8.0]).unwrap();
        let first = cascade.frustums()[0].corners();
        let second = cascade.frustums()[1].corners();
        for i in 0..4 {
            assert!((first[i + 4] - second[i]).length() < 1e-3);
        }
    }

    #[test]
    fn test_too_few_planes() {
        let err = build_cascade(&observed_camera(), 1.0, &[1.0]).unwrap_err();
        assert!(matches!(err, FrustumError::PlaneCount { count: 1, .. }));
    }

    #[test]
    fn test_too_many_planes() {
        let planes: Vec<f32> = (1..=MAX_N_PLANES_IN_CASCADE + 1).map(|i| i as f32).collect();
        let err = build_cascade(&observed_camera(), 1.0, &planes).unwrap_err();
        assert!(matches!(err, FrustumError::PlaneCount { count: 11, .. }));
    }

    #[test]
    fn test_max_planes_accepted() {
        let planes: Vec<f32> = (1..=MAX_N_PLANES_IN_CASCADE).map(|i| i as f32).collect();
        let cascade = build_cascade(&observed_camera(), 1.0, &planes).unwrap();
        assert_eq!(cascade.n_frustums(), MAX_N_FRUSTUMS_IN_CASCADE);
    }

    #[test]
    fn test_planes_not_strictly_ascending() {
        let err = build_cascade(&observed_camera(), 1.0, &[1.0, 1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            FrustumError::PlanesNotAscending { index: 0, .. }
        ));

        let err = build_cascade(&observed_camera(), 1.0, &[1.0, 3.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            FrustumError::PlanesNotAscending { index: 1, .. }
        ));
    }

    #[test]
    fn test_nan_plane_rejected() {
        assert!(validate_planes(&[1.0, f32::NAN, 2.0]).is_err());
    }
}
