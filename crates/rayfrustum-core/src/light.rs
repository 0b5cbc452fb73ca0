//! Directional lights and shadow-cascade fitting.
//!
//! A directional light has no position of its own. To build a shadow
//! frustum for a camera frustum, the light is placed at the center of the
//! camera frustum's bounding box in light space and given the tightest
//! orthographic projection enclosing all eight corners.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::cascade::FrustumsCascade;
use crate::frustum::{build_frustum_from_matrices, Frustum};

/// `|dot(direction, Y)|` above which +Y can no longer serve as the light's up.
const PARALLEL_UP_THRESHOLD: f32 = 1.0 - 1e-4;

/// A directional light given by two angles, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    /// Rotation in the XY plane, measured from +X.
    pub azimuth: f32,
    /// Elevation toward +Z.
    pub attitude: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            azimuth: 45.0,
            attitude: 45.0,
        }
    }
}

impl DirectionalLight {
    /// Creates a light from azimuth and attitude in degrees.
    #[must_use]
    pub fn new(azimuth: f32, attitude: f32) -> Self {
        Self { azimuth, attitude }
    }

    /// The unit direction the light travels in.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        let azimuth = self.azimuth.to_radians();
        let attitude = self.attitude.to_radians();
        Vec3::new(
            azimuth.cos() * attitude.cos(),
            azimuth.sin() * attitude.cos(),
            attitude.sin(),
        )
        .normalize()
    }
}

/// Up vector for a light looking along `direction` (normalized).
///
/// +Y, unless the direction is (nearly) parallel to it, in which case +Z.
#[must_use]
pub fn light_up_vector(direction: Vec3) -> Vec3 {
    if direction.dot(Vec3::Y).abs() > PARALLEL_UP_THRESHOLD {
        log::warn!("light direction {direction} is parallel to +Y, falling back to +Z as up");
        Vec3::Z
    } else {
        Vec3::Y
    }
}

/// Axis-aligned bounds of `corners` after transforming them by `view`.
fn light_space_bounds(corners: &[Vec3; 8], view: Mat4) -> (Vec3, Vec3) {
    corners.iter().fold(
        (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
        |(min, max), &corner| {
            let p = view.transform_point3(corner);
            (min.min(p), max.max(p))
        },
    )
}

/// Fits the tightest orthographic light frustum around `camera_frustum`
/// for a light travelling along `light_direction`.
///
/// The returned frustum's view matrix looks along the light direction from
/// the center of the camera frustum's light-space bounding box; its
/// projection box is exactly that bounding box, without padding.
#[must_use]
pub fn fit_directional_light_frustum(camera_frustum: &Frustum, light_direction: Vec3) -> Frustum {
    let direction = light_direction.normalize();
    let up = light_up_vector(direction);

    // Light at the origin, only to locate the bounding box center
    let provisional_view = Mat4::look_at_rh(Vec3::ZERO, direction, up);
    let (min, max) = light_space_bounds(camera_frustum.corners(), provisional_view);
    let light_position = provisional_view
        .inverse()
        .transform_point3((min + max) * 0.5);

    let light_view = Mat4::look_at_rh(light_position, light_position + direction, up);
    let (min, max) = light_space_bounds(camera_frustum.corners(), light_view);

    // View space looks down -Z, near/far are distances along it
    let light_proj = Mat4::orthographic_rh_gl(min.x, max.x, min.y, max.y, -max.z, -min.z);

    build_frustum_from_matrices(light_view, light_proj)
}

/// Fits a light frustum to every frustum of `camera_cascade` independently.
///
/// The resulting cascade keeps the camera cascade's planes and ordering.
#[must_use]
pub fn fit_directional_light_cascade(
    camera_cascade: &FrustumsCascade,
    light_direction: Vec3,
) -> FrustumsCascade {
    let frustums = camera_cascade
        .frustums()
        .iter()
        .map(|frustum| fit_directional_light_frustum(frustum, light_direction))
        .collect();

    log::debug!(
        "fitted light cascade: {} frustums along {}",
        camera_cascade.n_frustums(),
        light_direction
    );

    camera_cascade.with_frustums(frustums)
}
