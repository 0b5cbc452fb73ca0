//! Translation / rotation / scale decomposition for posed objects.

use glam::{Mat4, Quat, Vec3};

/// A transformation represented as separate components.
///
/// Useful for incremental manipulation, where translation and rotation
/// deltas arrive separately each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Translation component.
    pub translation: Vec3,
    /// Rotation component as a quaternion.
    pub rotation: Quat,
    /// Scale component.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Creates a unit-scale transform from a translation and rotation.
    #[must_use]
    pub fn from_translation_rotation(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
            ..Default::default()
        }
    }

    /// Converts this transform to a Mat4 (scale, then rotate, then translate).
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Offsets the translation.
    pub fn translate(&mut self, delta: Vec3) {
        self.translation += delta;
    }

    /// Applies a world-space rotation of `angle` radians about `axis` on top
    /// of the current rotation. A zero axis or angle leaves it unchanged.
    pub fn rotate_axis_angle(&mut self, axis: Vec3, angle: f32) {
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        if angle == 0.0 {
            return;
        }
        self.rotation = (Quat::from_axis_angle(axis, angle) * self.rotation).normalize();
    }

    /// Rotates a local-space direction into world space.
    #[must_use]
    pub fn rotate_vector(&self, v: Vec3) -> Vec3 {
        self.rotation * v
    }
}
