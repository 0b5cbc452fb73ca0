//! The observed camera's pose as a manipulable object.

use glam::{Mat4, Quat, Vec3};
use rayfrustum_core::{Camera, Transform};

/// A camera's position and orientation, kept as a [`Transform`] so it can be
/// moved and rotated incrementally (e.g. by a gizmo) and drawn as a model.
///
/// The shell's local -Z axis is the camera's view direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraShell {
    transform: Transform,
}

impl CameraShell {
    /// Creates a shell matching `camera`'s position and view direction.
    #[must_use]
    pub fn from_camera(camera: &Camera) -> Self {
        let rotation = Quat::from_rotation_arc(Vec3::NEG_Z, camera.forward());
        Self {
            transform: Transform::from_translation_rotation(camera.position, rotation),
        }
    }

    /// The shell's transform.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Model matrix for drawing the camera model.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        self.transform.to_matrix()
    }

    /// View direction in world space.
    #[must_use]
    pub fn view_direction(&self) -> Vec3 {
        self.transform.rotate_vector(Vec3::NEG_Z)
    }

    /// Applies one frame of manipulation: a translation, then a world-space
    /// rotation of `angle` radians about `axis`.
    pub fn apply_delta(&mut self, translation: Vec3, axis: Vec3, angle: f32) {
        self.transform.translate(translation);
        self.transform.rotate_axis_angle(axis, angle);
    }

    /// Writes the shell's pose back into `camera` (position and target; the
    /// up vector and projection are left alone).
    pub fn sync_camera(&self, camera: &mut Camera) {
        camera.position = self.transform.translation;
        camera.target = camera.position + self.view_direction();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observed_camera() -> Camera {
        let position = Vec3::new(0.0, 3.0, -5.0);
        Camera::perspective(position, position + Vec3::new(0.0, -1.0, 1.0), 40.0)
    }

    #[test]
    fn test_shell_matches_camera() {
        let camera = observed_camera();
        let shell = CameraShell::from_camera(&camera);
        assert_eq!(shell.transform().translation, camera.position);
        assert!((shell.view_direction() - camera.forward()).length() < 1e-5);
        assert_eq!(shell.transform().scale, Vec3::ONE);
    }

    #[test]
    fn test_sync_round_trip() {
        let mut camera = observed_camera();
        let before = camera;
        CameraShell::from_camera(&camera).sync_camera(&mut camera);
        assert!((camera.position - before.position).length() < 1e-6);
        assert!((camera.forward() - before.forward()).length() < 1e-5);
        // Target lands one unit along the view direction
        assert!((camera.position.distance(camera.target) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_apply_delta() {
        let mut camera = Camera::perspective(Vec3::ZERO, Vec3::NEG_Z, 40.0);
        let mut shell = CameraShell::from_camera(&camera);
        shell.apply_delta(Vec3::X, Vec3::Y, std::f32::consts::FRAC_PI_2);
        shell.sync_camera(&mut camera);

        assert!((camera.position - Vec3::X).length() < 1e-6);
        assert!((camera.forward() - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn test_facing_positive_z() {
        let camera = Camera::perspective(Vec3::ZERO, Vec3::Z, 40.0);
        let shell = CameraShell::from_camera(&camera);
        assert!((shell.view_direction() - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_model_matrix_places_origin() {
        let shell = CameraShell::from_camera(&observed_camera());
        let origin = shell.model_matrix().transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(0.0, 3.0, -5.0)).length() < 1e-6);
    }
}
