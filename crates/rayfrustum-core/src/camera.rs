//! Camera data model and free-orbit viewer controls.

use std::str::FromStr;

use glam::{Mat4, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::FrustumError;

/// Closest the orbit controller lets the camera get to its target.
const MIN_TARGET_DISTANCE: f32 = 0.001;

/// Margin kept between the view direction and the up axis when pitching.
const PITCH_MARGIN: f32 = 0.001;

/// Camera projection kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectionKind {
    /// Perspective projection, `fovy` is the vertical field of view in degrees.
    #[default]
    Perspective,
    /// Orthographic projection, `fovy` is the full view height in world units.
    Orthographic,
}

impl ProjectionKind {
    /// Converts to a u32 index (0 = perspective, 1 = orthographic).
    #[must_use]
    pub fn to_index(self) -> u32 {
        match self {
            ProjectionKind::Perspective => 0,
            ProjectionKind::Orthographic => 1,
        }
    }
}

impl TryFrom<u32> for ProjectionKind {
    type Error = FrustumError;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(ProjectionKind::Perspective),
            1 => Ok(ProjectionKind::Orthographic),
            other => Err(FrustumError::UnsupportedProjection(other)),
        }
    }
}

/// Parses a projection kind from its name or its index.
impl FromStr for ProjectionKind {
    type Err = FrustumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("perspective") {
            return Ok(ProjectionKind::Perspective);
        }
        if s.eq_ignore_ascii_case("orthographic") {
            return Ok(ProjectionKind::Orthographic);
        }

        let index: u32 = s
            .parse()
            .map_err(|_| FrustumError::InvalidProjection(s.to_owned()))?;
        ProjectionKind::try_from(index)
    }
}

/// A camera snapshot.
///
/// The geometry functions only ever read a camera; the harness owns and
/// mutates it between frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Vertical field of view in degrees (view height for orthographic).
    pub fovy: f32,
    /// Projection kind.
    pub projection: ProjectionKind,
}

impl Camera {
    /// Creates a new camera.
    #[must_use]
    pub fn new(
        position: Vec3,
        target: Vec3,
        up: Vec3,
        fovy: f32,
        projection: ProjectionKind,
    ) -> Self {
        Self {
            position,
            target,
            up,
            fovy,
            projection,
        }
    }

    /// Creates a perspective camera with +Y up.
    #[must_use]
    pub fn perspective(position: Vec3, target: Vec3, fovy: f32) -> Self {
        Self::new(position, target, Vec3::Y, fovy, ProjectionKind::Perspective)
    }

    /// Creates an orthographic camera with +Y up.
    #[must_use]
    pub fn orthographic(position: Vec3, target: Vec3, height: f32) -> Self {
        Self::new(
            position,
            target,
            Vec3::Y,
            height,
            ProjectionKind::Orthographic,
        )
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Returns the projection matrix for the given aspect ratio and depth range.
    #[must_use]
    pub fn projection_matrix(&self, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
        match self.projection {
            ProjectionKind::Perspective => {
                Mat4::perspective_rh_gl(self.fovy.to_radians(), aspect_ratio, near, far)
            }
            ProjectionKind::Orthographic => {
                let half_height = self.fovy / 2.0;
                let half_width = half_height * aspect_ratio;
                Mat4::orthographic_rh_gl(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    near,
                    far,
                )
            }
        }
    }

    /// Returns the camera's forward direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Returns the camera's right direction.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up.normalize()).normalize()
    }

    /// Rotates the camera around its target about the up axis.
    pub fn yaw_around_target(&mut self, angle: f32) {
        let up = self.up.normalize();
        let to_target = Quat::from_axis_angle(up, angle) * (self.target - self.position);
        self.position = self.target - to_target;
    }

    /// Rotates the camera around its target about its right axis.
    ///
    /// The angle is clamped so the view direction never crosses the up axis.
    pub fn pitch_around_target(&mut self, angle: f32) {
        let up = self.up.normalize();
        let to_target = self.target - self.position;

        let max_up = up.angle_between(to_target) - PITCH_MARGIN;
        let max_down = -(-up).angle_between(to_target) + PITCH_MARGIN;
        let angle = angle.min(max_up).max(max_down);

        let to_target = Quat::from_axis_angle(self.right(), angle) * to_target;
        self.position = self.target - to_target;
    }

    /// Moves position and target along the right axis, kept in the world
    /// horizontal plane.
    pub fn move_right(&mut self, distance: f32) {
        let mut right = self.right();
        right.y = 0.0;
        let offset = right.normalize_or_zero() * distance;
        self.position += offset;
        self.target += offset;
    }

    /// Moves position and target along the screen-space up axis.
    pub fn move_up(&mut self, distance: f32) {
        let up = (self.position - self.target).cross(self.right());
        let offset = up.normalize_or_zero() * distance;
        self.position += offset;
        self.target += offset;
    }

    /// Moves the camera toward (negative delta) or away from its target.
    pub fn move_to_target(&mut self, delta: f32) {
        let distance = self.position.distance(self.target) + delta;
        let distance = if distance <= 0.0 {
            MIN_TARGET_DISTANCE
        } else {
            distance
        };
        self.position = self.target - self.forward() * distance;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::perspective(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, 45.0)
    }
}

/// One frame of pointer input for the orbit controller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitInput {
    /// Whether the middle mouse button is held.
    pub middle_down: bool,
    /// Whether shift is held.
    pub shift_down: bool,
    /// Mouse movement since the previous frame, in pixels.
    pub mouse_delta: Vec2,
    /// Mouse wheel movement since the previous frame.
    pub wheel: f32,
}

/// Free-orbit viewer controls: middle-drag orbits, shift + middle-drag pans,
/// the wheel zooms toward the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitController {
    /// Radians of rotation per pixel of mouse movement.
    pub rotate_speed: f32,
    /// World units of pan per pixel of mouse movement.
    pub move_speed: f32,
    /// World units of zoom per wheel step.
    pub zoom_speed: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self {
            rotate_speed: 0.003,
            move_speed: 0.01,
            zoom_speed: 1.0,
        }
    }
}

impl OrbitController {
    /// Applies one frame of input to the camera.
    pub fn update(&self, camera: &mut Camera, input: &OrbitInput) {
        let delta = input.mouse_delta;

        if input.middle_down && input.shift_down {
            camera.move_right(-self.move_speed * delta.x);
            camera.move_up(self.move_speed * delta.y);
        } else if input.middle_down {
            camera.yaw_around_target(-self.rotate_speed * delta.x);
            camera.pitch_around_target(-self.rotate_speed * delta.y);
        }

        if input.wheel != 0.0 {
            camera.move_to_target(-input.wheel * self.zoom_speed);
        }
    }
}
