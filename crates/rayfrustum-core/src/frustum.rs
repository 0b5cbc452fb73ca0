//! Camera frustums as world-space corner sets.
//!
//! A [`Frustum`] is derived entirely from a view matrix and a projection
//! matrix: its corners are the eight vertices of the canonical clip-space
//! cube (OpenGL convention, `[-1, 1]` on every axis, near at `z = -1`)
//! unprojected through `inverse(proj * view)`.

use glam::{Mat4, Vec3};

use crate::camera::Camera;

/// Names of the eight frustum corner slots, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    NearBottomLeft = 0,
    NearTopLeft = 1,
    NearTopRight = 2,
    NearBottomRight = 3,
    FarBottomLeft = 4,
    FarTopLeft = 5,
    FarTopRight = 6,
    FarBottomRight = 7,
}

/// Clip-space cube vertices, in [`Corner`] order.
pub const NDC_CORNERS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
];

/// The view volume of a camera between a near and a far plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    corners: [Vec3; 8],
    view: Mat4,
    proj: Mat4,
}

impl Frustum {
    /// World-space corners in [`Corner`] order.
    #[must_use]
    pub fn corners(&self) -> &[Vec3; 8] {
        &self.corners
    }

    /// A single named corner.
    #[must_use]
    pub fn corner(&self, corner: Corner) -> Vec3 {
        self.corners[corner as usize]
    }

    /// The view matrix this frustum was built from.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        self.view
    }

    /// The projection matrix this frustum was built from.
    #[must_use]
    pub fn proj(&self) -> Mat4 {
        self.proj
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_proj(&self) -> Mat4 {
        self.proj * self.view
    }

    /// Mean of the eight corners.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.corners.iter().copied().sum::<Vec3>() / 8.0
    }
}

/// Builds the frustum of `camera` between `near` and `far`.
///
/// `near` and `far` are positive view-space distances with `near < far`.
/// Malformed numeric input is not trapped; NaN and infinities propagate
/// into the corners.
#[must_use]
pub fn build_frustum(camera: &Camera, aspect_ratio: f32, near: f32, far: f32) -> Frustum {
    let view = camera.view_matrix();
    let proj = camera.projection_matrix(aspect_ratio, near, far);
    build_frustum_from_matrices(view, proj)
}

/// Builds a frustum from an existing view and projection matrix pair.
#[must_use]
pub fn build_frustum_from_matrices(view: Mat4, proj: Mat4) -> Frustum {
    let inv_view_proj = (proj * view).inverse();
    let corners = NDC_CORNERS.map(|ndc| inv_view_proj.project_point3(ndc));
    Frustum {
        corners,
        view,
        proj,
    }
}
