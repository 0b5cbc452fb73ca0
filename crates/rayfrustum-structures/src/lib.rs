//! Renderer-facing geometry for rayfrustum.
//!
//! This crate turns core frustums and cascades into what a renderer draws:
//! - Frustum triangle and wireframe meshes
//! - Cascade colors
//! - The observed camera's shell (pose and model matrix)

// Graphics code intentionally uses casts for indices
#![allow(clippy::cast_possible_truncation)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

pub mod camera_shell;
pub mod frustum_mesh;
pub mod palette;

pub use camera_shell::CameraShell;
pub use frustum_mesh::{
    cascade_volumes, cascade_wireframe, frustum_edges, frustum_triangles, FrustumVolume,
    FRUSTUM_EDGE_INDICES, FRUSTUM_TRIANGLE_INDICES,
};
pub use palette::{cascade_color, CASCADE_PALETTE, LIGHT_WIRE_COLOR};
