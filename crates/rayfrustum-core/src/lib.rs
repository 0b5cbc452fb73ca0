//! Core geometry for rayfrustum.
//!
//! This crate computes everything the viewer draws, without drawing it:
//! - [`build_frustum`] / [`build_frustum_from_matrices`] derive the eight
//!   world-space corners of a camera's view volume
//! - [`build_cascade`] splits a camera's depth range into a [`FrustumsCascade`]
//! - [`fit_directional_light_frustum`] / [`fit_directional_light_cascade`]
//!   fit tight orthographic shadow frustums for a directional light
//! - [`resolve_draw_order`] orders transparent cascade volumes for blending
//!
//! All of these are pure functions of their inputs. Camera, light and
//! options are plain values owned by the caller.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder-style constructors don't need must_use
#![allow(clippy::must_use_candidate)]

pub mod camera;
pub mod cascade;
pub mod draw_order;
pub mod error;
pub mod frustum;
pub mod light;
pub mod options;
pub mod transform;

pub use camera::{Camera, OrbitController, OrbitInput, ProjectionKind};
pub use cascade::{
    build_cascade, validate_planes, FrustumsCascade, MAX_N_FRUSTUMS_IN_CASCADE,
    MAX_N_PLANES_IN_CASCADE, MIN_N_PLANES_IN_CASCADE,
};
pub use draw_order::{containing_frustum, eye_depth, resolve_draw_order};
pub use error::{FrustumError, Result};
pub use frustum::{build_frustum, build_frustum_from_matrices, Corner, Frustum, NDC_CORNERS};
pub use light::{
    fit_directional_light_cascade, fit_directional_light_frustum, light_up_vector, DirectionalLight,
};
pub use options::SceneOptions;
pub use transform::Transform;

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
