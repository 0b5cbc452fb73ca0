//! rayfrustum: camera frustum and cascaded shadow-map geometry for
//! visualization.
//!
//! Given an observed camera and a directional light, rayfrustum computes the
//! camera's frustum cascade, a tightly fitted light frustum for every cascade
//! split, and the order in which to paint the translucent cascade volumes as
//! seen from a free-orbit viewer camera. Rendering is left to the caller.
//!
//! # Quick Start
//!
//! ```no_run
//! use rayfrustum::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let mut scene = Scene::new(SceneOptions::default())?;
//!     scene.set_light_angles(60.0, 30.0);
//!
//!     let frame = scene.frame()?;
//!     for volume in frame.camera_volumes() {
//!         // Draw volume.triangles with volume.color
//!         let _ = volume;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! The geometry functions themselves are also available directly:
//! [`build_frustum`], [`build_cascade`], [`fit_directional_light_frustum`],
//! [`fit_directional_light_cascade`] and [`resolve_draw_order`].

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_errors_doc)]

mod scene;

use std::path::Path;

// Re-export core types
pub use rayfrustum_core::{
    build_cascade, build_frustum, build_frustum_from_matrices, containing_frustum, eye_depth,
    fit_directional_light_cascade, fit_directional_light_frustum, light_up_vector,
    resolve_draw_order, validate_planes, Camera, Corner, DirectionalLight, Frustum, FrustumError,
    FrustumsCascade, OrbitController, OrbitInput, ProjectionKind, Result, SceneOptions, Transform,
    MAX_N_FRUSTUMS_IN_CASCADE, MAX_N_PLANES_IN_CASCADE, MIN_N_PLANES_IN_CASCADE, NDC_CORNERS,
};
pub use rayfrustum_core::{Mat4, Quat, Vec2, Vec3, Vec4};

// Re-export structures
pub use rayfrustum_structures::{
    cascade_color, cascade_volumes, cascade_wireframe, frustum_edges, frustum_triangles,
    CameraShell, FrustumVolume, CASCADE_PALETTE, LIGHT_WIRE_COLOR,
};

pub use scene::{FrameGeometry, Scene};

/// Initializes logging from the `RUST_LOG` environment variable.
///
/// Safe to call more than once; later calls do nothing.
pub fn init_logging() {
    let _ = env_logger::try_init();
}

/// Loads scene options from a JSON file.
///
/// Fields missing from the file keep their defaults. The cascade planes are
/// validated.
pub fn load_options(path: impl AsRef<Path>) -> Result<SceneOptions> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let options = SceneOptions::from_json_str(&json)?;
    options.validate()?;
    log::info!("loaded scene options from {}", path.display());
    Ok(options)
}

/// Writes scene options to a JSON file.
pub fn save_options(options: &SceneOptions, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, options.to_json_string()?)?;
    log::info!("saved scene options to {}", path.display());
    Ok(())
}
