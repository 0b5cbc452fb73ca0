//! Configuration options for a frustum scene.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, OrbitController};
use crate::cascade::validate_planes;
use crate::error::Result;
use crate::light::DirectionalLight;

/// Scene configuration: viewport, cameras, light and cascade splits.
///
/// Every field has a default, so a JSON document only needs to name the
/// fields it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneOptions {
    /// Viewport width in pixels.
    pub screen_width: u32,

    /// Viewport height in pixels.
    pub screen_height: u32,

    /// Cascade split depths of the observed camera, strictly ascending.
    pub planes: Vec<f32>,

    /// Directional light angles.
    pub light: DirectionalLight,

    /// The free-orbit camera the scene is viewed through.
    pub viewer_camera: Camera,

    /// The camera whose frustums are visualized.
    pub observed_camera: Camera,

    /// Viewer camera control speeds.
    pub controller: OrbitController,
}

impl Default for SceneOptions {
    fn default() -> Self {
        let observed_position = Vec3::new(0.0, 3.0, -5.0);
        Self {
            screen_width: 1024,
            screen_height: 768,
            planes: vec![0.01, 2.0, 4.0, 16.0],
            light: DirectionalLight::default(),
            viewer_camera: Camera::perspective(Vec3::new(15.0, 5.0, 15.0), Vec3::ZERO, 70.0),
            observed_camera: Camera::perspective(
                observed_position,
                observed_position + Vec3::new(0.0, -1.0, 1.0),
                40.0,
            ),
            controller: OrbitController::default(),
        }
    }
}

impl SceneOptions {
    /// Parses options from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes options to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the cascade planes.
    pub fn validate(&self) -> Result<()> {
        validate_planes(&self.planes)
    }

    /// Viewport width divided by height.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(&self) -> f32 {
        self.screen_width as f32 / self.screen_height.max(1) as f32
    }
}
