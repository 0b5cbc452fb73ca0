//! Colors for cascade visualization.

use glam::Vec4;
use rayfrustum_core::MAX_N_FRUSTUMS_IN_CASCADE;

/// Translucent RGBA colors for cascade frustums, one per slot.
pub const CASCADE_PALETTE: [[u8; 4]; MAX_N_FRUSTUMS_IN_CASCADE] = [
    [255, 0, 0, 80],   // Red
    [0, 255, 0, 80],   // Green
    [0, 0, 255, 80],   // Blue
    [255, 255, 0, 80], // Yellow
    [255, 0, 255, 80], // Magenta
    [0, 255, 255, 80], // Cyan
    [255, 128, 0, 80], // Orange
    [128, 0, 128, 80], // Purple
    [0, 128, 128, 80], // Teal
];

/// Wireframe color for light cascades (opaque yellow).
pub const LIGHT_WIRE_COLOR: Vec4 = Vec4::new(253.0 / 255.0, 249.0 / 255.0, 0.0, 1.0);

/// Color of cascade frustum `index` in `[0, 1]` RGBA. Wraps past the
/// palette length.
#[must_use]
pub fn cascade_color(index: usize) -> Vec4 {
    let [r, g, b, a] = CASCADE_PALETTE[index % CASCADE_PALETTE.len()];
    Vec4::new(f32::from(r), f32::from(g), f32::from(b), f32::from(a)) / 255.0
}
