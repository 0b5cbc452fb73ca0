//! Triangle and wireframe geometry for frustums and cascades.

use glam::{Vec3, Vec4};
use rayfrustum_core::{Frustum, FrustumsCascade};

use crate::palette::cascade_color;

/// Corner indices of the 12 faces' triangles, wound counter-clockwise when
/// seen from outside the frustum.
pub const FRUSTUM_TRIANGLE_INDICES: [[u32; 3]; 12] = [
    // Near
    [1, 0, 2],
    [3, 2, 0],
    // Right
    [2, 3, 6],
    [7, 6, 3],
    // Left
    [5, 4, 1],
    [0, 1, 4],
    // Far
    [6, 7, 5],
    [4, 5, 7],
    // Bottom
    [0, 4, 3],
    [7, 3, 4],
    // Top
    [5, 1, 6],
    [2, 6, 1],
];

/// Corner indices of the 12 frustum edges: near quad, far quad, then the
/// four edges joining them.
pub const FRUSTUM_EDGE_INDICES: [[u32; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// The frustum surface as 12 triangles.
#[must_use]
pub fn frustum_triangles(frustum: &Frustum) -> [[Vec3; 3]; 12] {
    let corners = frustum.corners();
    FRUSTUM_TRIANGLE_INDICES.map(|tri| tri.map(|i| corners[i as usize]))
}

/// The frustum edges as 12 line segments.
#[must_use]
pub fn frustum_edges(frustum: &Frustum) -> [[Vec3; 2]; 12] {
    let corners = frustum.corners();
    FRUSTUM_EDGE_INDICES.map(|edge| edge.map(|i| corners[i as usize]))
}

/// A filled, colored frustum volume ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct FrustumVolume {
    /// Index of the frustum within its cascade.
    pub index: usize,
    /// RGBA color in `[0, 1]`.
    pub color: Vec4,
    /// Surface triangles.
    pub triangles: [[Vec3; 3]; 12],
}

/// Filled volumes for `cascade`, in the given paint order, each colored by
/// its cascade index.
///
/// Indices in `order` that fall outside the cascade are skipped.
#[must_use]
pub fn cascade_volumes(cascade: &FrustumsCascade, order: &[usize]) -> Vec<FrustumVolume> {
    order
        .iter()
        .filter_map(|&index| {
            let frustum = cascade.frustums().get(index)?;
            Some(FrustumVolume {
                index,
                color: cascade_color(index),
                triangles: frustum_triangles(frustum),
            })
        })
        .collect()
}

/// Wireframe of every frustum of `cascade`, as indexed line segments.
///
/// Returns `(nodes, edges)`: 8 nodes per frustum and 12 edges indexing them.
#[must_use]
pub fn cascade_wireframe(cascade: &FrustumsCascade) -> (Vec<Vec3>, Vec<[u32; 2]>) {
    let mut nodes = Vec::with_capacity(cascade.n_frustums() * 8);
    let mut edges = Vec::with_capacity(cascade.n_frustums() * 12);

    for frustum in cascade.frustums() {
        let base = nodes.len() as u32;
        nodes.extend_from_slice(frustum.corners());
        edges.extend(FRUSTUM_EDGE_INDICES.map(|[a, b]| [base + a, base + b]));
    }

    (nodes, edges)
}
