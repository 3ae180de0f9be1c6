use std::f32::consts::PI;

use crate::types::Vertex;

/// Corners around the prism axis
pub const SIDES: usize = 10;
pub const RADIUS: f32 = 0.5;
pub const HEIGHT: f32 = 0.5;

/// 8 bottom + 8 top + 20 side triangles
pub const TRIANGLE_COUNT: usize = 36;
pub const VERTEX_COUNT: usize = TRIANGLE_COUNT * 3;

const BOTTOM_COLOR: [f32; 3] = [0.0, 0.0, 0.0];
const TOP_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
const SIDE_COLORS: [[f32; 3]; 5] = [
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 1.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
];

/// Cap triangulation as corner indices. Alternates between the two ends of
/// the polygon so every triangle stays well shaped.
const CAP_TRIANGLES: [[usize; 3]; SIDES - 2] = [
    [0, 1, 2],
    [0, 2, 9],
    [2, 8, 9],
    [2, 3, 8],
    [3, 7, 8],
    [3, 4, 7],
    [4, 6, 7],
    [4, 5, 6],
];

/// Corner `index` of the decagon at height `z`
pub fn corner(index: usize, z: f32) -> [f32; 3] {
    let angle = (index % SIDES) as f32 * (2.0 * PI / SIDES as f32);
    [RADIUS * angle.cos(), RADIUS * angle.sin(), z]
}

/// Triangle list for the decagonal prism standing on the XY plane.
///
/// Bottom cap at z = 0 is black, top cap at z = `HEIGHT` is white, and the
/// side faces cycle through red, yellow, cyan, blue and magenta.
pub fn prism_vertices() -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(VERTEX_COUNT);

    for (z, color) in [(0.0, BOTTOM_COLOR), (HEIGHT, TOP_COLOR)] {
        for triangle in CAP_TRIANGLES {
            vertices.extend(triangle.map(|i| Vertex::new(corner(i, z), color)));
        }
    }

    for side in 0..SIDES {
        let color = SIDE_COLORS[side % SIDE_COLORS.len()];
        let (a, b) = (side, side + 1);
        vertices.extend([
            Vertex::new(corner(a, 0.0), color),
            Vertex::new(corner(a, HEIGHT), color),
            Vertex::new(corner(b, HEIGHT), color),
            Vertex::new(corner(b, 0.0), color),
            Vertex::new(corner(a, 0.0), color),
            Vertex::new(corner(b, HEIGHT), color),
        ]);
    }

    debug_assert_eq!(vertices.len(), VERTEX_COUNT);
    vertices
}
