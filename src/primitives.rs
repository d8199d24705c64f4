use glam::{Vec3, Vec4};

pub const CUBE_VERTEX_COUNT: usize = 8;
pub const CUBE_INDEX_COUNT: usize = 36;

// Back face (z = -1) first, then front face (z = +1)
pub const CUBE_POSITIONS: [Vec3; CUBE_VERTEX_COUNT] = [
    Vec3::new(-1.0, -1.0, -1.0), // back-bottom-left
    Vec3::new(1.0, -1.0, -1.0),  // back-bottom-right
    Vec3::new(1.0, 1.0, -1.0),   // back-top-right
    Vec3::new(-1.0, 1.0, -1.0),  // back-top-left
    Vec3::new(-1.0, -1.0, 1.0),  // front-bottom-left
    Vec3::new(1.0, -1.0, 1.0),   // front-bottom-right
    Vec3::new(1.0, 1.0, 1.0),    // front-top-right
    Vec3::new(-1.0, 1.0, 1.0),   // front-top-left
];

pub const CUBE_COLORS: [Vec4; CUBE_VERTEX_COUNT] = [
    Vec4::new(0.0, 0.0, 0.0, 1.0), // black
    Vec4::new(1.0, 0.0, 0.0, 1.0), // red
    Vec4::new(1.0, 1.0, 0.0, 1.0), // yellow
    Vec4::new(0.0, 1.0, 0.0, 1.0), // green
    Vec4::new(0.0, 0.0, 1.0, 1.0), // blue
    Vec4::new(1.0, 0.0, 1.0, 1.0), // magenta
    Vec4::new(1.0, 1.0, 1.0, 1.0), // white
    Vec4::new(0.0, 1.0, 1.0, 1.0), // cyan
];

/// Counter-clockwise when viewed from outside the cube.
#[rustfmt::skip]
pub const CUBE_INDICES: [u16; CUBE_INDEX_COUNT] = [
    // Front
    4, 5, 6,
    4, 6, 7,
    // Back
    1, 0, 3,
    1, 3, 2,
    // Right
    5, 1, 2,
    5, 2, 6,
    // Left
    0, 4, 7,
    0, 7, 3,
    // Top
    7, 6, 2,
    7, 2, 3,
    // Bottom
    0, 1, 5,
    0, 5, 4,
];
