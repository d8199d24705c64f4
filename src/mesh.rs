use super::primitives;

/// Indexed triangle mesh with one position and one color per vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub positions: Vec<glam::Vec3>,
    pub colors: Vec<glam::Vec4>,
    pub indices: Vec<u16>,
}

impl Mesh {
    pub fn new_cube() -> Self {
        Self {
            positions: primitives::CUBE_POSITIONS.to_vec(),
            colors: primitives::CUBE_COLORS.to_vec(),
            indices: primitives::CUBE_INDICES.to_vec(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u16; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }
}
