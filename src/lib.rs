pub mod asset;
pub mod mesh;
pub mod primitives;

pub const DEFAULT_OUTPUT_PATH: &str = "assets/models/cube.bin";
