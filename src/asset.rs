//! Fixed binary layout for the cube asset.
//!
//! The file carries no header, no length prefixes and no padding:
//!
//! ```text
//! offset 0   .. 95   : 24 x f32 LE   positions (xyz per vertex)
//! offset 96  .. 223  : 32 x f32 LE   colors    (rgba per vertex)
//! offset 224 .. 295  : 36 x u16 LE   indices   (12 triangles)
//! ```
//!
//! Readers must know this layout out-of-band.

use std::ffi::{OsStr, OsString};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

use super::mesh::Mesh;
use super::primitives::{CUBE_INDEX_COUNT, CUBE_VERTEX_COUNT};

pub const POSITIONS_OFFSET: usize = 0;
pub const POSITIONS_SIZE: usize = CUBE_VERTEX_COUNT * 3 * std::mem::size_of::<f32>();
pub const COLORS_OFFSET: usize = POSITIONS_OFFSET + POSITIONS_SIZE;
pub const COLORS_SIZE: usize = CUBE_VERTEX_COUNT * 4 * std::mem::size_of::<f32>();
pub const INDICES_OFFSET: usize = COLORS_OFFSET + COLORS_SIZE;
pub const INDICES_SIZE: usize = CUBE_INDEX_COUNT * std::mem::size_of::<u16>();
pub const ASSET_SIZE: usize = INDICES_OFFSET + INDICES_SIZE;

/// Serializes positions, then colors, then indices.
///
/// Scalars are always written little-endian regardless of the host.
pub fn encode(mesh: &Mesh) -> Vec<u8> {
    let position_scalars: &[f32] = bytemuck::cast_slice(&mesh.positions);
    let color_scalars: &[f32] = bytemuck::cast_slice(&mesh.colors);

    let mut bytes = Vec::with_capacity(
        (position_scalars.len() + color_scalars.len()) * std::mem::size_of::<f32>()
            + mesh.indices.len() * std::mem::size_of::<u16>(),
    );
    for value in position_scalars.iter().chain(color_scalars) {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    for index in &mesh.indices {
        bytes.extend_from_slice(&index.to_le_bytes());
    }
    bytes
}

/// Reads a cube asset back into a [`Mesh`].
///
/// Only the total size is checked; index values are taken as-is.
pub fn decode(bytes: &[u8]) -> anyhow::Result<Mesh> {
    if bytes.len() != ASSET_SIZE {
        bail!(
            "cube asset must be exactly {} bytes, got {}",
            ASSET_SIZE,
            bytes.len()
        );
    }

    let floats = |section: &[u8]| -> Vec<f32> {
        section
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect()
    };

    let positions = floats(&bytes[POSITIONS_OFFSET..COLORS_OFFSET])
        .chunks_exact(3)
        .map(glam::Vec3::from_slice)
        .collect();
    let colors = floats(&bytes[COLORS_OFFSET..INDICES_OFFSET])
        .chunks_exact(4)
        .map(glam::Vec4::from_slice)
        .collect();
    let indices = bytes[INDICES_OFFSET..ASSET_SIZE]
        .chunks_exact(2)
        .map(|b| u16::from_le_bytes([b[0], b[1]]))
        .collect();

    Ok(Mesh {
        positions,
        colors,
        indices,
    })
}

/// Encodes `mesh` and writes it to `path`, replacing any existing file.
///
/// The bytes go to a sibling temporary file first and are renamed into place,
/// so `path` never holds a partial asset. The parent directory must exist.
/// Returns the number of bytes written.
pub fn write_asset(mesh: &Mesh, path: &Path) -> anyhow::Result<usize> {
    let Some(file_name) = path.file_name() else {
        bail!("Asset path {} does not name a file", path.display());
    };
    let bytes = encode(mesh);
    let tmp_path = temporary_path(path, file_name);
    log::debug!("Writing {} bytes to {}", bytes.len(), tmp_path.display());

    if let Err(e) = write_synced(&tmp_path, &bytes) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e).with_context(|| format!("Unable to write asset {}", path.display()));
    }
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e).with_context(|| format!("Unable to move asset into {}", path.display()));
    }

    log::info!("Wrote cube asset to {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes.len())
}

pub fn read_asset(path: &Path) -> anyhow::Result<Mesh> {
    let bytes =
        fs::read(path).with_context(|| format!("Unable to read asset {}", path.display()))?;
    decode(&bytes).with_context(|| format!("Malformed asset {}", path.display()))
}

fn write_synced(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
    file.write_all(bytes)
        .with_context(|| format!("Unable to write {}", path.display()))?;
    file.sync_all()
        .with_context(|| format!("Unable to sync {}", path.display()))?;
    Ok(())
}

fn temporary_path(path: &Path, file_name: &OsStr) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(file_name);
    name.push(".tmp");
    path.with_file_name(name)
}
