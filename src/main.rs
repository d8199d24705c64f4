use std::path::PathBuf;

use anyhow::Context;
use cube_asset::{DEFAULT_OUTPUT_PATH, asset, mesh::Mesh};

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    // An explicit destination must already have its directory.
    let path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => {
            let path = PathBuf::from(DEFAULT_OUTPUT_PATH);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Unable to create {}", parent.display()))?;
            }
            path
        }
    };
    log::debug!("Output path: {}", path.display());

    let written = asset::write_asset(&Mesh::new_cube(), &path)?;
    println!("Generated {} ({} bytes)", path.display(), written);
    Ok(())
}

pub fn main() -> anyhow::Result<()> {
    run()
}
