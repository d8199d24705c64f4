use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("cube-asset-cli-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn generate_cube() -> Command {
    Command::new(env!("CARGO_BIN_EXE_generate_cube"))
}

#[test]
fn writes_to_given_path() {
    let dir = scratch_dir("arg");
    let path = dir.join("cube.bin");

    let output = generate_cube().arg(&path).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("Generated {} (296 bytes)\n", path.display())
    );
    assert_eq!(fs::read(&path).unwrap().len(), 296);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn no_arguments_writes_default_path() {
    let dir = scratch_dir("default");

    let output = generate_cube().current_dir(&dir).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Generated assets/models/cube.bin (296 bytes)\n"
    );

    let bytes = fs::read(dir.join("assets/models/cube.bin")).unwrap();
    assert_eq!(bytes.len(), 296);
    assert_eq!(f32::from_le_bytes(bytes[0..4].try_into().unwrap()), -1.0);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_directory_exits_with_error() {
    let dir = scratch_dir("missing");
    let path = dir.join("no-such-dir").join("cube.bin");

    let output = generate_cube().arg(&path).output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains(&format!("Unable to write asset {}", path.display())));
    assert!(!path.exists());
    assert!(!dir.join("no-such-dir").exists());

    fs::remove_dir_all(&dir).unwrap();
}
