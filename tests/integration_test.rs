use image::{GenericImageView, Rgba};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const BELL: Rgba<u8> = Rgba([255, 193, 7, 255]);
const CLAPPER: Rgba<u8> = Rgba([255, 160, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Runs `bell-icon -o <tmp>/bell_icon.png` and checks the artifact and the
/// two confirmation lines.
#[test]
fn test_bell_icon_generation() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("bell_icon.png");

    let output = run_bell_icon(&output_path);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "Expected two lines, got: {stdout}");
    assert_eq!(
        lines[0],
        format!(
            "✓ Bell icon created successfully at {}",
            output_path.display()
        )
    );
    assert_eq!(lines[1], "  Run: flutter pub run flutter_launcher_icons");

    assert!(
        output_path.exists(),
        "Icon should exist at: {}",
        output_path.display()
    );

    let icon = image::open(&output_path).expect("Output should be a valid PNG");
    assert_eq!(icon.width(), 512, "Icon width should be 512");
    assert_eq!(icon.height(), 512, "Icon height should be 512");
    assert_eq!(icon.color(), image::ColorType::Rgb8, "Icon should be RGB");

    assert_eq!(icon.get_pixel(0, 0), WHITE, "Corner should be background");
    assert_eq!(icon.get_pixel(256, 256), BELL, "Centre should be bell body");
    assert_eq!(icon.get_pixel(256, 146), BELL, "Knob centre should be bell colour");
    assert_eq!(icon.get_pixel(256, 316), CLAPPER, "Clapper centre should be dark");
}

#[test]
fn test_bell_icon_is_deterministic() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let first_path = temp_dir.path().join("first.png");
    let second_path = temp_dir.path().join("second.png");

    assert_success(&run_bell_icon(&first_path));
    assert_success(&run_bell_icon(&second_path));

    let first = std::fs::read(&first_path).expect("Failed to read first icon");
    let second = std::fs::read(&second_path).expect("Failed to read second icon");
    assert_eq!(first, second, "Two runs should produce identical bytes");
}

#[test]
fn test_bell_icon_overwrites_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("bell_icon.png");
    std::fs::write(&output_path, b"stale").expect("Failed to seed output");

    assert_success(&run_bell_icon(&output_path));

    let icon = image::open(&output_path).expect("Stale file should be replaced by a PNG");
    assert_eq!(icon.dimensions(), (512, 512));
}

#[test]
fn test_missing_output_directory_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing_dir = temp_dir.path().join("assets");
    let output_path = missing_dir.join("bell_icon.png");

    let output = run_bell_icon(&output_path);

    assert!(!output.status.success(), "Command should fail");
    assert!(output.stdout.is_empty(), "Nothing should be printed on stdout");
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("Failed to write PNG file"),
        "stderr should name the failed write"
    );
    assert!(!output_path.exists(), "No file should be left behind");
    assert!(!missing_dir.exists(), "Directory should not be created");
}

#[test]
fn test_default_output_path_is_assets() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::create_dir(temp_dir.path().join("assets")).expect("Failed to create assets");

    let output = Command::new(bell_icon_binary())
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to run bell-icon");
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("✓ Bell icon created successfully at assets/bell_icon.png"));
    assert!(temp_dir.path().join("assets/bell_icon.png").exists());
}

#[test]
fn test_verify_bell_icon_accepts_generated_icon() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("bell_icon.png");
    assert_success(&run_bell_icon(&output_path));

    let output = Command::new(env!("CARGO_BIN_EXE_verify-bell-icon"))
        .arg(&output_path)
        .output()
        .expect("Failed to run verify-bell-icon");
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Image dimensions: 512x512"));
    assert!(stdout.contains("4 out of 4 samples match"));
    assert!(stdout.contains("✓ Bell icon looks right!"));
}

fn run_bell_icon(output_path: &Path) -> Output {
    Command::new(bell_icon_binary())
        .arg("-o")
        .arg(output_path)
        .output()
        .expect("Failed to run bell-icon")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("bell-icon command failed");
    }
}

fn bell_icon_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_bell-icon"))
}
