use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn qrgen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qrgen"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

#[test]
fn test_default_run_writes_generated_png() {
    let temp_dir = TempDir::new().unwrap();
    let output = qrgen(temp_dir.path(), &["https://example.com"]);

    assert_eq!(output.status.code(), Some(0));
    let expected = Path::new("generated_png").join("qrcode.png");
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end(), format!("QR code saved as {}", expected.display()));
    assert!(temp_dir.path().join(&expected).exists());
    assert!(image::open(temp_dir.path().join(&expected)).is_ok());
}

#[test]
fn test_piped_stdin_is_encoded() {
    let temp_dir = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_qrgen"))
        .args(["-o", "piped"])
        .current_dir(temp_dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    {
        use std::io::Write;
        let mut stdin = child.stdin.take().unwrap();
        stdin.write_all(b"  from a pipe\n").unwrap();
    }
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(temp_dir.path().join("generated_png").join("piped.png").exists());
}

#[test]
fn test_empty_stdin_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let output = qrgen(temp_dir.path(), &["-"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("No data provided").count(), 1);
    assert!(!temp_dir.path().join("generated_png").exists());
}

#[test]
fn test_bad_color_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let output = qrgen(temp_dir.path(), &["--fill-color", "blurple", "hi"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr).unwrap().contains("blurple"));
    assert!(!temp_dir.path().join("generated_png").exists());
}

#[test]
fn test_bad_error_correction_exits_two() {
    let temp_dir = TempDir::new().unwrap();
    let output = qrgen(temp_dir.path(), &["--error-correction", "Z", "hi"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!temp_dir.path().join("generated_png").exists());
}

#[test]
fn test_oversized_border_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let output = qrgen(temp_dir.path(), &["--border", "3000000000", "hi"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr).unwrap().contains("too large"));
    assert!(!temp_dir.path().join("generated_png").exists());
}
