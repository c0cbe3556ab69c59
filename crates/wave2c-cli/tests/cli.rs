//! End-to-end tests for the `wave2c` binary.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wave2c-cli --test cli
//! ```

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::tempdir;
use wave2c_core::{write_wav_to_vec, FormatDescriptor};

fn wave2c(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wave2c"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute wave2c")
}

fn wave2c_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wave2c"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute wave2c")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn write_wav(path: &Path, format: &FormatDescriptor, samples: &[u8]) {
    fs::write(path, write_wav_to_vec(format, samples)).unwrap();
}

#[test]
fn test_convert_writes_header_next_to_input() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("beep.wav");
    write_wav(&input, &FormatDescriptor::canonical(), &[0x01, 0x02, 0x03]);

    let output = wave2c(&[input.to_str().unwrap()]);
    let out = stdout(&output);

    assert!(output.status.success(), "stdout: {out}");
    assert!(out.contains("file format is ok."), "stdout: {out}");

    let header = fs::read_to_string(tmp.path().join("beep.h")).unwrap();
    assert_eq!(
        header,
        "// Generated by wave2c from beep.wav\n\
         const long pcm_length = 3;\n\
         const unsigned char pcm_samples[] PROGMEM = {\n    \
         0x01, 0x02, 0x03\n\
         };\n"
    );
}

#[test]
fn test_custom_names_and_output_path() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("in.wav");
    let header_path = tmp.path().join("sound.h");
    write_wav(&input, &FormatDescriptor::canonical(), &[0xFF; 5]);

    let output = wave2c(&[
        input.to_str().unwrap(),
        "--output",
        header_path.to_str().unwrap(),
        "--array-name",
        "click",
        "--length-name",
        "click_len",
        "--no-progmem",
        "--bytes-per-line",
        "2",
    ]);
    assert!(output.status.success(), "stdout: {}", stdout(&output));

    let header = fs::read_to_string(&header_path).unwrap();
    assert!(header.contains("const long click_len = 5;"));
    assert!(header.contains("const unsigned char click[] = {\n"));
    assert!(header.contains("    0xff, 0xff,\n    0xff, 0xff,\n    0xff\n};"));
}

#[test]
fn test_rejected_format_exits_nonzero_and_writes_nothing() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("cd.wav");
    let format = FormatDescriptor {
        sample_rate: 44100,
        ..FormatDescriptor::canonical()
    };
    write_wav(&input, &format, &[0x80; 8]);

    let output = wave2c(&[input.to_str().unwrap()]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("file format is not ok."), "stdout: {out}");
    assert!(out.contains("44100"), "stdout: {out}");
    assert!(!tmp.path().join("cd.h").exists());
}

#[test]
fn test_check_mode_does_not_write() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("ok.wav");
    write_wav(&input, &FormatDescriptor::canonical(), &[0x80]);

    let output = wave2c(&[input.to_str().unwrap(), "--check"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("file format is ok."));
    assert!(!tmp.path().join("ok.h").exists());
}

#[test]
fn test_json_success() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("beep.wav");
    write_wav(&input, &FormatDescriptor::canonical(), &[0x10; 4000]);

    let output = wave2c(&[input.to_str().unwrap(), "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["result"]["sample_count"], 4000);
    assert_eq!(json["result"]["duration_seconds"], 0.5);
    assert_eq!(json["result"]["format"]["bits_per_sample"], 8);
}

#[test]
fn test_json_rejection_carries_code() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("noise.wav");
    fs::write(&input, b"this is not a wave file at all").unwrap();

    let output = wave2c(&[input.to_str().unwrap(), "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["errors"][0]["code"], "WAV_001");
}

#[test]
fn test_missing_input_is_an_error() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("missing.wav");

    let output = wave2c(&[input.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to open input file"), "stderr: {stderr}");
}

#[test]
fn test_invalid_identifier_is_an_error() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("beep.wav");
    write_wav(&input, &FormatDescriptor::canonical(), &[0x01]);

    let output = wave2c(&[input.to_str().unwrap(), "--array-name", "2bad"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!tmp.path().join("beep.h").exists());
}

#[test]
fn test_output_spelled_differently_from_input_is_refused() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("beep.wav");
    write_wav(&input, &FormatDescriptor::canonical(), &[0x01, 0x02]);
    let original = fs::read(&input).unwrap();

    let output = wave2c_in(tmp.path(), &["beep.wav", "-o", "./beep.wav"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("overwrite the input"), "stderr: {stderr}");
    assert_eq!(fs::read(&input).unwrap(), original);
}

#[test]
fn test_output_aliasing_input_is_refused_in_json_mode() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("beep.wav");
    write_wav(&input, &FormatDescriptor::canonical(), &[0x01]);
    let original = fs::read(&input).unwrap();

    let output = wave2c_in(tmp.path(), &["beep.wav", "-o", "./beep.wav", "--json"]);

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["errors"][0]["code"], "CLI_004");
    assert_eq!(fs::read(&input).unwrap(), original);
}

#[test]
fn test_keyword_array_name_is_an_error() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("beep.wav");
    write_wav(&input, &FormatDescriptor::canonical(), &[0x01]);

    let output = wave2c(&[input.to_str().unwrap(), "--array-name", "int"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid C identifier: 'int'"), "stderr: {stderr}");
    assert!(!tmp.path().join("beep.h").exists());
}

#[test]
fn test_missing_argument_fails() {
    let output = wave2c(&[]);
    assert!(!output.status.success());
}
