//! CLI integration tests
//!
//! These tests run the `fmconv` binary and verify:
//! - Help and version output
//! - Artifact files written by `convert`
//! - `inspect` output formats
//! - Exit codes for malformed input and unreadable sources

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

const ADD_NUMBERS: &str = "FUNCTION Z_ADD_NUMBERS
  IMPORTING
    IV_A TYPE I
    IV_B TYPE I
  EXPORTING
    EV_RESULT TYPE I.
ENDFUNCTION.
";

fn fmconv() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fmconv"));
    for var in [
        "FMCONV_INCLUDE_PYTEST",
        "FMCONV_SPEC_FORMAT",
        "FMCONV_OUTPUT_DIR",
        "FMCONV_LOG_LEVEL",
        "FMCONV_LOG_JSON",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn write_source(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write source");
    path
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}

#[test]
fn test_cli_help() {
    let output = fmconv().arg("--help").output().expect("Failed to execute fmconv");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("convert"));
    assert!(stdout.contains("inspect"));
}

#[test]
fn test_cli_version() {
    let output = fmconv().arg("--version").output().expect("Failed to execute fmconv");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("fmconv"));
}

#[test]
fn test_convert_writes_default_artifacts() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "z_add_numbers.abap", ADD_NUMBERS);
    let out = dir.path().join("out");

    let output = fmconv()
        .arg("convert")
        .arg(&source)
        .arg("--output-dir")
        .arg(&out)
        .output()
        .expect("Failed to execute fmconv");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Wrote 3 artifacts"));

    let spec: serde_json::Value = serde_json::from_str(&read(&out.join("fm_spec.json"))).unwrap();
    assert_eq!(spec["fm_name"], "Z_ADD_NUMBERS");
    assert_eq!(spec["importing"][1]["name"], "IV_B");

    assert!(read(&out.join("fm_doc.md")).contains("## Exporting Parameters\n- **EV_RESULT** — TYPE I"));
    assert!(read(&out.join("fm_stub.py")).starts_with("def z_add_numbers(iv_a, iv_b):"));
    assert!(!out.join("test_fm_stub.py").exists());
}

#[test]
fn test_convert_with_pytest_and_yaml() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "z_add_numbers.abap", ADD_NUMBERS);
    let out = dir.path().join("out");

    let status = fmconv()
        .args(["-q", "convert"])
        .arg(&source)
        .arg("-o")
        .arg(&out)
        .args(["--include-pytest", "--spec-format", "yaml"])
        .status()
        .expect("Failed to execute fmconv");

    assert!(status.success());
    assert!(read(&out.join("fm_spec.yaml")).contains("fm_name: Z_ADD_NUMBERS"));
    assert!(read(&out.join("test_fm_stub.py")).contains("def test_z_add_numbers():"));
}

#[test]
fn test_convert_respects_environment_config() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "z_add_numbers.abap", ADD_NUMBERS);
    let out = dir.path().join("env-out");

    let status = fmconv()
        .env("FMCONV_OUTPUT_DIR", &out)
        .env("FMCONV_INCLUDE_PYTEST", "true")
        .arg("convert")
        .arg(&source)
        .status()
        .expect("Failed to execute fmconv");

    assert!(status.success());
    assert!(out.join("fm_spec.json").exists());
    assert!(out.join("test_fm_stub.py").exists());
}

#[test]
fn test_convert_invalid_spec_format_env() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "z_add_numbers.abap", ADD_NUMBERS);

    let output = fmconv()
        .env("FMCONV_SPEC_FORMAT", "xml")
        .arg("convert")
        .arg(&source)
        .output()
        .expect("Failed to execute fmconv");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("FMCONV_SPEC_FORMAT"));
}

#[test]
fn test_convert_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "z_add_numbers.abap", ADD_NUMBERS);
    let out = dir.path().join("out");

    let output = fmconv()
        .arg("convert")
        .arg(&source)
        .arg("-o")
        .arg(&out)
        .arg("--dry-run")
        .output()
        .expect("Failed to execute fmconv");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("dry run"));
    assert!(!out.exists());
}

#[test]
fn test_convert_yaml_listing() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "z_add_numbers.abap", ADD_NUMBERS);
    let out = dir.path().join("out");

    let output = fmconv()
        .arg("convert")
        .arg(&source)
        .arg("-o")
        .arg(&out)
        .args(["--format", "yaml"])
        .output()
        .expect("Failed to execute fmconv");

    assert!(output.status.success());
    let listing: serde_yaml::Value = serde_yaml::from_slice(&output.stdout).unwrap();
    assert_eq!(listing[1]["file_name"], "fm_doc.md");
    assert!(listing[0]["path"]
        .as_str()
        .unwrap()
        .ends_with("fm_spec.json"));
}

#[test]
fn test_convert_dry_run_json_listing() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "z_add_numbers.abap", ADD_NUMBERS);

    let output = fmconv()
        .arg("convert")
        .arg(&source)
        .args(["--dry-run", "--include-pytest", "-f", "json"])
        .output()
        .expect("Failed to execute fmconv");

    assert!(output.status.success());
    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listing.as_array().unwrap().len(), 4);
    assert_eq!(listing[3]["file_name"], "test_fm_stub.py");
}

#[test]
fn test_invalid_log_level_env_rejected_for_every_command() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "z_add_numbers.abap", ADD_NUMBERS);

    let inspect = vec!["inspect".to_string(), source.display().to_string()];
    let convert = vec![
        "convert".to_string(),
        source.display().to_string(),
        "--dry-run".to_string(),
    ];

    for command in [inspect, convert] {
        let output = fmconv()
            .env("FMCONV_LOG_LEVEL", "verbose")
            .args(&command)
            .output()
            .expect("Failed to execute fmconv");

        assert_eq!(output.status.code(), Some(2), "command: {:?}", command);
        assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid log level: verbose"));
    }
}

#[test]
fn test_json_logs_from_environment() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "z_add_numbers.abap", ADD_NUMBERS);

    let output = fmconv()
        .env("FMCONV_LOG_JSON", "true")
        .env("FMCONV_LOG_LEVEL", "debug")
        .arg("inspect")
        .arg(&source)
        .output()
        .expect("Failed to execute fmconv");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert!(!lines.is_empty());
    for line in lines {
        let event: serde_json::Value = serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("Not a JSON log line ({}): {}", e, line));
        assert!(event.get("level").is_some());
    }
}

#[test]
fn test_malformed_source_exit_code() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "report.abap", "REPORT z_report.\nWRITE 'x'.\n");
    let out = dir.path().join("out");

    let output = fmconv()
        .arg("convert")
        .arg(&source)
        .arg("-o")
        .arg(&out)
        .output()
        .expect("Failed to execute fmconv");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Could not find FUNCTION <name> in source."));
    assert!(!out.exists());
}

#[test]
fn test_missing_source_exit_code() {
    let output = fmconv()
        .args(["inspect", "/nonexistent/z_missing.abap"])
        .output()
        .expect("Failed to execute fmconv");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read"));
}

#[test]
fn test_inspect_json_from_stdin() {
    let mut child = fmconv()
        .args(["inspect", "-", "--format", "json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn fmconv");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(ADD_NUMBERS.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for fmconv");
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(parsed["fm_name"], "Z_ADD_NUMBERS");
    assert_eq!(parsed["exporting"][0]["type"], "TYPE I");
    assert!(parsed["changing"].as_array().unwrap().is_empty());
}

#[test]
fn test_inspect_human() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "z_add_numbers.abap", ADD_NUMBERS);

    let output = fmconv()
        .arg("inspect")
        .arg(&source)
        .output()
        .expect("Failed to execute fmconv");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Function Module: Z_ADD_NUMBERS"));
    assert!(stdout.contains("IMPORTING (2):"));
    assert!(stdout.contains("TABLES: (none)"));
}
