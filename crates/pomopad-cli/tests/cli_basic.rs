//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated config directory and
//! verify its outputs.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

fn cli(config_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pomopad-cli"));
    cmd.env("POMOPAD_CONFIG_DIR", config_dir).env_remove("RUST_LOG");
    cmd
}

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(config_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = cli(config_dir)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Run the interactive host with `script` piped to stdin.
fn run_interactive(config_dir: &Path, args: &[&str], script: impl AsRef<[u8]>) -> (String, i32) {
    let mut child = cli(config_dir)
        .arg("run")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_ref())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

#[test]
fn test_format() {
    let dir = tempfile::tempdir().unwrap();
    for (secs, expected) in [("0", "00:00"), ("65", "01:05"), ("600", "10:00"), ("6000", "100:00")] {
        let (stdout, _, code) = run_cli(dir.path(), &["format", secs]);
        assert_eq!(code, 0);
        assert_eq!(stdout.trim(), expected);
    }
}

#[test]
fn test_format_rejects_negative() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["format", "-5"]);
    assert_ne!(code, 0);
}

#[test]
fn test_presets_json() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["presets"]);
    assert_eq!(code, 0);
    let presets: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let presets = presets.as_array().unwrap();
    assert_eq!(presets.len(), 6);
    assert_eq!(presets[0]["name"], "Sunset");
    assert_eq!(presets[0]["colors"].as_array().unwrap().len(), 2);
}

#[test]
fn test_render_json() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(
        dir.path(),
        &["render", "--fraction", "0.5", "--kind", "break", "--remaining", "150"],
    );
    assert_eq!(code, 0);
    let view: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(view["label"], "BREAK");
    assert_eq!(view["formatted_time"], "02:30");
    assert_eq!(view["stroke_color"], "#3b82f6");
    assert_eq!(view["radius"], 140.0);
    let circumference = view["dash_array"].as_f64().unwrap();
    let offset = view["dash_offset"].as_f64().unwrap();
    assert!((offset - circumference / 2.0).abs() < 1e-9);
}

#[test]
fn test_render_rejects_bad_radius() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["render", "--fraction", "0", "--radius", "0"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_config_get_set() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "timer.work_minutes"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "25");
    assert!(dir.path().join("config.toml").exists());

    let (stdout, _, code) = run_cli(dir.path(), &["config", "set", "timer.work_minutes", "50"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok");

    let (stdout, _, _) = run_cli(dir.path(), &["config", "get", "timer.work_minutes"]);
    assert_eq!(stdout.trim(), "50");

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "timer.work_minutes", "0"]);
    assert_eq!(code, 1);
    let (stdout, _, _) = run_cli(dir.path(), &["config", "get", "timer.work_minutes"]);
    assert_eq!(stdout.trim(), "50");

    let (_, _, code) = run_cli(dir.path(), &["config", "reset"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(dir.path(), &["config", "get", "timer.work_minutes"]);
    assert_eq!(stdout.trim(), "25");
}

#[test]
fn test_config_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["config", "get", "nope.missing"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_config_list() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["config", "list"]);
    assert_eq!(code, 0);
    let config: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(config["timer"]["break_minutes"], 5);
    assert_eq!(config["appearance"]["background_mode"], "theme");
}

#[test]
fn test_run_note_export() {
    let config_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let script = format!("note hello\nexport {}\nquit\n", out_dir.path().display());

    let (stdout, code) = run_interactive(config_dir.path(), &[], &script);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("[FOCUS] 25:00 paused | Work: 25m | Break: 5m"));
    assert!(stdout.contains("exported note to"));

    let written = std::fs::read_to_string(out_dir.path().join("pomodoro-note.txt")).unwrap();
    assert_eq!(written, "hello");
}

#[test]
fn test_run_errors_are_notices() {
    let config_dir = tempfile::tempdir().unwrap();
    let script = "set 0 5\nbg solid red\nexport\nfrobnicate\nset 40 10\nbg preset Ocean\nquit\n";

    let (stdout, code) = run_interactive(config_dir.path(), &["--work", "30"], script);
    assert_eq!(code, 0);
    assert!(stdout.contains("[FOCUS] 30:00 paused | Work: 30m | Break: 5m"));
    assert!(stdout.contains("Invalid work duration '0'"));
    assert!(stdout.contains("error: Notepad error"));
    assert!(stdout.contains("unrecognized command: frobnicate"));
    assert!(stdout.contains("[FOCUS] 40:00 paused | Work: 40m | Break: 10m"));
    assert!(stdout.contains("BG: Preset (Ocean)"));
}

#[test]
fn test_run_survives_non_utf8_input() {
    let config_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let mut script = b"note caf\xe9\nview\n".to_vec();
    script.extend_from_slice(format!("export {}\nquit\n", out_dir.path().display()).as_bytes());

    let (stdout, code) = run_interactive(config_dir.path(), &[], script);
    assert_eq!(code, 0);
    assert!(stdout.contains("\"kind\": \"work\""), "view still runs: {stdout}");
    assert!(stdout.contains("exported note to"));

    let written = std::fs::read_to_string(out_dir.path().join("pomodoro-note.txt")).unwrap();
    assert_eq!(written, "caf\u{FFFD}");
}

#[test]
fn test_run_start_ticks() {
    let config_dir = tempfile::tempdir().unwrap();
    let mut child = cli(config_dir.path())
        .args(["run", "--work", "1"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(b"start\n").unwrap();
    std::thread::sleep(std::time::Duration::from_millis(2500));
    stdin.write_all(b"quit\n").unwrap();
    drop(stdin);

    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[FOCUS] 01:00 running"));
    assert!(stdout.contains("[FOCUS] 00:59 running"));
}
