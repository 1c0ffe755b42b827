//! Integration tests for filtering-listener CLI.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

const RECORDS: &str = r#"{"topic":"orders","partition":0,"offset":10,"key":"test-1","value":{"amount":5}}
{"topic":"orders","partition":0,"offset":11,"key":"cust-1","value":{"amount":7}}
{"topic":"orders","partition":1,"offset":12,"key":"cust-2","value":null}
{"topic":"orders","partition":1,"offset":13,"key":"cust-3","value":{"amount":9},"headers":{"source":"replay"}}
{"topic":"audit","partition":0,"offset":14,"key":"cust-4","value":"ok"}
"#;

const CONFIG: &str = r#"
discard_tombstones = true

[[filters]]
target = "key"
pattern = "^test-"

[[filters]]
target = "header"
header = "source"
pattern = "^replay$"

[[filters]]
target = "topic"
pattern = "^audit$"
"#;

/// Create a fresh config directory for one test and write `content` as its config.toml.
fn write_config(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "filtering-listener-it-{}-{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create config dir");
    let path = dir.join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

/// Helper to run filtering-listener with stdin input and return (stdout, stderr, exit_code).
fn run_cli(args: &[&str], config: &PathBuf, input: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_filtering-listener"))
        .args(args)
        .arg("--config")
        .arg(config)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn filtering-listener");

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes()).unwrap();
    }

    let output = child.wait_with_output().expect("Failed to read output");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn offsets(stdout: &str) -> Vec<i64> {
    stdout
        .lines()
        .map(|l| {
            let v: serde_json::Value = serde_json::from_str(l).expect("Output line is not JSON");
            v["offset"].as_i64().expect("Missing offset")
        })
        .collect()
}

#[test]
fn test_run_applies_configured_filters() {
    let config = write_config("filters", CONFIG);
    let (stdout, stderr, exit_code) = run_cli(&["run"], &config, RECORDS);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(offsets(&stdout), vec![11]);
    assert!(
        stderr.contains("received=5 admitted=1 discarded=4"),
        "Summary missing: {}",
        stderr
    );
}

#[test]
fn test_filter_alias() {
    let config = write_config("alias", CONFIG);
    let (stdout, _stderr, exit_code) = run_cli(&["filter", "-q"], &config, RECORDS);

    assert_eq!(exit_code, 0);
    assert_eq!(offsets(&stdout), vec![11]);
}

#[test]
fn test_skip_filtering_flag_admits_everything() {
    let config = write_config("skip-flag", CONFIG);
    let (stdout, stderr, exit_code) = run_cli(&["run", "--skip-filtering"], &config, RECORDS);

    assert_eq!(exit_code, 0);
    assert_eq!(offsets(&stdout), vec![10, 11, 12, 13, 14]);
    assert!(stderr.contains("discarded=0"));
}

#[test]
fn test_skip_filtering_from_config() {
    let content = format!("skip_filtering = true\n{}", CONFIG);
    let config = write_config("skip-config", &content);
    let (stdout, _stderr, exit_code) = run_cli(&["run", "-q"], &config, RECORDS);

    assert_eq!(exit_code, 0);
    assert_eq!(offsets(&stdout).len(), 5);
}

#[test]
fn test_records_pass_through_unchanged() {
    let config = write_config("passthrough", "");
    let input = r#"{"topic":"t","partition":2,"offset":7,"timestamp":1700000000000,"key":"k","value":{"a":[1,2]},"headers":{"h":"v"}}"#;
    let (stdout, _stderr, exit_code) = run_cli(&["run", "-q"], &config, input);

    assert_eq!(exit_code, 0);
    let out: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    let expected: serde_json::Value = serde_json::from_str(input).unwrap();
    assert_eq!(out, expected);
}

#[test]
fn test_malformed_input_fails() {
    let config = write_config("malformed", "");
    let (_stdout, stderr, exit_code) = run_cli(&["run"], &config, "{\"topic\":\"t\"}\n{oops\n");

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("line 2"), "stderr: {}", stderr);
}

#[test]
fn test_check_valid_config() {
    let config = write_config("check-ok", CONFIG);
    let (_stdout, stderr, exit_code) = run_cli(&["check"], &config, "");

    assert_eq!(exit_code, 0);
    assert!(stderr.contains("Configuration is valid."));
}

#[test]
fn test_check_invalid_config() {
    let config = write_config(
        "check-bad",
        "[[filters]]\ntarget = \"header\"\npattern = \"x\"\n",
    );
    let (_stdout, stderr, exit_code) = run_cli(&["check"], &config, "");

    assert_ne!(exit_code, 0);
    assert!(
        stderr.contains("requires a header name"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_missing_config_is_generated() {
    let config = write_config("generated", "");
    fs::remove_file(&config).unwrap();

    let (_stdout, _stderr, exit_code) = run_cli(&["check", "-q"], &config, "");

    assert_eq!(exit_code, 0);
    let content = fs::read_to_string(&config).unwrap();
    assert!(content.contains("skip_filtering = false"));
}

#[test]
fn test_init_at_path() {
    let config = write_config("init", "");
    let target = config.with_file_name("generated.toml");
    let (_stdout, stderr, exit_code) = run_cli(
        &["init", "--path", target.to_str().unwrap()],
        &config,
        "",
    );

    assert_eq!(exit_code, 0);
    assert!(target.exists());
    assert!(stderr.contains("Configuration file created at"));
}

#[test]
fn test_version() {
    let config = write_config("version", "");
    let (stdout, _stderr, exit_code) = run_cli(&["version"], &config, "");

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("filtering-listener "));
}
