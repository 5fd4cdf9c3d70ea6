//! Integration tests driving the menu shell over stdin

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

fn run_session(args: &[&str], input: &str) -> (String, String, i32) {
    // Tests must not depend on a user's ~/.config/cellshare/config.toml.
    let mut full_args = vec!["--no-config", "--quiet"];
    full_args.extend_from_slice(args);
    run_with_env(&full_args, &[], input)
}

fn run_with_env(args: &[&str], envs: &[(&str, &Path)], input: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cellshare"))
        .args(args)
        .envs(envs.iter().copied())
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start cellshare");

    // The child may exit before reading (e.g. on a bad flag), so a broken pipe is fine.
    let _ = child.stdin.take().unwrap().write_all(input.as_bytes());
    let output = child.wait_with_output().expect("Failed to wait on cellshare");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn test_create_user_and_sheet() {
    let (stdout, _, code) = run_session(&[], "1\nalice\n2\nalice s1\n3\nalice s1\nexit\n");
    assert_eq!(
        stdout,
        "Create a user named \"alice\".\n\n\
         Create a sheet named \"s1\" for \"alice\".\n\n\
         \n0 0 0 \n0 0 0 \n0 0 0 \n\n"
    );
    assert_eq!(code, 0);
}

#[test]
fn test_duplicate_user() {
    let (stdout, _, code) = run_session(&[], "1 alice\n1 alice\nexit\n");
    assert!(stdout.ends_with("User \"alice\" already exists\n\n"));
    assert_eq!(code, 0);
}

#[test]
fn test_update_cell_with_expression() {
    let (stdout, _, _) = run_session(&[], "1 alice\n2 alice s1\n4 alice s1\n1 1 10/4\nexit\n");
    assert!(stdout.ends_with("\n0 0 0 \n0 2.5 0 \n0 0 0 \n\n"));
}

#[test]
fn test_update_out_of_range() {
    let (stdout, _, _) = run_session(&[], "1 alice\n2 alice s1\n4 alice s1\n3 0 1\nexit\n");
    assert!(stdout.ends_with("Cell (3, 0) is out of range\n\n"));
}

#[test]
fn test_parse_error_is_reported() {
    let (stdout, _, code) = run_session(&[], "1 alice\n2 alice s1\n4 alice s1\n0 0 abc\nexit\n");
    assert!(stdout.ends_with("Parse error: Invalid number: 'abc'\n\n"));
    assert_eq!(code, 0);
}

#[test]
fn test_read_only_user() {
    let input = "1 alice\n1 bob\n2 alice s1\n5 bob s1 ReadOnly\n3 bob s1\n4 bob s1\n0 0 1\nexit\n";
    let (stdout, _, _) = run_session(&[], input);
    assert!(stdout.contains("Set \"bob\"'s access to \"s1\" to ReadOnly."));
    assert!(stdout.ends_with("User \"bob\" is not allowed to edit sheet \"s1\"\n\n"));
}

#[test]
fn test_collaboration() {
    let input = "1 alice\n1 bob\n2 alice s1\n6 alice s1 bob\n4 bob s1\n0 0 1.5\nexit\n";
    let (stdout, _, _) = run_session(&[], input);
    assert!(stdout.contains("Share \"alice\"'s \"s1\" with \"bob\".\n"));
    assert!(stdout.ends_with("\n1.5 0 0 \n0 0 0 \n0 0 0 \n\n"));
}

#[test]
fn test_unchecked_permission_is_logged() {
    let (_, stderr, code) = run_session(&[], "5 ghost nowhere Editable\nexit\n");
    assert!(stderr.contains("unregistered user"));
    assert!(stderr.contains("stray sheet"));
    assert_eq!(code, 0);
}

#[test]
fn test_strict_policy_flag() {
    let input = "1 alice\n1 bob\n2 alice s1\n5 bob bob s1 Editable\nexit\n";
    let (stdout, _, _) = run_session(&["--permission-policy", "strict"], input);
    assert!(stdout.ends_with("User \"bob\" is not allowed to edit sheet \"s1\"\n\n"));
}

#[test]
fn test_leftmost_operator_flag() {
    let input = "1 alice\n2 alice s1\n4 alice s1\n2 2 -3*2\nexit\n";
    let (stdout, _, _) = run_session(&["--operator-rule", "leftmost"], input);
    assert!(stdout.ends_with("\n0 0 0 \n0 0 0 \n0 0 -6 \n\n"));
}

#[test]
fn test_bad_flag_value_fails() {
    let (_, stderr, code) = run_session(&["--operator-rule", "rightmost"], "exit\n");
    assert!(stderr.contains("rightmost"));
    assert_ne!(code, 0);
}

#[test]
fn test_missing_config_file_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_cellshare"))
        .args(["--config", "/nonexistent/cellshare/config.toml"])
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run cellshare");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load settings"));
}

#[test]
fn test_config_file_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "precision = 2\nprompt = \"$ \"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_cellshare"))
        .args(["--config", path.to_str().unwrap(), "--quiet"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            child
                .stdin
                .take()
                .unwrap()
                .write_all(b"1 alice\n2 alice s1\n4 alice s1\n0 0 1/3\nexit\n")?;
            child.wait_with_output()
        })
        .expect("Failed to run cellshare");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.ends_with("\n0.33 0 0 \n0 0 0 \n0 0 0 \n\n"));
}

#[test]
fn test_cli_flag_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "operator_rule = \"priority\"\n").unwrap();

    let args = [
        "--config",
        path.to_str().unwrap(),
        "--quiet",
        "--operator-rule",
        "leftmost",
    ];
    let input = "1 alice\n2 alice s1\n4 alice s1\n2 2 -3*2\nexit\n";
    let (stdout, _, code) = run_with_env(&args, &[], input);
    assert!(stdout.ends_with("\n0 0 0 \n0 0 0 \n0 0 -6 \n\n"));
    assert_eq!(code, 0);
}

#[cfg(target_os = "linux")]
#[test]
fn test_missing_user_config_gives_defaults() {
    let home = tempfile::tempdir().unwrap();
    let input = "1 alice\n2 alice s1\n4 alice s1\n0 0 1/3\n4 alice s1\n1 1 -3*2\nexit\n";
    let env = [("XDG_CONFIG_HOME", home.path())];
    let (stdout, stderr, code) = run_with_env(&["--quiet"], &env, input);

    assert!(stdout.contains("\n0.333333 0 0 \n0 0 0 \n0 0 0 \n\n"));
    assert!(stdout.ends_with("Parse error: Invalid number: ''\n\n"));
    assert!(stderr.is_empty());
    assert_eq!(code, 0);
}

#[cfg(target_os = "linux")]
#[test]
fn test_user_config_file_is_read() {
    let home = tempfile::tempdir().unwrap();
    std::fs::create_dir(home.path().join("cellshare")).unwrap();
    std::fs::write(home.path().join("cellshare/config.toml"), "precision = 2\n").unwrap();

    let input = "1 alice\n2 alice s1\n4 alice s1\n0 0 1/3\nexit\n";
    let env = [("XDG_CONFIG_HOME", home.path())];
    let (stdout, _, code) = run_with_env(&["--quiet"], &env, input);
    assert!(stdout.ends_with("\n0.33 0 0 \n0 0 0 \n0 0 0 \n\n"));
    assert_eq!(code, 0);
}
