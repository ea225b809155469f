use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run_binary(dir: &TempDir, menu_file: &str, input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cafe_manager"))
        .current_dir(dir.path())
        .env("MENU_FILE", menu_file)
        .env_remove("CAFE_STOP_WORD")
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // the process may exit before reading stdin
    if let Some(mut stdin) = child.stdin.take() {
        let _ = stdin.write_all(input.as_bytes());
    }
    child.wait_with_output().unwrap()
}

#[test]
fn test_missing_menu_file_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");

    let output = run_binary(&dir, missing.to_str().unwrap(), "6\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("could not load menu file"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_malformed_menu_file_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("menu.json");
    std::fs::write(&path, "{ not json").unwrap();

    let output = run_binary(&dir, path.to_str().unwrap(), "6\n");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_valid_menu_file_seeds_the_console() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("menu.json");
    std::fs::write(
        &path,
        r#"{"items": [{"itemName": "Espresso", "price": 2.0, "category": "Drinks"}]}"#,
    )
    .unwrap();

    let output = run_binary(&dir, path.to_str().unwrap(), "3\n6\n");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Name: Espresso, Price: 2.00, Category: Drinks"));
    assert!(stdout.ends_with("Exiting...\n"));
}
