use pretty_assertions::assert_eq;
use std::process::Command;
use tempfile::tempdir;

fn bonuszones() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bonuszones"))
}

#[test]
fn test_mock_report() {
    let output = bonuszones()
        .args(["--mock"])
        .output()
        .expect("Failed to execute bonuszones --mock");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Fetching from built-in sample data... Done!"));
    assert!(stdout.contains("--- RESPAWN ---\nPizza green 1 50\nBurger blue 1 25\nCorn blue 20 45\n"));
    assert!(stdout.contains("--- COIN ---\nChicken blue 1 20\n"));
    assert!(!stdout.contains("Hotdog"));
    assert!(stdout.contains("not affiliated"));
}

#[test]
fn test_quiet_prints_only_report() {
    let output = bonuszones()
        .args(["--mock", "--quiet", "--sortbylevel", "desc", "--bonus", "respawn"])
        .output()
        .expect("Failed to execute bonuszones");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "\n--- RESPAWN ---\nCorn blue 20 45\nPizza green 1 50\nBurger blue 1 25\n");
}

#[test]
fn test_no_matches_is_not_an_error() {
    let output = bonuszones()
        .args(["--mock", "--quiet", "--expansion", "purple"])
        .output()
        .expect("Failed to execute bonuszones");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "\nNo zones found. Check your filters.\n");
}

#[test]
fn test_input_file_and_json_format() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("today.json");
    std::fs::write(
        &path,
        r#"[{"name": "Crypt", "expansion": "Red", "zoneType": "indoor", "bonus": "Loot", "minLevel": 30, "maxLevel": 40}]"#,
    )
    .unwrap();

    let output = bonuszones()
        .arg("--input")
        .arg(&path)
        .args(["--format", "json"])
        .output()
        .expect("Failed to execute bonuszones");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 1);
    assert_eq!(value["sections"][0]["bonus"], "loot");
    assert_eq!(value["sections"][0]["zones"][0]["expansion"], "red");
}

#[test]
fn test_empty_payload_is_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.json");
    std::fs::write(&path, "[]").unwrap();

    let output = bonuszones()
        .arg("--input")
        .arg(&path)
        .output()
        .expect("Failed to execute bonuszones");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no zones were decoded"));
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = tempdir().unwrap();
    let output = bonuszones()
        .arg("--input")
        .arg(dir.path().join("absent.json"))
        .arg("--quiet")
        .output()
        .expect("Failed to execute bonuszones");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
