/// End-to-end tests for the `boq` command line
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

/// Fresh working directory holding copies of the fixture catalogs
fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in ["catalog.json", "catalog.yml", "catalog.toml"] {
        fs::copy(Path::new(FIXTURES).join(name), dir.path().join(name)).unwrap();
    }
    dir
}

fn boq(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("boq");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn stored_lines(dir: &TempDir) -> Vec<serde_json::Value> {
    let content = fs::read_to_string(dir.path().join("boq.json")).unwrap();
    let document: serde_json::Value = serde_json::from_str(&content).unwrap();
    document["lines"].as_array().unwrap().clone()
}

fn show_json(dir: &TempDir) -> serde_json::Value {
    let output = boq(dir).args(["show", "--format", "json"]).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("boq").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("boq")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("boq").arg("--invalid-option").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        let dir = workspace();
        boq(&dir)
            .args(["show", "-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 3: setQuantity on an item that has no main line
    #[test]
    fn test_exit_code_set_not_found() {
        let dir = workspace();
        boq(&dir)
            .args(["set", "camera-kit", "2"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("No main line for item 'camera-kit'"));
        assert!(!dir.path().join("boq.json").exists());
    }

    /// Exit code 3: missing catalog file
    #[test]
    fn test_exit_code_missing_catalog() {
        let dir = workspace();
        boq(&dir)
            .args(["--catalog", "nope.json", "add", "camera-kit"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Catalog file not found"));
    }

    /// Exit code 3: item not in catalog
    #[test]
    fn test_exit_code_unknown_item() {
        let dir = workspace();
        boq(&dir)
            .args(["add", "flux-capacitor"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("'flux-capacitor' is not in the catalog"));
    }
}

#[test]
fn test_e2e_add_writes_expanded_boq() {
    let dir = workspace();
    boq(&dir)
        .args(["add", "camera-kit", "-n", "2"])
        .assert()
        .success();

    let lines = stored_lines(&dir);
    let summary: Vec<(&str, u64)> = lines
        .iter()
        .map(|l| (l["item_id"].as_str().unwrap(), l["quantity"].as_u64().unwrap()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("camera-kit", 2),
            ("camera", 2),
            ("mount", 2),
            ("anchor", 8),
            ("cat6", 30),
        ]
    );
    assert_eq!(lines[0]["kind"], "main");
    assert_eq!(lines[3]["required_by"], "mount");
    assert_eq!(lines[3]["root"], "camera-kit");
}

#[test]
fn test_e2e_set_and_remove() {
    let dir = workspace();
    boq(&dir).args(["add", "camera-kit"]).assert().success();
    boq(&dir).args(["set", "camera-kit", "3"]).assert().success();

    let anchors: Vec<u64> = stored_lines(&dir)
        .iter()
        .filter(|l| l["item_id"] == "anchor")
        .map(|l| l["quantity"].as_u64().unwrap())
        .collect();
    assert_eq!(anchors, vec![12]);

    boq(&dir).args(["remove", "camera-kit"]).assert().success();
    assert!(stored_lines(&dir).is_empty());
}

#[test]
fn test_e2e_show_markdown() {
    let dir = workspace();
    boq(&dir).args(["add", "camera-kit"]).assert().success();

    boq(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Bill of Quantities"))
        .stdout(predicate::str::contains("| **`camera-kit`** | IP Camera Kit | 1 |"))
        .stdout(predicate::str::contains(
            "| &nbsp;&nbsp;↳ `anchor` | Wall Anchor 6mm | 4 |",
        ));
}

#[test]
fn test_e2e_show_json_nesting() {
    let dir = workspace();
    boq(&dir).args(["add", "camera-kit"]).assert().success();

    let json = show_json(&dir);
    let depths: Vec<u64> = json["lines"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["depth"].as_u64().unwrap())
        .collect();
    assert_eq!(depths, vec![0, 1, 1, 2, 1]);
    assert_eq!(json["summary"]["mainItems"], 1);
    assert!(json["documentId"]
        .as_str()
        .unwrap()
        .starts_with("urn:uuid:"));
}

#[test]
fn test_e2e_show_to_file() {
    let dir = workspace();
    boq(&dir).args(["add", "camera"]).assert().success();

    boq(&dir)
        .args(["show", "-o", "boq.md"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(dir.path().join("boq.md")).unwrap();
    assert!(content.contains("4MP Dome Camera"));
}

#[test]
fn test_e2e_validate_detects_tampering() {
    let dir = workspace();
    boq(&dir).args(["add", "camera-kit"]).assert().success();
    boq(&dir).arg("validate").assert().code(0);

    // Drop the nested anchor line behind the tool's back
    let path = dir.path().join("boq.json");
    let mut document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    document["lines"]
        .as_array_mut()
        .unwrap()
        .retain(|l| l["item_id"] != "anchor");
    fs::write(&path, serde_json::to_string(&document).unwrap()).unwrap();

    boq(&dir)
        .arg("validate")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error: [camera-kit] missing line 'anchor'"));
}

#[test]
fn test_e2e_dangling_dependency_is_a_warning() {
    let dir = workspace();
    boq(&dir)
        .args(["add", "nvr"])
        .assert()
        .success()
        .stderr(predicate::str::contains("hdd-4tb"));

    let items: Vec<String> = stored_lines(&dir)
        .iter()
        .map(|l| l["item_id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(items, vec!["nvr", "cat6"]);

    boq(&dir).arg("validate").assert().code(0);
    boq(&dir).args(["validate", "--strict"]).assert().code(1);
}

#[test]
fn test_e2e_resolve_cycle_from_yaml_catalog() {
    let dir = workspace();
    boq(&dir)
        .args(["--catalog", "catalog.yml", "resolve", "loop-a", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"itemId\": \"loop-b\""))
        .stderr(predicate::str::contains("cycle"));

    assert!(!dir.path().join("boq.json").exists());
}

#[test]
fn test_e2e_config_file_discovery() {
    let dir = workspace();
    fs::write(
        dir.path().join("boq.config.yml"),
        "catalog: catalog.toml\nboq: rack-boq.json\nformat: json\nproject: datacenter\n",
    )
    .unwrap();

    boq(&dir)
        .args(["add", "rack"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Unknown config field 'project' will be ignored",
        ));
    assert!(dir.path().join("rack-boq.json").exists());

    let output = boq(&dir).arg("show").output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["lines"][1]["itemId"], "shelf");
    assert_eq!(json["lines"][1]["quantity"], 2);
    assert_eq!(json["lines"][1]["unitPrice"], "35.00");
}

#[test]
fn test_e2e_explicit_config_overridden_by_flag() {
    let dir = workspace();
    let config = dir.path().join("alt.yml");
    fs::write(&config, "catalog: catalog.toml\n").unwrap();

    boq(&dir)
        .args(["--config", "alt.yml", "--catalog", "catalog.json", "add", "camera"])
        .assert()
        .success();
    assert_eq!(stored_lines(&dir)[0]["item_id"], "camera");
}
