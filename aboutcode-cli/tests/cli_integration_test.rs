//! Integration tests for the `about` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Run `about` in `dir` with a private home so user configuration never leaks in.
fn about(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("about").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("ABOUTCODE_LOG_LEVEL")
        .env_remove("ABOUTCODE_MIN_SEVERITY")
        .env_remove("ABOUTCODE_TEMPLATE")
        .env_remove("ABOUTCODE_LICENSE_DIR");
    cmd
}

fn valid_tree(dir: &Path) {
    write(&dir.join("thirdparty/zlib/zlib.c"), "int main;");
    write(
        &dir.join("thirdparty/zlib/zlib.ABOUT"),
        "about_resource: zlib.c\nname: zlib\nversion: 1.2.13\nlicense: zlib\n",
    );
}

#[test]
fn test_help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    about(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("inventory"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("attrib"))
        .stdout(predicate::str::contains("gen"));
}

#[test]
fn test_check_clean_tree_exits_zero() {
    let dir = TempDir::new().unwrap();
    valid_tree(dir.path());
    about(dir.path())
        .args(["check", "thirdparty"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Checked 1 ABOUT file(s)"))
        .stdout(predicate::str::contains("CRITICAL: 0"));
}

#[test]
fn test_check_missing_resource_exits_two() {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join("thirdparty/jq/jq.ABOUT"),
        "about_resource: jq\nname: jq\n",
    );
    about(dir.path())
        .args(["check", "thirdparty"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("CRITICAL: thirdparty/jq/jq.ABOUT:"))
        .stdout(predicate::str::contains("CRITICAL: 1"));
}

#[test]
fn test_check_min_severity_hides_info() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("thirdparty/lib/lib.c"), "");
    write(
        &dir.path().join("thirdparty/lib/lib.ABOUT"),
        "about_resource: lib.c\nname: lib\nvendor: Acme\n",
    );
    about(dir.path())
        .args(["check", "thirdparty"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("INFO: thirdparty/lib/lib.ABOUT:"));
    about(dir.path())
        .args(["check", "thirdparty", "--min-severity", "warning"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("INFO: thirdparty/lib/lib.ABOUT:").not());
}

#[test]
fn test_inventory_writes_csv() {
    let dir = TempDir::new().unwrap();
    valid_tree(dir.path());
    about(dir.path())
        .args(["inventory", "thirdparty", "inventory.csv"])
        .assert()
        .success();
    let csv = fs::read_to_string(dir.path().join("inventory.csv")).unwrap();
    let header = csv.lines().next().unwrap();
    assert!(header.starts_with("about_file_path,about_resource"));
    assert!(csv.contains("thirdparty/zlib/zlib.ABOUT"));
    assert!(csv.contains("1.2.13"));
}

#[test]
fn test_inventory_rejects_non_csv_output() {
    let dir = TempDir::new().unwrap();
    valid_tree(dir.path());
    about(dir.path())
        .args(["inventory", "thirdparty", "inventory.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(".csv"));
}

#[test]
fn test_attrib_with_custom_template() {
    let dir = TempDir::new().unwrap();
    valid_tree(dir.path());
    write(
        &dir.path().join("notice.tpl"),
        "{% for about in abouts %}{{ about.name }} {{ about.version }}\n{% endfor %}",
    );
    about(dir.path())
        .args(["attrib", "thirdparty", "NOTICE", "--template", "notice.tpl"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(dir.path().join("NOTICE")).unwrap(),
        "zlib 1.2.13\n"
    );
}

#[test]
fn test_attrib_invalid_template_exits_two() {
    let dir = TempDir::new().unwrap();
    valid_tree(dir.path());
    write(
        &dir.path().join("broken.tpl"),
        "{% for about in abouts %}\n{{ about.name }}\n",
    );
    about(dir.path())
        .args(["attrib", "thirdparty", "NOTICE", "--template", "broken.tpl"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Template validation error at line"));
    assert!(!dir.path().join("NOTICE").exists());
}

#[test]
fn test_gen_then_check_round_trip() {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join("inventory.csv"),
        "about_file,name,version\n/zlib/,zlib,1.2.13\n",
    );
    about(dir.path())
        .args(["gen", "inventory.csv", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 1 ABOUT file(s)"));
    assert_eq!(
        fs::read_to_string(dir.path().join("out/zlib/zlib.ABOUT")).unwrap(),
        "about_resource: .\nname: zlib\nversion: 1.2.13\n"
    );
}

#[test]
fn test_gen_uses_configured_mapping() {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join(".aboutcode/config.toml"),
        "[mapping]\nabout_file = \"Directory/Filename\"\nname = \"Component\"\n",
    );
    write(
        &dir.path().join("inventory.csv"),
        "Directory/Filename,Component\n/opensans/,OpenSans Fonts\n",
    );
    about(dir.path())
        .args(["gen", "inventory.csv", "out", "--mapping"])
        .assert()
        .success();
    let record = fs::read_to_string(dir.path().join("out/opensans/opensans.ABOUT")).unwrap();
    assert!(record.contains("name: OpenSans Fonts"));
}

#[test]
fn test_gen_duplicate_columns_fail() {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join("inventory.csv"),
        "about_file,name,Name\nx/,a,b\n",
    );
    about(dir.path())
        .args(["gen", "inventory.csv", "out"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Duplicated column name(s): name"));
}
