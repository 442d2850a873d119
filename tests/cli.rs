//! Integration tests for the generate-linux-tests binary
//!
//! These tests run the built executable against manifests on disk and check
//! exit status, stdout and stderr as a build script would observe them.

use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::{NamedTempFile, TempDir};

const BIN: &str = env!("CARGO_BIN_EXE_generate-linux-tests");

fn create_test_manifest(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Run the binary from a fresh empty working directory
fn run(args: &[&OsStr]) -> Output {
    let cwd = TempDir::new().unwrap();
    run_in(cwd.path(), args)
}

fn run_in(cwd: &Path, args: &[&OsStr]) -> Output {
    Command::new(BIN)
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn run_manifest(path: &Path) -> Output {
    run(&[path.as_os_str()])
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_scenario_output_is_exact() {
    let manifest = create_test_manifest(r#"{"FooTests": ["testA()", "testB"], "BarTests": []}"#);

    let output = run_manifest(manifest.path());

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "import XCTest\n\
         @testable import SQLiteTests\n\
         \n\
         XCTMain([\n\
         testCase([\n    (\"testA\", FooTests.testA),\n    (\"testB\", FooTests.testB)\n])\n\
         ])\n\
         \n"
    );
}

#[test]
fn test_class_order_is_preserved() {
    let manifest = create_test_manifest(
        r#"{"ZuluTests": ["testZ"], "AlphaTests": ["testA"], "MikeTests": ["testM"]}"#,
    );

    let text = stdout(&run_manifest(manifest.path()));

    let zulu = text.find("ZuluTests.testZ").unwrap();
    let alpha = text.find("AlphaTests.testA").unwrap();
    let mike = text.find("MikeTests.testM").unwrap();
    assert!(zulu < alpha && alpha < mike);
}

#[test]
fn test_empty_classes_are_elided() {
    let manifest = create_test_manifest(r#"{"EmptyTests": [], "FooTests": ["testA"]}"#);

    let output = run_manifest(manifest.path());

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(!text.contains("EmptyTests"));
    assert_eq!(text.matches("testCase([").count(), 1);
}

#[test]
fn test_all_empty_manifest_succeeds() {
    let manifest = create_test_manifest(r#"{"FooTests": [], "BarTests": []}"#);

    let output = run_manifest(manifest.path());

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "import XCTest\n@testable import SQLiteTests\n\nXCTMain([\n\n])\n\n"
    );
}

#[test]
fn test_suffix_stripping() {
    let manifest = create_test_manifest(r#"{"FooTests": ["testWith()", "testWithout", "test()Mid"]}"#);

    let text = stdout(&run_manifest(manifest.path()));

    assert!(text.contains("    (\"testWith\", FooTests.testWith)"));
    assert!(text.contains("    (\"testWithout\", FooTests.testWithout)"));
    assert!(text.contains("    (\"test()Mid\", FooTests.test()Mid)"));
}

#[test]
fn test_output_is_deterministic() {
    let manifest = create_test_manifest(
        r#"{"FooTests": ["testA()", "testA()", "testB"], "BarTests": ["testC"]}"#,
    );

    let first = run_manifest(manifest.path());
    let second = run_manifest(manifest.path());

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_missing_argument_is_usage_error() {
    let output = run(&[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tests.json"));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("tests.json");

    let output = run_manifest(&missing);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Manifest file not found"));
}

#[test]
fn test_invalid_json_fails() {
    let manifest = create_test_manifest(r#"{"FooTests": ["testA""#);

    let output = run_manifest(manifest.path());

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_wrong_shape_fails_with_class_name() {
    let manifest = create_test_manifest(r#"{"FooTests": ["testA"], "BarTests": [1, 2]}"#);

    let output = run_manifest(manifest.path());

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("BarTests"));
}

#[test]
fn test_top_level_array_fails() {
    let manifest = create_test_manifest(r#"[["FooTests", "testA"]]"#);

    let output = run_manifest(manifest.path());

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_tested_module_override() {
    let manifest = create_test_manifest(r#"{"CipherTests": ["test_key()"]}"#);

    let output = run(&[
        OsStr::new("--tested-module"),
        OsStr::new("SQLiteCipherTests"),
        manifest.path().as_os_str(),
    ]);

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("import XCTest\n@testable import SQLiteCipherTests\n\n"));
}

#[test]
fn test_config_file_sets_modules() {
    let manifest = create_test_manifest(r#"{"FooTests": ["testA"]}"#);
    let config = create_test_manifest("[template]\ntested_module = \"MyAppTests\"\n");

    let output = run(&[
        OsStr::new("--config"),
        config.path().as_os_str(),
        manifest.path().as_os_str(),
    ]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("@testable import MyAppTests\n"));
}

#[test]
fn test_invalid_override_fails() {
    let manifest = create_test_manifest(r#"{"FooTests": ["testA"]}"#);

    let output = run(&[
        OsStr::new("--tested-module"),
        OsStr::new(""),
        manifest.path().as_os_str(),
    ]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let manifest = create_test_manifest(r#"{"FooTests": ["testA"], "BarTests": []}"#);

    let output = run(&[OsStr::new("--very-verbose"), manifest.path().as_os_str()]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("import XCTest\n"));
    assert!(!text.contains("Skipping"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("BarTests"));
}

#[test]
fn test_config_in_working_directory_is_ignored() {
    let manifest = create_test_manifest(r#"{"FooTests": ["testA"]}"#);
    let cwd = TempDir::new().unwrap();
    std::fs::write(
        cwd.path().join("testmain-gen.toml"),
        "[template]\ntested_module = \"OtherTests\"\n",
    )
    .unwrap();

    let output = run_in(cwd.path(), &[manifest.path().as_os_str()]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("import XCTest\n@testable import SQLiteTests\n"));
    assert!(!text.contains("OtherTests"));
}

#[test]
fn test_broken_config_in_working_directory_is_ignored() {
    let manifest = create_test_manifest(r#"{"FooTests": ["testA"]}"#);
    let cwd = TempDir::new().unwrap();
    std::fs::write(cwd.path().join("testmain-gen.toml"), "[template\n").unwrap();

    let output = run_in(cwd.path(), &[manifest.path().as_os_str()]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("(\"testA\", FooTests.testA)"));
}

#[test]
fn test_broken_config_file_is_logged() {
    let manifest = create_test_manifest(r#"{"FooTests": ["testA"]}"#);
    let config = create_test_manifest("[template\n");

    let output = run(&[
        OsStr::new("--config"),
        config.path().as_os_str(),
        manifest.path().as_os_str(),
    ]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Generation failed"));
    assert!(stderr.contains("Invalid configuration format"));
}

#[test]
fn test_verbose_run_reports_config_source() {
    let manifest = create_test_manifest(r#"{"FooTests": ["testA"]}"#);
    let config = create_test_manifest("[template]\ntested_module = \"MyAppTests\"\n");

    let output = run(&[
        OsStr::new("--verbose"),
        OsStr::new("--config"),
        config.path().as_os_str(),
        manifest.path().as_os_str(),
    ]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Loaded configuration from"));
}
