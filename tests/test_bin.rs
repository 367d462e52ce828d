//! End-to-end tests for the mimeconv binary surface

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use common::*;

#[test]
fn test_missing_input_prints_failure_line_and_exits_nonzero() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("mimeconv")
        .unwrap()
        .arg(dir.path().join("missing.docx"))
        .arg(dir.path().join("out.pdf"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("File conversion failed."));
}

#[test]
fn test_unrecognized_extension_prints_failure_line() {
    let dir = TempDir::new().unwrap();
    let input = create_input_file(&dir, "report.odt");

    Command::cargo_bin("mimeconv")
        .unwrap()
        .arg(&input)
        .arg(dir.path().join("report.xyz"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("File conversion failed."));
}

#[cfg(unix)]
#[test]
fn test_successful_conversion_prints_output_path() {
    let dir = TempDir::new().unwrap();
    let input = create_input_file(&dir, "report.odt");
    let output = dir.path().join("report.pdf");
    let record = record_path(&dir);
    let tool = fake_converter(&dir, &record, 0);

    Command::cargo_bin("mimeconv")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .arg("--unoconv-path")
        .arg(&tool)
        .assert()
        .success()
        .stdout(predicate::str::contains("File successfully converted to"));
}

#[cfg(unix)]
#[test]
fn test_failing_converter_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let input = create_input_file(&dir, "report.odt");
    let output = dir.path().join("report.pdf");
    let record = record_path(&dir);
    let tool = fake_converter(&dir, &record, 2);

    Command::cargo_bin("mimeconv")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .arg("--unoconv-path")
        .arg(&tool)
        .assert()
        .failure()
        .stdout(predicate::str::contains("File conversion failed."));
}

#[cfg(unix)]
#[test]
fn test_original_flag_spelling_accepted() {
    let dir = TempDir::new().unwrap();
    let input = create_input_file(&dir, "report.odt");
    let output = dir.path().join("report.pdf");
    let record = record_path(&dir);
    let tool = fake_converter(&dir, &record, 0);

    Command::cargo_bin("mimeconv")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .arg("--unoconv_path")
        .arg(&tool)
        .assert()
        .success();
}
