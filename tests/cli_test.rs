//! End-to-end tests of the xmltract binary.

use std::io::Write as _;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn xmltract() -> Command {
    Command::cargo_bin("xmltract").unwrap()
}

fn write_file(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(content).unwrap();
    path
}

#[test]
fn test_stdin_extraction() {
    xmltract()
        .arg("b")
        .write_stdin("<a><b> hello   world </b><b/><c>ignored</c></a>")
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn test_file_arguments_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let one = write_file(&dir, "one.xml", b"<r><b>first</b></r>");
    let two = write_file(&dir, "two.xml", b"<r><b>second</b></r>");

    xmltract()
        .arg("b")
        .arg(&one)
        .arg(&two)
        .assert()
        .success()
        .stdout("first\nsecond\n");
}

#[test]
fn test_ignore_case_flag() {
    xmltract()
        .args(["-i", "item"])
        .write_stdin("<a><ITEM>x</ITEM></a>")
        .assert()
        .success()
        .stdout("x\n");
}

#[test]
fn test_prefix_flag() {
    xmltract()
        .args(["-p", "ns", "b"])
        .write_stdin(r#"<a xmlns:ns="urn:x"><ns:b>kept</ns:b><b>dropped</b></a>"#)
        .assert()
        .success()
        .stdout("kept\n");
}

#[test]
fn test_tree_mode_nested() {
    xmltract()
        .args(["--mode", "tree", "b"])
        .write_stdin("<r><b>outer <b>inner</b> text</b></r>")
        .assert()
        .success()
        .stdout("outer inner text\ninner\n");
}

#[test]
fn test_missing_file_fails() {
    xmltract()
        .args(["b", "no-such-file.xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-file.xml"));
}

#[test]
fn test_fail_fast_keeps_earlier_output() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_file(&dir, "good.xml", b"<r><b>ok</b></r>");

    xmltract()
        .arg("b")
        .arg(&good)
        .arg(dir.path().join("missing.xml"))
        .assert()
        .failure()
        .stdout("ok\n");
}

#[test]
fn test_keep_going_continues_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_file(&dir, "good.xml", b"<r><b>still here</b></r>");

    xmltract()
        .arg("--keep-going")
        .arg("b")
        .arg(dir.path().join("missing.xml"))
        .arg(&good)
        .assert()
        .failure()
        .stdout("still here\n")
        .stderr(predicate::str::contains("1 of 2"));
}

#[test]
fn test_malformed_input_fails() {
    xmltract()
        .arg("b")
        .write_stdin("<a><b>one</b><c>two</b></a>")
        .assert()
        .failure()
        .stdout("one\n")
        .stderr(predicate::str::contains("XML parsing failed"));
}

#[test]
fn test_encoding_override() {
    let dir = tempfile::tempdir().unwrap();
    let latin1 = write_file(&dir, "latin1.xml", b"<r><b>caf\xe9</b></r>");

    xmltract()
        .args(["-e", "ISO-8859-1", "b"])
        .arg(&latin1)
        .assert()
        .success()
        .stdout("caf\u{e9}\n");
}

#[test]
fn test_unknown_encoding_fails() {
    xmltract()
        .args(["-e", "KOI-99", "b"])
        .write_stdin("<a/>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown encoding"));
}

#[test]
fn test_missing_name_argument() {
    xmltract()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_exits_successfully() {
    xmltract()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}
