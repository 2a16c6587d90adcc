//! End-to-end tests for the `maf-tools` binary

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const INPUT: &str = "##maf version=1

a score=1
s hg18.chr1 100 9 + 2000 ACGT-ACGTT
s mm9.chr3   50 9 + 1500 ACGTAACGT-
e rn4.chr7  900 40 - 5000 I

a score=2
s hg18.chr1 200 4 + 2000 ACGT
s rn4.chr7   40 4 + 3000 TTGA
";

fn input_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".maf").expect("Failed to create temp file");
    file.write_all(text.as_bytes())
        .expect("Failed to write temp file");
    file
}

fn maf_tools() -> Command {
    Command::cargo_bin("maf-tools").expect("binary built")
}

#[test]
fn test_parse_passthrough() {
    let input = input_file(INPUT);
    maf_tools()
        .arg("parse")
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("##maf version=1\n"))
        .stdout(predicate::str::contains("a score=1"))
        .stdout(predicate::str::contains("ACGT-ACGTT"))
        .stdout(predicate::str::contains("e rn4.chr7"))
        .stdout(predicate::str::contains("TTGA"))
        .stdout(predicate::str::ends_with("#eof\n"));
}

#[test]
fn test_parse_keep_species() {
    let input = input_file(INPUT);
    maf_tools()
        .args(["parse", "--seqs", "hg18,rn4"])
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hg18.chr1"))
        .stdout(predicate::str::contains("rn4.chr7"))
        .stdout(predicate::str::contains("mm9").not());
}

#[test]
fn test_parse_exclude_species() {
    let input = input_file(INPUT);
    maf_tools()
        .args(["parse", "--seqs", "hg18", "--exclude"])
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hg18").not())
        .stdout(predicate::str::contains("ACGTAACGT-"));
}

#[test]
fn test_exclude_requires_seqs() {
    let input = input_file(INPUT);
    maf_tools()
        .args(["parse", "--exclude"])
        .arg(input.path())
        .assert()
        .failure();
}

#[test]
fn test_parse_order() {
    let input = input_file(INPUT);
    let output = maf_tools()
        .args(["parse", "--order", "rn4,hg18"])
        .arg(input.path())
        .output()
        .expect("Failed to run maf-tools");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let rn4 = stdout.find("rn4.chr7").unwrap();
    let hg18 = stdout.find("hg18.chr1").unwrap();
    assert!(rn4 < hg18);
    assert!(!stdout.contains("mm9"));
}

#[test]
fn test_parse_trim_to_reference_window() {
    let input = input_file(INPUT);
    maf_tools()
        .args(["parse", "--start", "103", "--end", "106", "--refseq", "hg18"])
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("GT-AC"))
        .stdout(predicate::str::contains("GTAAC"))
        // Second block (hg18 201..=204) lies outside the window
        .stdout(predicate::str::contains("a score=2").not());
}

#[test]
fn test_parse_writes_output_file() {
    let input = input_file(INPUT);
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("out.maf");

    maf_tools()
        .arg("parse")
        .arg(input.path())
        .arg("-o")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&out_path).unwrap();
    assert!(written.contains("a score=2"));
    assert!(written.ends_with("#eof\n"));
}

#[test]
fn test_parse_rejects_start_after_end() {
    let input = input_file(INPUT);
    maf_tools()
        .args(["parse", "--start", "10", "--end", "5"])
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be greater"));
}

#[test]
fn test_parse_rejects_malformed_input() {
    let input = input_file("a score=1\ns hg18.chr1 100 4 + 2000 ACGT\ns mm9.chr3 50 3 + 1500 ACG\n");
    maf_tools()
        .arg("parse")
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_parse_missing_file() {
    maf_tools()
        .args(["parse", "/nonexistent/input.maf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open"));
}

#[test]
fn test_stats_text() {
    let input = input_file(INPUT);
    maf_tools()
        .arg("stats")
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Blocks: 2"))
        .stdout(predicate::str::contains("Columns: 14"))
        .stdout(predicate::str::contains("hg18"));
}

#[test]
fn test_stats_json() {
    let input = input_file(INPUT);
    let output = maf_tools()
        .args(["--format", "json", "stats"])
        .arg(input.path())
        .output()
        .expect("Failed to run maf-tools");
    assert!(output.status.success());

    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["blocks"], 2);
    assert_eq!(stats["columns"], 14);
    assert_eq!(stats["species"]["hg18"]["aligned_rows"], 2);
    assert_eq!(stats["species"]["hg18"]["aligned_bases"], 13);
    assert_eq!(stats["species"]["rn4"]["empty_rows"], 1);
}
