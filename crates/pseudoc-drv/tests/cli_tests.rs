//! CLI end-to-end tests (§6 External Interfaces, exercised through the
//! `pseudoc` binary rather than the library API directly).

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn pseudoc_bin() -> Command {
    Command::cargo_bin("pseudoc").expect("pseudoc binary built")
}

fn write_source(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write source");
    file
}

#[test]
fn cli_help_mentions_usage() {
    pseudoc_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").or(predicate::str::contains("pseudoc")));
}

#[test]
fn cli_version_prints_something() {
    pseudoc_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pseudoc").or(predicate::str::contains("0.")));
}

#[test]
fn cli_compiles_totals_program_and_prints_python() {
    let file = write_source(
        "DECLARE Total : INTEGER\nDECLARE Index : INTEGER\nFOR Index <- 1 TO 3\n    Total <- Total + Index\nNEXT Index\nOUTPUT Total\n",
    );

    pseudoc_bin()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("__inclusive_range"))
        .stdout(predicate::str::contains("__output(Total)"));
}

#[test]
fn cli_reports_diagnostics_on_stderr_and_exits_nonzero() {
    let file = write_source("Value <- 7\n");

    pseudoc_bin()
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("SEM019"));
}

#[test]
fn cli_missing_file_exits_with_io_error() {
    pseudoc_bin()
        .arg("/nonexistent/path/does-not-exist.pseudo")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn cli_emit_ast_prints_json_not_python() {
    let file = write_source("DECLARE X : INTEGER\nOUTPUT X\n");

    pseudoc_bin()
        .arg(file.path())
        .arg("--emit-ast")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("__output").not());
}

#[test]
fn cli_emit_ast_and_emit_python_conflict() {
    let file = write_source("DECLARE X : INTEGER\n");

    pseudoc_bin()
        .arg(file.path())
        .arg("--emit-ast")
        .arg("--emit-python")
        .assert()
        .failure();
}

#[test]
fn cli_reads_stdin_when_no_path_given() {
    pseudoc_bin()
        .write_stdin("DECLARE X : INTEGER\nOUTPUT X\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("__output(X)"));
}
