//! End-to-end tests driving the `file_analyzer` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn file_analyzer() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_file_analyzer"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, rel: &str, contents: &str) -> String {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path.display().to_string()
}

#[test]
fn shows_help() {
    file_analyzer()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--mode"))
        .stdout(predicate::str::contains("--encoding"));
}

#[test]
fn requires_a_file_argument() {
    file_analyzer().assert().failure().code(2);
}

#[test]
fn default_is_text_line_count() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "notes.txt", "first\nsecond\nthird");

    file_analyzer()
        .arg(&path)
        .assert()
        .success()
        .stdout(format!("Results for '{path}':\n  Lines: 3\n"));
}

#[test]
fn text_output_with_stats() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "notes.txt", "ab cd\n\nefgh");

    file_analyzer()
        .args(["--mode", "all", "stats", "--"])
        .arg(&path)
        .assert()
        .success()
        .stdout(format!(
            "Results for '{path}':\n  Lines: 3\n  Words: 3\n  Chars: 11\n  Stats:\n    \
             avg_line_length: 3.00\n    avg_words_length: 2.67\n    empty_lines: 1.00\n"
        ));
}

#[test]
fn json_output_parses_back() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "empty.txt", "");

    let output = file_analyzer()
        .args(["-f", "json", "--mode", "lines", "stats", "--"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json[&path],
        serde_json::json!({
            "lines": 1,
            "stats": {
                "avg_line_length": 0.0,
                "avg_words_length": 0.0,
                "empty_lines": 0
            }
        })
    );
}

#[test]
fn csv_with_only_stats_has_empty_cells() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "text.txt", "a b c");

    file_analyzer()
        .args(["-f", "csv", "--mode", "stats", "--"])
        .arg(&path)
        .assert()
        .success()
        .stdout(format!("filename,lines,words,chars\n{path},,,\n"));
}

#[test]
fn recursive_extension_filter() {
    let dir = TempDir::new().unwrap();
    let a = write(dir.path(), "a.md", "alpha");
    write(dir.path(), "b.txt", "beta");
    let c = write(dir.path(), "sub/c.md", "gamma");

    file_analyzer()
        .args(["-r", "--ext", ".md", "-f", "csv"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(format!("filename,lines,words,chars\n{a},1,,\n{c},1,,\n"));
}

#[test]
fn overlapping_patterns_analyze_each_file_once() {
    let dir = TempDir::new().unwrap();
    let a = write(dir.path(), "a.txt", "alpha");

    file_analyzer()
        .args(["-f", "csv"])
        .arg(dir.path().join("*.txt"))
        .arg(&a)
        .assert()
        .success()
        .stdout(format!("filename,lines,words,chars\n{a},1,,\n"));
}

#[test]
fn relative_spellings_stay_distinct() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.txt", "alpha");

    file_analyzer()
        .current_dir(dir.path())
        .args(["-f", "csv", "--", "./*.txt", "a.txt", "./a.txt"])
        .assert()
        .success()
        .stdout("filename,lines,words,chars\n./a.txt,1,,\na.txt,1,,\n");
}

#[test]
fn no_matching_files_stops_early() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.txt");

    file_analyzer()
        .arg(dir.path().join("*.missing"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Error: No matching files found."));

    assert!(!out.exists());
}

#[test]
fn unreadable_file_is_skipped() {
    let dir = TempDir::new().unwrap();
    let good = write(dir.path(), "good.txt", "fine");
    fs::write(dir.path().join("bad.txt"), b"\xff\xfe\xfd").unwrap();

    file_analyzer()
        .args(["-f", "csv"])
        .arg(dir.path().join("*.txt"))
        .assert()
        .success()
        .stdout(format!("filename,lines,words,chars\n{good},1,,\n"))
        .stderr(predicate::str::contains("Failed to decode file"));
}

#[test]
fn declared_encoding_reads_latin1() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin.txt");
    fs::write(&path, b"na\xefve caf\xe9").unwrap();

    file_analyzer()
        .args(["--encoding", "latin-1", "--mode", "chars", "--"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Chars: 10"));
}

#[test]
fn unknown_encoding_fails_each_file_not_the_run() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "plain.txt", "hello");

    file_analyzer()
        .args(["--encoding", "cp1252", "--"])
        .arg(&path)
        .assert()
        .success()
        .stdout("\n")
        .stderr(predicate::str::contains(format!(
            "Error: Failed to read file '{path}': unknown encoding: cp1252"
        )));
}

#[test]
fn verbose_names_file_and_modes() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "v.txt", "x");

    file_analyzer()
        .args(["-v", "--mode", "words", "chars", "--"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains(format!(
            "Analyzing '{path}' in words, chars mode(s)..."
        )));
}

#[test]
fn writes_to_output_file() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "in.txt", "one two");
    let out = dir.path().join("report.json");

    file_analyzer()
        .args(["--mode", "words", "-f", "json", "-o"])
        .arg(&out)
        .arg(&path)
        .assert()
        .success()
        .stdout(format!("Results saved to '{}'\n", out.display()));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json[&path]["words"], 2);
}

#[test]
fn output_failure_falls_back_to_stdout() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "in.txt", "one two");
    let out = dir.path().join("no-such-dir").join("report.txt");

    file_analyzer()
        .arg("-o")
        .arg(&out)
        .arg(&path)
        .assert()
        .success()
        .stdout(format!("Results for '{path}':\n  Lines: 1\n"))
        .stderr(predicate::str::contains("Error saving results"));
}
