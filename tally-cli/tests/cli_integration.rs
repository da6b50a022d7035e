//! Integration tests for the tally CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn tally() -> Command {
    Command::cargo_bin("tally").unwrap()
}

#[test]
fn test_analyze_text_report() {
    let mut cmd = tally();
    cmd.arg("analyze").arg("-i").arg(fixture_path("sample.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total words count: 8\n"))
        .stdout(predicate::str::contains("Total sentences count: 4\n"))
        .stdout(predicate::str::contains("Total paragraphs count: 3\n"))
        .stdout(predicate::str::contains("Average word length: 5.875\n"))
        .stdout(predicate::str::contains("By word occurrence dict:\nparagraph 2\n"))
        .stdout(predicate::str::contains("==>").not());
}

#[test]
fn test_analyze_dots() {
    let mut cmd = tally();
    cmd.arg("analyze").arg("-i").arg(fixture_path("dots.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total sentences count: 4\n"))
        .stdout(predicate::str::contains("Total paragraphs count: 3\n"));
}

#[test]
fn test_analyze_cyrillic() {
    let mut cmd = tally();
    cmd.arg("analyze").arg("-i").arg(fixture_path("cyrillic.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total words count: 7\n"))
        .stdout(predicate::str::contains("Total sentences count: 3\n"))
        .stdout(predicate::str::contains("Total paragraphs count: 2\n"))
        .stdout(predicate::str::contains("Char 'М' occurrences in"));
}

#[test]
fn test_analyze_windows_1251() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("cp1251.txt");
    // "Мир." in windows-1251
    fs::write(&input, [0xCC, 0xE8, 0xF0, b'.']).unwrap();

    let mut cmd = tally();
    cmd.arg("analyze")
        .arg("-i")
        .arg(&input)
        .arg("-e")
        .arg("windows-1251");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Alphabetic dict:\nМир\n"))
        .stdout(predicate::str::contains("Total sentences count: 1\n"));
}

#[test]
fn test_json_output() {
    let mut cmd = tally();
    cmd.arg("analyze")
        .arg("-i")
        .arg(fixture_path("sample.txt"))
        .arg("-f")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(value[0]["words"], 8);
    assert_eq!(value[0]["average_word_length"], 5.875);
    assert_eq!(value[0]["ranking"][0]["word"], "paragraph");
    assert_eq!(value[0]["ranking"][0]["occurrences"], 2);
}

#[test]
fn test_markdown_output() {
    let mut cmd = tally();
    cmd.arg("analyze")
        .arg("-i")
        .arg(fixture_path("sample.txt"))
        .arg("-f")
        .arg("markdown");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("| Words | 8 |"))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Analysed inputs: 1*"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    let mut cmd = tally();
    cmd.arg("analyze")
        .arg("-i")
        .arg(fixture_path("sample.txt"))
        .arg("-o")
        .arg(&output_file);

    cmd.assert().success().stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("Total words count: 8"));
}

#[test]
fn test_glob_pattern_reports_each_file() {
    let mut cmd = tally();
    cmd.arg("analyze")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("*.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("==> tests/fixtures/cyrillic.txt <=="))
        .stdout(predicate::str::contains("==> tests/fixtures/dots.txt <=="))
        .stdout(predicate::str::contains("==> tests/fixtures/sample.txt <=="));
}

#[test]
fn test_stdin_input() {
    let mut cmd = tally();
    cmd.arg("analyze").arg("-i").arg("-").write_stdin("hello world");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total words count: 2\n"))
        .stdout(predicate::str::contains("Total sentences count: 1\n"))
        .stdout(predicate::str::contains("Total paragraphs count: 1\n"));
}

#[test]
fn test_empty_stdin() {
    let mut cmd = tally();
    cmd.arg("analyze").arg("-i").arg("-").write_stdin("");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total words count: 0\n"))
        .stdout(predicate::str::contains("Average word length: NaN\n"));
}

#[test]
fn test_invalid_file() {
    let mut cmd = tally();
    cmd.arg("analyze").arg("-i").arg("nonexistent.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_read_failure_prints_no_partial_report() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "Readable text.").unwrap();
    // Reading the process's own memory from offset zero fails with EIO
    std::os::unix::fs::symlink("/proc/self/mem", temp_dir.path().join("b.txt")).unwrap();
    let pattern = temp_dir.path().join("*.txt");

    for format in ["text", "json", "markdown"] {
        let mut cmd = tally();
        cmd.arg("analyze")
            .arg("-q")
            .arg("-i")
            .arg(&pattern)
            .arg("-f")
            .arg(format);

        cmd.assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Failed to analyse"))
            .stderr(predicate::str::contains("b.txt"));
    }

    let output_file = temp_dir.path().join("report.out");
    tally()
        .arg("analyze")
        .arg("-i")
        .arg(&pattern)
        .arg("-o")
        .arg(&output_file)
        .assert()
        .failure();
    assert!(!output_file.exists());
}

#[test]
fn test_unknown_encoding() {
    let mut cmd = tally();
    cmd.arg("analyze")
        .arg("-i")
        .arg(fixture_path("sample.txt"))
        .arg("-e")
        .arg("klingon");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown text encoding: klingon"));
}

#[test]
fn test_zero_buffer_size() {
    let mut cmd = tally();
    cmd.arg("analyze")
        .arg("-i")
        .arg(fixture_path("sample.txt"))
        .arg("--buffer-size")
        .arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_small_buffer_gives_same_report() {
    let default_output = tally()
        .arg("analyze")
        .arg("-i")
        .arg(fixture_path("dots.txt"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    tally()
        .arg("analyze")
        .arg("-i")
        .arg(fixture_path("dots.txt"))
        .arg("--buffer-size")
        .arg("1")
        .assert()
        .success()
        .stdout(default_output);
}

#[test]
fn test_config_file_sets_format() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("tally.toml");
    fs::write(&config, "[output]\ndefault_format = \"json\"\npretty_json = false\n").unwrap();

    let mut cmd = tally();
    cmd.arg("analyze")
        .arg("-i")
        .arg(fixture_path("sample.txt"))
        .arg("-c")
        .arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("[{\"name\":"));
}

#[test]
fn test_help_command() {
    let mut cmd = tally();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text statistics"));
}

#[test]
fn test_list_formats() {
    let mut cmd = tally();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_list_encodings() {
    let mut cmd = tally();
    cmd.arg("list").arg("encodings");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("windows-1251"))
        .stdout(predicate::str::contains("koi8-r"));
}

#[test]
fn test_generate_and_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("tally.toml");

    tally()
        .arg("generate-config")
        .arg("-o")
        .arg(&config)
        .assert()
        .success();

    tally()
        .arg("validate")
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));

    tally()
        .arg("generate-config")
        .arg("-o")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "[analysis]\nbuffer_size = 0\n").unwrap();

    tally()
        .arg("validate")
        .arg("-c")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed"));
}
