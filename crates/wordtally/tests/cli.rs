//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn short_help_flag_shows_usage() {
    cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn short_version_flag_shows_version() {
    cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn info_json_contains_expected_fields() {
    cmd()
        .arg("info")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\""))
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn info_help_shows_command_options() {
    cmd()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn short_quiet_flag_accepted() {
    cmd().args(["-q", "info"]).assert().success();
}

#[test]
fn verbose_flag_accepted() {
    cmd().args(["--verbose", "info"]).assert().success();
}

#[test]
fn short_verbose_flag_accepted() {
    cmd().args(["-v", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_auto_accepted() {
    cmd().args(["--color", "auto", "info"]).assert().success();
}

#[test]
fn color_always_accepted() {
    cmd().args(["--color", "always", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Analyze Command
// =============================================================================

/// Write `content` to a temp file and return the directory guard and path.
fn input_file(content: &str) -> (TempDir, String) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("input.txt");
    fs::write(&path, content).unwrap();
    let path = path.to_str().unwrap().to_string();
    (tmp, path)
}

/// Run with `--json` and parse stdout.
fn run_json(args: &[&str]) -> Value {
    let output = cmd()
        .arg("--json")
        .args(args)
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

#[test]
fn analyze_counts_words_in_file() {
    let (_tmp, path) = input_file("The cat sat. The cat ran! The cat, again.");

    let json = run_json(&["analyze", "--locale", "en", &path]);
    assert_eq!(json["words"][0]["word"], "cat");
    assert_eq!(json["words"][0]["count"], 3);
    assert_eq!(json["locale"], "en");
}

#[test]
fn analyze_text_output_lists_ranked_words() {
    let (_tmp, path) = input_file("rust rust rust cargo cargo clippy");

    cmd()
        .args(["--color", "never", "analyze", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("rust"))
        .stdout(predicate::str::contains("cargo"))
        .stdout(predicate::str::contains("6 tokens, 3 unique"));
}

#[test]
fn analyze_reads_stdin() {
    let output = cmd()
        .args(["--json", "analyze", "--locale", "en"])
        .write_stdin("apple banana apple")
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["words"][0]["word"], "apple");
    assert_eq!(json["words"][0]["count"], 2);
}

#[test]
fn analyze_dash_reads_stdin() {
    cmd()
        .args(["analyze", "-"])
        .write_stdin("hello hello world")
        .assert()
        .success()
        .stdout(predicate::str::contains("hello"));
}

#[test]
fn analyze_default_locale_filters_korean_particles() {
    let (_tmp, path) = input_file("그 회의 및 회의 또는 일정");

    let json = run_json(&["analyze", &path]);
    assert_eq!(json["locale"], "ko");
    assert_eq!(json["words"][0]["word"], "회의");
    assert_eq!(json["words"][0]["count"], 2);
    assert_eq!(json["total_tokens"], 3);
}

#[test]
fn analyze_exclude_removes_words() {
    let (_tmp, path) = input_file("launch launch campaign campaign campaign ads");

    let json = run_json(&["analyze", "--exclude", "Campaign", &path]);
    assert_eq!(json["words"][0]["word"], "launch");
    assert_eq!(json["custom_stop_words"][0], "campaign");
}

#[test]
fn analyze_exclude_accepts_comma_list() {
    let (_tmp, path) = input_file("one two three two three three");

    let json = run_json(&["analyze", "--exclude", "two,three", &path]);
    assert_eq!(json["unique_words"], 1);
    assert_eq!(json["words"][0]["word"], "one");
}

#[test]
fn analyze_duplicate_exclude_fails() {
    let (_tmp, path) = input_file("some words here");

    cmd()
        .args(["analyze", "--exclude", "word,WORD", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already a stop word"));
}

#[test]
fn analyze_exclude_of_default_stop_word_fails() {
    let (_tmp, path) = input_file("some words here");

    cmd()
        .args(["analyze", "--locale", "en", "--exclude", "the", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already a stop word"));
}

#[test]
fn analyze_blank_input_fails() {
    let (_tmp, path) = input_file("   \n\t  ");

    cmd()
        .args(["analyze", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to analyze"));
}

#[test]
fn analyze_punctuation_only_reports_no_words() {
    let (_tmp, path) = input_file("... !!! ,,,");

    let json = run_json(&["analyze", &path]);
    assert_eq!(json["total_tokens"], 0);
    assert!(json["words"].as_array().unwrap().is_empty());
}

#[test]
fn analyze_top_limits_list() {
    let text: String = (0..30).map(|i| format!("w{i} ")).collect();
    let (_tmp, path) = input_file(&text);

    let json = run_json(&["analyze", "--top", "5", &path]);
    assert_eq!(json["words"].as_array().unwrap().len(), 5);
    assert_eq!(json["unique_words"], 30);

    let json = run_json(&["analyze", &path]);
    assert_eq!(json["words"].as_array().unwrap().len(), 20);

    let json = run_json(&["analyze", "--all", &path]);
    assert_eq!(json["words"].as_array().unwrap().len(), 30);
}

#[test]
fn analyze_titles_source_strips_markup() {
    let (_tmp, path) = input_file("<b>Rust</b> 1.88 released\nWhy <em>rust</em> wins");

    let json = run_json(&["analyze", "--source", "titles", &path]);
    assert_eq!(json["words"][0]["word"], "rust");
    assert_eq!(json["words"][0]["count"], 2);
}

#[test]
fn analyze_markdown_source_skips_code() {
    let (_tmp, path) = input_file("# Title\n\nprose prose\n\n```\ncode code code\n```\n");

    let json = run_json(&["analyze", "--source", "markdown", &path]);
    assert_eq!(json["words"][0]["word"], "prose");
    assert!(
        !json["words"]
            .as_array()
            .unwrap()
            .iter()
            .any(|w| w["word"] == "code")
    );
}

#[test]
fn analyze_missing_file_fails() {
    cmd()
        .args(["analyze", "/nonexistent/input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn analyze_invalid_locale_fails() {
    cmd()
        .args(["analyze", "--locale", "fr", "-"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Cloud Command
// =============================================================================

#[test]
fn cloud_with_seed_is_reproducible() {
    let (_tmp, path) = input_file("alpha beta beta gamma gamma gamma");

    let first = run_json(&["cloud", "--seed", "42", &path]);
    let second = run_json(&["cloud", "--seed", "42", &path]);
    assert_eq!(first, second);
}

#[test]
fn cloud_sizes_follow_frequency() {
    let (_tmp, path) = input_file("alpha beta beta gamma gamma gamma gamma");

    let json = run_json(&["cloud", "--seed", "1", &path]);
    let cloud = json["cloud"].as_array().unwrap();
    assert_eq!(cloud[0]["word"], "gamma");
    assert_eq!(cloud[0]["font_size"], 48);
    assert!((cloud[0]["opacity"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    // floor(1/4 * 48) = 12
    assert_eq!(cloud[2]["font_size"], 12);
    for token in cloud {
        let rotation = token["rotation"].as_f64().unwrap();
        assert!((-10.0..=10.0).contains(&rotation));
        assert!(token["color"].as_str().unwrap().starts_with("hsl("));
    }
}

#[test]
fn cloud_limits_are_configurable() {
    let text: String = (0..150).map(|i| format!("w{i} ")).collect();
    let (_tmp, path) = input_file(&text);

    let json = run_json(&["cloud", &path]);
    assert_eq!(json["cloud"].as_array().unwrap().len(), 100);
    assert_eq!(json["top_words"].as_array().unwrap().len(), 20);

    let json = run_json(&["cloud", "--cloud-words", "7", "--top", "3", &path]);
    assert_eq!(json["cloud"].as_array().unwrap().len(), 7);
    assert_eq!(json["top_words"].as_array().unwrap().len(), 3);
}

#[test]
fn cloud_text_output_shows_sections() {
    let (_tmp, path) = input_file("alpha beta beta");

    cmd()
        .args(["--color", "never", "cloud", "--seed", "3", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cloud"))
        .stdout(predicate::str::contains("Top words"))
        .stdout(predicate::str::contains("hsl("));
}

// =============================================================================
// Stopwords Command
// =============================================================================

#[test]
fn stopwords_lists_english_defaults() {
    let json = run_json(&["stopwords", "--locale", "en"]);
    assert_eq!(json["locale"], "en");
    let defaults = json["defaults"].as_array().unwrap();
    assert_eq!(defaults.len(), 13);
    assert!(defaults.iter().any(|w| w == "with"));
}

#[test]
fn stopwords_korean_includes_both_tables() {
    let json = run_json(&["stopwords", "--locale", "ko"]);
    let defaults = json["defaults"].as_array().unwrap();
    assert!(defaults.iter().any(|w| w == "이것"));
    assert!(defaults.iter().any(|w| w == "the"));
}

#[test]
fn stopwords_text_output() {
    cmd()
        .args(["--color", "never", "stopwords", "--locale", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Defaults"))
        .stdout(predicate::str::contains("(none)"));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_flag_shows_error() {
    cmd()
        .arg("--not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_flag_changes_directory() {
    // The -C flag should be accepted and work without error
    // We use a path that definitely exists
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
