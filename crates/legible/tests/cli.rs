//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

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
// Score Command
// =============================================================================

const PLAIN: &str = "We collect your name. We use it to send you mail. You can ask us to stop.";

const DENSE: &str = "The organization's comprehensive information-processing \
    infrastructure facilitates the systematic identification, categorization, \
    and authorization of personal information originating from individuals.";

fn temp_file(name: &str, content: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(name), content).unwrap();
    dir
}

#[test]
fn score_prints_every_metric() {
    let dir = temp_file("policy.txt", PLAIN);
    cmd()
        .args(["-C", dir.path().to_str().unwrap(), "score", "policy.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FRES"))
        .stdout(predicate::str::contains("ARI"))
        .stdout(predicate::str::contains("SMOG"))
        .stdout(predicate::str::contains("GFI"))
        .stdout(predicate::str::contains("Reading age"));
}

#[test]
fn score_json_has_counts_scores_and_ages() {
    let dir = temp_file("policy.txt", "The cat sat on the mat.");
    let output = cmd()
        .args(["-C", dir.path().to_str().unwrap(), "--json", "score", "policy.txt"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("score --json should output valid JSON");
    assert_eq!(json["counts"]["sentences"], 1);
    assert_eq!(json["counts"]["words"], 6);
    assert_eq!(json["counts"]["syllables"], 6);
    assert!(json["scores"]["fres"].as_f64().unwrap() > 90.0);
    assert!(json["ages"]["fres"].is_number());
    assert_eq!(json["smog_method"], "formula");
    assert_eq!(json["smog_sample_too_small"], true);
}

#[test]
fn score_min_ease_passes_easy_text() {
    let dir = temp_file("policy.txt", PLAIN);
    cmd()
        .args([
            "-C",
            dir.path().to_str().unwrap(),
            "score",
            "policy.txt",
            "--min-ease",
            "30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS:"));
}

#[test]
fn score_min_ease_fails_dense_text() {
    let dir = temp_file("policy.txt", DENSE);
    cmd()
        .args([
            "-C",
            dir.path().to_str().unwrap(),
            "score",
            "policy.txt",
            "--min-ease",
            "30",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading ease"));
}

#[test]
fn score_max_age_fails_dense_text() {
    let dir = temp_file("policy.txt", DENSE);
    cmd()
        .args([
            "-C",
            dir.path().to_str().unwrap(),
            "score",
            "policy.txt",
            "--max-age",
            "16",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max: 16"));
}

#[test]
fn score_json_still_fails_gate() {
    let dir = temp_file("policy.txt", DENSE);
    cmd()
        .args([
            "-C",
            dir.path().to_str().unwrap(),
            "--json",
            "score",
            "policy.txt",
            "--max-age",
            "16",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"over_max_age\": true"));
}

#[test]
fn score_strips_markdown() {
    let dir = temp_file(
        "policy.md",
        "# Your Privacy\n\n```\nlet secret = fetch_all_personal_information();\n```\n\nWe keep your data safe.\n",
    );
    let output = cmd()
        .args(["-C", dir.path().to_str().unwrap(), "--json", "score", "policy.md"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["counts"]["sentences"], 1);
    assert_eq!(json["counts"]["words"], 5);
}

#[test]
fn score_strict_fog_flag_is_reported() {
    let dir = temp_file("policy.txt", PLAIN);
    cmd()
        .args([
            "-C",
            dir.path().to_str().unwrap(),
            "--json",
            "score",
            "policy.txt",
            "--strict-fog",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"strict_fog\": true"));
}

#[test]
fn score_empty_file_fails() {
    let dir = temp_file("policy.txt", "   \n");
    cmd()
        .args(["-C", dir.path().to_str().unwrap(), "score", "policy.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no prose"));
}

#[test]
fn score_missing_file_fails() {
    cmd()
        .args(["score", "/nonexistent/policy.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Syllables Command
// =============================================================================

#[test]
fn syllables_json_counts_each_word() {
    let output = cmd()
        .args(["--json", "syllables", "privacy", "policy", "the"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json[0]["syllables"], 3);
    assert_eq!(json[1]["syllables"], 3);
    assert_eq!(json[2]["syllables"], 1);
}

#[test]
fn syllables_requires_a_word() {
    cmd()
        .arg("syllables")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Age Command
// =============================================================================

#[test]
fn age_converts_fres_anchor() {
    cmd()
        .args(["age", "fres", "70"])
        .assert()
        .success()
        .stdout(predicate::str::diff("13.0\n"));
}

#[test]
fn age_json_echoes_input() {
    let output = cmd().args(["--json", "age", "ari", "8"]).assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["metric"], "ari");
    assert_eq!(json["age"], 13.0);
}

#[test]
fn age_out_of_range_fails() {
    cmd()
        .args(["age", "fres", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot convert fres"));
}

#[test]
fn age_rejects_smog() {
    cmd()
        .args(["age", "smog", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
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
