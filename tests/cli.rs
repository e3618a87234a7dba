#![allow(clippy::unwrap_used)]
//! End-to-end tests for the `consola` binary.
//!
//! Assertions stick to output that does not depend on the message language.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[allow(deprecated)]
fn consola() -> Command {
    let mut cmd = Command::cargo_bin("consola").unwrap();
    cmd.env_remove("CONSOLA_THEME")
        .env_remove("CLICOLOR_FORCE")
        .env("NO_COLOR", "1");
    cmd
}

/// A command with ANSI output forced on, even though stdout is a pipe.
fn consola_colored() -> Command {
    let mut cmd = consola();
    cmd.env_remove("NO_COLOR").env("CLICOLOR_FORCE", "1");
    cmd
}

#[test]
fn test_no_arguments_shows_help() {
    consola()
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-style"))
        .stdout(predicate::str::contains("--theme=PATH"))
        .stdout(predicate::str::contains("<").not());
}

#[test]
fn test_help_option_after_command() {
    consola()
        .args(["render", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("consola"))
        .stdout(predicate::str::contains("--no-style"));
}

#[test]
fn test_parse_prints_json() {
    let output = consola()
        .args(["parse", "file.txt", "--name=Foo", "-n", "5", "-abc", "--tag=a", "--tag=b"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["args"]["0"], "parse");
    assert_eq!(json["args"]["1"], "file.txt");
    assert_eq!(json["options"]["name"], "foo");
    assert_eq!(json["options"]["n"], 5);
    assert_eq!(json["options"]["a"], true);
    assert_eq!(json["options"]["c"], true);
    assert_eq!(json["options"]["tag"], serde_json::json!(["a", "b"]));
}

#[test]
fn test_option_before_command_is_a_usage_error() {
    consola()
        .args(["-v", "parse"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("-v"));
}

#[test]
fn test_unknown_command_fails() {
    consola()
        .arg("deploy")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("deploy"));
}

#[test]
fn test_render_without_style() {
    consola()
        .args(["render", "<red>hello</red> <bold>world</bold>", "--no-style"])
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn test_render_with_style() {
    consola_colored()
        .args(["render", "<red>hi</red>"])
        .assert()
        .success()
        .stdout("\x1b[31m\x1b[31mhi\x1b[0;31m\x1b[0m\n");
}

#[test]
fn test_no_style_beats_forced_color() {
    consola_colored()
        .args(["render", "<red>hi</red>", "--no-style"])
        .assert()
        .success()
        .stdout("hi\n");
}

#[test]
fn test_render_text_with_equals_and_leading_dash() {
    consola()
        .args(["render", "<red>x=1</red>", "--no-style"])
        .assert()
        .success()
        .stdout("x=1\n");

    consola()
        .args(["render", "-> <red>done</red>", "--no-style"])
        .assert()
        .success()
        .stdout("-> done\n");
}

#[test]
fn test_strip_keeps_equals() {
    consola()
        .args(["strip", "<bold>a=b</bold>"])
        .assert()
        .success()
        .stdout("a=b\n");
}

#[test]
fn test_render_requires_text() {
    consola().arg("render").assert().code(1);
}

#[test]
fn test_strip_removes_tags() {
    consola_colored()
        .args(["strip", "<bold>a</bold>", "<blue>b</blue>"])
        .assert()
        .success()
        .stdout("a b\n");
}

#[test]
fn test_tags_lists_every_tag() {
    consola()
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("background_light_cyan"))
        .stdout(predicate::str::contains("underlined"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_theme_from_environment() {
    let mut theme = NamedTempFile::new().unwrap();
    writeln!(theme, "[tags]\nalert = [\"bold\", \"light_red\"]").unwrap();

    consola_colored()
        .env("CONSOLA_THEME", theme.path())
        .args(["render", "<alert>x</alert>"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1b[1;91m"));
}

#[test]
fn test_theme_option_keeps_path_case() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Dark.toml");
    std::fs::write(&path, "[tags]\nalert = [\"bold\", \"light_red\"]\n").unwrap();

    consola_colored()
        .args(["render", "<alert>x</alert>"])
        .arg(format!("--theme={}", path.display()))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1b[1;91m"));
}

#[test]
fn test_broken_theme_fails() {
    let mut theme = NamedTempFile::new().unwrap();
    writeln!(theme, "[tags]\nalert = \"amber\"").unwrap();

    consola()
        .env("CONSOLA_THEME", theme.path())
        .args(["render", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("amber"));
}
