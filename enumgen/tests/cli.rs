use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn enumgen(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_enumgen"));
    cmd.args(args)
        .env("NO_COLOR", "1")
        .env_remove("ENUMGEN_LICENSE")
        .env_remove("RUST_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    enumgen(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run enumgen with args {:?}: {e}", args))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_generate_color() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("Color.java");
    let spec = fixture("color.toml");

    let output = run(&["generate", path_str(&spec), path_str(&out)]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert!(stdout(&output).contains("Generated: org.robovm.foo.Color"));

    let source = fs::read_to_string(&out).unwrap();
    assert!(source.starts_with("package org.robovm.foo;\n"));
    assert!(source.contains("@Marshaler(ValuedEnum.AsMachineSizedSIntMarshaler.class)"));
    assert!(source.contains("RED(1L),\n    GREEN(2L);"));
}

#[test]
fn test_generate_error_domain() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("HTTPStatus.java");
    let spec = fixture("http_status.toml");

    let output = run(&["generate", path_str(&spec), path_str(&out)]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert!(
        stdout(&output)
            .contains("binds org.robovm.apple.foundation.HTTPStatus.NSErrorWrap to NSError")
    );

    let source = fs::read_to_string(&out).unwrap();
    assert!(source.contains("return \"HTTPErrorDomain\";"));
    assert!(source.contains("@Library(\"Foundation\")"));
    assert!(source.contains("@since Available in iOS 9.0 and later."));
    assert!(source.contains("The requested resource does not exist."));
}

#[test]
fn test_generate_missing_domain_fails() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("Broken.java");
    let spec = fixture("missing_domain.toml");

    let output = run(&["generate", path_str(&spec), path_str(&out)]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(
        err.lines().any(|l| l
            == "error: Broken: error-domain enum 'Broken' has no error_domain_class_name"),
        "stderr:\n{}",
        err
    );
    assert!(!out.exists());
}

#[test]
fn test_invalid_spec_prints_single_line() {
    let spec = fixture("missing_domain.toml");

    let output = run(&["check", path_str(&spec)]);

    assert!(!output.status.success());
    assert_eq!(
        stderr(&output).trim_end(),
        "error: Broken: error-domain enum 'Broken' has no error_domain_class_name"
    );
}

#[test]
fn test_invalid_spec_verbose_prints_report() {
    let spec = fixture("missing_domain.toml");

    let output = run(&["check", path_str(&spec), "-v"]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.lines().count() > 1, "stderr:\n{}", err);
    assert_eq!(
        err.lines().last(),
        Some("error: Broken: error-domain enum 'Broken' has no error_domain_class_name")
    );
}

#[test]
fn test_generate_unreadable_spec_uses_file_stem() {
    let temp = TempDir::new().unwrap();
    let spec = temp.path().join("Missing.toml");
    let out = temp.path().join("Missing.java");

    let output = run(&["generate", path_str(&spec), path_str(&out)]);

    assert!(!output.status.success());
    assert!(stderr(&output)
        .lines()
        .any(|l| l.starts_with("error: Missing: failed to read")));
}

#[test]
fn test_generate_dry_run() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("Color.java");
    let spec = fixture("color.toml");

    let output = run(&["generate", path_str(&spec), path_str(&out), "--dry-run"]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert!(stdout(&output).contains("RED(1L),"));
    assert!(!out.exists());
}

#[test]
fn test_generate_overrides() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("Color.java");
    let spec = fixture("color.toml");

    let output = run(&[
        "generate",
        path_str(&spec),
        path_str(&out),
        "--package",
        "org.robovm.bar",
        "--lookup",
        "indexed",
    ]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    let source = fs::read_to_string(&out).unwrap();
    assert!(source.starts_with("package org.robovm.bar;\n"));
    assert!(source.contains("BY_VALUE.putIfAbsent(v.n, v);"));
}

#[test]
fn test_generate_license_flag() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("Color.java");
    let spec = fixture("color.toml");
    let license = fixture("license.txt");

    let output = run(&[
        "generate",
        path_str(&spec),
        path_str(&out),
        "--license",
        path_str(&license),
    ]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    let source = fs::read_to_string(&out).unwrap();
    assert!(source.starts_with(
        "/*\n * Copyright (C) 2026 RoboVM contributors\n */\npackage org.robovm.foo;\n"
    ));
}

#[test]
fn test_generate_license_from_env() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("Color.java");
    let spec = fixture("color.toml");

    let output = enumgen(&["generate", path_str(&spec), path_str(&out)])
        .env("ENUMGEN_LICENSE", fixture("license.txt"))
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    let source = fs::read_to_string(&out).unwrap();
    assert!(source.starts_with("/*\n * Copyright (C) 2026 RoboVM contributors\n */\n"));
}

#[test]
fn test_generate_json_report() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("Color.java");
    let spec = fixture("color.toml");

    let output = run(&["generate", path_str(&spec), path_str(&out), "--json"]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["enum_name"], "org.robovm.foo.Color");
    assert_eq!(report["result"]["status"], "written");
    assert_eq!(report["constant_count"], 2);
}

#[test]
fn test_check_reports_alias_warning() {
    let spec = fixture("alias.toml");

    let output = run(&["check", path_str(&spec)]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert!(stderr(&output).contains("warning[duplicate-value]"));
    assert!(stdout(&output).contains("is valid"));
}

#[test]
fn test_check_invalid_spec_fails() {
    let spec = fixture("missing_domain.toml");

    let output = run(&["check", path_str(&spec)]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("error: Broken: "));
}

#[test]
fn test_check_json() {
    let spec = fixture("http_status.toml");

    let output = run(&["check", path_str(&spec), "--json"]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["variant"], "error-domain");
    assert_eq!(report["warnings"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_lookup_value_of() {
    let spec = fixture("color.toml");

    let output = run(&["lookup", path_str(&spec), "2"]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "org.robovm.foo.Color.GREEN");
}

#[test]
fn test_lookup_value_of_miss_fails() {
    let spec = fixture("color.toml");

    let output = run(&["lookup", path_str(&spec), "5"]);

    assert!(!output.status.success());
    assert!(stderr(&output)
        .lines()
        .any(|l| l == "error: Color: No constant with value 5 found in org.robovm.foo.Color"));
}

#[test]
fn test_lookup_error_code() {
    let spec = fixture("http_status.toml");

    let hit = run(&["lookup", path_str(&spec), "404", "--error-code"]);
    assert!(hit.status.success(), "stderr:\n{}", stderr(&hit));
    assert!(
        stdout(&hit)
            .lines()
            .any(|l| l == "org.robovm.apple.foundation.HTTPStatus.NOT_FOUND")
    );

    let miss = run(&["lookup", path_str(&spec), "999", "--error-code"]);
    assert!(miss.status.success(), "stderr:\n{}", stderr(&miss));
    assert!(stdout(&miss).lines().any(|l| l == "null"));
}

#[test]
fn test_completions() {
    let output = run(&["completions", "bash"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("enumgen"));
}
