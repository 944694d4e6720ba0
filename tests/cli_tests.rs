//! Integration tests for the wayfind CLI surface: help, exit codes,
//! logging, graph listings and config handling.

mod support;

use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

use crate::support::{stdout_json, wayfind};

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    wayfind()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: wayfind"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("edges"));
}

#[test]
fn test_version_flag() {
    wayfind()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wayfind"));
}

#[test]
fn test_no_command_prints_banner() {
    wayfind()
        .assert()
        .success()
        .stdout(predicate::str::contains("Run `wayfind --help`"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    wayfind()
        .args(["--format", "yaml", "edges"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_algorithm_exit_code_2() {
    wayfind()
        .args(["search", "a", "b", "--algorithm", "astar"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("astar"));
}

#[test]
fn test_malformed_edge_spec_exit_code_2() {
    wayfind()
        .args(["--edge", "a,b", "edges"])
        .assert()
        .code(2);
}

#[test]
fn test_non_numeric_cost_is_invalid_input() {
    wayfind()
        .args(["--edge", "a,b,abc", "edges"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid cost 'abc'"));
}

#[test]
fn test_negative_cost_is_invalid_input() {
    wayfind()
        .args(["--edge=a,b,-4", "edges"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn test_invalid_input_json_envelope() {
    let output = wayfind()
        .args(["--format", "json", "--edge", "a,b,x", "nodes"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "invalid_input");
    assert_eq!(err["error"]["code"], 2);
}

#[test]
fn test_parse_error_json_envelope_ignores_format_case() {
    for format_args in [vec!["--format", "JSON"], vec!["--format=Json"]] {
        let output = wayfind()
            .args(&format_args)
            .args(["search", "a", "b", "--algorithm", "astar"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(2));
        let err: serde_json::Value = serde_json::from_slice(&output.stderr)
            .expect("stderr should be the JSON error envelope");
        assert_eq!(err["error"]["type"], "usage_error");
    }
}

#[test]
fn test_quiet_suppresses_error_message() {
    wayfind()
        .args(["--quiet", "--edge", "a,b,x", "nodes"])
        .assert()
        .code(2)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_missing_graph_file_exit_code_3() {
    let dir = tempdir().unwrap();
    wayfind()
        .arg("--graph")
        .arg(dir.path().join("missing.toml"))
        .arg("edges")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph file not found"));
}

#[test]
fn test_empty_conflicts_with_graph() {
    wayfind()
        .args(["--empty", "--graph", "g.toml", "edges"])
        .assert()
        .code(2);
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_verbose_shows_debug_messages() {
    wayfind()
        .args(["--verbose", "edges"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    wayfind()
        .args(["--log-level", "warn", "edges"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_log_json_emits_json_lines() {
    let output = wayfind()
        .args(["--log-level", "debug", "--log-json", "nodes"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().expect("debug logging should emit lines");
    assert!(serde_json::from_str::<serde_json::Value>(first).is_ok());
}

// ============================================================================
// Graph listings
// ============================================================================

#[test]
fn test_edges_lists_demo_graph() {
    wayfind()
        .arg("edges")
        .assert()
        .success()
        .stdout(
            "ISLAMABAD -- LAHORE (4)\n\
             ISLAMABAD -- MURREE (3)\n\
             LAHORE -- KARACHI (7)\n\
             LAHORE -- PESHAWAR (4)\n\
             MURREE -- GUJRANWALA (8)\n\
             GUJRANWALA -- PESHAWAR (5)\n",
        );
}

#[test]
fn test_edges_omits_self_loops() {
    wayfind()
        .args(["--empty", "-e", "a,a,3", "-e", "a,b,1", "edges"])
        .assert()
        .success()
        .stdout("A -- B (1)\n");
}

#[test]
fn test_edges_records_header() {
    wayfind()
        .args(["--format", "records", "edges"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H wayfind=1 records=1 mode=edges nodes=6 edges=6",
        ))
        .stdout(predicate::str::contains("E LAHORE KARACHI 7"));
}

#[test]
fn test_empty_graph_listing() {
    wayfind()
        .args(["--empty", "edges"])
        .assert()
        .success()
        .stdout("Graph has no edges\n");
}

#[test]
fn test_extra_edges_are_normalized() {
    let output = wayfind()
        .args(["--format", "json", "--empty", "-e", "quetta, Ziarat ,2", "nodes"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let nodes = stdout_json(&output);
    assert_eq!(
        nodes,
        serde_json::json!([
            {"id": "QUETTA", "degree": 1},
            {"id": "ZIARAT", "degree": 1}
        ])
    );
}

#[test]
fn test_nodes_human() {
    wayfind()
        .arg("nodes")
        .assert()
        .success()
        .stdout(predicate::str::contains("LAHORE (3 edges)"))
        .stdout(predicate::str::contains("KARACHI (1 edge)"));
}

#[test]
fn test_algorithms_listing() {
    wayfind()
        .arg("algorithms")
        .assert()
        .success()
        .stdout(predicate::str::contains("bfs"))
        .stdout(predicate::str::contains("dfs"))
        .stdout(predicate::str::contains("ucs"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_show_defaults() {
    wayfind()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_algorithm = ucs"))
        .stdout(predicate::str::contains("graph = (demo graph)"));
}

#[test]
fn test_config_init_writes_file_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    wayfind()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(path.exists());

    wayfind()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    wayfind()
        .arg("--config")
        .arg(&path)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_missing_explicit_config_exit_code_3() {
    let dir = tempdir().unwrap();
    wayfind()
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .arg("edges")
        .assert()
        .code(3);
}

#[test]
fn test_config_format_applies_without_flag() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "format = \"records\"\n").unwrap();

    wayfind()
        .arg("--config")
        .arg(&path)
        .arg("nodes")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H wayfind=1 records=1 mode=nodes"));
}
