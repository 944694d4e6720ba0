//! Loading graphs from TOML and JSON edge-list files.

mod support;

use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

use crate::support::{wayfind, write_toml_graph};

#[test]
fn test_search_toml_graph() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.toml");
    write_toml_graph(&path, &[("a", "b", "1"), ("b", "c", "1"), ("a", "c", "5")]);

    wayfind()
        .arg("--graph")
        .arg(&path)
        .args(["search", "a", "c"])
        .assert()
        .success()
        .stdout("A\nB\nC\nOverall Cost: 2\n");
}

#[test]
fn test_graph_file_replaces_demo_graph() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.toml");
    write_toml_graph(&path, &[("a", "b", "1")]);

    wayfind()
        .arg("-g")
        .arg(&path)
        .args(["search", "islamabad", "lahore"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("No path found"));
}

#[test]
fn test_search_json_graph() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.json");
    fs::write(
        &path,
        r#"{"edges": [
            {"source": "x", "destination": "y", "cost": 3},
            {"source": "y", "destination": "z", "cost": "4"}
        ]}"#,
    )
    .unwrap();

    wayfind()
        .arg("--graph")
        .arg(&path)
        .args(["search", "x", "z", "-a", "bfs"])
        .assert()
        .success()
        .stdout("X\nY\nZ\nOverall Cost: 7\n");
}

#[test]
fn test_graph_file_plus_extra_edge() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.toml");
    write_toml_graph(&path, &[("a", "b", "1")]);

    wayfind()
        .arg("--graph")
        .arg(&path)
        .args(["--edge", "b,c,2", "edges"])
        .assert()
        .success()
        .stdout("A -- B (1)\nB -- C (2)\n");
}

#[test]
fn test_graph_file_bad_cost_names_row() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.toml");
    write_toml_graph(&path, &[("a", "b", "1"), ("b", "c", "\"heavy\"")]);

    wayfind()
        .arg("--graph")
        .arg(&path)
        .arg("edges")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("edge 2"))
        .stderr(predicate::str::contains("heavy"));
}

#[test]
fn test_graph_file_negative_cost() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.json");
    fs::write(
        &path,
        r#"{"edges": [{"source": "a", "destination": "b", "cost": -1}]}"#,
    )
    .unwrap();

    wayfind()
        .arg("--graph")
        .arg(&path)
        .arg("nodes")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn test_graph_file_syntax_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.toml");
    fs::write(&path, "[[edges]\nsource = ").unwrap();

    let output = wayfind()
        .args(["--format", "json", "--graph"])
        .arg(&path)
        .arg("edges")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "invalid_graph_file");
}

#[test]
fn test_graph_file_unknown_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.csv");
    fs::write(&path, "a,b,1\n").unwrap();

    wayfind()
        .arg("--graph")
        .arg(&path)
        .arg("edges")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("toml, json"));
}

#[test]
fn test_config_graph_is_used() {
    let dir = tempdir().unwrap();
    let graph = dir.path().join("graph.toml");
    write_toml_graph(&graph, &[("p", "q", "6")]);
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        format!("graph = {:?}\n", graph.display().to_string()),
    )
    .unwrap();

    wayfind()
        .arg("--config")
        .arg(&config)
        .args(["search", "p", "q"])
        .assert()
        .success()
        .stdout("P\nQ\nOverall Cost: 6\n");
}
